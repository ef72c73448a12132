mod bookings;
mod common;
mod kpis;
mod reports;
mod rooms;
mod users;

pub use bookings::*;
pub use common::*;
pub use kpis::*;
pub use reports::*;
pub use rooms::*;
pub use users::*;
