pub mod bookings;
pub mod dashboard;
pub mod home;
pub mod modal;
pub mod reports;
pub mod rooms;
pub mod users;
