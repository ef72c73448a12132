pub mod badge;
pub mod button;
pub mod card;
pub mod dialog;
pub mod input;
pub mod kpi;
pub mod sidebar;
