pub mod availability;
pub mod calendar;
pub mod meetup;
pub mod month_grid;
pub mod session;
pub mod summary;
