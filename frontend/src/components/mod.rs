pub mod calendar;
pub mod header;
pub mod tooltip;
