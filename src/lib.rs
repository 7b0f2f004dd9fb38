pub mod calendar;
pub mod config;
pub mod error;
pub mod notify;
pub mod secrets;
pub mod startup;
