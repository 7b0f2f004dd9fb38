pub mod client;
pub mod filter;
pub mod models;
pub mod time;
pub mod token;

pub use client::CalendarClient;
pub use models::CalendarEvent;
pub use token::TokenManager;
