mod auth;
pub mod client;
mod leave_requests;
pub mod session;
pub mod types;
mod users;

pub use client::*;
pub use types::*;
