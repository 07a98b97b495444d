// src/adapter/mod.rs
pub mod cli;
pub mod coordinator;

pub use coordinator::TicketHubApp;
