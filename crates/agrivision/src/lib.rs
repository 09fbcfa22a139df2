pub mod accounts;
pub mod advisory;
pub mod community;
pub mod config;
pub mod error;
pub mod finance;
pub mod telemetry;
