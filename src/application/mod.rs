/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Service implementations on the client
pub mod services;
