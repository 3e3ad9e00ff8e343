pub mod errors;
pub mod models;
pub mod moderation;
pub mod ports;
pub mod service;
