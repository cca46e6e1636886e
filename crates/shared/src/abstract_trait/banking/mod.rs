pub mod executor;
pub mod service;
