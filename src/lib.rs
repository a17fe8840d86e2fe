pub mod core;
pub mod models;
pub mod fixtures;
pub mod stores;
pub mod service;
pub mod handlers;
