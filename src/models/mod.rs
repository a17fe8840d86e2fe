pub mod admin;
pub mod stats;
pub mod subscription;
pub mod user;
