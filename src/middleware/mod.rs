pub mod auth;
pub mod device;
