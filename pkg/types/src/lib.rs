pub mod config;
pub mod request;
pub mod secret;
pub mod validate;
