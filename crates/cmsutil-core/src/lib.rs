pub mod config;
pub mod logging;

pub mod urlutils;
pub mod validate;
