mod config;
pub use self::config::{Config, Host};

pub mod actions;
pub mod globals;
pub mod progressbar;
pub mod token;

mod start;
pub use self::start::start;

mod commands;
mod dispatch;
