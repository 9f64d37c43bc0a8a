pub mod config;
mod db;
pub mod observability;
mod session;

pub use config::Config;
pub use db::*;
pub use session::*;
