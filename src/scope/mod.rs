pub mod config;
pub mod error;
pub mod global;
pub mod key;
pub mod namespace;
pub mod value;
