pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod prediction;
pub mod samples;

pub use error::{Error, Result};
