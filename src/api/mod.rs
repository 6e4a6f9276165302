mod client;
mod types;

pub use client::{ClassifierApi, HttpClassifierApi};
pub use types::*;
