mod controller;
mod types;

pub use controller::PredictionController;
pub use types::*;
