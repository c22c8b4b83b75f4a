pub mod prediction_service;

pub use prediction_service::{Prediction, PredictionService};
