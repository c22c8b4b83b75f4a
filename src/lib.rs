//! Pitting corrosion potential prediction service for alloy screening.

pub mod api;
pub mod artifacts;
pub mod classifier;
pub mod config;
pub mod error;
pub mod features;
pub mod models;
pub mod service;

pub use classifier::RiskBand;
pub use config::Config;
pub use error::{ModelerError, Result};
pub use features::FeatureVector;
pub use service::PredictionService;
