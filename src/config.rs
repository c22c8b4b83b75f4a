use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub listen_addr: String,
    pub scaler_path: String,
    pub model_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8088".to_string()),
            scaler_path: std::env::var("SCALER_PATH")
                .unwrap_or_else(|_| "artifacts/scaler.json".to_string()),
            model_path: std::env::var("MODEL_PATH")
                .unwrap_or_else(|_| "artifacts/model.json".to_string()),
        }
    }
}
