//! Runtime configuration from environment variables.

use std::time::Duration;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP/websocket server binds to. `BIND_ADDR`, default
    /// `0.0.0.0:3001`.
    pub bind_addr: String,
    /// Pause before an AI-controlled seat acts, so handed-over turns remain
    /// watchable. `AI_TURN_DELAY_MS`, default 1000.
    pub ai_turn_delay: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".to_string());

        let ai_turn_delay = match std::env::var("AI_TURN_DELAY_MS") {
            Ok(raw) => {
                let ms = raw.parse::<u64>().map_err(|err| AppError::Config {
                    detail: format!("AI_TURN_DELAY_MS must be an integer: {err}"),
                })?;
                Duration::from_millis(ms)
            }
            Err(_) => Duration::from_millis(1_000),
        };

        Ok(Self {
            bind_addr,
            ai_turn_delay,
        })
    }
}
