//! Shared application state handed to every connection.

use std::sync::Arc;

use crate::config::app::AppConfig;
use crate::services::users::IdentityResolver;
use crate::ws::hub::RoomRegistry;

pub struct AppState {
    config: AppConfig,
    rooms: Arc<RoomRegistry>,
    identities: Arc<IdentityResolver>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let rooms = Arc::new(RoomRegistry::new(config.ai_turn_delay));
        Self {
            config,
            rooms,
            identities: Arc::new(IdentityResolver::new()),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn rooms(&self) -> Arc<RoomRegistry> {
        Arc::clone(&self.rooms)
    }

    pub fn identities(&self) -> Arc<IdentityResolver> {
        Arc::clone(&self.identities)
    }
}
