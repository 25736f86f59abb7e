use std::sync::Arc;

use crate::config::Config;
use crate::relay::Relay;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub relay: Relay,
}
