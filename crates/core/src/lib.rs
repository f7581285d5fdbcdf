pub mod app_state;
pub mod bootstrap;
pub mod clients;
pub mod event_bus;
pub mod relay;
pub mod repositories;
pub mod security;
pub mod services;

pub use app_state::AppState;
pub use event_bus::{EventBus, EventStreams};
pub use security::{Claims, SecurityConfig};
