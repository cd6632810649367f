pub mod seed;
pub mod store;

pub use store::ProfessionalStore;

use shared_config::AppConfig;

/// Shared state handed to every cell router.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: ProfessionalStore,
}
