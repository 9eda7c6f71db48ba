use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::case_store::CaseStore;
use crate::services::stripe_service::StripeService;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub stripe: Arc<StripeService>,
    pub cases: Arc<dyn CaseStore>,
}

impl AppState {
    pub fn new(config: AppConfig, stripe: Arc<StripeService>, cases: Arc<dyn CaseStore>) -> Self {
        AppState {
            config,
            stripe,
            cases,
        }
    }
}
