//! Test utilities shared across module tests.

use std::sync::Arc;

use crate::api::AppState;
use crate::catalog::CatalogService;
use crate::catalog::traits::mocks::MockCatalog;
use crate::config::DEFAULT_MARKET;

/// App state backed by the given mock provider, scoped to the default market.
pub fn app_state(mock: Arc<MockCatalog>) -> AppState {
    AppState::new(CatalogService::new(mock, DEFAULT_MARKET))
}
