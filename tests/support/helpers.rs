// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use article_core::application::ports::{time::Clock, util::SlugGenerator};
use article_core::application::services::ApplicationServices;
use article_core::config::AppConfig;
use article_core::domain::article::ArticleFactory;

/// Services wired with a fresh factory, the fixed clock and the dummy slugger.
pub fn build_test_services(config: &AppConfig) -> ApplicationServices {
    let factory = Arc::new(ArticleFactory::new());
    let clock: Arc<dyn Clock> = Arc::new(mocks::DummyClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(mocks::DummySlug);
    ApplicationServices::new(factory, clock, slugger, config)
}
