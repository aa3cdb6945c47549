// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::article::ArticleFactory};

pub struct ArticleCommandService {
    pub(super) factory: Arc<ArticleFactory>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(factory: Arc<ArticleFactory>, clock: Arc<dyn Clock>) -> Self {
        Self { factory, clock }
    }
}
