// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{ClockPort, SlugGeneratorPort},
        queries::articles::ArticleQueryService,
    },
    config::AppConfig,
    domain::article::ArticleFactory,
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        factory: Arc<ArticleFactory>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        config: &AppConfig,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(factory, clock));
        let article_queries = Arc::new(ArticleQueryService::new(
            slugger,
            config.intro_characters(),
            config.top_words(),
        ));

        Self {
            article_commands,
            article_queries,
        }
    }
}
