use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;

pub struct ArticleQueryService {
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) intro_characters: usize,
    pub(super) top_words: usize,
}

impl ArticleQueryService {
    pub fn new(slugger: Arc<dyn SlugGenerator>, intro_characters: usize, top_words: usize) -> Self {
        Self {
            slugger,
            intro_characters,
            top_words,
        }
    }
}
