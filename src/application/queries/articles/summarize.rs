use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleSummaryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::Article,
};

/// Overrides for the configured summary sizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummarizeArticleQuery {
    pub intro_characters: Option<usize>,
    pub top_words: Option<usize>,
}

impl ArticleQueryService {
    pub fn summarize(
        &self,
        article: &Article,
        query: SummarizeArticleQuery,
    ) -> ApplicationResult<ArticleSummaryDto> {
        let top_words = query.top_words.unwrap_or(self.top_words);
        if top_words == 0 {
            return Err(ApplicationError::validation("top_words must be positive"));
        }
        let intro_characters = query.intro_characters.unwrap_or(self.intro_characters);

        let dto = ArticleDto::try_from(article)?;
        let slug = self.slugger.slugify(&dto.title);
        let introduction = article.short_introduction(intro_characters)?.to_owned();
        let most_common_words = article.most_common_words(top_words)?;

        Ok(ArticleSummaryDto {
            article: dto,
            slug,
            introduction,
            most_common_words,
        })
    }
}
