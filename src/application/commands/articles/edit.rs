// src/application/commands/articles/edit.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::Article,
};

pub struct EditArticleContentCommand {
    pub content: String,
}

impl ArticleCommandService {
    /// Replaces the article content, stamping `last_edited` from the clock.
    pub fn edit_content(
        &self,
        article: &mut Article,
        command: EditArticleContentCommand,
    ) -> ApplicationResult<ArticleDto> {
        let now = self.clock.now();
        article.set_content(command.content, now);

        tracing::debug!(id = %article.id(), edited_at = %now, "article content edited");
        Ok(ArticleDto::try_from(&*article)?)
    }
}
