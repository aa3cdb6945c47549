use super::ArticleQueryService;
use crate::domain::article::Article;

impl ArticleQueryService {
    /// Sorts by publication date, oldest first. Articles published at the
    /// same instant keep their relative order.
    pub fn chronological(&self, mut articles: Vec<Article>) -> Vec<Article> {
        articles.sort();
        articles
    }
}
