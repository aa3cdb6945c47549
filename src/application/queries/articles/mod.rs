mod chronological;
mod service;
mod summarize;

pub use service::ArticleQueryService;
pub use summarize::SummarizeArticleQuery;
