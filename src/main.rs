use article_core::application::{
    commands::articles::{CreateArticleCommand, EditArticleContentCommand},
    dto::ArticleSummaryDto,
    ports::{time::Clock, util::SlugGenerator},
    queries::articles::SummarizeArticleQuery,
    services::ApplicationServices,
};
use article_core::config::AppConfig;
use article_core::domain::article::ArticleFactory;
use article_core::infrastructure::{time::SystemClock, util::DefaultSlugGenerator};
use anyhow::{Result, anyhow};
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    if let Err(err) = bootstrap() {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let factory = Arc::new(ArticleFactory::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let services = ApplicationServices::new(factory, clock, slugger, &config);

    let mut articles = Vec::new();
    for (title, author, (year, month, day), content) in SAMPLES {
        let publication_date = Utc
            .with_ymd_and_hms(*year, *month, *day, 9, 0, 0)
            .single()
            .ok_or_else(|| anyhow!("invalid sample date for {title}"))?;
        let command = CreateArticleCommand::builder()
            .title(*title)
            .author(*author)
            .publication_date(publication_date)
            .content(*content)
            .build()
            .map_err(|err| anyhow!(err))?;
        articles.push(services.article_commands.create_article(command)?);
    }

    if let Some(article) = articles.first_mut() {
        let content = format!("{} (Updated.)", article.content()?);
        let edited = services
            .article_commands
            .edit_content(article, EditArticleContentCommand { content })?;
        tracing::info!(id = edited.id, "sample article revised");
    }

    let articles = services.article_queries.chronological(articles);
    let summaries = articles
        .iter()
        .map(|article| {
            services
                .article_queries
                .summarize(article, SummarizeArticleQuery::default())
        })
        .collect::<Result<Vec<ArticleSummaryDto>, _>>()?;

    for article in &articles {
        println!("{article}");
    }
    println!("{}", serde_json::to_string_pretty(&summaries)?);

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

const SAMPLES: &[(&str, &str, (i32, u32, u32), &str)] = &[
    (
        "Ownership in Practice",
        "Ferris",
        (2021, 6, 14),
        "Every value has an owner. When the owner goes out of scope the value is dropped, \
         and the owner decides who may borrow it and for how long.",
    ),
    (
        "Fearless Concurrency",
        "Ferris",
        (2020, 11, 2),
        "Threads share data through types that say what sharing is allowed. \
         The compiler checks the rest, so data races become compile errors.",
    ),
    (
        "Iterators All the Way Down",
        "Corro",
        (2022, 1, 30),
        "Iterators are lazy. Adapters build a pipeline and nothing runs until \
         something consumes it, which is why iterators compose so well.",
    ),
];
