mod support;

use article_core::application::commands::articles::{
    CreateArticleCommand, EditArticleContentCommand,
};
use article_core::application::error::ApplicationError;
use article_core::application::queries::articles::SummarizeArticleQuery;
use article_core::config::AppConfig;
use support::{build_test_services, fixed_now, later};

fn command(title: &str, days: i64, content: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(title)
        .author("Ferris")
        .publication_date(later(days))
        .content(content)
        .build()
        .unwrap()
}

#[test]
fn create_then_edit_stamps_clock_time() {
    let services = build_test_services(&AppConfig::default());
    let mut article = services
        .article_commands
        .create_article(command("First", 0, "original"))
        .unwrap();
    assert_eq!(i64::from(article.id()), 1);
    assert_eq!(article.last_edited(), None);

    let dto = services
        .article_commands
        .edit_content(
            &mut article,
            EditArticleContentCommand {
                content: "revised".into(),
            },
        )
        .unwrap();

    assert_eq!(dto.last_edited, Some(fixed_now()));
    assert_eq!(dto.length, 7);
    assert_eq!(article.content().unwrap(), "revised");
}

#[test]
fn summary_uses_configured_sizes() {
    let config =
        AppConfig::from_lookup(|key| match key {
            "INTRO_CHARACTERS" => Some("9".into()),
            "TOP_WORDS" => Some("1".into()),
            _ => None,
        })
        .unwrap();
    let services = build_test_services(&config);
    let article = services
        .article_commands
        .create_article(command("Quick Fox", 0, "The quick brown fox saw the dog"))
        .unwrap();

    let summary = services
        .article_queries
        .summarize(&article, SummarizeArticleQuery::default())
        .unwrap();

    assert_eq!(summary.slug, "quick_fox");
    assert_eq!(summary.introduction, "The quick");
    assert_eq!(summary.most_common_words.into_vec(), vec![("the".to_string(), 2)]);
    assert_eq!(summary.article.title, "Quick Fox");
}

#[test]
fn summary_overrides_and_serialization() {
    let services = build_test_services(&AppConfig::default());
    let article = services
        .article_commands
        .create_article(command("Echo", 2, "b a b a c"))
        .unwrap();

    let summary = services
        .article_queries
        .summarize(
            &article,
            SummarizeArticleQuery {
                intro_characters: Some(3),
                top_words: Some(2),
            },
        )
        .unwrap();

    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains(r#""most_common_words":{"b":2,"a":2}"#));
    assert!(json.contains(r#""introduction":"b a""#));
    assert!(json.contains(r#""publication_date":"2024-01-03T00:00:00Z""#));
}

#[test]
fn zero_top_words_is_rejected() {
    let services = build_test_services(&AppConfig::default());
    let article = services
        .article_commands
        .create_article(command("Zero", 0, "words"))
        .unwrap();

    let err = services
        .article_queries
        .summarize(
            &article,
            SummarizeArticleQuery {
                intro_characters: None,
                top_words: Some(0),
            },
        )
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[test]
fn chronological_orders_oldest_first_and_is_stable() {
    let services = build_test_services(&AppConfig::default());
    let commands = services.article_commands.clone();
    let articles = vec![
        commands.create_article(command("late", 5, "x")).unwrap(),
        commands.create_article(command("tie-first", 1, "x")).unwrap(),
        commands.create_article(command("early", 0, "x")).unwrap(),
        commands.create_article(command("tie-second", 1, "x")).unwrap(),
    ];

    let ordered = services.article_queries.chronological(articles);
    let titles: Vec<_> = ordered.iter().map(|a| a.title().unwrap()).collect();
    assert_eq!(titles, vec!["early", "tie-first", "tie-second", "late"]);
}
