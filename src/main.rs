use clap::Parser;
use tracing_subscriber::EnvFilter;

use headlines::cli::{Cli, Commands, FilterArgs};
use headlines::config::Config;
use headlines::domain::{Article, Category};
use headlines::errors::{HeadlinesError, HeadlinesResult};
use headlines::services::{FavoritesStore, HeadlineFetcher};
use headlines::sources::{NewsApiConfig, ReqwestTransport};
use headlines::storage::{SqliteKeyValueStorage, SqliteStorage};

type Store = FavoritesStore<SqliteKeyValueStorage>;
type Fetcher = HeadlineFetcher<ReqwestTransport>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> HeadlinesResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize storage
    let storage = SqliteStorage::new(&config.db_path)?;
    let store = FavoritesStore::new(SqliteKeyValueStorage::new(storage));

    let news_api = config.news_api();

    match cli.command {
        Commands::Headlines { filters } => cmd_headlines(&filters, news_api, &store),
        Commands::Sources {
            category,
            language,
            country,
        } => cmd_sources(news_api, category, language, country),
        Commands::Favorites => cmd_favorites(&store),
        Commands::Save { url, filters } => cmd_save(&url, &filters, news_api, &store),
        Commands::Remove { url } => cmd_remove(&url, &store),
    }
}

fn print_article(article: &Article, favorite: bool) {
    let mark = if favorite { "*" } else { " " };
    if article.source.name.is_empty() {
        println!("{} {}", mark, article.title);
    } else {
        println!("{} {} [{}]", mark, article.title, article.source.name);
    }
    println!("    URL: {}", article.url);
    match article.published() {
        Some(published) => println!("    Published: {}", published.format("%Y-%m-%d %H:%M UTC")),
        None if !article.published_at.is_empty() => {
            println!("    Published: {}", article.published_at)
        }
        None => {}
    }
    if !article.description.is_empty() {
        println!("    {}", article.description);
    }
    println!();
}

fn cmd_headlines(filters: &FilterArgs, news_api: NewsApiConfig, store: &Store) -> HeadlinesResult<()> {
    let fetcher = Fetcher::from_config(news_api);
    let articles = fetcher.fetch(&filters.to_query())?;

    if articles.is_empty() {
        println!("No headlines found.");
        return Ok(());
    }

    let favorites = store.list();
    for article in &articles {
        print_article(article, Store::is_favorite(article, &favorites));
    }

    Ok(())
}

fn cmd_sources(
    news_api: NewsApiConfig,
    category: Option<Category>,
    language: Option<String>,
    country: Option<String>,
) -> HeadlinesResult<()> {
    let fetcher = Fetcher::from_config(news_api);
    let sources = fetcher.fetch_sources(category, language.as_deref(), country.as_deref())?;

    if sources.is_empty() {
        println!("No sources found.");
        return Ok(());
    }

    for source in sources {
        println!(
            "  {} - {} ({}, {}, {})",
            source.id, source.name, source.category, source.language, source.country
        );
    }

    Ok(())
}

fn cmd_favorites(store: &Store) -> HeadlinesResult<()> {
    let favorites = store.list();

    if favorites.is_empty() {
        println!("No favorite articles.");
        return Ok(());
    }

    println!("Favorite articles:\n");
    for article in &favorites {
        print_article(article, true);
    }

    Ok(())
}

fn cmd_save(
    url: &str,
    filters: &FilterArgs,
    news_api: NewsApiConfig,
    store: &Store,
) -> HeadlinesResult<()> {
    let fetcher = Fetcher::from_config(news_api);
    let articles = fetcher.fetch(&filters.to_query())?;

    let article = articles
        .into_iter()
        .find(|a| a.url == url)
        .ok_or_else(|| HeadlinesError::ArticleNotFound(url.to_string()))?;

    if Store::is_favorite(&article, &store.list()) {
        println!("Already a favorite: {}", article.title);
        return Ok(());
    }

    if !store.is_available() {
        return Err(HeadlinesError::Storage("favorites storage unavailable".to_string()));
    }

    store.add(&article);
    println!("Saved: {}", article.title);

    Ok(())
}

fn cmd_remove(url: &str, store: &Store) -> HeadlinesResult<()> {
    let favorites = store.list();

    let Some(article) = favorites.iter().find(|a| a.url == url) else {
        println!("Not a favorite: {}", url);
        return Ok(());
    };

    store.remove(url);
    println!("Removed: {}", article.title);

    Ok(())
}
