use clap::{Args, Parser, Subcommand};

use crate::domain::{Category, HeadlineQuery};

#[derive(Parser)]
#[command(name = "headlines")]
#[command(about = "Top headlines from NewsAPI with locally saved favorites")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Category (general, sports, technology, business, health, entertainment, science, or all)
    #[arg(short, long, default_value = "general")]
    pub category: String,

    /// Keyword to search for
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Source identifier, e.g. bbc-news
    #[arg(short, long, default_value = "")]
    pub source: String,

    /// Two-letter country code
    #[arg(long)]
    pub country: Option<String>,

    /// Number of results per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Page number
    #[arg(long)]
    pub page: Option<u32>,
}

impl FilterArgs {
    pub fn to_query(&self) -> HeadlineQuery {
        HeadlineQuery::new(&self.category, &self.query, &self.source)
            .with_country(self.country.clone())
            .with_page_size(self.page_size)
            .with_page(self.page)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show top headlines, favorites are marked with *
    Headlines {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List available news sources
    Sources {
        /// Only sources in this category
        #[arg(short, long)]
        category: Option<Category>,

        /// Two-letter language code
        #[arg(short, long)]
        language: Option<String>,

        /// Two-letter country code
        #[arg(long)]
        country: Option<String>,
    },

    /// List favorite articles
    Favorites,

    /// Save a headline to favorites
    Save {
        /// URL of the headline to save
        url: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Remove an article from favorites
    Remove {
        /// URL of the favorite to remove
        url: String,
    },
}
