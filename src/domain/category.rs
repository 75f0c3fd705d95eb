#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    General,
    Sports,
    Technology,
    Business,
    Health,
    Entertainment,
    Science,
    /// No category restriction
    All,
}

impl Category {
    pub const RESTRICTED: [Category; 7] = [
        Category::General,
        Category::Sports,
        Category::Technology,
        Category::Business,
        Category::Health,
        Category::Entertainment,
        Category::Science,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Sports => "sports",
            Category::Technology => "technology",
            Category::Business => "business",
            Category::Health => "health",
            Category::Entertainment => "entertainment",
            Category::Science => "science",
            Category::All => "all",
        }
    }

    /// Value of the `category` request parameter; empty when unrestricted.
    pub fn as_param(&self) -> &'static str {
        match self {
            Category::All => "",
            other => other.as_str(),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(Category::All),
            "general" => Ok(Category::General),
            "sports" => Ok(Category::Sports),
            "technology" => Ok(Category::Technology),
            "business" => Ok(Category::Business),
            "health" => Ok(Category::Health),
            "entertainment" => Ok(Category::Entertainment),
            "science" => Ok(Category::Science),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
