use super::Category;

/// Filters for one top-headlines request. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineQuery {
    /// Request value for `category`; empty means unrestricted.
    pub category: String,
    pub query: String,
    pub source: String,
    pub country: Option<String>,
    pub page_size: Option<u32>,
    pub page: Option<u32>,
}

impl HeadlineQuery {
    /// `"all"` and `""` lift the category restriction. Names outside the
    /// known set are forwarded unchanged and left for the provider to judge.
    pub fn new(category: &str, query: &str, source: &str) -> Self {
        let category = match category.parse::<Category>() {
            Ok(known) => known.as_param().to_string(),
            Err(_) => category.trim().to_string(),
        };

        Self {
            category,
            query: query.to_string(),
            source: source.to_string(),
            country: None,
            page_size: None,
            page: None,
        }
    }

    pub fn with_country(mut self, country: Option<String>) -> Self {
        self.country = country.filter(|c| !c.is_empty());
        self
    }

    pub fn with_page_size(mut self, page_size: Option<u32>) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_page(mut self, page: Option<u32>) -> Self {
        self.page = page;
        self
    }

    /// Request parameters, minus the credential.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("category".to_string(), self.category.clone()),
            ("q".to_string(), self.query.clone()),
            ("sources".to_string(), self.source.clone()),
        ];

        if let Some(ref country) = self.country {
            params.push(("country".to_string(), country.clone()));
        }
        if let Some(page_size) = self.page_size {
            params.push(("pageSize".to_string(), page_size.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }

        params
    }
}

impl Default for HeadlineQuery {
    fn default() -> Self {
        Self::new(Category::General.as_str(), "", "")
    }
}
