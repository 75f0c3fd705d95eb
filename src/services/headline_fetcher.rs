use crate::diagnostics::{DiagnosticEvent, DiagnosticSink, TracingSink};
use crate::domain::{Article, Category, HeadlineQuery, SourceInfo};
use crate::errors::{HeadlinesError, HeadlinesResult};
use crate::sources::newsapi::{decode_envelope, HeadlinesEnvelope, SourcesEnvelope, API_KEY_PARAM};
use crate::sources::{HttpTransport, NewsApiConfig, ReqwestTransport};

/// Longest slice of an error body kept in diagnostics.
const MAX_BODY_IN_DIAGNOSTICS: usize = 200;

pub struct HeadlineFetcher<T: HttpTransport, D: DiagnosticSink = TracingSink> {
    config: NewsApiConfig,
    transport: T,
    sink: D,
}

impl HeadlineFetcher<ReqwestTransport, TracingSink> {
    pub fn from_config(config: NewsApiConfig) -> Self {
        Self::new(config, ReqwestTransport::new(), TracingSink)
    }
}

impl<T: HttpTransport, D: DiagnosticSink> HeadlineFetcher<T, D> {
    pub fn new(config: NewsApiConfig, transport: T, sink: D) -> Self {
        Self {
            config,
            transport,
            sink,
        }
    }

    /// Fetch top headlines for a category, keyword and source.
    /// `"all"` or an empty category means no category restriction.
    pub fn fetch_headlines(
        &self,
        category: &str,
        query: &str,
        source: &str,
    ) -> HeadlinesResult<Vec<Article>> {
        self.fetch(&HeadlineQuery::new(category, query, source))
    }

    /// Single request, no retries. Every remote failure becomes
    /// `FetchFailure`; a body without `articles` is an empty result.
    pub fn fetch(&self, query: &HeadlineQuery) -> HeadlinesResult<Vec<Article>> {
        let mut params = self.credential_params()?;
        params.extend(query.params());

        let endpoint = self.config.headlines_url();
        tracing::debug!(
            %endpoint,
            category = %query.category,
            q = %query.query,
            sources = %query.source,
            "requesting headlines"
        );

        let body = self.get(&endpoint, &params)?;
        let envelope: HeadlinesEnvelope = decode_envelope(&body)
            .map_err(|e| self.failure(&endpoint, format!("malformed body: {}", e)))?;

        Ok(envelope.articles.unwrap_or_default())
    }

    /// List the provider's sources, optionally narrowed down.
    pub fn fetch_sources(
        &self,
        category: Option<Category>,
        language: Option<&str>,
        country: Option<&str>,
    ) -> HeadlinesResult<Vec<SourceInfo>> {
        let mut params = self.credential_params()?;

        if let Some(category) = category.filter(|c| *c != Category::All) {
            params.push(("category".to_string(), category.as_param().to_string()));
        }
        if let Some(language) = language.filter(|l| !l.is_empty()) {
            params.push(("language".to_string(), language.to_string()));
        }
        if let Some(country) = country.filter(|c| !c.is_empty()) {
            params.push(("country".to_string(), country.to_string()));
        }

        let endpoint = self.config.sources_url();
        tracing::debug!(%endpoint, "requesting sources");

        let body = self.get(&endpoint, &params)?;
        let envelope: SourcesEnvelope = decode_envelope(&body)
            .map_err(|e| self.failure(&endpoint, format!("malformed body: {}", e)))?;

        Ok(envelope.sources.unwrap_or_default())
    }

    fn credential_params(&self) -> HeadlinesResult<Vec<(String, String)>> {
        let api_key = self.config.api_key()?;
        Ok(vec![(API_KEY_PARAM.to_string(), api_key.to_string())])
    }

    fn get(&self, endpoint: &str, params: &[(String, String)]) -> HeadlinesResult<String> {
        match self.transport.get(endpoint, params) {
            Ok(response) if response.is_success() => Ok(response.body),
            Ok(response) => {
                let excerpt: String = response.body.chars().take(MAX_BODY_IN_DIAGNOSTICS).collect();
                Err(self.failure(endpoint, format!("HTTP {}: {}", response.status, excerpt)))
            }
            Err(e) => Err(self.failure(endpoint, e.to_string())),
        }
    }

    fn failure(&self, endpoint: &str, cause: String) -> HeadlinesError {
        self.sink.record(DiagnosticEvent::FetchFailed {
            endpoint: endpoint.to_string(),
            cause,
        });
        HeadlinesError::FetchFailure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use crate::sources::traits::{HttpResponse, MockHttpTransport, TransportError};

    const BASE_URL: &str = "https://newsapi.org/v2";

    fn config() -> NewsApiConfig {
        NewsApiConfig::new(BASE_URL, Some("test-key".to_string()))
    }

    fn fetcher(transport: MockHttpTransport) -> (HeadlineFetcher<MockHttpTransport, MemorySink>, MemorySink) {
        let sink = MemorySink::new();
        (HeadlineFetcher::new(config(), transport, sink.clone()), sink)
    }

    fn param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn responding(status: u16, body: &'static str) -> MockHttpTransport {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(move |_, _| Ok(HttpResponse::new(status, body)));
        transport
    }

    fn articles_body() -> &'static str {
        r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": {"id": "", "name": ""},
                    "author": "",
                    "title": "Test Article 1",
                    "description": "Test description",
                    "url": "https://example.com/1",
                    "urlToImage": "https://placehold.co/300x200.png",
                    "publishedAt": "2023-01-01",
                    "content": ""
                },
                {
                    "source": {"id": "", "name": ""},
                    "author": "",
                    "title": "Test Article 2",
                    "description": "Test description",
                    "url": "https://example.com/2",
                    "urlToImage": "https://placehold.co/300x200.png",
                    "publishedAt": "2023-01-01",
                    "content": ""
                }
            ]
        }"#
    }

    #[test]
    fn test_default_filters_build_expected_request() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(1)
            .withf(|url, params| {
                url == "https://newsapi.org/v2/top-headlines"
                    && param(params, "apiKey") == Some("test-key")
                    && param(params, "category") == Some("general")
                    && param(params, "q") == Some("")
                    && param(params, "sources") == Some("")
            })
            .returning(|_, _| {
                Ok(HttpResponse::new(
                    200,
                    r#"{"articles":[{"title":"A","url":"u1","description":"","publishedAt":"2023-01-01","source":{"id":"","name":""},"author":"","content":""}]}"#,
                ))
            });
        let (fetcher, sink) = fetcher(transport);

        let articles = fetcher.fetch_headlines("general", "", "").unwrap();

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "A");
        assert_eq!(articles[0].url, "u1");
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_all_category_sends_empty_param() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(1)
            .withf(|_, params| {
                param(params, "category") == Some("")
                    && param(params, "q") == Some("rust")
                    && param(params, "sources") == Some("bbc-news")
            })
            .returning(|_, _| Ok(HttpResponse::new(200, r#"{"articles":[]}"#)));
        let (fetcher, _) = fetcher(transport);

        let articles = fetcher.fetch_headlines("all", "rust", "bbc-news").unwrap();
        assert!(articles.is_empty());
    }

    #[test]
    fn test_returns_articles_verbatim() {
        let (fetcher, _) = fetcher(responding(200, articles_body()));

        let articles = fetcher.fetch_headlines("technology", "", "").unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].url, "https://example.com/1");
        assert_eq!(articles[1].title, "Test Article 2");
        assert_eq!(
            articles[1].url_to_image.as_deref(),
            Some("https://placehold.co/300x200.png")
        );
    }

    #[test]
    fn test_missing_articles_field_is_empty_result() {
        for body in ["", "{}", "null", r#"{"status":"ok","articles":null}"#] {
            let (fetcher, sink) = fetcher(responding(200, body));
            let articles = fetcher.fetch_headlines("general", "", "").unwrap();
            assert!(articles.is_empty(), "body {:?} should give no articles", body);
            assert!(sink.events().is_empty());
        }
    }

    #[test]
    fn test_not_found_is_fetch_failure() {
        let (fetcher, sink) = fetcher(responding(404, r#"{"status":"error","code":"notFound"}"#));

        let err = fetcher.fetch_headlines("general", "", "").unwrap_err();

        assert!(matches!(err, HeadlinesError::FetchFailure));
        assert_eq!(err.to_string(), "headlines could not be retrieved, try again later");

        let events = sink.events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            DiagnosticEvent::FetchFailed { endpoint, cause } => {
                assert_eq!(endpoint, "https://newsapi.org/v2/top-headlines");
                assert!(cause.starts_with("HTTP 404"));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_transport_errors_are_fetch_failure() {
        let causes = [
            TransportError::Request("Network Error".to_string()),
            TransportError::Request("operation timed out".to_string()),
            TransportError::Request(String::new()),
        ];

        for cause in causes {
            let mut transport = MockHttpTransport::new();
            let returned = cause.clone();
            transport
                .expect_get()
                .times(1)
                .returning(move |_, _| Err(returned.clone()));
            let (fetcher, sink) = fetcher(transport);

            let err = fetcher.fetch_headlines("general", "", "").unwrap_err();

            assert_eq!(err.to_string(), "headlines could not be retrieved, try again later");
            assert_eq!(sink.events().len(), 1);
        }
    }

    #[test]
    fn test_server_error_is_fetch_failure() {
        let (fetcher, _) = fetcher(responding(500, "Internal Server Error"));
        let err = fetcher.fetch_headlines("general", "", "").unwrap_err();
        assert!(matches!(err, HeadlinesError::FetchFailure));
    }

    #[test]
    fn test_malformed_body_is_fetch_failure() {
        let (fetcher, sink) = fetcher(responding(200, "<html>rate limited</html>"));

        let err = fetcher.fetch_headlines("general", "", "").unwrap_err();

        assert!(matches!(err, HeadlinesError::FetchFailure));
        assert!(matches!(
            &sink.events()[0],
            DiagnosticEvent::FetchFailed { cause, .. } if cause.starts_with("malformed body")
        ));
    }

    #[test]
    fn test_missing_api_key_fails_before_request() {
        let mut transport = MockHttpTransport::new();
        transport.expect_get().times(0);
        let sink = MemorySink::new();
        let fetcher = HeadlineFetcher::new(
            NewsApiConfig::new(BASE_URL, None),
            transport,
            sink.clone(),
        );

        let err = fetcher.fetch_headlines("general", "", "").unwrap_err();

        assert!(matches!(err, HeadlinesError::ConfigurationMissing));
        assert_eq!(err.to_string(), "API_KEY is not defined.");
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_paging_passthrough() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(1)
            .withf(|_, params| {
                param(params, "country") == Some("us")
                    && param(params, "pageSize") == Some("10")
                    && param(params, "page") == Some("3")
            })
            .returning(|_, _| Ok(HttpResponse::new(200, r#"{"articles":[]}"#)));
        let (fetcher, _) = fetcher(transport);

        let query = HeadlineQuery::new("business", "", "")
            .with_country(Some("us".to_string()))
            .with_page_size(Some(10))
            .with_page(Some(3));

        assert!(fetcher.fetch(&query).unwrap().is_empty());
    }

    #[test]
    fn test_fetch_sources() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(1)
            .withf(|url, params| {
                url == "https://newsapi.org/v2/top-headlines/sources"
                    && param(params, "apiKey") == Some("test-key")
                    && param(params, "category") == Some("technology")
                    && param(params, "language") == Some("en")
                    && param(params, "country").is_none()
            })
            .returning(|_, _| {
                Ok(HttpResponse::new(
                    200,
                    r#"{"status":"ok","sources":[{"id":"ars-technica","name":"Ars Technica"}]}"#,
                ))
            });
        let (fetcher, _) = fetcher(transport);

        let sources = fetcher
            .fetch_sources(Some(Category::Technology), Some("en"), None)
            .unwrap();

        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].id, "ars-technica");
        assert_eq!(sources[0].name, "Ars Technica");
    }

    #[test]
    fn test_fetch_sources_unrestricted_and_failing() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(1)
            .withf(|_, params| params.len() == 1 && param(params, "apiKey").is_some())
            .returning(|_, _| Ok(HttpResponse::new(401, r#"{"status":"error"}"#)));
        let (fetcher, _) = fetcher(transport);

        let err = fetcher.fetch_sources(Some(Category::All), None, Some("")).unwrap_err();
        assert!(matches!(err, HeadlinesError::FetchFailure));
    }
}
