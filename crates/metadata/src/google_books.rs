// FILE: crates/metadata/src/google_books.rs

use crate::{LookupRequest, MetadataSource, SourceError, SourceMetadata, SourceResult};
use bookcase_core::{Authors, Book};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration as StdDuration;

/// Settings for the Google Books client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleBooksSettings {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout: StdDuration,
    pub user_agent: String,
}

impl Default for GoogleBooksSettings {
    fn default() -> Self {
        Self {
            endpoint: GoogleBooksSource::API_BASE.to_string(),
            api_key: None,
            timeout: StdDuration::from_secs(30),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
        }
    }
}

/// Google Books volumes search
pub struct GoogleBooksSource {
    settings: GoogleBooksSettings,
    client: reqwest::Client,
}

impl GoogleBooksSource {
    pub const API_BASE: &'static str = "https://www.googleapis.com/books/v1/volumes";

    /// Create a source with default settings and no API key
    pub fn new() -> SourceResult<Self> {
        Self::with_settings(GoogleBooksSettings::default())
    }

    pub fn with_settings(settings: GoogleBooksSettings) -> SourceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|e| SourceError::NetworkError(format!("HTTP client unavailable: {}", e)))?;

        Ok(Self { settings, client })
    }

    /// Search URL for a request: `q=<title> inauthor:<author>` plus the API key if configured
    pub fn search_url(&self, request: &LookupRequest) -> SourceResult<Url> {
        let query = format!("{} inauthor:{}", request.title.trim(), request.author.trim());
        let mut params = vec![("q", query)];
        if let Some(key) = self.settings.api_key.as_deref().filter(|k| !k.is_empty()) {
            params.push(("key", key.to_string()));
        }

        Url::parse_with_params(&self.settings.endpoint, &params)
            .map_err(|e| SourceError::InvalidQuery(format!("Bad endpoint: {}", e)))
    }

    async fn fetch(&self, url: Url) -> SourceResult<VolumesResponse> {
        log::debug!("GET {}", redact_key(&url));

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout(self.settings.timeout.as_secs())
            } else {
                SourceError::NetworkError(format!("Request failed: {}", e))
            }
        })?;

        if !response.status().is_success() {
            return Err(SourceError::HttpStatus(response.status().as_u16()));
        }

        response
            .json::<VolumesResponse>()
            .await
            .map_err(|e| SourceError::ParseError(format!("JSON parse error: {}", e)))
    }
}

impl MetadataSource for GoogleBooksSource {
    async fn lookup(&self, request: &LookupRequest) -> SourceResult<Book> {
        if request.title.trim().is_empty() {
            return Err(SourceError::InvalidQuery("Empty title".to_string()));
        }
        if request.author.trim().is_empty() {
            return Err(SourceError::InvalidQuery("Empty author".to_string()));
        }

        let url = self.search_url(request)?;
        let response = self.fetch(url).await?;
        let book = response.into_book(request)?;

        log::info!(
            "Google Books matched '{}' by {} to '{}' ({})",
            request.title,
            request.author,
            book.title,
            book.isbn
        );
        Ok(book)
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Google Books".to_string(),
            description: "Google Books volume search".to_string(),
            base_url: self.settings.endpoint.clone(),
            requires_auth: self.settings.api_key.is_some(),
        }
    }
}

fn redact_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

/// Google Books `volumes` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Vec<Volume>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub industry_identifiers: Vec<IndustryIdentifier>,
    pub page_count: Option<u32>,
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryIdentifier {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub identifier: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    pub small_thumbnail: Option<String>,
    pub thumbnail: Option<String>,
}

impl VolumesResponse {
    /// Map the first volume into a Book, applying the request's overrides
    ///
    /// The page override wins when nonzero; otherwise the reported page count
    /// is used (zero if the service has none). The first industry identifier
    /// becomes the ISBN.
    pub fn into_book(self, request: &LookupRequest) -> SourceResult<Book> {
        let info = self
            .items
            .into_iter()
            .next()
            .ok_or(SourceError::NotFound)?
            .volume_info
            .ok_or(SourceError::MissingField("volumeInfo"))?;

        let isbn = info
            .industry_identifiers
            .into_iter()
            .next()
            .map(|id| id.identifier)
            .filter(|id| !id.trim().is_empty())
            .ok_or(SourceError::MissingField("industryIdentifiers"))?;

        let thumbnail = info
            .image_links
            .and_then(|links| links.thumbnail)
            .ok_or(SourceError::MissingField("imageLinks.thumbnail"))?;

        let title = info
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| request.title.clone());

        let author = if info.authors.is_empty() {
            Authors::one(request.author.clone())
        } else {
            Authors::Many(info.authors)
        };

        let pages = request
            .page_override()
            .unwrap_or_else(|| info.page_count.unwrap_or(0));

        Ok(Book::new(title, author, isbn, pages)
            .with_image_link(thumbnail)
            .with_read(request.read))
    }
}
