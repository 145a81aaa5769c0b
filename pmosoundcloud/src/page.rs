//! Page context collaborators
//!
//! The resolution pipeline only needs three things from the playlist page:
//! the candidate script bundle URLs, the hydration snapshot (when the page
//! delivered one), and the page address for the resolve fallback. Those are
//! injected through [`PageContext`] instead of being read from ambient
//! state, so the pipeline runs deterministically against test doubles.
//!
//! [`LinkPresenter`] is the outbound counterpart: it receives each resolved
//! download link, in order, once the whole batch has resolved.

use crate::error::Result;
use crate::hydration::HydrationSnapshot;
use async_trait::async_trait;
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

/// The playlist page as seen by the resolution pipeline
pub trait PageContext: Send + Sync {
    /// Candidate script bundle URLs, in document order
    ///
    /// The credential scan walks these from the last to the first.
    fn script_urls(&self) -> Vec<String>;

    /// The hydration snapshot delivered with the page, if any
    fn hydration(&self) -> Option<HydrationSnapshot>;

    /// The page address, used by the resolve fallback
    fn location(&self) -> String;
}

/// Receives resolved download links, one call per link, in output order
#[async_trait]
pub trait LinkPresenter: Send + Sync {
    /// Present a single download link (open it, print it, queue it, ...)
    async fn present(&self, uri: &str) -> Result<()>;
}

/// A page context built from owned values
///
/// This is the programmatic entry point when the caller already holds the
/// page data, and the deterministic double used by the tests.
#[derive(Debug, Clone, Default)]
pub struct StaticPage {
    /// Candidate script bundle URLs, in document order
    pub scripts: Vec<String>,
    /// Hydration snapshot, if the page delivered one
    pub hydration: Option<HydrationSnapshot>,
    /// Page address
    pub location: String,
}

impl StaticPage {
    /// Create a page context from its parts
    pub fn new(
        scripts: Vec<String>,
        hydration: Option<HydrationSnapshot>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            scripts,
            hydration,
            location: location.into(),
        }
    }
}

impl PageContext for StaticPage {
    fn script_urls(&self) -> Vec<String> {
        self.scripts.clone()
    }

    fn hydration(&self) -> Option<HydrationSnapshot> {
        self.hydration.clone()
    }

    fn location(&self) -> String {
        self.location.clone()
    }
}

/// A page context extracted from playlist page HTML
///
/// Replaces the live browser environment for command-line use: script
/// bundles come from the page's `<script crossorigin src=...>` tags and the
/// snapshot from the inline `window.__sc_hydration = [...];` assignment.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    scripts: Vec<String>,
    hydration: Option<HydrationSnapshot>,
    location: String,
}

impl HtmlPage {
    /// Parse a page context out of raw HTML
    ///
    /// `page_url` is kept as the context location and used to resolve
    /// relative script `src` attributes.
    pub fn parse(html: &str, page_url: &str) -> Result<Self> {
        let base = Url::parse(page_url)?;

        let document = Html::parse_document(html);
        let mut scripts = Vec::new();
        if let Ok(selector) = Selector::parse("script[crossorigin][src]") {
            for element in document.select(&selector) {
                if let Some(src) = element.value().attr("src") {
                    if let Ok(resolved) = base.join(src) {
                        scripts.push(resolved.to_string());
                    }
                }
            }
        }

        let hydration = Self::extract_hydration(html)?;
        if hydration.is_none() {
            tracing::debug!("no hydration snapshot found in page");
        }

        Ok(Self {
            scripts,
            hydration,
            location: page_url.to_string(),
        })
    }

    /// Fetch a playlist page and parse it into a context
    pub async fn fetch(client: &reqwest::Client, page_url: &str) -> Result<Self> {
        tracing::debug!("Fetching playlist page: {}", page_url);
        let html = client.get(page_url).send().await?.text().await?;
        Self::parse(&html, page_url)
    }

    fn extract_hydration(html: &str) -> Result<Option<HydrationSnapshot>> {
        // The snapshot is a single inline assignment ending in `];`.
        let re = Regex::new(r"(?s)window\.__sc_hydration\s*=\s*(\[.*?\]);")?;
        let Some(captures) = re.captures(html) else {
            return Ok(None);
        };
        let json = &captures[1];
        match HydrationSnapshot::from_json(json) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                tracing::warn!("hydration snapshot present but unparseable: {}", e);
                Ok(None)
            }
        }
    }
}

impl PageContext for HtmlPage {
    fn script_urls(&self) -> Vec<String> {
        self.scripts.clone()
    }

    fn hydration(&self) -> Option<HydrationSnapshot> {
        self.hydration.clone()
    }

    fn location(&self) -> String {
        self.location.clone()
    }
}
