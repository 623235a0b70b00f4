//! Image provider abstraction for breed pictures.
//!
//! The TUI can't draw photos, so a provider only turns a descriptive query
//! into a reference the UI can print on a card and hand to the desktop.

use std::fmt::Debug;

use serde::Serialize;

/// A resolved image for a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageRef {
    /// A URL that displays an image matching the query.
    Url(String),
    /// No image could be offered for the query.
    Unavailable,
}

impl ImageRef {
    /// Returns the URL if one was resolved.
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageRef::Url(url) => Some(url),
            ImageRef::Unavailable => None,
        }
    }
}

/// Trait for resolving an image query into a displayable image.
///
/// There is no contract on caching, latency, or failure: an image that
/// later fails to load is simply a broken picture.
///
/// # Example
///
/// ```
/// use pawsome::{ImageProvider, UnsplashImages};
///
/// let images = UnsplashImages::default();
/// let image = images.resolve("poodle");
/// assert_eq!(image.url(), Some("https://source.unsplash.com/400x300/?poodle"));
/// ```
pub trait ImageProvider: Send + Debug {
    /// Resolve a query string into an image reference.
    fn resolve(&self, query: &str) -> ImageRef;

    /// Returns a human-readable description of the provider.
    fn description(&self) -> &str;
}

/// Default base URL for [`UnsplashImages`].
pub const UNSPLASH_BASE_URL: &str = "https://source.unsplash.com";

/// Resolves queries against the Unsplash source endpoint.
#[derive(Debug, Clone)]
pub struct UnsplashImages {
    base_url: String,
    width: u32,
    height: u32,
    description: String,
}

impl UnsplashImages {
    /// Create a provider for the given base URL and image size.
    pub fn new(base_url: impl Into<String>, width: u32, height: u32) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let description = format!("images: {} ({}x{})", base_url, width, height);
        Self {
            base_url,
            width,
            height,
            description,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for UnsplashImages {
    fn default() -> Self {
        Self::new(UNSPLASH_BASE_URL, 400, 300)
    }
}

impl ImageProvider for UnsplashImages {
    fn resolve(&self, query: &str) -> ImageRef {
        ImageRef::Url(format!(
            "{}/{}x{}/?{}",
            self.base_url, self.width, self.height, query
        ))
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// A provider that never offers an image.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageProvider for NoImages {
    fn resolve(&self, _query: &str) -> ImageRef {
        ImageRef::Unavailable
    }

    fn description(&self) -> &str {
        "images: off"
    }
}

/// Hand an image URL to the desktop's default opener.
///
/// Fire-and-forget: the opener runs detached and is never retried.
pub fn open_in_browser(image: &ImageRef) -> anyhow::Result<()> {
    let Some(url) = image.url() else {
        anyhow::bail!("No image available");
    };
    tracing::debug!(url, "opening image");
    open::that_detached(url)?;
    Ok(())
}
