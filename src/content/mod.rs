//! Static page content and the renderers that turn it into cards.
//!
//! Every dataset here is a compile-time constant. The renderers never mutate
//! anything: each call to `cards()` starts a fresh, finite pass over the
//! fixed entries in declared order.
//!
//! ## Submodules
//!
//! - [`breeds`]: The breed gallery ([`BreedEntry`], [`BreedGallery`], [`image_query`])
//! - [`facts`]: Fun facts about dogs ([`FactList`])
//! - [`care`]: Care tips with short titles ([`CareTip`], [`CareTipList`])

pub mod breeds;
pub mod care;
pub mod facts;

pub use breeds::{image_query, BreedEntry, BreedGallery, BREEDS};
pub use care::{CareTip, CareTipList, CARE_TIPS};
pub use facts::{FactEntry, FactList, FACTS};

use serde::Serialize;

use crate::images::ImageRef;

/// A single renderable unit of content.
///
/// Breed cards carry an image reference, fact cards have no title, and care
/// tip cards have both a title and a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    pub body: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

impl Card {
    /// A card with only body text.
    pub fn text(body: &'static str) -> Self {
        Self {
            title: None,
            body,
            image: None,
        }
    }

    /// A card with a title and body text.
    pub fn titled(title: &'static str, body: &'static str) -> Self {
        Self {
            title: Some(title),
            body,
            image: None,
        }
    }

    /// Attach an image reference to this card.
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }
}
