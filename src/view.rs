//! Pure view construction.
//!
//! [`build_view`] maps the controller state to a [`ViewTree`] on every frame.
//! Nothing is cached between frames; the UI draws whatever the tree says.

use serde::Serialize;

use crate::app::Section;
use crate::content::{BreedGallery, Card, CareTipList, FactList};
use crate::images::ImageProvider;

/// Everything needed to draw the content area for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewTree {
    pub section: Section,
    pub title: &'static str,
    pub subtitle: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<&'static str>,
    pub cards: Vec<Card>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search_term: String,
}

impl ViewTree {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Build the view for `section`.
///
/// The search term is carried through for display only; it never filters
/// the cards.
pub fn build_view(section: Section, search_term: &str, images: &dyn ImageProvider) -> ViewTree {
    let (title, subtitle, heading, cards): (_, _, _, Vec<Card>) = match section {
        Section::Breeds => (
            "Popular Dog Breeds",
            "Explore some of the most beloved dog breeds",
            None,
            BreedGallery::new(images).cards().collect(),
        ),
        Section::FunFacts => (
            "Fun Facts About Dogs",
            "Discover interesting tidbits about our canine companions",
            None,
            FactList.cards().collect(),
        ),
        Section::CareTips => (
            "Dog Care Tips",
            "Learn how to keep your furry friend happy and healthy",
            Some("Essential Dog Care Tips"),
            CareTipList.cards().collect(),
        ),
    };

    ViewTree {
        section,
        title,
        subtitle,
        heading,
        cards,
        search_term: search_term.to_string(),
    }
}

/// Build the views for every section, in tab order.
pub fn build_all(images: &dyn ImageProvider) -> Vec<ViewTree> {
    Section::ALL
        .iter()
        .map(|section| build_view(*section, "", images))
        .collect()
}
