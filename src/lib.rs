//! # pawsome
//!
//! Paw-some Dog World: a small terminal page about dogs with three tabs,
//! a breed gallery, fun facts, and care tips.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   view   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(ViewTree)│    │(ratatui)│    │         │ │
//! │  └────┬────┘    └────┬─────┘    └─────────┘    └─────────┘ │
//! │       ▲              │                                      │
//! │  ┌────┴────┐    ┌────▼─────┐    ┌─────────┐                │
//! │  │ events  │    │ content  │───▶│ images  │                │
//! │  │ (input) │    │(datasets)│    │(queries)│                │
//! │  └─────────┘    └──────────┘    └─────────┘                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: [`Section`], the [`ViewController`] that owns the active
//!   section and search term, and the interactive [`App`] state around it
//! - **[`content`]**: The fixed breed, fact, and care tip datasets and the
//!   renderers that yield them as cards
//! - **[`view`]**: [`build_view`], a pure function from controller state to a [`ViewTree`]
//! - **[`images`]**: The [`ImageProvider`] trait that turns a breed query into an image link
//! - **[`ui`]**: Terminal rendering using ratatui
//! - **[`events`]**: Keyboard and mouse dispatch
//! - **[`settings`]**: Layered configuration from defaults, file, and environment
//!
//! ## Usage
//!
//! ```
//! use pawsome::{build_view, NoImages, Section, ViewController};
//!
//! let mut controller = ViewController::new();
//! assert_eq!(controller.active_section(), Section::Breeds);
//!
//! controller.set_active_section(Section::CareTips);
//! controller.set_search_term("water");
//!
//! let view = build_view(controller.active_section(), controller.search_term(), &NoImages);
//! assert_eq!(view.cards.len(), 6);
//! ```

pub mod app;
pub mod content;
pub mod events;
pub mod images;
pub mod logging;
pub mod settings;
pub mod ui;
pub mod view;

/// Name of the page, shown in the header.
pub const PAGE_TITLE: &str = "Paw-some Dog World";
/// Heading shown next to the title.
pub const PAGE_HEADING: &str = "All About Dogs";

// Re-export main types for convenience
pub use app::{App, Section, ViewController};
pub use content::{
    image_query, BreedEntry, BreedGallery, Card, CareTip, CareTipList, FactEntry, FactList,
};
pub use images::{ImageProvider, ImageRef, NoImages, UnsplashImages};
pub use settings::Settings;
pub use ui::{Theme, ThemeChoice};
pub use view::{build_view, ViewTree};
