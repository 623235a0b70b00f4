//! Breed gallery.

use serde::Serialize;

use super::Card;
use crate::images::ImageProvider;

/// A breed shown in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreedEntry {
    pub name: &'static str,
    pub description: &'static str,
}

const BREED_DESCRIPTION: &str =
    "A popular and beloved dog breed known for its friendly nature and versatility.";

/// The gallery entries, in display order.
pub static BREEDS: [BreedEntry; 6] = [
    BreedEntry {
        name: "Labrador Retriever",
        description: BREED_DESCRIPTION,
    },
    BreedEntry {
        name: "German Shepherd",
        description: BREED_DESCRIPTION,
    },
    BreedEntry {
        name: "Golden Retriever",
        description: BREED_DESCRIPTION,
    },
    BreedEntry {
        name: "French Bulldog",
        description: BREED_DESCRIPTION,
    },
    BreedEntry {
        name: "Bulldog",
        description: BREED_DESCRIPTION,
    },
    BreedEntry {
        name: "Poodle",
        description: BREED_DESCRIPTION,
    },
];

/// Derive the image search query for a breed name.
///
/// The name is lower-cased and every space becomes a hyphen, so
/// "French Bulldog" yields "french-bulldog".
pub fn image_query(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Renders [`BREEDS`] as cards, asking the image provider for a picture of each.
#[derive(Debug, Clone, Copy)]
pub struct BreedGallery<'a> {
    images: &'a dyn ImageProvider,
}

impl<'a> BreedGallery<'a> {
    pub fn new(images: &'a dyn ImageProvider) -> Self {
        Self { images }
    }

    /// The raw entries behind the gallery.
    pub fn entries(&self) -> &'static [BreedEntry] {
        &BREEDS
    }

    /// Cards for every breed, in declared order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + Clone + 'a {
        let images = self.images;
        BREEDS.iter().map(move |breed| {
            Card::titled(breed.name, breed.description)
                .with_image(images.resolve(&image_query(breed.name)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::{ImageRef, NoImages, UnsplashImages};

    #[test]
    fn test_image_query_single_space() {
        assert_eq!(image_query("French Bulldog"), "french-bulldog");
        assert_eq!(image_query("Poodle"), "poodle");
    }

    #[test]
    fn test_image_query_replaces_every_space() {
        assert_eq!(
            image_query("Cavalier King Charles Spaniel"),
            "cavalier-king-charles-spaniel"
        );
        assert_eq!(image_query("a  b"), "a--b");
    }

    #[test]
    fn test_gallery_renders_six_breeds_in_order() {
        let images = NoImages;
        let gallery = BreedGallery::new(&images);
        let titles: Vec<_> = gallery.cards().filter_map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec![
                "Labrador Retriever",
                "German Shepherd",
                "Golden Retriever",
                "French Bulldog",
                "Bulldog",
                "Poodle",
            ]
        );
    }

    #[test]
    fn test_gallery_is_restartable() {
        let images = NoImages;
        let gallery = BreedGallery::new(&images);
        let cards = gallery.cards();
        assert_eq!(cards.clone().count(), 6);
        assert_eq!(cards.count(), 6);
        assert_eq!(gallery.cards().count(), 6);
    }

    #[test]
    fn test_gallery_resolves_images_from_query() {
        let images = UnsplashImages::default();
        let gallery = BreedGallery::new(&images);
        let french = gallery.cards().nth(3).unwrap();
        assert_eq!(
            french.image,
            Some(ImageRef::Url(
                "https://source.unsplash.com/400x300/?french-bulldog".to_string()
            ))
        );
    }

    #[test]
    fn test_gallery_without_images() {
        let images = NoImages;
        let gallery = BreedGallery::new(&images);
        assert!(gallery.cards().all(|c| c.image == Some(ImageRef::Unavailable)));
    }
}
