//! Fun facts list.

use super::Card;

/// A single fun fact.
pub type FactEntry = &'static str;

pub static FACTS: [FactEntry; 5] = [
    "Dogs have a sense of time and can tell how long you've been gone.",
    "A dog's nose print is unique, much like a human's fingerprint.",
    "Dalmatians are born completely white and develop their spots as they grow older.",
    "The Basenji is the only breed of dog that can't bark, but they can yodel!",
    "A dog's average body temperature is 101.2°F (38.4°C).",
];

/// Renders [`FACTS`] as untitled cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactList;

impl FactList {
    pub fn cards(&self) -> impl Iterator<Item = Card> + Clone {
        FACTS.iter().copied().map(Card::text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_list_in_declared_order() {
        let bodies: Vec<_> = FactList.cards().map(|c| c.body).collect();
        assert_eq!(bodies.len(), 5);
        assert_eq!(bodies, FACTS.to_vec());
        assert!(bodies[3].contains("Basenji"));
    }

    #[test]
    fn test_fact_cards_have_no_title_or_image() {
        assert!(FactList.cards().all(|c| c.title.is_none() && c.image.is_none()));
    }
}
