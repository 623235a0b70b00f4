//! Care tips list.

use serde::Serialize;

use super::Card;

/// A care tip with a short title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareTip {
    pub title: &'static str,
    pub description: &'static str,
}

pub static CARE_TIPS: [CareTip; 6] = [
    CareTip {
        title: "Balanced Diet",
        description: "Provide a balanced diet appropriate for your dog's age, size, and activity level.",
    },
    CareTip {
        title: "Fresh Water",
        description: "Ensure your dog has access to fresh water at all times.",
    },
    CareTip {
        title: "Daily Exercise",
        description: "Regular exercise is crucial for your dog's physical and mental health.",
    },
    CareTip {
        title: "Vet Check-ups",
        description: "Schedule regular check-ups with your veterinarian.",
    },
    CareTip {
        title: "Grooming",
        description: "Groom your dog regularly, including brushing their teeth and trimming their nails.",
    },
    CareTip {
        title: "Socialization",
        description: "Socialize your dog from an early age to help them become well-adjusted adults.",
    },
];

/// Renders [`CARE_TIPS`] as titled cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct CareTipList;

impl CareTipList {
    pub fn cards(&self) -> impl Iterator<Item = Card> + Clone {
        CARE_TIPS
            .iter()
            .map(|tip| Card::titled(tip.title, tip.description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_care_tip_list_in_declared_order() {
        let pairs: Vec<_> = CareTipList
            .cards()
            .map(|c| (c.title.unwrap(), c.body))
            .collect();
        assert_eq!(pairs.len(), 6);
        for (pair, tip) in pairs.iter().zip(CARE_TIPS.iter()) {
            assert_eq!(*pair, (tip.title, tip.description));
        }
        assert_eq!(pairs[0].0, "Balanced Diet");
        assert_eq!(pairs[5].0, "Socialization");
    }
}
