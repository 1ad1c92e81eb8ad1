use deiripakku_core::{Rarity, ScoreSlot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tab {
    Landing,
    Survey,
    Pack,
    Roster,
    Composer,
}

impl Tab {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Tab::Landing => "Home",
            Tab::Survey => "Survey",
            Tab::Pack => "Daily Pack",
            Tab::Roster => "Roster",
            Tab::Composer => "Composer",
        }
    }
}

pub(crate) const NAV_TABS: [Tab; 5] = [
    Tab::Landing,
    Tab::Survey,
    Tab::Pack,
    Tab::Roster,
    Tab::Composer,
];

pub(crate) fn rarity_class(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Legendary => "rarity-legendary",
        Rarity::Epic => "rarity-epic",
        Rarity::Rare => "rarity-rare",
        Rarity::Uncommon => "rarity-uncommon",
        Rarity::Common => "rarity-common",
    }
}

/// Single source of truth for whether a card shows its back. Unrevealed
/// cards always do; revealed cards only while the user holds them flipped.
pub(crate) fn effective_flip(revealed: bool, user_flipped: bool) -> bool {
    !revealed || (revealed && user_flipped)
}

pub(crate) fn format_score(slot: Option<ScoreSlot>) -> String {
    match slot {
        Some(ScoreSlot::Ready(score)) => format!("{score:.1}"),
        Some(ScoreSlot::Pending) => "…".to_string(),
        Some(ScoreSlot::Unavailable) | None => "N/A".to_string(),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct SurveyAnswers {
    pub(crate) looking_for: String,
    pub(crate) interests: Vec<String>,
    pub(crate) age_min: u32,
    pub(crate) age_max: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrevealed_cards_always_show_their_back() {
        assert!(effective_flip(false, false));
        assert!(effective_flip(false, true));
        assert!(!effective_flip(true, false));
        assert!(effective_flip(true, true));
    }

    #[test]
    fn score_formatting() {
        assert_eq!(format_score(Some(ScoreSlot::Ready(7.25))), "7.2");
        assert_eq!(format_score(Some(ScoreSlot::Pending)), "…");
        assert_eq!(format_score(Some(ScoreSlot::Unavailable)), "N/A");
        assert_eq!(format_score(None), "N/A");
    }
}
