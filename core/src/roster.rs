use crate::card::Card;

/// Ordered collection of liked cards, de-duplicated by id. Append-only
/// apart from explicit removal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    cards: Vec<Card>,
}

impl Roster {
    pub fn add(&mut self, card: Card) -> bool {
        if self.contains(&card.id) {
            return false;
        }
        self.cards.push(card);
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|card| card.id != id);
        self.cards.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.cards.iter().any(|card| card.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::profile_by_id;

    #[test]
    fn add_deduplicates_by_id() {
        let card = profile_by_id("sarah-chen").unwrap().to_card();
        let mut roster = Roster::default();
        assert!(roster.add(card.clone()));
        assert!(!roster.add(card));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn remove_only_touches_the_named_card() {
        let mut roster = Roster::default();
        roster.add(profile_by_id("sarah-chen").unwrap().to_card());
        roster.add(profile_by_id("david-kim").unwrap().to_card());
        assert!(roster.remove("sarah-chen"));
        assert!(!roster.remove("sarah-chen"));
        assert!(roster.contains("david-kim"));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut roster = Roster::default();
        roster.add(profile_by_id("david-kim").unwrap().to_card());
        roster.add(profile_by_id("sarah-chen").unwrap().to_card());
        let ids: Vec<&str> = roster.cards().iter().map(|card| card.id.as_str()).collect();
        assert_eq!(ids, ["david-kim", "sarah-chen"]);
    }
}
