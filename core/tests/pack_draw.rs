use deiripakku_core::{catalog_pool, draw_pack, Card, Rarity, PACK_SIZE};

fn card(id: &str, rarity: Rarity) -> Card {
    Card {
        id: id.to_string(),
        name: format!("Profile {id}"),
        rarity,
        image: None,
        major: "CS @Test".to_string(),
        company: "Engineer @Test".to_string(),
        bio: String::new(),
        location: "Nowhere, CA".to_string(),
        interests: Vec::new(),
        age: 27,
        experience: "3 years".to_string(),
        email: None,
        linkedin: None,
    }
}

fn assert_distinct_ids(pack: &[Card]) {
    for (index, entry) in pack.iter().enumerate() {
        assert!(
            pack[index + 1..].iter().all(|other| other.id != entry.id),
            "duplicate id {} in pack",
            entry.id
        );
    }
}

#[test]
fn full_pool_draws_five_distinct_cards() {
    let pool = catalog_pool();
    for seed in 0..128 {
        let pack = draw_pack(&pool, seed);
        assert_eq!(pack.len(), PACK_SIZE);
        assert_distinct_ids(&pack);
        assert!(pack
            .iter()
            .all(|entry| pool.iter().any(|source| source.id == entry.id)));
    }
}

#[test]
fn highlight_is_the_pool_maximum_and_always_last() {
    let rarities = [
        Rarity::Rare,
        Rarity::Common,
        Rarity::Common,
        Rarity::Rare,
        Rarity::Legendary,
        Rarity::Common,
        Rarity::Rare,
        Rarity::Common,
        Rarity::Epic,
    ];
    let pool: Vec<Card> = rarities
        .iter()
        .enumerate()
        .map(|(index, rarity)| card(&(index + 1).to_string(), *rarity))
        .collect();

    for seed in 0..256 {
        let pack = draw_pack(&pool, seed);
        assert_eq!(pack.len(), PACK_SIZE);
        assert_distinct_ids(&pack);
        // the single legendary (id 5) wins the highlight slot every draw
        assert_eq!(pack[PACK_SIZE - 1].id, "5");
        assert_eq!(pack[PACK_SIZE - 1].rarity, Rarity::Legendary);
    }
}

#[test]
fn highlight_tier_with_several_candidates_stays_on_tier() {
    let pool = vec![
        card("a", Rarity::Epic),
        card("b", Rarity::Epic),
        card("c", Rarity::Common),
        card("d", Rarity::Uncommon),
        card("e", Rarity::Common),
        card("f", Rarity::Rare),
    ];
    for seed in 0..64 {
        let pack = draw_pack(&pool, seed);
        assert_eq!(pack[PACK_SIZE - 1].rarity, Rarity::Epic);
    }
}

#[test]
fn short_pool_is_padded_to_a_full_pack() {
    let pool = vec![card("only-one", Rarity::Rare), card("two", Rarity::Common)];
    for seed in 0..32 {
        let pack = draw_pack(&pool, seed);
        assert_eq!(pack.len(), PACK_SIZE);
        assert_distinct_ids(&pack);
        assert!(pack.iter().any(|entry| entry.id == "only-one"));
        assert!(pack.iter().any(|entry| entry.id == "two"));
    }
}

#[test]
fn padding_ids_are_namespaced_away_from_the_pool() {
    let pool = vec![card("nathan-brown", Rarity::Legendary)];
    let pack = draw_pack(&pool, 7);
    assert_eq!(pack.len(), PACK_SIZE);
    assert_distinct_ids(&pack);
    assert_eq!(pack[PACK_SIZE - 1].id, "nathan-brown");
    assert!(pack
        .iter()
        .take(PACK_SIZE - 1)
        .all(|entry| entry.id.starts_with("fallback-")));
}

#[test]
fn empty_pool_still_yields_a_pack_from_fallbacks() {
    let pack = draw_pack(&[], 3);
    assert_eq!(pack.len(), PACK_SIZE);
    assert_distinct_ids(&pack);
    let max = pack.iter().map(|entry| entry.rarity).max().unwrap();
    assert_eq!(pack[PACK_SIZE - 1].rarity, max);
}
