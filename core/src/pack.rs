use crate::card::{Card, FALLBACK_PROFILES};

pub const PACK_SIZE: usize = 5;

pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

pub fn rand_unit(seed: u32, salt: u32) -> f64 {
    let mixed = splitmix32(seed ^ splitmix32(salt));
    let top = mixed >> 8;
    top as f64 / ((1u32 << 24) as f64)
}

fn rand_index(seed: u32, salt: u32, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let pick = (rand_unit(seed, salt) * len as f64) as usize;
    pick.min(len - 1)
}

fn pad_pool(pool: &mut Vec<Card>) {
    let mut fallback = FALLBACK_PROFILES.iter();
    while pool.len() < PACK_SIZE {
        let Some(entry) = fallback.next() else {
            break;
        };
        let mut card = entry.to_card();
        card.id = format!("fallback-{}", card.id);
        if pool.iter().any(|existing| existing.id == card.id) {
            continue;
        }
        pool.push(card);
    }
}

/// Draws a pack of exactly `PACK_SIZE` distinct cards. One card of the
/// pool's highest rarity tier is always placed last; the rest is a uniform
/// sample without replacement. Pools shorter than a pack are padded from
/// `FALLBACK_PROFILES` with re-namespaced ids.
pub fn draw_pack(pool: &[Card], seed: u32) -> Vec<Card> {
    let mut pool = pool.to_vec();
    pad_pool(&mut pool);

    let Some(max_rarity) = pool.iter().map(|card| card.rarity).max() else {
        return Vec::new();
    };
    let candidates: Vec<usize> = pool
        .iter()
        .enumerate()
        .filter(|(_, card)| card.rarity == max_rarity)
        .map(|(index, _)| index)
        .collect();
    let highlight_at = candidates[rand_index(seed, 0, candidates.len())];
    let highlight = pool.swap_remove(highlight_at);

    let mut rest = pool;
    let mut pack = Vec::with_capacity(PACK_SIZE);
    let filler_count = (PACK_SIZE - 1).min(rest.len());
    for salt in 0..filler_count {
        let pick = rand_index(seed, salt as u32 + 1, rest.len());
        pack.push(rest.swap_remove(pick));
    }
    pack.push(highlight);
    pack
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{catalog_pool, Rarity};

    #[test]
    fn rand_unit_stays_in_range() {
        for salt in 0..512 {
            let value = rand_unit(0xDEAD_BEEF, salt);
            assert!((0.0..1.0).contains(&value), "out of range: {value}");
        }
    }

    #[test]
    fn draw_is_deterministic_for_a_seed() {
        let pool = catalog_pool();
        let first = draw_pack(&pool, 42);
        let second = draw_pack(&pool, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn highlight_always_carries_max_rarity() {
        let pool = catalog_pool();
        for seed in 0..64 {
            let pack = draw_pack(&pool, seed);
            assert_eq!(pack.len(), PACK_SIZE);
            assert_eq!(pack[PACK_SIZE - 1].rarity, Rarity::Legendary);
        }
    }
}
