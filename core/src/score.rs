use std::collections::HashMap;

use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScoreSlot {
    Pending,
    Unavailable,
    Ready(f64),
}

/// Per-pack score map. Every `begin_pack` bumps the generation; results
/// recorded under an older generation are dropped so a slow response from
/// a discarded pack can never leak into the current one.
#[derive(Default)]
pub struct ScoreBoard {
    generation: u64,
    slots: HashMap<String, ScoreSlot>,
    outstanding: usize,
}

impl ScoreBoard {
    pub fn begin_pack<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) -> u64 {
        self.generation += 1;
        self.slots.clear();
        self.outstanding = 0;
        for id in ids {
            self.slots.insert(id.to_string(), ScoreSlot::Pending);
            self.outstanding += 1;
        }
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Records one card's result. Returns false (and changes nothing) for
    /// stale generations, unknown ids, or slots that already settled.
    pub fn record(&mut self, generation: u64, id: &str, score: Option<f64>) -> bool {
        if generation != self.generation {
            return false;
        }
        let Some(slot) = self.slots.get_mut(id) else {
            return false;
        };
        if *slot != ScoreSlot::Pending {
            return false;
        }
        *slot = match score {
            Some(value) => ScoreSlot::Ready(value),
            None => ScoreSlot::Unavailable,
        };
        self.outstanding = self.outstanding.saturating_sub(1);
        true
    }

    pub fn slot(&self, id: &str) -> Option<ScoreSlot> {
        self.slots.get(id).copied()
    }

    pub fn is_scoring(&self) -> bool {
        self.outstanding > 0
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn first_number(value: &Value) -> Option<f64> {
    value.as_array().and_then(|items| items.first()).and_then(coerce_number)
}

/// Extracts a score from any of the shapes the scoring endpoint has been
/// seen returning: a `score` field, a `raw` array, a `raw.data` array, or
/// a bare `raw` value. Numeric strings are coerced.
pub fn parse_score_response(value: &Value) -> Option<f64> {
    if let Some(score) = value.get("score").and_then(coerce_number) {
        return Some(score);
    }
    let raw = value.get("raw")?;
    if let Some(score) = first_number(raw) {
        return Some(score);
    }
    if let Some(score) = raw.get("data").and_then(first_number) {
        return Some(score);
    }
    coerce_number(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_every_known_response_shape() {
        assert_eq!(parse_score_response(&json!({ "score": 7.5 })), Some(7.5));
        assert_eq!(parse_score_response(&json!({ "score": "8.1" })), Some(8.1));
        assert_eq!(parse_score_response(&json!({ "raw": [6.0, 1.0] })), Some(6.0));
        assert_eq!(
            parse_score_response(&json!({ "raw": { "data": ["5.5"] } })),
            Some(5.5)
        );
        assert_eq!(parse_score_response(&json!({ "raw": 9 })), Some(9.0));
        assert_eq!(parse_score_response(&json!({ "raw": "oops" })), None);
        assert_eq!(parse_score_response(&json!({})), None);
    }

    #[test]
    fn record_rejects_stale_generations() {
        let mut board = ScoreBoard::default();
        let old = board.begin_pack(["a", "b"]);
        let current = board.begin_pack(["a", "c"]);
        assert_ne!(old, current);

        assert!(!board.record(old, "a", Some(9.0)));
        assert_eq!(board.slot("a"), Some(ScoreSlot::Pending));

        assert!(board.record(current, "a", Some(4.0)));
        assert_eq!(board.slot("a"), Some(ScoreSlot::Ready(4.0)));
    }

    #[test]
    fn scoring_flag_tracks_outstanding_fetches() {
        let mut board = ScoreBoard::default();
        let generation = board.begin_pack(["a", "b"]);
        assert!(board.is_scoring());

        assert!(board.record(generation, "a", None));
        assert_eq!(board.slot("a"), Some(ScoreSlot::Unavailable));
        assert!(board.is_scoring());

        assert!(board.record(generation, "b", Some(6.2)));
        assert!(!board.is_scoring());
    }

    #[test]
    fn settled_slots_do_not_settle_twice() {
        let mut board = ScoreBoard::default();
        let generation = board.begin_pack(["a"]);
        assert!(board.record(generation, "a", Some(3.0)));
        assert!(!board.record(generation, "a", Some(8.0)));
        assert_eq!(board.slot("a"), Some(ScoreSlot::Ready(3.0)));
        assert!(!board.record(generation, "unknown", Some(1.0)));
    }
}
