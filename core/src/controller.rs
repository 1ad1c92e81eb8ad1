use std::rc::Rc;

use chrono::NaiveDate;

use crate::card::Card;
use crate::gesture::SwipeDirection;
use crate::pack::draw_pack;

/// Persistence port for the once-per-day completion lock. The browser app
/// backs this with localStorage; tests use [`MemoryLock`].
pub trait DailyLockStore {
    fn get(&self) -> Option<NaiveDate>;
    fn set(&mut self, date: NaiveDate);
}

#[derive(Default)]
pub struct MemoryLock {
    date: Option<NaiveDate>,
}

impl DailyLockStore for MemoryLock {
    fn get(&self) -> Option<NaiveDate> {
        self.date
    }

    fn set(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackPhase {
    NotOpened,
    Opened,
    Completed,
}

pub struct PackController {
    phase: PackPhase,
    pack: Vec<Card>,
    active_index: usize,
    revealed: Vec<bool>,
    lock: Box<dyn DailyLockStore>,
    like_hook: Option<Rc<dyn Fn(Card)>>,
}

impl PackController {
    pub fn new(lock: Box<dyn DailyLockStore>) -> Self {
        Self {
            phase: PackPhase::NotOpened,
            pack: Vec::new(),
            active_index: 0,
            revealed: Vec::new(),
            lock,
            like_hook: None,
        }
    }

    pub fn set_like_hook(&mut self, hook: Rc<dyn Fn(Card)>) {
        self.like_hook = Some(hook);
    }

    pub fn phase(&self) -> PackPhase {
        self.phase
    }

    pub fn pack(&self) -> &[Card] {
        &self.pack
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_card(&self) -> Option<&Card> {
        self.pack.get(self.active_index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn is_complete(&self) -> bool {
        self.phase == PackPhase::Completed
    }

    pub fn is_locked(&self, today: NaiveDate) -> bool {
        self.lock.get() == Some(today)
    }

    /// No-op when a pack is already live, the pool is empty, or today's
    /// pack has already been claimed.
    pub fn open_pack(&mut self, pool: &[Card], seed: u32, today: NaiveDate) -> bool {
        if self.phase != PackPhase::NotOpened || pool.is_empty() || self.is_locked(today) {
            return false;
        }
        self.pack = draw_pack(pool, seed);
        self.active_index = 0;
        self.revealed = vec![false; self.pack.len()];
        self.phase = PackPhase::Opened;
        true
    }

    /// Reveals the card at `index`. Only the active card can be revealed;
    /// revealing it again is a no-op. Returns whether the card was newly
    /// revealed.
    pub fn reveal_card(&mut self, index: usize) -> bool {
        if self.phase != PackPhase::Opened || index != self.active_index {
            return false;
        }
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// Applies a swipe decision to the active card. Out-of-turn calls
    /// (no live pack, already past the end, active card still unrevealed)
    /// are ignored. A right swipe hands the card to the like hook when one
    /// is installed. Every accepted decision advances the cursor by exactly
    /// one; the final decision completes the pack and claims today's lock.
    pub fn decide_swipe(&mut self, direction: SwipeDirection, today: NaiveDate) -> bool {
        if self.phase != PackPhase::Opened
            || self.active_index >= self.pack.len()
            || !self.is_revealed(self.active_index)
        {
            return false;
        }
        if direction == SwipeDirection::Right {
            if let Some(hook) = &self.like_hook {
                hook(self.pack[self.active_index].clone());
            }
        }
        self.active_index += 1;
        if self.active_index == self.pack.len() {
            self.phase = PackPhase::Completed;
            self.lock.set(today);
        }
        true
    }

    pub fn reset_pack(&mut self) {
        self.phase = PackPhase::NotOpened;
        self.pack.clear();
        self.revealed.clear();
        self.active_index = 0;
    }
}
