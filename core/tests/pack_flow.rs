use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use deiripakku_core::{
    catalog_pool, Card, MemoryLock, PackController, PackPhase, SwipeDirection, PACK_SIZE,
};

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, n).unwrap()
}

fn controller() -> PackController {
    PackController::new(Box::<MemoryLock>::default())
}

fn open(controller: &mut PackController, today: NaiveDate) {
    assert!(controller.open_pack(&catalog_pool(), 11, today));
    assert_eq!(controller.phase(), PackPhase::Opened);
    assert_eq!(controller.pack().len(), PACK_SIZE);
}

#[test]
fn swipes_on_unrevealed_cards_are_ignored() {
    let mut controller = controller();
    open(&mut controller, day(1));

    assert!(!controller.decide_swipe(SwipeDirection::Right, day(1)));
    assert_eq!(controller.active_index(), 0);

    assert!(controller.reveal_card(0));
    assert!(controller.decide_swipe(SwipeDirection::Right, day(1)));
    assert_eq!(controller.active_index(), 1);
}

#[test]
fn reveal_is_idempotent_and_gated_to_the_active_card() {
    let mut controller = controller();
    open(&mut controller, day(1));

    assert!(!controller.reveal_card(2), "out-of-turn reveal must not land");
    assert!(!controller.is_revealed(2));

    assert!(controller.reveal_card(0));
    assert!(!controller.reveal_card(0));
    assert!(controller.is_revealed(0));
}

#[test]
fn cursor_advances_exactly_once_per_decision() {
    let mut controller = controller();
    open(&mut controller, day(1));

    for expected in 0..PACK_SIZE {
        assert_eq!(controller.active_index(), expected);
        // a second decision without revealing the new active card is noise
        assert!(!controller.decide_swipe(SwipeDirection::Left, day(1)));
        assert!(controller.reveal_card(expected));
        assert!(controller.decide_swipe(SwipeDirection::Left, day(1)));
    }
    assert_eq!(controller.active_index(), PACK_SIZE);
    assert_eq!(controller.phase(), PackPhase::Completed);
    assert!(!controller.decide_swipe(SwipeDirection::Left, day(1)));
    assert_eq!(controller.active_index(), PACK_SIZE);
}

#[test]
fn completion_claims_the_daily_lock() {
    let mut controller = controller();
    let today = day(3);
    open(&mut controller, today);

    for index in 0..PACK_SIZE {
        controller.reveal_card(index);
        controller.decide_swipe(SwipeDirection::Right, today);
    }
    assert!(controller.is_complete());
    assert!(controller.is_locked(today));
    assert!(!controller.is_locked(day(4)));

    controller.reset_pack();
    assert_eq!(controller.phase(), PackPhase::NotOpened);
    assert!(
        !controller.open_pack(&catalog_pool(), 5, today),
        "same-day reopen must be refused"
    );
    assert!(controller.open_pack(&catalog_pool(), 5, day(4)));
}

#[test]
fn open_refuses_an_empty_pool() {
    let mut controller = controller();
    assert!(!controller.open_pack(&[], 1, day(1)));
    assert_eq!(controller.phase(), PackPhase::NotOpened);
}

#[test]
fn right_swipes_reach_the_like_hook_and_left_swipes_do_not() {
    let liked: Rc<RefCell<Vec<Card>>> = Rc::default();
    let mut controller = controller();
    {
        let liked = liked.clone();
        controller.set_like_hook(Rc::new(move |card| liked.borrow_mut().push(card)));
    }
    open(&mut controller, day(1));

    let expected: Vec<String> = controller
        .pack()
        .iter()
        .enumerate()
        .filter(|(index, _)| index % 2 == 0)
        .map(|(_, card)| card.id.clone())
        .collect();

    for index in 0..PACK_SIZE {
        controller.reveal_card(index);
        let direction = if index % 2 == 0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        };
        controller.decide_swipe(direction, day(1));
    }

    let got: Vec<String> = liked.borrow().iter().map(|card| card.id.clone()).collect();
    assert_eq!(got, expected);
}

#[test]
fn missing_like_hook_degrades_to_a_plain_advance() {
    let mut controller = controller();
    open(&mut controller, day(1));
    controller.reveal_card(0);
    assert!(controller.decide_swipe(SwipeDirection::Right, day(1)));
    assert_eq!(controller.active_index(), 1);
}

#[test]
fn reopen_after_reset_starts_a_fresh_reveal_set() {
    let mut controller = controller();
    open(&mut controller, day(1));
    controller.reveal_card(0);
    controller.reset_pack();

    open(&mut controller, day(1));
    assert!(!controller.is_revealed(0));
    assert_eq!(controller.active_index(), 0);
}
