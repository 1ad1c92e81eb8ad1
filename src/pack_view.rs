use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use web_sys::{Event, MouseEvent, TouchEvent};
use yew::prelude::*;

use deiripakku_core::{
    catalog_pool, exit_offset, Card, DragGesture, GestureOutcome, PackController, PackPhase,
    EXIT_ROTATION_DEG,
};

use crate::input::{mouse_point, touch_point, DragListeners};
use crate::model::{effective_flip, format_score, rarity_class};
use crate::persisted::{time_seed, today, BrowserDailyLock};
use crate::score_fetch::{fetch_pack_scores, ScoreStore};

const REVEAL_FLASH_MS: u32 = 600;
const SWIPE_SETTLE_MS: u32 = 200;
const PACK_RESET_DELAY_MS: u32 = 1000;
const DRAG_HINT_MIN_PX: f64 = 20.0;
const DRAG_HINT_FULL_PX: f64 = 80.0;

#[derive(Properties, PartialEq)]
pub(crate) struct PackScreenProps {
    pub(crate) scores: ScoreStore,
    pub(crate) on_card_liked: Callback<Card>,
}

#[function_component(PackScreen)]
pub(crate) fn pack_screen(props: &PackScreenProps) -> Html {
    let controller = use_mut_ref(|| PackController::new(Box::new(BrowserDailyLock)));
    let revision = use_state(|| 0u32);
    let gesture = use_mut_ref(DragGesture::default);
    let drag_offset = use_state(|| (0.0f64, 0.0f64));
    let drag_rotation = use_state(|| 0.0f64);
    let dragging = use_state(|| false);
    let exiting = use_state(|| None::<(f64, f64)>);
    let revealing = use_state(|| false);
    let user_flips = use_state(Vec::<bool>::new);

    // The like hook fires while the controller is mutably borrowed, so it
    // only queues; the queue is drained (and the shell notified) once the
    // borrow is released. The sink slot always holds the newest callback
    // from props.
    let liked_sink: Rc<RefCell<Callback<Card>>> = use_mut_ref(Callback::noop);
    *liked_sink.borrow_mut() = props.on_card_liked.clone();
    let pending_likes: Rc<RefCell<Vec<Card>>> = use_mut_ref(Vec::new);
    {
        let controller = controller.clone();
        let pending_likes = pending_likes.clone();
        use_effect_with((), move |_| {
            controller
                .borrow_mut()
                .set_like_hook(Rc::new(move |card| pending_likes.borrow_mut().push(card)));
            || ()
        });
    }

    let refresh = {
        let revision = revision.clone();
        move || revision.set((*revision).wrapping_add(1))
    };

    let snapshot = controller.borrow();
    let phase = snapshot.phase();
    let pack: Vec<Card> = snapshot.pack().to_vec();
    let active_index = snapshot.active_index();
    let active_revealed = snapshot.is_revealed(active_index);
    let locked_today = snapshot.is_locked(today());
    drop(snapshot);

    let on_open = {
        let controller = controller.clone();
        let scores = props.scores.clone();
        let user_flips = user_flips.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            let mut ctrl = controller.borrow_mut();
            if !ctrl.open_pack(&catalog_pool(), time_seed(), today()) {
                return;
            }
            let pack = ctrl.pack().to_vec();
            drop(ctrl);
            user_flips.set(vec![false; pack.len()]);
            fetch_pack_scores(&scores, &pack);
            refresh();
        })
    };

    let on_reveal = {
        let controller = controller.clone();
        let revealing = revealing.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            let mut ctrl = controller.borrow_mut();
            let index = ctrl.active_index();
            let newly = ctrl.reveal_card(index);
            drop(ctrl);
            if !newly {
                return;
            }
            revealing.set(true);
            let revealing = revealing.clone();
            Timeout::new(REVEAL_FLASH_MS, move || revealing.set(false)).forget();
            refresh();
        })
    };

    let begin_drag: Rc<dyn Fn(f64, f64)> = {
        let controller = controller.clone();
        let gesture = gesture.clone();
        let dragging = dragging.clone();
        let drag_offset = drag_offset.clone();
        let drag_rotation = drag_rotation.clone();
        let exiting = exiting.clone();
        Rc::new(move |x, y| {
            if exiting.is_some() {
                return;
            }
            let ctrl = controller.borrow();
            let gate =
                ctrl.phase() == PackPhase::Opened && ctrl.is_revealed(ctrl.active_index());
            drop(ctrl);
            if !gate {
                return;
            }
            gesture.borrow_mut().begin(x, y);
            drag_offset.set((0.0, 0.0));
            drag_rotation.set(0.0);
            dragging.set(true);
        })
    };

    let on_mouse_down = {
        let begin_drag = begin_drag.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            event.stop_propagation();
            let (x, y) = mouse_point(&event);
            begin_drag(x, y);
        })
    };
    let on_touch_start = {
        let begin_drag = begin_drag.clone();
        Callback::from(move |event: TouchEvent| {
            event.prevent_default();
            event.stop_propagation();
            if let Some((x, y)) = touch_point(&event) {
                begin_drag(x, y);
            }
        })
    };

    {
        let controller = controller.clone();
        let gesture = gesture.clone();
        let drag_offset = drag_offset.clone();
        let drag_rotation = drag_rotation.clone();
        let dragging_flag = dragging.clone();
        let exiting = exiting.clone();
        let user_flips = user_flips.clone();
        let refresh = refresh.clone();
        let pending_likes = pending_likes.clone();
        let liked_sink = liked_sink.clone();
        use_effect_with(*dragging, move |active| {
            let listeners = if *active {
                let on_move: Rc<dyn Fn(f64, f64)> = {
                    let gesture = gesture.clone();
                    let drag_offset = drag_offset.clone();
                    let drag_rotation = drag_rotation.clone();
                    Rc::new(move |x, y| {
                        let mut tracker = gesture.borrow_mut();
                        tracker.movement(x, y);
                        drag_offset.set(tracker.offset());
                        drag_rotation.set(tracker.rotation());
                    })
                };
                let on_end: Rc<dyn Fn()> = Rc::new(move || {
                    let (dx, dy) = gesture.borrow().offset();
                    let outcome = gesture.borrow_mut().finish();
                    dragging_flag.set(false);
                    match outcome {
                        GestureOutcome::Tap => {
                            let index = controller.borrow().active_index();
                            let mut flips = (*user_flips).clone();
                            if let Some(flag) = flips.get_mut(index) {
                                *flag = !*flag;
                            }
                            user_flips.set(flips);
                            drag_offset.set((0.0, 0.0));
                            drag_rotation.set(0.0);
                        }
                        GestureOutcome::Commit(direction) => {
                            let width = web_sys::window()
                                .and_then(|window| window.inner_width().ok())
                                .and_then(|value| value.as_f64())
                                .unwrap_or(1280.0);
                            exiting.set(Some((exit_offset(dx, width), dy)));
                            let controller = controller.clone();
                            let exiting = exiting.clone();
                            let drag_offset = drag_offset.clone();
                            let drag_rotation = drag_rotation.clone();
                            let refresh = refresh.clone();
                            let pending_likes = pending_likes.clone();
                            let liked_sink = liked_sink.clone();
                            Timeout::new(SWIPE_SETTLE_MS, move || {
                                let mut ctrl = controller.borrow_mut();
                                let advanced = ctrl.decide_swipe(direction, today());
                                let complete = ctrl.is_complete();
                                drop(ctrl);
                                let sink = liked_sink.borrow().clone();
                                let liked: Vec<Card> =
                                    pending_likes.borrow_mut().drain(..).collect();
                                for card in liked {
                                    sink.emit(card);
                                }
                                exiting.set(None);
                                drag_offset.set((0.0, 0.0));
                                drag_rotation.set(0.0);
                                refresh();
                                if advanced && complete {
                                    let controller = controller.clone();
                                    let refresh = refresh.clone();
                                    Timeout::new(PACK_RESET_DELAY_MS, move || {
                                        controller.borrow_mut().reset_pack();
                                        refresh();
                                    })
                                    .forget();
                                }
                            })
                            .forget();
                        }
                        GestureOutcome::SnapBack => {
                            drag_offset.set((0.0, 0.0));
                            drag_rotation.set(0.0);
                        }
                    }
                });
                Some(DragListeners::attach(on_move, on_end))
            } else {
                None
            };
            move || drop(listeners)
        });
    }

    let content = match phase {
        PackPhase::NotOpened if locked_today => html! {
            <div class="pack-intro">
                <div class="pack-locked-icon">{ "💤" }</div>
                <h1>{ "Pack already claimed" }</h1>
                <p>{ "You opened today's pack. Come back tomorrow for 5 new matches." }</p>
            </div>
        },
        PackPhase::NotOpened => html! {
            <div class="pack-intro">
                <h1>{ "Open Your Daily Pack" }</h1>
                <p>{ "Get 5 new matches today! Cards will reveal one by one." }</p>
                <button class="open-pack-button" onclick={on_open}>
                    { "📦 Open Pack" }
                </button>
            </div>
        },
        PackPhase::Opened => {
            let status = if *revealing {
                "Revealing..."
            } else if active_revealed {
                "Swipe left to pass, right to like"
            } else {
                "Tap the pack to reveal your card"
            };
            let card_area = if active_revealed {
                pack.get(active_index)
                    .map(|card| {
                        render_active_card(
                            card,
                            active_index,
                            user_flips.as_slice(),
                            *dragging,
                            *drag_offset,
                            *drag_rotation,
                            *exiting,
                            format_score(props.scores.slot(&card.id)),
                            on_mouse_down.clone(),
                            on_touch_start.clone(),
                        )
                    })
                    .unwrap_or_default()
            } else {
                let wrapper_class = classes!(
                    "card-wrapper",
                    (*revealing).then_some("card-wrapper-revealing")
                );
                html! {
                    <div class={wrapper_class} onclick={on_reveal}>
                        <div class="card-wrapper-art">{ "📦" }</div>
                        <div class="card-wrapper-title">{ "Daily Pack" }</div>
                        <div class="card-wrapper-hint">{ "Tap to reveal" }</div>
                    </div>
                }
            };
            html! {
                <div class="pack-stage">
                    <div class="pack-header">
                        <h2>{ format!("Card {} of {}", active_index + 1, pack.len()) }</h2>
                        <p class="pack-status">{ status }</p>
                    </div>
                    <div class="card-stack">{ card_area }</div>
                </div>
            }
        }
        PackPhase::Completed => html! {
            <div class="pack-intro">
                <div class="pack-complete-art">{ "✨" }</div>
                <h2>{ "Pack Complete!" }</h2>
                <p>{ "Your likes are waiting in the roster." }</p>
            </div>
        },
    };

    let scoring_overlay = if phase != PackPhase::NotOpened && props.scores.is_scoring() {
        html! {
            <div class="scoring-overlay">
                <div class="scoring-spinner" />
                <p>{ "Scoring your pack…" }</p>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="pack-screen">
            {content}
            {scoring_overlay}
        </div>
    }
}

#[allow(clippy::too_many_arguments)]
fn render_active_card(
    card: &Card,
    index: usize,
    user_flips: &[bool],
    dragging: bool,
    offset: (f64, f64),
    rotation: f64,
    exiting: Option<(f64, f64)>,
    score_label: String,
    on_mouse_down: Callback<MouseEvent>,
    on_touch_start: Callback<TouchEvent>,
) -> Html {
    let user_flipped = user_flips.get(index).copied().unwrap_or(false);
    let flipped = effective_flip(true, user_flipped);

    let (tx, ty, rot, transition) = if let Some((exit_x, exit_y)) = exiting {
        let exit_rot = if exit_x >= 0.0 {
            EXIT_ROTATION_DEG
        } else {
            -EXIT_ROTATION_DEG
        };
        (exit_x, exit_y, exit_rot, "transform 0.3s ease-out")
    } else if dragging {
        (offset.0, offset.1, rotation, "none")
    } else {
        (0.0, 0.0, 0.0, "transform 0.3s ease-out")
    };
    let style = format!(
        "transform: translate({tx:.1}px, {ty:.1}px) rotate({rot:.2}deg); transition: {transition};"
    );

    let hint = if dragging && offset.0.abs() > DRAG_HINT_MIN_PX {
        let strength = (offset.0.abs() / DRAG_HINT_FULL_PX).min(1.0);
        let (class, label) = if offset.0 > 0.0 {
            ("drag-hint drag-hint-like", "✓ LIKE")
        } else {
            ("drag-hint drag-hint-pass", "✗ PASS")
        };
        html! {
            <div class={class} style={format!("opacity: {strength:.2};")}>{ label }</div>
        }
    } else {
        html! {}
    };

    let face = if flipped {
        html! {
            <div class="card-face card-back">
                <div class="card-back-art">{ "💝" }</div>
                <h4>{ format!("Liking {}?", card.name) }</h4>
                <p>{ "Tap to flip back, swipe right to add them to your roster." }</p>
            </div>
        }
    } else {
        render_card_front(card, &score_label)
    };

    html! {
        <div
            key={card.id.clone()}
            class={classes!("swipe-card", rarity_class(card.rarity))}
            style={style}
            onmousedown={on_mouse_down}
            ontouchstart={on_touch_start}
        >
            {hint}
            {face}
        </div>
    }
}

fn render_card_front(card: &Card, score_label: &str) -> Html {
    html! {
        <div class="card-face card-front">
            <div class={classes!("rarity-badge", rarity_class(card.rarity))}>
                { card.rarity.label().to_uppercase() }
            </div>
            <div class="score-badge" title="beauty score">{ score_label }</div>
            <div class="card-portrait">
                <CardAvatar card={card.clone()} />
            </div>
            <div class="card-info">
                <h3>{ &card.name }</h3>
                <div class="card-age">{ format!("{} years old", card.age) }</div>
                <div class="card-line">{ &card.major }</div>
                <div class="card-line">{ &card.company }</div>
                <div class="card-line card-location">{ format!("📍 {}", card.location) }</div>
                <p class="card-bio">{ &card.bio }</p>
                <div class="card-interests">
                    { for card.interests.iter().map(|interest| html! {
                        <span class="interest-chip">{ interest }</span>
                    }) }
                </div>
                <div class="card-experience">
                    <span>{ "Experience" }</span>
                    <strong>{ &card.experience }</strong>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CardAvatarProps {
    pub(crate) card: Card,
}

/// Portrait with the initials fallback: a broken or missing image renders
/// the avatar circle with the profile's initials instead of an error state.
#[function_component(CardAvatar)]
pub(crate) fn card_avatar(props: &CardAvatarProps) -> Html {
    let broken = use_state(|| false);
    let on_error = {
        let broken = broken.clone();
        Callback::from(move |_: Event| broken.set(true))
    };
    match (&props.card.image, *broken) {
        (Some(src), false) => html! {
            <img
                class="avatar"
                src={src.clone()}
                alt={props.card.name.clone()}
                onerror={on_error}
            />
        },
        _ => html! {
            <div class={classes!("avatar", "avatar-initials", rarity_class(props.card.rarity))}>
                { props.card.initials() }
            </div>
        },
    }
}
