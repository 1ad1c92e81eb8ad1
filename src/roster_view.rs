use std::collections::HashMap;

use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use deiripakku_core::{Card, Roster};

use crate::api::{
    fetch_ai_overview, fetch_satirical_insights, fetch_social_profiles, AiOverview,
    SatiricalInsights, SocialProfiles,
};
use crate::model::{format_score, rarity_class};
use crate::pack_view::CardAvatar;
use crate::score_fetch::ScoreStore;

#[derive(Properties, PartialEq)]
pub(crate) struct RosterScreenProps {
    pub(crate) roster: Roster,
    pub(crate) scores: ScoreStore,
    pub(crate) on_remove: Callback<String>,
}

#[function_component(RosterScreen)]
pub(crate) fn roster_screen(props: &RosterScreenProps) -> Html {
    let expanded = use_state(|| None::<String>);
    let confirm_remove = use_state(|| None::<String>);
    let overviews = use_state(HashMap::<String, AiOverview>::new);
    let satirical = use_state(HashMap::<String, SatiricalInsights>::new);
    let socials = use_state(HashMap::<String, SocialProfiles>::new);
    let show_satirical = use_state(|| false);
    let loading_overview = use_state(|| false);
    let loading_satirical = use_state(|| false);
    let loading_socials = use_state(|| false);

    let on_expand = {
        let expanded = expanded.clone();
        let show_satirical = show_satirical.clone();
        Callback::from(move |id: String| {
            expanded.set(Some(id));
            show_satirical.set(false);
        })
    };
    let on_collapse = {
        let expanded = expanded.clone();
        let confirm_remove = confirm_remove.clone();
        Callback::from(move |_: MouseEvent| {
            expanded.set(None);
            confirm_remove.set(None);
        })
    };

    let request_overview = {
        let overviews = overviews.clone();
        let loading = loading_overview.clone();
        Callback::from(move |card: Card| {
            if overviews.contains_key(&card.id) || *loading {
                return;
            }
            loading.set(true);
            let overviews = overviews.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match fetch_ai_overview(&card).await {
                    Ok(overview) => {
                        let mut next = (*overviews).clone();
                        next.insert(card.id.clone(), overview);
                        overviews.set(next);
                    }
                    Err(err) => {
                        gloo::console::warn!(format!("ai overview failed: {err}"));
                    }
                }
                loading.set(false);
            });
        })
    };

    let request_satirical = {
        let satirical = satirical.clone();
        let loading = loading_satirical.clone();
        let show_satirical = show_satirical.clone();
        Callback::from(move |card: Card| {
            show_satirical.set(!*show_satirical);
            if satirical.contains_key(&card.id) || *loading {
                return;
            }
            loading.set(true);
            let satirical = satirical.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match fetch_satirical_insights(&card).await {
                    Ok(insights) => {
                        let mut next = (*satirical).clone();
                        next.insert(card.id.clone(), insights);
                        satirical.set(next);
                    }
                    Err(err) => {
                        gloo::console::warn!(format!("satirical insights failed: {err}"));
                    }
                }
                loading.set(false);
            });
        })
    };

    let request_socials = {
        let socials = socials.clone();
        let loading = loading_socials.clone();
        Callback::from(move |card: Card| {
            if socials.contains_key(&card.id) || *loading {
                return;
            }
            loading.set(true);
            let socials = socials.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match fetch_social_profiles(&card).await {
                    Ok(profiles) => {
                        let mut next = (*socials).clone();
                        next.insert(card.id.clone(), profiles);
                        socials.set(next);
                    }
                    Err(err) => {
                        gloo::console::warn!(format!("find socials failed: {err}"));
                    }
                }
                loading.set(false);
            });
        })
    };

    let count = props.roster.len();
    let subtitle = if count == 0 {
        "You haven't liked any cards yet. Swipe right on cards to add them here!".to_string()
    } else if count == 1 {
        "You have 1 card in your roster".to_string()
    } else {
        format!("You have {count} cards in your roster")
    };

    let expanded_view = expanded
        .as_ref()
        .and_then(|id| props.roster.get(id))
        .map(|card| {
            render_expanded_card(
                card,
                props,
                &overviews,
                &satirical,
                &socials,
                *show_satirical,
                (*loading_overview, *loading_satirical, *loading_socials),
                &confirm_remove,
                &request_overview,
                &request_satirical,
                &request_socials,
                on_collapse.clone(),
            )
        })
        .unwrap_or_default();

    html! {
        <div class="roster">
            <div class="roster-header">
                <h1>{ "Your Roster" }</h1>
                <p>{ subtitle }</p>
            </div>
            if count == 0 {
                <div class="roster-empty">
                    <div class="roster-empty-art">{ "💔" }</div>
                    <p>{ "No cards in your roster yet" }</p>
                </div>
            } else {
                <div class="roster-grid">
                    { for props.roster.cards().iter().map(|card| {
                        let id = card.id.clone();
                        let on_click = {
                            let on_expand = on_expand.clone();
                            Callback::from(move |_: MouseEvent| on_expand.emit(id.clone()))
                        };
                        html! {
                            <div
                                key={card.id.clone()}
                                class={classes!("roster-card", rarity_class(card.rarity))}
                                onclick={on_click}
                            >
                                <div class={classes!("rarity-badge", rarity_class(card.rarity))}>
                                    { card.rarity.label().to_uppercase() }
                                </div>
                                <div class="score-badge">
                                    { format_score(props.scores.slot(&card.id)) }
                                </div>
                                <div class="roster-card-portrait">
                                    <CardAvatar card={card.clone()} />
                                </div>
                                <h3>{ &card.name }</h3>
                                <div class="roster-card-line">{ &card.company }</div>
                            </div>
                        }
                    }) }
                </div>
            }
            { expanded_view }
        </div>
    }
}

#[allow(clippy::too_many_arguments)]
fn render_expanded_card(
    card: &Card,
    props: &RosterScreenProps,
    overviews: &HashMap<String, AiOverview>,
    satirical: &HashMap<String, SatiricalInsights>,
    socials: &HashMap<String, SocialProfiles>,
    show_satirical: bool,
    loading: (bool, bool, bool),
    confirm_remove: &UseStateHandle<Option<String>>,
    request_overview: &Callback<Card>,
    request_satirical: &Callback<Card>,
    request_socials: &Callback<Card>,
    on_collapse: Callback<MouseEvent>,
) -> Html {
    let (loading_overview, loading_satirical, loading_socials) = loading;

    let overview_button = {
        let request_overview = request_overview.clone();
        let card = card.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            request_overview.emit(card.clone());
        })
    };
    let satirical_button = {
        let request_satirical = request_satirical.clone();
        let card = card.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            request_satirical.emit(card.clone());
        })
    };
    let socials_button = {
        let request_socials = request_socials.clone();
        let card = card.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            request_socials.emit(card.clone());
        })
    };

    let remove_request = {
        let confirm_remove = confirm_remove.clone();
        let id = card.id.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            confirm_remove.set(Some(id.clone()));
        })
    };
    let remove_cancel = {
        let confirm_remove = confirm_remove.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            confirm_remove.set(None);
        })
    };
    let remove_confirm = {
        let confirm_remove = confirm_remove.clone();
        let on_remove = props.on_remove.clone();
        let id = card.id.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            confirm_remove.set(None);
            on_remove.emit(id.clone());
        })
    };
    let stop_click = Callback::from(|event: MouseEvent| event.stop_propagation());

    let overview_section = match overviews.get(&card.id) {
        Some(overview) => html! {
            <div class="expanded-section overview-section">
                <h4>{ "✨ AI Overview" }</h4>
                <p>{ &overview.summary }</p>
                <h5>{ "Personality" }</h5>
                <p>{ &overview.personality_insights }</p>
                <h5>{ "Compatibility" }</h5>
                <p>{ &overview.compatibility_notes }</p>
                <h5>{ "Conversation starters" }</h5>
                <ul>
                    { for overview.conversation_starters.iter().map(|starter| html! {
                        <li>{ starter }</li>
                    }) }
                </ul>
            </div>
        },
        None => html! {
            <button class="expanded-action" onclick={overview_button} disabled={loading_overview}>
                { if loading_overview { "✨ Thinking…" } else { "✨ AI Overview" } }
            </button>
        },
    };

    let satirical_section = html! {
        <>
            <button class="expanded-action" onclick={satirical_button} disabled={loading_satirical}>
                { if loading_satirical { "🎭 Sharpening the roast…" } else { "🎭 Satirical take" } }
            </button>
            if show_satirical {
                if let Some(insights) = satirical.get(&card.id) {
                    <div class="expanded-section satirical-section">
                        <ul>
                            { for insights.insights.iter().map(|insight| html! {
                                <li>{ insight }</li>
                            }) }
                        </ul>
                    </div>
                }
            }
        </>
    };

    let socials_section = match socials.get(&card.id) {
        Some(found) if !found.profiles.is_empty() => html! {
            <div class="expanded-section socials-section">
                <h4>{ "Potential Social Profiles" }</h4>
                <p class="socials-note">{ "Note: these are educated guesses based on name patterns" }</p>
                { for found.profiles.iter().map(|profile| html! {
                    <a
                        class="social-link"
                        href={profile.url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        onclick={stop_click.clone()}
                    >
                        <span class="social-platform">{ &profile.platform }</span>
                        <span class={classes!("social-confidence", format!("confidence-{}", profile.confidence))}>
                            { format!("{} confidence", profile.confidence) }
                        </span>
                        <span class="social-url">{ &profile.url }</span>
                    </a>
                }) }
            </div>
        },
        Some(_) => html! { <p class="socials-none">{ "No likely profiles found." }</p> },
        None => {
            let first_name = card.name.split_whitespace().next().unwrap_or("them").to_string();
            html! {
                <button class="expanded-action" onclick={socials_button} disabled={loading_socials}>
                    { if loading_socials {
                        "🔍 Searching…".to_string()
                    } else {
                        format!("🌐 More ways to reach {first_name}")
                    } }
                </button>
            }
        }
    };

    let remove_section = if confirm_remove.as_deref() == Some(card.id.as_str()) {
        html! {
            <div class="remove-confirm">
                <p>{ format!("Remove {} from your roster?", card.name) }</p>
                <button class="remove-yes" onclick={remove_confirm}>{ "Yes, remove" }</button>
                <button class="remove-no" onclick={remove_cancel}>{ "Keep" }</button>
            </div>
        }
    } else {
        html! {
            <button class="expanded-action remove-action" onclick={remove_request}>
                { "🗑 Remove from roster" }
            </button>
        }
    };

    html! {
        <div class="expanded-backdrop" onclick={on_collapse.clone()}>
            <div class={classes!("expanded-card", rarity_class(card.rarity))} onclick={stop_click.clone()}>
                <button class="expanded-close" onclick={on_collapse}>{ "✕" }</button>
                <div class={classes!("rarity-badge", rarity_class(card.rarity))}>
                    { card.rarity.label().to_uppercase() }
                </div>
                <div class="score-badge">{ format_score(props.scores.slot(&card.id)) }</div>
                <div class="expanded-portrait">
                    <CardAvatar card={card.clone()} />
                </div>
                <h3>{ &card.name }</h3>
                <div class="expanded-line">{ format!("{} · {}", card.major, card.company) }</div>
                <div class="expanded-line">{ format!("📍 {}", card.location) }</div>
                <p class="expanded-bio">{ &card.bio }</p>
                <div class="card-interests">
                    { for card.interests.iter().map(|interest| html! {
                        <span class="interest-chip">{ interest }</span>
                    }) }
                </div>
                { overview_section }
                { satirical_section }
                { socials_section }
                { remove_section }
            </div>
        </div>
    }
}
