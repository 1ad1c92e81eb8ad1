mod api;
mod compose_view;
mod input;
mod landing_view;
mod model;
mod pack_view;
mod persisted;
mod roster_view;
mod score_fetch;
mod survey_view;

use web_sys::MouseEvent;
use yew::prelude::*;

use deiripakku_core::{Card, Roster, ScoreBoard};

use compose_view::ComposerScreen;
use landing_view::LandingScreen;
use model::{SurveyAnswers, Tab, NAV_TABS};
use pack_view::PackScreen;
use roster_view::RosterScreen;
use score_fetch::ScoreStore;
use survey_view::SurveyScreen;

#[function_component(App)]
fn app() -> Html {
    let tab = use_state(|| Tab::Landing);
    let roster = use_state(Roster::default);
    let survey = use_state(|| None::<SurveyAnswers>);
    let score_board = use_mut_ref(ScoreBoard::default);
    let score_version = use_state(|| 0u64);
    let scores = ScoreStore::new(score_board, score_version);

    let on_card_liked = {
        let roster = roster.clone();
        Callback::from(move |card: Card| {
            let mut next = (*roster).clone();
            if next.add(card) {
                roster.set(next);
            }
        })
    };

    let on_remove = {
        let roster = roster.clone();
        Callback::from(move |id: String| {
            let mut next = (*roster).clone();
            if next.remove(&id) {
                roster.set(next);
            }
        })
    };

    let on_start = {
        let tab = tab.clone();
        Callback::from(move |_| tab.set(Tab::Survey))
    };

    let on_survey_complete = {
        let tab = tab.clone();
        let survey = survey.clone();
        Callback::from(move |answers: SurveyAnswers| {
            survey.set(Some(answers));
            tab.set(Tab::Pack);
        })
    };

    let nav = html! {
        <nav class="tab-bar">
            { for NAV_TABS.iter().map(|entry| {
                let on_click = {
                    let tab = tab.clone();
                    let entry = *entry;
                    Callback::from(move |_: MouseEvent| tab.set(entry))
                };
                let badge = (*entry == Tab::Roster && !roster.is_empty())
                    .then(|| html! { <span class="tab-badge">{ roster.len() }</span> });
                html! {
                    <button
                        class={classes!("tab-button", (*tab == *entry).then_some("active"))}
                        onclick={on_click}
                    >
                        { entry.label() }
                        { badge.unwrap_or_default() }
                    </button>
                }
            }) }
        </nav>
    };

    let screen = match *tab {
        Tab::Landing => html! { <LandingScreen on_start={on_start} /> },
        Tab::Survey => html! { <SurveyScreen on_complete={on_survey_complete} /> },
        Tab::Pack => html! {
            <PackScreen scores={scores.clone()} on_card_liked={on_card_liked} />
        },
        Tab::Roster => html! {
            <RosterScreen
                roster={(*roster).clone()}
                scores={scores.clone()}
                on_remove={on_remove}
            />
        },
        Tab::Composer => html! { <ComposerScreen roster={(*roster).clone()} /> },
    };

    let survey_note = survey
        .as_ref()
        .filter(|answers| !answers.interests.is_empty() && *tab == Tab::Pack)
        .map(|answers| {
            html! {
                <p class="survey-note">
                    { format!("Matching on: {}", answers.interests.join(", ")) }
                </p>
            }
        })
        .unwrap_or_default();

    html! {
        <main class="app">
            { nav }
            { survey_note }
            { screen }
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
