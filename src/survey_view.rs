use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::model::SurveyAnswers;

const INTEREST_OPTIONS: &[&str] = &[
    "Tech",
    "Design",
    "Finance",
    "Medicine",
    "Music",
    "Travel",
    "Fitness",
    "Food",
    "Space",
    "Gaming",
];

const LOOKING_FOR_OPTIONS: &[&str] = &["Relationship", "Friendship", "Networking", "Whatever happens"];

#[derive(Properties, PartialEq)]
pub(crate) struct SurveyScreenProps {
    pub(crate) on_complete: Callback<SurveyAnswers>,
}

#[function_component(SurveyScreen)]
pub(crate) fn survey_screen(props: &SurveyScreenProps) -> Html {
    let looking_for = use_state(|| LOOKING_FOR_OPTIONS[0].to_string());
    let interests = use_state(Vec::<String>::new);
    let age_min = use_state(|| 21u32);
    let age_max = use_state(|| 35u32);

    let on_looking_for = {
        let looking_for = looking_for.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            looking_for.set(select.value());
        })
    };

    let toggle_interest = {
        let interests = interests.clone();
        Callback::from(move |interest: String| {
            let mut next = (*interests).clone();
            if let Some(position) = next.iter().position(|entry| entry == &interest) {
                next.remove(position);
            } else {
                next.push(interest);
            }
            interests.set(next);
        })
    };

    let on_age = |handle: UseStateHandle<u32>, fallback: u32| {
        Callback::from(move |event: Event| {
            let Some(input) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            handle.set(input.value().trim().parse().unwrap_or(fallback));
        })
    };
    let on_age_min = on_age(age_min.clone(), 21);
    let on_age_max = on_age(age_max.clone(), 35);

    let on_submit = {
        let looking_for = looking_for.clone();
        let interests = interests.clone();
        let age_min = age_min.clone();
        let age_max = age_max.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |_: MouseEvent| {
            let low = (*age_min).min(*age_max);
            let high = (*age_min).max(*age_max);
            on_complete.emit(SurveyAnswers {
                looking_for: (*looking_for).clone(),
                interests: (*interests).clone(),
                age_min: low,
                age_max: high,
            });
        })
    };

    html! {
        <div class="survey">
            <h1>{ "Tell us what you're into" }</h1>
            <p class="survey-sub">{ "Your answers shape tomorrow's packs." }</p>

            <div class="survey-section">
                <label for="looking-for">{ "Looking for" }</label>
                <select id="looking-for" onchange={on_looking_for}>
                    { for LOOKING_FOR_OPTIONS.iter().map(|option| html! {
                        <option value={*option} selected={*looking_for == *option}>
                            { option }
                        </option>
                    }) }
                </select>
            </div>

            <div class="survey-section">
                <label>{ "Interests" }</label>
                <div class="survey-chips">
                    { for INTEREST_OPTIONS.iter().map(|option| {
                        let selected = interests.iter().any(|entry| entry == option);
                        let toggle = {
                            let toggle_interest = toggle_interest.clone();
                            let option = option.to_string();
                            Callback::from(move |_: MouseEvent| toggle_interest.emit(option.clone()))
                        };
                        html! {
                            <button
                                class={classes!("survey-chip", selected.then_some("selected"))}
                                onclick={toggle}
                            >
                                { option }
                            </button>
                        }
                    }) }
                </div>
            </div>

            <div class="survey-section survey-ages">
                <label>{ "Age range" }</label>
                <input type="number" min="18" max="99" value={age_min.to_string()} onchange={on_age_min} />
                <span>{ "to" }</span>
                <input type="number" min="18" max="99" value={age_max.to_string()} onchange={on_age_max} />
            </div>

            <button class="survey-submit" onclick={on_submit}>
                { "Save & open your pack" }
            </button>
        </div>
    }
}
