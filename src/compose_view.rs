use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlSelectElement, HtmlTextAreaElement, InputEvent, MouseEvent};
use yew::prelude::*;

use deiripakku_core::Roster;

use crate::api::draft_message;

const TONES: &[(&str, &str)] = &[
    ("flirty", "😏 Flirty"),
    ("polite", "🤝 Polite"),
    ("direct", "🎯 Direct"),
    ("professional", "💼 Professional"),
    ("casual", "😊 Casual"),
    ("witty", "🎭 Witty"),
];

const MESSAGE_TYPES: &[(&str, &str, &str)] = &[
    ("cold_dm", "Cold DM", "First message to someone new"),
    ("warm_dm", "Warm DM", "Message after matching"),
    ("follow_up", "Follow-up", "Continue conversation"),
];

#[derive(Properties, PartialEq)]
pub(crate) struct ComposerScreenProps {
    pub(crate) roster: Roster,
}

#[function_component(ComposerScreen)]
pub(crate) fn composer_screen(props: &ComposerScreenProps) -> Html {
    let recipient = use_state(|| None::<String>);
    let tone = use_state(|| "flirty".to_string());
    let message_type = use_state(|| "cold_dm".to_string());
    let context = use_state(String::new);
    let generated = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_recipient = {
        let recipient = recipient.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            let value = select.value();
            recipient.set((!value.is_empty()).then_some(value));
        })
    };

    let pick_tone = {
        let tone = tone.clone();
        Callback::from(move |value: String| tone.set(value))
    };
    let pick_type = {
        let message_type = message_type.clone();
        Callback::from(move |value: String| message_type.set(value))
    };

    let on_context = {
        let context = context.clone();
        Callback::from(move |event: InputEvent| {
            let Some(area) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlTextAreaElement>().ok())
            else {
                return;
            };
            context.set(area.value());
        })
    };

    let on_generate = {
        let roster = props.roster.clone();
        let recipient = recipient.clone();
        let tone = tone.clone();
        let message_type = message_type.clone();
        let context = context.clone();
        let generated = generated.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |_: MouseEvent| {
            if *loading {
                return;
            }
            let Some(card) = recipient.as_ref().and_then(|id| roster.get(id)).cloned() else {
                error.set(Some("Please select a person from your roster".to_string()));
                return;
            };
            loading.set(true);
            error.set(None);
            generated.set(None);

            let tone_value = (*tone).clone();
            let type_value = (*message_type).clone();
            let context_value = context.trim().to_string();
            let context_value = (!context_value.is_empty()).then_some(context_value);
            let generated = generated.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match draft_message(&card, &tone_value, &type_value, context_value).await {
                    Ok(drafted) => generated.set(Some(drafted.message)),
                    Err(err) => {
                        error.set(Some(format!("Failed to generate message ({err})")));
                    }
                }
                loading.set(false);
            });
        })
    };

    let result = if let Some(message) = generated.as_ref() {
        html! {
            <div class="composer-result">
                <h3>{ "Your draft" }</h3>
                <p class="composer-message">{ message }</p>
                <p class="composer-tip">
                    { "💡 Personalize this message before sending! Add specific \
                       details or adjust the tone to match your style." }
                </p>
            </div>
        }
    } else {
        html! {
            <div class="composer-placeholder">
                <p>{ "Select a person, choose your tone, and hit generate!" }</p>
            </div>
        }
    };

    html! {
        <div class="composer">
            <h1>{ "AI Message Composer" }</h1>

            <div class="composer-section">
                <label for="composer-recipient">{ "Recipient" }</label>
                <select id="composer-recipient" onchange={on_recipient}>
                    <option value="" selected={recipient.is_none()}>
                        { "Choose from your roster..." }
                    </option>
                    { for props.roster.cards().iter().map(|card| html! {
                        <option
                            value={card.id.clone()}
                            selected={recipient.as_deref() == Some(card.id.as_str())}
                        >
                            { format!("{} — {}", card.name, card.company) }
                        </option>
                    }) }
                </select>
            </div>

            <div class="composer-section">
                <label>{ "Tone" }</label>
                <div class="composer-options">
                    { for TONES.iter().map(|(value, label)| {
                        let on_click = {
                            let pick_tone = pick_tone.clone();
                            let value = value.to_string();
                            Callback::from(move |_: MouseEvent| pick_tone.emit(value.clone()))
                        };
                        html! {
                            <button
                                class={classes!("composer-option", (*tone == *value).then_some("selected"))}
                                onclick={on_click}
                            >
                                { label }
                            </button>
                        }
                    }) }
                </div>
            </div>

            <div class="composer-section">
                <label>{ "Message type" }</label>
                <div class="composer-options">
                    { for MESSAGE_TYPES.iter().map(|(value, label, description)| {
                        let on_click = {
                            let pick_type = pick_type.clone();
                            let value = value.to_string();
                            Callback::from(move |_: MouseEvent| pick_type.emit(value.clone()))
                        };
                        html! {
                            <button
                                class={classes!("composer-option", (*message_type == *value).then_some("selected"))}
                                onclick={on_click}
                                title={*description}
                            >
                                { label }
                            </button>
                        }
                    }) }
                </div>
            </div>

            <div class="composer-section">
                <label for="composer-context">{ "Context (optional)" }</label>
                <textarea
                    id="composer-context"
                    placeholder="Anything the message should mention?"
                    value={(*context).clone()}
                    oninput={on_context}
                />
            </div>

            if let Some(message) = error.as_ref() {
                <p class="composer-error">{ message }</p>
            }

            <button class="composer-generate" onclick={on_generate} disabled={*loading}>
                { if *loading { "Drafting…" } else { "Generate message" } }
            </button>

            { result }
        </div>
    }
}
