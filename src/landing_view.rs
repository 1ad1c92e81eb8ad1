use web_sys::MouseEvent;
use yew::prelude::*;

use deiripakku_core::profile_by_id;

use crate::pack_view::CardAvatar;

#[derive(Properties, PartialEq)]
pub(crate) struct LandingScreenProps {
    pub(crate) on_start: Callback<()>,
}

#[function_component(LandingScreen)]
pub(crate) fn landing_screen(props: &LandingScreenProps) -> Html {
    let flipped = use_state(|| false);
    let on_flip = {
        let flipped = flipped.clone();
        Callback::from(move |_: MouseEvent| flipped.set(!*flipped))
    };
    let on_start = {
        let on_start = props.on_start.clone();
        Callback::from(move |_: MouseEvent| on_start.emit(()))
    };

    let demo = profile_by_id("george-liu").map(|entry| entry.to_card());
    let demo_card = match demo {
        Some(card) => {
            let face = if *flipped {
                html! {
                    <div class="demo-card-face demo-card-back">
                        <div class="demo-card-art">{ "💝" }</div>
                        <h4>{ "Want to connect?" }</h4>
                        <p>{ format!(
                            "Open your daily pack to see if {} is one of your 5 matches today!",
                            card.name
                        ) }</p>
                    </div>
                }
            } else {
                html! {
                    <div class="demo-card-face demo-card-front">
                        <div class="demo-card-portrait">
                            <CardAvatar card={card.clone()} />
                        </div>
                        <h3>{ &card.name }</h3>
                        <div class="demo-card-line">{ &card.major }</div>
                        <div class="demo-card-line">{ &card.company }</div>
                    </div>
                }
            };
            html! {
                <div class="demo-card" onclick={on_flip}>
                    {face}
                    <div class="demo-card-hint">{ "Click to flip card" }</div>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <div class="landing">
            <div class="landing-copy">
                <h1>{ "Swipe Less," }<br />{ "Connect More" }</h1>
                <p>
                    { "Quality over quantity. Get 5 meaningful matches daily \
                       based on your interests, major, and goals." }
                </p>
                <button class="landing-cta" onclick={on_start}>
                    { "Get Started" }
                </button>
                <div class="landing-stats">
                    <div><strong>{ "10K+" }</strong><span>{ "Active Users" }</span></div>
                    <div><strong>{ "50K+" }</strong><span>{ "Matches Made" }</span></div>
                    <div><strong>{ "4.9★" }</strong><span>{ "User Rating" }</span></div>
                </div>
            </div>
            <div class="landing-demo">{ demo_card }</div>
        </div>
    }
}
