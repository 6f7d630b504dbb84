use yew::prelude::*;
use crate::state::AppContext;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or("Real-time".into())]
    pub live_label: AttrValue,
    #[prop_or(true)]
    pub show_offline: bool,
}

#[function_component(ConnectionBadge)]
pub fn connection_badge(props: &BadgeProps) -> Html {
    let state = use_context::<AppContext>().expect("app state context");

    match (state.connected, props.show_offline) {
        (true, _) => html! {
            <div class={BADGE_LIVE}>{"● "}{props.live_label.clone()}</div>
        },
        (false, true) => html! {
            <div class={BADGE_OFFLINE}>{"○ Offline"}</div>
        },
        (false, false) => html! {},
    }
}

#[function_component(StatusLine)]
pub fn status_line() -> Html {
    let state = use_context::<AppContext>().expect("app state context");

    match &state.status {
        Some(status) => html! {
            <div class="flex justify-center mt-6">
                <p class={alert_style(status.tone.style())}>{&status.text}</p>
            </div>
        },
        None => html! {},
    }
}
