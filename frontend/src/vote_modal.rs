use shared::VoteChoice;
use yew::prelude::*;
use crate::{actions, state::{AppContext, Msg}, styles::*};

#[function_component(VoteModal)]
pub fn vote_modal() -> Html {
    let state = use_context::<AppContext>().expect("app state context");

    let Some(department) = state.selected.clone() else {
        return html! {};
    };

    let close = {
        let dispatcher = state.dispatcher();
        let loading = state.loading;
        Callback::from(move |_: MouseEvent| {
            if !loading {
                dispatcher.dispatch(Msg::CloseModal);
            }
        })
    };

    let on_overlay = {
        let close = close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                close.emit(e);
            }
        })
    };

    let vote_button = |choice: VoteChoice, variant: &str, icon: &str| {
        let onclick = {
            let dispatcher = state.dispatcher();
            let department = department.clone();
            Callback::from(move |_: MouseEvent| {
                actions::submit_vote(dispatcher.clone(), department.clone(), choice);
            })
        };
        html! {
            <button class={combine_classes(VOTE_BUTTON, variant)} {onclick} disabled={state.loading}>
                <span class="text-5xl">{icon.to_string()}</span>
                <span class="font-bold text-xl">
                    {if state.loading { "Saving..." } else { choice.label() }}
                </span>
            </button>
        }
    };

    html! {
        <div class={MODAL_OVERLAY} onclick={on_overlay}>
            <div class={MODAL}>
                <button class="absolute top-4 right-4 text-gray-400 hover:text-gray-200 text-2xl"
                    onclick={close} disabled={state.loading}>
                    {"×"}
                </button>
                <div class="text-center">
                    <h2 class="text-3xl font-bold text-gray-100 mb-2">{&department}</h2>
                    <p class="text-gray-400 mb-8">{"How was your experience?"}</p>
                    <div class="flex gap-4 justify-center">
                        {vote_button(VoteChoice::Like, "bg-green-600 hover:bg-green-700", "👍")}
                        {vote_button(VoteChoice::Dislike, "bg-red-600 hover:bg-red-700", "👎")}
                    </div>
                </div>
            </div>
        </div>
    }
}
