use yew::prelude::*;
use yew_router::prelude::*;
use crate::{
    connection::{ConnectionBadge, StatusLine},
    department_upload::DepartmentUpload,
    state::{AppContext, Msg},
    styles::*,
    Route,
};

#[function_component(VotingPage)]
pub fn voting_page() -> Html {
    let state = use_context::<AppContext>().expect("app state context");

    let departments = state.board.stats().into_iter().map(|(dept, stats)| {
        let onclick = {
            let dispatcher = state.dispatcher();
            let dept = dept.clone();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(Msg::Select(dept.clone())))
        };

        html! {
            <button class={DEPT_BUTTON} {onclick} disabled={state.loading}>
                <div class="text-2xl mb-2">{&dept}</div>
                {if stats.total > 0 {
                    html! { <div class={DEPT_BADGE}>{format!("{} votes", stats.total)}</div> }
                } else { html! {} }}
            </button>
        }
    }).collect::<Html>();

    html! {
        <div class={CONTAINER}>
            <div class="text-center mb-8">
                <div class="flex items-center justify-center gap-3 mb-4">
                    <h1 class={HEADING_LG}>{"Department Feedback"}</h1>
                    <ConnectionBadge />
                </div>
                <p class={TEXT_MUTED}>{"Pick a department to leave your feedback"}</p>
            </div>

            <div class={DEPT_GRID}>{departments}</div>

            <StatusLine />

            <div class="mt-8 text-center text-gray-300">
                {"Total votes: "}
                <span class="font-bold text-blue-400">{state.board.total_votes()}</span>
            </div>

            <hr class="my-8 border-gray-700" />

            <div class={ACTIONS_ROW}>
                <Link<Route> to={Route::Results} classes={classes!(button(BUTTON_PRIMARY))}>
                    {"View results"}
                </Link<Route>>
                <DepartmentUpload />
            </div>
        </div>
    }
}
