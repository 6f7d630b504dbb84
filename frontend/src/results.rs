use shared::DepartmentStats;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::{
    actions,
    connection::{ConnectionBadge, StatusLine},
    state::AppContext,
    styles::*,
    Route,
};

fn render_totals(totals: &DepartmentStats) -> Html {
    html! {
        <div class={combine_classes(CARD, "mb-8")}>
            <div class={STATS_GRID}>
                <div class="p-4">
                    <div class="text-3xl font-bold text-blue-400">{totals.total}</div>
                    <div class={TEXT_MUTED}>{"Total votes"}</div>
                </div>
                <div class="p-4">
                    <div class="text-3xl font-bold text-green-400">{totals.likes}</div>
                    <div class={TEXT_MUTED}>{"👍 Like"}</div>
                </div>
                <div class="p-4">
                    <div class="text-3xl font-bold text-red-400">{totals.dislikes}</div>
                    <div class={TEXT_MUTED}>{"👎 Dislike"}</div>
                </div>
            </div>
        </div>
    }
}

fn render_department(department: &str, stats: &DepartmentStats) -> Html {
    html! {
        <div class={CARD_SECTION}>
            <h3 class={HEADING_SM}>{department}</h3>
            <div class="space-y-3">
                <div class={FLEX_BETWEEN}>
                    <span class="text-green-400">{"👍 Like"}</span>
                    <span class="font-bold text-xl text-gray-100">{stats.likes}</span>
                </div>
                <div class={PROGRESS_TRACK}>
                    <div class={PROGRESS_LIKE} style={bar_width(stats.like_percent())} />
                </div>
                <div class={FLEX_BETWEEN}>
                    <span class="text-red-400">{"👎 Dislike"}</span>
                    <span class="font-bold text-xl text-gray-100">{stats.dislikes}</span>
                </div>
                <div class={PROGRESS_TRACK}>
                    <div class={PROGRESS_DISLIKE} style={bar_width(stats.dislike_percent())} />
                </div>
                <div class="pt-2 border-t border-gray-700 text-center">
                    <span class={TEXT_MUTED}>
                        {"Total: "}<span class="font-bold text-gray-200">{stats.total}</span>{" votes"}
                    </span>
                </div>
            </div>
        </div>
    }
}

#[function_component(ResultsPage)]
pub fn results_page() -> Html {
    let state = use_context::<AppContext>().expect("app state context");

    let on_export = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| actions::export_csv(dispatcher.clone()))
    };
    let on_clear = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| actions::clear_votes(dispatcher.clone()))
    };
    let departments = state.board.stats();

    html! {
        <div class={CONTAINER}>
            <div class="text-center mb-8">
                <div class="flex items-center justify-center gap-3 mb-2">
                    <h1 class={HEADING_LG}>{"📊 Results"}</h1>
                    <ConnectionBadge live_label="Live" show_offline={false} />
                </div>
                <p class={TEXT_MUTED}>{"Feedback summary, updated automatically"}</p>
            </div>

            <div class={ACTIONS_ROW}>
                <Link<Route> to={Route::Voting} classes={classes!(button(BUTTON_PRIMARY))}>
                    {"Back to voting"}
                </Link<Route>>
                <button class={button(BUTTON_SUCCESS)} onclick={on_export}>{"Download CSV"}</button>
                <button class={button(BUTTON_DANGER)} onclick={on_clear}>{"Clear all votes"}</button>
            </div>

            <StatusLine />

            {render_totals(&state.board.totals())}

            <div class={CARD}>
                <h2 class={HEADING_MD}>{"By department"}</h2>
                <div class={RESULTS_GRID}>
                    {for departments.iter().map(|(dept, stats)| render_department(dept, stats))}
                </div>
            </div>
        </div>
    }
}
