use yew::prelude::*;
use yew_router::prelude::*;

mod actions;
mod api;
mod browser;
mod config;
mod connection;
mod department_upload;
mod realtime;
mod results;
mod state;
mod styles;
mod vote_modal;
mod voting;

use crate::{
    results::ResultsPage,
    state::{AppContext, AppState},
    styles::*,
    vote_modal::VoteModal,
    voting::VotingPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Voting,
    #[at("/results")] Results,
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(Navigation)]
fn navigation() -> Html {
    let current_route = use_route::<Route>();

    let link = |route: Route, label: &'static str| {
        let active = current_route.as_ref() == Some(&route);
        html! {
            <Link<Route> to={route} classes={classes!(
                "text-base", "md:text-lg", "font-medium", "px-4", "py-2", "rounded-md",
                "transition-colors", "duration-200", "ease-in-out",
                "text-gray-200", "border", "border-transparent", "hover:border-blue-400", "hover:text-blue-400",
                if active {
                    "text-blue-400 border-blue-400 ring-2 ring-blue-500 ring-offset-1 ring-offset-gray-900"
                } else {
                    ""
                }
            )}>
                {label}
            </Link<Route>>
        }
    };

    html! {
        <nav class="bg-gray-900 shadow-lg fixed top-0 w-full z-40">
            <div class="container mx-auto px-6 py-4 flex justify-center space-x-8">
                {link(Route::Voting, "Vote")}
                {link(Route::Results, "Results")}
            </div>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    let state = use_reducer(|| AppState::with_departments(browser::load_departments()));

    use_effect_with_deps({
        let dispatcher = state.dispatcher();
        move |_| {
            actions::load_votes(dispatcher.clone());
            let channel = realtime::connect(Callback::from(move |event: realtime::ChannelEvent| {
                actions::on_channel_event(&dispatcher, event);
            }));

            move || {
                if let Some(handle) = channel {
                    handle.abort();
                }
            }
        }
    }, ());

    html! {
        <ContextProvider<AppContext> context={state}>
            <BrowserRouter>
                <div class="min-h-screen bg-gray-900">
                    <Navigation />
                    <div class="pt-16">
                        <Switch<Route> render={switch} />
                    </div>
                    <VoteModal />
                </div>
            </BrowserRouter>
        </ContextProvider<AppContext>>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Voting => html! { <VotingPage /> },
        Route::Results => html! { <ResultsPage /> },
        Route::NotFound => html! {
            <div class={CONTAINER}>
                <div class={alert_style("error")}>
                    <p>{"Page not found"}</p>
                    <Link<Route> to={Route::Voting} classes={classes!(button(BUTTON_PRIMARY), "mt-4")}>
                        {"Back to voting"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    wasm_bindgen_futures::spawn_local(async {
        config::load().await;
        yew::Renderer::<App>::new().render();
    });
}
