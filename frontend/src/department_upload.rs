use web_sys::HtmlInputElement;
use yew::prelude::*;
use shared::departments::ACCEPTED_EXTENSIONS;
use crate::{actions, state::AppContext, styles::*};

#[function_component(DepartmentUpload)]
pub fn department_upload() -> Html {
    let state = use_context::<AppContext>().expect("app state context");

    let onchange = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                actions::ingest_department_file(dispatcher.clone(), file);
            }
            // lets the same file be picked again
            input.set_value("");
        })
    };

    let on_template = Callback::from(|_: MouseEvent| actions::download_template());

    html! {
        <>
            <label class={button(BUTTON_UPLOAD)}>
                {"Load department list"}
                <input type="file" accept={ACCEPTED_EXTENSIONS} class="hidden" {onchange} />
            </label>
            <button class={combine_classes(&button(BUTTON_MUTED), "text-sm")} onclick={on_template}>
                {"Download template"}
            </button>
        </>
    }
}
