use gloo_timers::callback::Timeout;
use shared::{
    department_template, export_file_name, parse_department_file, ServerEvent, VoteChoice,
    VoteRecord, TEMPLATE_FILE_NAME,
};
use time::OffsetDateTime;
use tracing::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::functional::UseReducerDispatcher;
use crate::{
    api, browser,
    realtime::ChannelEvent,
    state::{AppState, Msg, StatusMessage, Tone},
};

pub type Dispatcher = UseReducerDispatcher<AppState>;

// Cleared after the tone's lifetime unless a newer message replaced it.
pub fn flash(dispatcher: &Dispatcher, tone: Tone, text: impl Into<String>) {
    let status = StatusMessage::new(tone, text);
    let id = status.id;
    dispatcher.dispatch(Msg::Status(status));

    let dispatcher = dispatcher.clone();
    Timeout::new(tone.lifetime_ms(), move || dispatcher.dispatch(Msg::ClearStatus(id))).forget();
}

pub fn announce(dispatcher: &Dispatcher, tone: Tone, text: impl Into<String>) {
    dispatcher.dispatch(Msg::Status(StatusMessage::new(tone, text)));
}

pub fn load_votes(dispatcher: Dispatcher) {
    dispatcher.dispatch(Msg::Loading(true));
    announce(&dispatcher, Tone::Info, "Loading...");

    spawn_local(async move {
        match api::list_votes().await {
            Ok(votes) => {
                dispatcher.dispatch(Msg::VotesLoaded(votes));
                flash(&dispatcher, Tone::Success, "✓ Votes loaded");
            }
            Err(e) if e.is_network() => {
                error!("loading votes failed: {}", e);
                flash(&dispatcher, Tone::Error, "✗ Server unreachable, is it running?");
            }
            Err(e) => {
                error!("loading votes failed: {}", e);
                flash(&dispatcher, Tone::Warning, "⚠ Could not load votes");
            }
        }
        dispatcher.dispatch(Msg::Loading(false));
    });
}

pub fn submit_vote(dispatcher: Dispatcher, department: String, choice: VoteChoice) {
    let record = VoteRecord::new(department, choice);
    dispatcher.dispatch(Msg::Loading(true));

    spawn_local(async move {
        match api::submit_vote(&record).await {
            Ok(()) => flash(&dispatcher, Tone::Success, "✓ Vote saved"),
            Err(e) => {
                error!("submitting vote failed: {}", e);
                flash(&dispatcher, Tone::Error, "✗ Saving vote failed");
            }
        }
        dispatcher.dispatch(Msg::Loading(false));
        dispatcher.dispatch(Msg::CloseModal);
    });
}

pub fn clear_votes(dispatcher: Dispatcher) {
    if !browser::confirm("Delete every vote? This cannot be undone.") {
        return;
    }

    spawn_local(async move {
        match api::clear_votes().await {
            Ok(()) => flash(&dispatcher, Tone::Success, "✓ All votes cleared"),
            Err(e) => {
                error!("clearing votes failed: {}", e);
                flash(&dispatcher, Tone::Error, "✗ Clearing votes failed");
            }
        }
    });
}

pub fn export_csv(dispatcher: Dispatcher) {
    spawn_local(async move {
        let file_name = export_file_name(OffsetDateTime::now_utc().date());
        let outcome = match api::export_csv().await {
            Ok(bytes) => browser::download(&bytes, &file_name, "text/csv"),
            Err(e) => Err(e),
        };
        match outcome {
            Ok(()) => flash(&dispatcher, Tone::Success, "✓ Download started"),
            Err(e) => {
                error!("export failed: {}", e);
                flash(&dispatcher, Tone::Error, "✗ Download failed");
            }
        }
    });
}

pub fn download_template() {
    if let Err(e) = browser::download(department_template().as_bytes(), TEMPLATE_FILE_NAME, "application/json") {
        error!("template download failed: {}", e);
    }
}

pub fn ingest_department_file(dispatcher: Dispatcher, file: File) {
    spawn_local(async move {
        let content = match browser::read_file(&file).await {
            Ok(content) => content,
            Err(e) => {
                browser::alert(&format!("Could not read the file: {}", e));
                return;
            }
        };

        let departments = match parse_department_file(&file.name(), &content) {
            Ok(departments) => departments,
            Err(e) => {
                warn!("rejected department file {}: {}", file.name(), e);
                browser::alert(&format!("Invalid department file: {}", e));
                return;
            }
        };

        info!("loaded {} departments from {}", departments.len(), file.name());
        dispatcher.dispatch(Msg::DepartmentsReplaced(departments.clone()));
        if let Err(e) = browser::save_departments(&departments) {
            warn!("caching departments failed: {}", e);
        }

        match api::upload_departments(&departments).await {
            Ok(reply) => {
                let text = reply.message
                    .unwrap_or_else(|| format!("Loaded {} departments", departments.len()));
                flash(&dispatcher, Tone::Success, format!("✓ {}", text));
            }
            Err(e) if e.is_network() => {
                error!("uploading departments failed: {}", e);
                flash(&dispatcher, Tone::Warning, "⚠ Departments loaded locally but not synced to the server");
            }
            Err(e) => {
                error!("uploading departments failed: {}", e);
                flash(&dispatcher, Tone::Error, "✗ Department upload failed");
            }
        }
    });
}

pub fn on_channel_event(dispatcher: &Dispatcher, event: ChannelEvent) {
    match event {
        ChannelEvent::Connected => {
            dispatcher.dispatch(Msg::Connection(true));
            flash(dispatcher, Tone::Success, "🟢 Connected");
        }
        ChannelEvent::Disconnected => {
            dispatcher.dispatch(Msg::Connection(false));
            announce(dispatcher, Tone::Warning, "🔴 Connection lost");
        }
        ChannelEvent::Broadcast(ServerEvent::DepartmentsUpdated(departments)) => {
            if let Err(e) = browser::save_departments(&departments) {
                warn!("caching departments failed: {}", e);
            }
            dispatcher.dispatch(Msg::Broadcast(ServerEvent::DepartmentsUpdated(departments)));
            flash(dispatcher, Tone::Info, "✨ Department list updated");
        }
        ChannelEvent::Broadcast(ServerEvent::VotesCleared) => {
            dispatcher.dispatch(Msg::Broadcast(ServerEvent::VotesCleared));
            flash(dispatcher, Tone::Info, "Votes were cleared");
        }
        ChannelEvent::Broadcast(event) => dispatcher.dispatch(Msg::Broadcast(event)),
    }
}
