use std::rc::Rc;
use shared::{Board, ServerEvent, VoteRecord};
use uuid::Uuid;
use yew::prelude::*;

pub type AppContext = UseReducerHandle<AppState>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    pub fn style(self) -> &'static str {
        match self {
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Error => "error",
        }
    }

    pub fn lifetime_ms(self) -> u32 {
        match self {
            Tone::Success | Tone::Info => 2_000,
            Tone::Warning | Tone::Error => 3_000,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub id: Uuid,
    pub tone: Tone,
    pub text: String,
}

impl StatusMessage {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tone,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppState {
    pub board: Board,
    pub selected: Option<String>,
    pub loading: bool,
    pub connected: bool,
    pub status: Option<StatusMessage>,
}

impl AppState {
    pub fn with_departments(departments: Vec<String>) -> Self {
        Self {
            board: Board::new(departments),
            ..Self::default()
        }
    }
}

pub enum Msg {
    VotesLoaded(Vec<VoteRecord>),
    Broadcast(ServerEvent),
    DepartmentsReplaced(Vec<String>),
    Connection(bool),
    Select(String),
    CloseModal,
    Loading(bool),
    Status(StatusMessage),
    ClearStatus(Uuid),
}

impl Reducible for AppState {
    type Action = Msg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Msg::VotesLoaded(votes) | Msg::Broadcast(ServerEvent::VotesUpdated(votes)) => {
                next.board.replace_votes(votes);
            }
            Msg::Broadcast(ServerEvent::DepartmentsUpdated(departments)) | Msg::DepartmentsReplaced(departments) => {
                next.board.replace_departments(departments);
            }
            Msg::Broadcast(ServerEvent::VotesCleared) => {
                next.board.clear_votes();
            }
            Msg::Connection(connected) => {
                next.connected = connected;
            }
            Msg::Select(department) => {
                next.selected = Some(department);
            }
            Msg::CloseModal => {
                next.selected = None;
            }
            Msg::Loading(loading) => {
                next.loading = loading;
            }
            Msg::Status(status) => {
                next.status = Some(status);
            }
            Msg::ClearStatus(id) => {
                if next.status.as_ref().is_some_and(|s| s.id == id) {
                    next.status = None;
                } else {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{VoteChoice, DepartmentStats};

    fn state() -> Rc<AppState> {
        Rc::new(AppState::with_departments(vec!["MT100".into(), "SGA".into()]))
    }

    fn like(dept: &str) -> VoteRecord {
        VoteRecord::new(dept, VoteChoice::Like)
    }

    #[test]
    fn broadcast_votes_replace_the_list() {
        let s = state().reduce(Msg::VotesLoaded(vec![like("SGA"), like("SGA")]));
        let s = s.reduce(Msg::Broadcast(ServerEvent::VotesUpdated(vec![like("MT100")])));
        assert_eq!(s.board.total_votes(), 1);
        assert_eq!(s.board.stats_for("MT100"), DepartmentStats { likes: 1, dislikes: 0, total: 1 });
    }

    #[test]
    fn same_broadcast_twice_leaves_state_unchanged() {
        let payload = vec![like("MT100")];
        let once = state().reduce(Msg::Broadcast(ServerEvent::VotesUpdated(payload.clone())));
        let twice = once.clone().reduce(Msg::Broadcast(ServerEvent::VotesUpdated(payload)));
        assert_eq!(*once, *twice);
    }

    #[test]
    fn votes_cleared_empties_the_list() {
        let s = state()
            .reduce(Msg::VotesLoaded(vec![like("MT100")]))
            .reduce(Msg::Broadcast(ServerEvent::VotesCleared));
        assert_eq!(s.board.total_votes(), 0);
        assert_eq!(s.board.totals(), DepartmentStats::default());
    }

    #[test]
    fn departments_updated_replaces_the_list() {
        let s = state().reduce(Msg::Broadcast(ServerEvent::DepartmentsUpdated(vec!["X".into()])));
        assert_eq!(s.board.departments().to_vec(), vec!["X".to_string()]);
    }

    #[test]
    fn connection_does_not_touch_data() {
        let before = state().reduce(Msg::VotesLoaded(vec![like("SGA")]));
        let after = before.clone().reduce(Msg::Connection(false));
        assert_eq!(before.board, after.board);
        assert!(!after.connected);
    }

    #[test]
    fn stale_status_clear_keeps_newer_message() {
        let first = StatusMessage::new(Tone::Success, "Saved");
        let second = StatusMessage::new(Tone::Error, "Failed");
        let first_id = first.id;
        let second_id = second.id;

        let s = state().reduce(Msg::Status(first)).reduce(Msg::Status(second));
        let s = s.reduce(Msg::ClearStatus(first_id));
        assert_eq!(s.status.as_ref().map(|m| m.text.as_str()), Some("Failed"));

        let s = s.reduce(Msg::ClearStatus(second_id));
        assert!(s.status.is_none());
    }

    #[test]
    fn modal_selection() {
        let s = state().reduce(Msg::Select("SGA".into()));
        assert_eq!(s.selected.as_deref(), Some("SGA"));
        assert!(s.reduce(Msg::CloseModal).selected.is_none());
    }
}
