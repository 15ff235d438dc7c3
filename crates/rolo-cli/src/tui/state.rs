use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::avatar;
use crate::output::FETCH_ERROR_MESSAGE;
use crate::tui::fetch::FetchOutcome;
use rolo_core::{GroupedContacts, combined_view, filter_by_query, group_by_letter};
use rolo_store::{LocalStore, Removal};
use rolo_types::{Avatar, Contact, ContactId, Origin};

pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// State of the single remote fetch.
pub enum RemoteState {
    Loading,
    Failed(String),
    Ready(Vec<Contact>),
}

impl RemoteState {
    pub fn contacts(&self) -> &[Contact] {
        match self {
            RemoteState::Ready(contacts) => contacts,
            _ => &[],
        }
    }
}

/// Which part of the screen owns keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Search,
    AddForm,
}

pub struct Toast {
    pub message: String,
    pub deadline: Instant,
}

pub const FORM_LABELS: [&str; 5] = [
    "First name",
    "Last name",
    "Email",
    "Phone",
    "Avatar path (optional)",
];

#[derive(Default)]
pub struct AddForm {
    pub fields: [String; 5],
    pub focus: usize,
}

impl AddForm {
    /// The four required fields must be non-empty after trimming.
    pub fn is_valid(&self) -> bool {
        self.fields[..4].iter().all(|f| !f.trim().is_empty())
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    pub fn push_char(&mut self, c: char) {
        self.fields[self.focus].push(c);
    }

    pub fn pop_char(&mut self) {
        self.fields[self.focus].pop();
    }
}

pub struct AppState {
    pub store: LocalStore,
    pub remote: RemoteState,
    pub query: String,
    pub grouped: bool,
    pub selected: usize,
    pub mode: Mode,
    pub form: AddForm,
    pub toasts: Vec<Toast>,
    pub generation: u64,
    pub should_quit: bool,
    /// Whether a refresh can be requested (false in offline mode).
    pub can_refresh: bool,
}

impl AppState {
    pub fn new(store: LocalStore, offline: bool) -> Self {
        Self {
            store,
            remote: if offline {
                RemoteState::Ready(Vec::new())
            } else {
                RemoteState::Loading
            },
            query: String::new(),
            grouped: false,
            selected: 0,
            mode: Mode::Browse,
            form: AddForm::default(),
            toasts: Vec::new(),
            generation: 0,
            should_quit: false,
            can_refresh: !offline,
        }
    }

    /// Contacts in display (and selection) order.
    pub fn visible(&self) -> Vec<Contact> {
        let view = combined_view(self.store.added(), self.remote.contacts(), self.store.deleted());
        let filtered = filter_by_query(&view, &self.query);
        if self.grouped {
            group_by_letter(&filtered)
                .groups
                .into_iter()
                .flat_map(|g| g.contacts)
                .collect()
        } else {
            filtered
        }
    }

    pub fn grouped_view(&self) -> GroupedContacts {
        let view = combined_view(self.store.added(), self.remote.contacts(), self.store.deleted());
        group_by_letter(&filter_by_query(&view, &self.query))
    }

    pub fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Jump to the first contact of the next (+1) or previous (-1) letter
    /// group. Only meaningful in grouped mode.
    pub fn jump_group(&mut self, dir: i32) {
        if !self.grouped {
            return;
        }
        let grouped = self.grouped_view();
        let mut starts = Vec::with_capacity(grouped.groups.len());
        let mut offset = 0;
        for group in &grouped.groups {
            starts.push(offset);
            offset += group.contacts.len();
        }
        if starts.is_empty() {
            return;
        }

        let current = starts
            .iter()
            .rposition(|&s| s <= self.selected)
            .unwrap_or(0);
        let target = if dir > 0 {
            (current + 1).min(starts.len() - 1)
        } else {
            current.saturating_sub(1)
        };
        self.selected = starts[target];
    }

    /// Fold in a fetch outcome, dropping anything from a stale generation.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) {
        if outcome.generation != self.generation {
            return;
        }
        self.remote = match outcome.result {
            Ok(contacts) => RemoteState::Ready(contacts),
            Err(_) => RemoteState::Failed(FETCH_ERROR_MESSAGE.to_string()),
        };
        self.clamp_selection();
    }

    pub fn push_toast(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast {
            message: message.into(),
            deadline: Instant::now() + TOAST_DURATION,
        });
    }

    /// Drop expired toasts. Dropping an already-dropped toast is a no-op by
    /// construction, so timers need no coordination.
    pub fn prune_toasts(&mut self, now: Instant) {
        self.toasts.retain(|t| t.deadline > now);
    }

    /// Delete the selected contact: local entries leave the added list,
    /// remote ids get tombstoned.
    pub fn delete_selected(&mut self) {
        let visible = self.visible();
        let Some(contact) = visible.get(self.selected) else {
            return;
        };
        let name = contact.full_name();
        match self.store.remove(&contact.id) {
            Ok(Removal::Added) => self.push_toast(format!("Removed {}", name)),
            Ok(Removal::Tombstoned) => self.push_toast(format!("Hidden {}", name)),
            Err(err) => self.push_toast(format!("Delete failed: {}", err)),
        }
        self.clamp_selection();
    }

    /// Validate and commit the add form.
    pub fn submit_form(&mut self) {
        if !self.form.is_valid() {
            self.push_toast("All fields except avatar are required");
            return;
        }

        let avatar_input = self.form.fields[4].trim();
        let avatar = if avatar_input.is_empty() {
            None
        } else {
            match avatar::load_data_url(&PathBuf::from(avatar_input)) {
                Ok(data_url) => Some(Avatar::embedded(data_url)),
                Err(err) => {
                    self.push_toast(format!("Avatar ignored: {}", err));
                    None
                }
            }
        };

        let contact = Contact {
            id: ContactId::generate(),
            first_name: self.form.fields[0].trim().to_string(),
            last_name: self.form.fields[1].trim().to_string(),
            email: self.form.fields[2].trim().to_string(),
            phone: self.form.fields[3].trim().to_string(),
            avatar,
            origin: Origin::Local,
        };
        let name = contact.full_name();

        match self.store.add(contact) {
            Ok(()) => {
                self.push_toast(format!("Added {}", name));
                self.form = AddForm::default();
                self.mode = Mode::Browse;
                self.selected = 0;
            }
            Err(err) => self.push_toast(format!("Add failed: {}", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn remote_contact(id: &str, first: &str) -> Contact {
        Contact {
            id: ContactId::new(id),
            first_name: first.to_string(),
            last_name: "Remote".to_string(),
            email: String::new(),
            phone: String::new(),
            avatar: None,
            origin: Origin::Remote,
        }
    }

    fn state_with_remote(dir: &TempDir, contacts: Vec<Contact>) -> AppState {
        let mut state = AppState::new(LocalStore::open(dir.path()), false);
        state.apply_fetch(FetchOutcome {
            generation: 0,
            result: Ok(contacts),
        });
        state
    }

    #[test]
    fn stale_fetch_outcomes_are_dropped() {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::new(LocalStore::open(dir.path()), false);
        state.generation = 2;

        state.apply_fetch(FetchOutcome {
            generation: 1,
            result: Ok(vec![remote_contact("r1", "Old")]),
        });
        assert!(matches!(state.remote, RemoteState::Loading));

        state.apply_fetch(FetchOutcome {
            generation: 2,
            result: Ok(vec![remote_contact("r2", "New")]),
        });
        assert_eq!(state.remote.contacts().len(), 1);
        assert_eq!(state.remote.contacts()[0].id.as_str(), "r2");
    }

    #[test]
    fn failed_fetch_sets_the_static_message_and_keeps_local_contacts_visible() {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::new(LocalStore::open(dir.path()), false);
        state
            .store
            .add(Contact {
                id: ContactId::generate(),
                first_name: "Ann".into(),
                last_name: "Lee".into(),
                email: "a@x.com".into(),
                phone: "123".into(),
                avatar: None,
                origin: Origin::Local,
            })
            .unwrap();

        state.apply_fetch(FetchOutcome {
            generation: 0,
            result: Err(rolo_source::Error::Status(500)),
        });

        match &state.remote {
            RemoteState::Failed(msg) => assert_eq!(msg, FETCH_ERROR_MESSAGE),
            _ => panic!("expected failed state"),
        }
        assert_eq!(state.visible().len(), 1);
    }

    #[test]
    fn delete_selected_tombstones_remote_and_toasts() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with_remote(
            &dir,
            vec![remote_contact("r1", "Ann"), remote_contact("r2", "Bea")],
        );

        state.delete_selected();
        assert_eq!(state.visible().len(), 1);
        assert_eq!(state.store.deleted().len(), 1);
        assert_eq!(state.toasts.len(), 1);
    }

    #[test]
    fn toast_pruning_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with_remote(&dir, Vec::new());
        state.push_toast("hello");

        let later = Instant::now() + TOAST_DURATION + Duration::from_millis(1);
        state.prune_toasts(later);
        assert!(state.toasts.is_empty());
        state.prune_toasts(later);
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn form_requires_the_four_contact_fields() {
        let mut form = AddForm::default();
        assert!(!form.is_valid());
        form.fields[0] = "Ann".into();
        form.fields[1] = "Lee".into();
        form.fields[2] = "a@x.com".into();
        assert!(!form.is_valid());
        form.fields[3] = "123".into();
        assert!(form.is_valid());
    }

    #[test]
    fn submitting_a_valid_form_adds_and_returns_to_browse() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with_remote(&dir, Vec::new());
        state.mode = Mode::AddForm;
        state.form.fields[0] = "Ann".into();
        state.form.fields[1] = "Lee".into();
        state.form.fields[2] = "a@x.com".into();
        state.form.fields[3] = "123".into();

        state.submit_form();
        assert_eq!(state.mode, Mode::Browse);
        assert_eq!(state.store.added().len(), 1);
        assert_eq!(state.visible().len(), 1);
    }

    #[test]
    fn group_jumps_land_on_group_starts() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with_remote(
            &dir,
            vec![
                remote_contact("1", "Ann"),
                remote_contact("2", "Arjun"),
                remote_contact("3", "Bea"),
            ],
        );
        state.grouped = true;

        state.jump_group(1);
        assert_eq!(state.selected, 2);
        state.jump_group(-1);
        assert_eq!(state.selected, 0);
    }
}
