use crate::navigation::{Navigator, ROOT_PATH};
use crate::session::{SessionBus, SessionEvent, UserSession};
use crate::storage::{KeyValueStore, WORK_ITEMS_KEY};
use crate::user::{Avatar, UserRecord};

/// Local UI state of the user panel.
///
/// The dialogs are independent flags; the drafts back the edit dialog and are
/// seeded from the current record each time it opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    menu_open: bool,
    edit_open: bool,
    logout_open: bool,
    avatar_open: bool,
    draft_name: String,
    draft_rate: Option<u32>,
}

/// What the panel shows for a given session value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    /// A bare indicator; no controls are offered.
    NotAuthenticated,
    Authenticated(AuthenticatedView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedView {
    pub user: UserRecord,
    pub menu_open: bool,
    pub edit_open: bool,
    pub logout_open: bool,
    pub avatar_open: bool,
    pub draft_name: String,
    pub draft_rate: Option<u32>,
}

/// Which parts of the panel are mounted.
///
/// Drafts are left out, so typing into the edit dialog never remounts it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelLayout {
    pub menu_open: bool,
    pub edit_open: bool,
    pub logout_open: bool,
    pub avatar_open: bool,
}

impl PanelState {
    pub fn layout(&self) -> PanelLayout {
        PanelLayout {
            menu_open: self.menu_open,
            edit_open: self.edit_open,
            logout_open: self.logout_open,
            avatar_open: self.avatar_open,
        }
    }

    pub fn draft_name(&self) -> &str {
        &self.draft_name
    }

    pub fn draft_rate(&self) -> Option<u32> {
        self.draft_rate
    }

    pub fn view(&self, user: Option<&UserRecord>) -> PanelView {
        match user {
            None => PanelView::NotAuthenticated,
            Some(user) => PanelView::Authenticated(AuthenticatedView {
                user: user.clone(),
                menu_open: self.menu_open,
                edit_open: self.edit_open,
                logout_open: self.logout_open,
                avatar_open: self.avatar_open,
                draft_name: self.draft_name.clone(),
                draft_rate: self.draft_rate,
            }),
        }
    }

    pub fn open_avatar_picker(&mut self) {
        self.avatar_open = true;
    }

    pub fn close_avatar_picker(&mut self) {
        self.avatar_open = false;
    }

    /// Commits the chosen avatar and closes the picker.
    pub fn select_avatar<S: KeyValueStore>(
        &mut self,
        session: &mut UserSession<S>,
        avatar: Avatar,
    ) {
        session.modify(|record| record.avatar = avatar);
        self.avatar_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn open_edit(&mut self, user: Option<&UserRecord>) {
        let Some(user) = user else {
            return;
        };
        self.draft_name = user.name.clone();
        self.draft_rate = Some(user.hourly_rate);
        self.edit_open = true;
        self.menu_open = false;
    }

    pub fn set_draft_name(&mut self, name: String) {
        self.draft_name = name;
    }

    pub fn set_draft_rate(&mut self, rate: Option<u32>) {
        self.draft_rate = rate;
    }

    pub fn cancel_edit(&mut self) {
        self.edit_open = false;
    }

    /// Commits the drafts if the name is non-empty and the rate is a non-zero
    /// number; otherwise drops them. The dialog closes either way.
    ///
    /// Returns whether the record was updated.
    pub fn save_edit<S: KeyValueStore>(&mut self, session: &mut UserSession<S>) -> bool {
        self.edit_open = false;

        let rate = match self.draft_rate {
            Some(rate) if rate != 0 => rate,
            _ => return false,
        };
        if self.draft_name.is_empty() || !session.is_authenticated() {
            return false;
        }

        let name = self.draft_name.clone();
        session.modify(|record| {
            record.name = name;
            record.hourly_rate = rate;
        });
        true
    }

    pub fn open_logout(&mut self) {
        self.logout_open = true;
        self.menu_open = false;
    }

    pub fn cancel_logout(&mut self) {
        self.logout_open = false;
    }

    /// Ends the session: clears both storage slots, drops the in-memory
    /// record, resets every session-scoped container and returns to `/`.
    pub fn confirm_logout<S: KeyValueStore>(
        &mut self,
        session: &mut UserSession<S>,
        bus: &SessionBus,
        navigator: &impl Navigator,
    ) {
        if !session.is_authenticated() {
            return;
        }

        if let Err(e) = session.store().clear() {
            tracing::warn!(error = %e, "user slot left behind on logout");
        }
        if let Err(e) = session.storage().remove(WORK_ITEMS_KEY) {
            tracing::warn!(error = %e, "work items slot left behind on logout");
        }

        session.set(None);
        bus.broadcast(SessionEvent::Reset);
        *self = Self::default();

        tracing::info!("logged out");
        navigator.navigate(ROOT_PATH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, USER_KEY};
    use crate::storage::testing::CountingStorage;
    use crate::work_items::WorkItems;
    use serde_json::json;
    use std::cell::RefCell;
    use std::sync::{Arc, Mutex};

    fn ann() -> UserRecord {
        UserRecord {
            name: "Ann".to_string(),
            hourly_rate: 12,
            avatar: "icon3.png".parse().expect("icon3 is in the catalog"),
        }
    }

    fn signed_in<S: KeyValueStore>(storage: S) -> UserSession<S> {
        let mut session = UserSession::load(storage);
        session.set(ann());
        session
    }

    fn authenticated(view: PanelView) -> AuthenticatedView {
        match view {
            PanelView::Authenticated(view) => view,
            PanelView::NotAuthenticated => panic!("expected an authenticated view"),
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visits: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visits.borrow_mut().push(path.to_string());
        }
    }

    #[test]
    fn test_select_avatar_commits_and_closes_picker() {
        let storage = MemoryStorage::new();
        let mut session = signed_in(storage.clone());
        let mut panel = PanelState::default();
        let avatar = Avatar::try_new(17).expect("17 is in the catalog");

        panel.open_avatar_picker();
        assert!(authenticated(panel.view(session.get())).avatar_open);

        panel.select_avatar(&mut session, avatar);

        let expected = UserRecord { avatar, ..ann() };
        assert_eq!(session.get(), Some(&expected));
        assert_eq!(UserSession::load(storage).get(), Some(&expected));
        assert!(!authenticated(panel.view(session.get())).avatar_open);
    }

    #[test]
    fn test_selecting_same_avatar_twice_writes_once() {
        let storage = CountingStorage::default();
        let mut session = signed_in(storage.clone());
        let mut panel = PanelState::default();
        let avatar = Avatar::try_new(4).expect("4 is in the catalog");
        let writes_before = storage.writes();

        panel.open_avatar_picker();
        panel.select_avatar(&mut session, avatar);
        let after_first = session.get().cloned();
        panel.open_avatar_picker();
        panel.select_avatar(&mut session, avatar);

        assert_eq!(session.get().cloned(), after_first);
        assert_eq!(storage.writes(), writes_before + 1);
    }

    #[test]
    fn test_closing_picker_changes_nothing() {
        let session = signed_in(MemoryStorage::new());
        let mut panel = PanelState::default();

        panel.open_avatar_picker();
        panel.close_avatar_picker();

        assert_eq!(session.get(), Some(&ann()));
        assert!(!authenticated(panel.view(session.get())).avatar_open);
    }

    #[test]
    fn test_menu_items_close_menu() {
        let session = signed_in(MemoryStorage::new());
        let mut panel = PanelState::default();

        panel.toggle_menu();
        assert!(authenticated(panel.view(session.get())).menu_open);
        panel.open_edit(session.get());
        let view = authenticated(panel.view(session.get()));
        assert!(view.edit_open);
        assert!(!view.menu_open);

        panel.toggle_menu();
        panel.open_logout();
        let view = authenticated(panel.view(session.get()));
        assert!(view.logout_open);
        assert!(!view.menu_open);
    }

    #[test]
    fn test_open_edit_seeds_drafts() {
        let session = signed_in(MemoryStorage::new());
        let mut panel = PanelState::default();

        panel.open_edit(session.get());

        let view = authenticated(panel.view(session.get()));
        assert_eq!(view.draft_name, "Ann");
        assert_eq!(view.draft_rate, Some(12));
    }

    #[test]
    fn test_draft_edits_keep_the_layout() {
        let session = signed_in(MemoryStorage::new());
        let mut panel = PanelState::default();
        panel.open_edit(session.get());
        let layout = panel.layout();

        panel.set_draft_name("Bohdan".to_string());
        panel.set_draft_rate(Some(20));

        assert_eq!(panel.layout(), layout);
        assert!(layout.edit_open);
        assert_eq!(panel.draft_name(), "Bohdan");
        assert_eq!(panel.draft_rate(), Some(20));
    }

    #[test]
    fn test_save_with_empty_name_is_discarded() {
        let storage = MemoryStorage::new();
        let mut session = signed_in(storage.clone());
        let mut panel = PanelState::default();

        panel.open_edit(session.get());
        panel.set_draft_name(String::new());

        assert!(!panel.save_edit(&mut session));
        assert_eq!(session.get(), Some(&ann()));
        assert_eq!(UserSession::load(storage).get(), Some(&ann()));
        assert!(!authenticated(panel.view(session.get())).edit_open);
    }

    #[test]
    fn test_save_with_missing_or_zero_rate_is_discarded() {
        let mut session = signed_in(MemoryStorage::new());
        let mut panel = PanelState::default();

        for rate in [None, Some(0)] {
            panel.open_edit(session.get());
            panel.set_draft_name("Bohdan".to_string());
            panel.set_draft_rate(rate);

            assert!(!panel.save_edit(&mut session));
            assert_eq!(session.get(), Some(&ann()));
        }
    }

    #[test]
    fn test_save_commits_name_and_rate() {
        let storage = MemoryStorage::new();
        let mut session = signed_in(storage.clone());
        let mut panel = PanelState::default();

        panel.open_edit(session.get());
        panel.set_draft_name("Bohdan".to_string());
        panel.set_draft_rate(Some(15));

        assert!(panel.save_edit(&mut session));

        let expected = UserRecord {
            name: "Bohdan".to_string(),
            hourly_rate: 15,
            avatar: "icon3.png".parse().expect("icon3 is in the catalog"),
        };
        assert_eq!(session.get(), Some(&expected));
        assert_eq!(UserSession::load(storage).get(), Some(&expected));
        assert!(!authenticated(panel.view(session.get())).edit_open);
    }

    #[test]
    fn test_cancel_edit_keeps_record() {
        let session = signed_in(MemoryStorage::new());
        let mut panel = PanelState::default();

        panel.open_edit(session.get());
        panel.set_draft_name("Bohdan".to_string());
        panel.cancel_edit();

        assert_eq!(session.get(), Some(&ann()));
        // reopening reseeds from the record, not the abandoned draft
        panel.open_edit(session.get());
        assert_eq!(authenticated(panel.view(session.get())).draft_name, "Ann");
    }

    #[test]
    fn test_logout_clears_everything() {
        let storage = MemoryStorage::new();
        let mut session = signed_in(storage.clone());
        let work_items = Arc::new(Mutex::new(WorkItems::load(storage.clone())));
        work_items
            .lock()
            .expect("lock should not be poisoned")
            .replace(vec![json!({"title": "invoice"})]);
        let mut bus = SessionBus::new();
        bus.register(work_items.clone());
        let navigator = RecordingNavigator::default();
        let mut panel = PanelState::default();

        panel.toggle_menu();
        panel.open_logout();
        panel.confirm_logout(&mut session, &bus, &navigator);

        assert!(!storage.contains(USER_KEY));
        assert!(!storage.contains(WORK_ITEMS_KEY));
        assert_eq!(session.get(), None);
        assert!(
            work_items
                .lock()
                .expect("lock should not be poisoned")
                .is_empty()
        );
        assert_eq!(*navigator.visits.borrow(), vec!["/".to_string()]);
        assert_eq!(panel.view(session.get()), PanelView::NotAuthenticated);
    }

    #[test]
    fn test_cancel_logout_changes_nothing() {
        let storage = MemoryStorage::new();
        let session = signed_in(storage.clone());
        let navigator = RecordingNavigator::default();
        let mut panel = PanelState::default();

        panel.open_logout();
        panel.cancel_logout();

        assert!(!authenticated(panel.view(session.get())).logout_open);
        assert!(storage.contains(USER_KEY));
        assert!(navigator.visits.borrow().is_empty());
    }

    #[test]
    fn test_signed_out_panel_offers_nothing() {
        let storage = CountingStorage::default();
        let mut session = signed_in(storage.clone());
        session.set(None);
        let writes = storage.writes();
        let navigator = RecordingNavigator::default();
        let bus = SessionBus::new();
        let mut panel = PanelState::default();

        assert_eq!(panel.view(session.get()), PanelView::NotAuthenticated);

        panel.select_avatar(&mut session, Avatar::default());
        panel.open_edit(session.get());
        panel.set_draft_name("Bohdan".to_string());
        panel.set_draft_rate(Some(15));
        assert!(!panel.save_edit(&mut session));
        panel.confirm_logout(&mut session, &bus, &navigator);

        assert_eq!(session.get(), None);
        assert_eq!(storage.writes(), writes);
        assert!(navigator.visits.borrow().is_empty());
        assert_eq!(panel.view(session.get()), PanelView::NotAuthenticated);
    }
}
