mod avatar_picker;
mod dialog;
mod user_panel;

pub use avatar_picker::AvatarPicker;
pub use dialog::Dialog;
pub use user_panel::UserPanel;

use crate::session::{SessionBus, SessionScoped, UserSession};
use crate::storage::AppStorage;
use crate::work_items::WorkItems;
use leptos::prelude::*;

/// The session-scoped containers, provided once by the app root.
#[derive(Clone, Copy)]
pub struct ProfileContext {
    pub session: RwSignal<UserSession<AppStorage>>,
    pub work_items: RwSignal<WorkItems<AppStorage>>,
    pub bus: StoredValue<SessionBus>,
}

impl ProfileContext {
    pub fn new(storage: AppStorage) -> Self {
        let session = RwSignal::new(UserSession::load(storage.clone()));
        let work_items = RwSignal::new(WorkItems::load(storage));

        let mut bus = SessionBus::new();
        bus.subscribe(move |event| work_items.update(|items| items.on_session_event(event)));

        Self {
            session,
            work_items,
            bus: StoredValue::new(bus),
        }
    }
}
