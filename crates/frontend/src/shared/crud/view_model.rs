use super::service::{CrudService, StateSlot};
use super::state::{CrudState, DialogMode};
use crate::shared::api_client::ApiClient;
use crate::shared::notifications::NotificationService;
use crate::shared::view_guard::ViewGuard;
use contracts::domain::common::{EditableDraft, RecordId, Resource};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// State of one manager page, guarded by the page's lifetime
struct GuardedState<R: Resource> {
    state: RwSignal<CrudState<R>>,
    guard: ViewGuard,
}

impl<R: Resource> StateSlot<R> for GuardedState<R> {
    fn with_state<U>(&self, f: impl FnOnce(&mut CrudState<R>) -> U) -> Option<U> {
        if !self.guard.is_active() {
            return None;
        }
        self.state.try_update(f)
    }
}

/// Non-reactive parts of a manager, stored for the page's lifetime
#[derive(Clone)]
struct ManagerContext {
    service: CrudService<ApiClient>,
    guard: ViewGuard,
}

/// ViewModel shared by the category and product managers
///
/// `Copy`, so it can be moved into any number of view closures.
pub struct CrudViewModel<R: Resource> {
    pub state: RwSignal<CrudState<R>>,
    context: StoredValue<ManagerContext>,
    notifications: NotificationService,
}

impl<R: Resource> Clone for CrudViewModel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for CrudViewModel<R> {}

impl<R: Resource> CrudViewModel<R> {
    /// Must be created inside the owning component so the guard follows its lifetime
    pub fn new(client: ApiClient, notifications: NotificationService) -> Self {
        Self {
            state: RwSignal::new(CrudState::new()),
            context: StoredValue::new(ManagerContext {
                service: CrudService::new(client),
                guard: ViewGuard::for_current_owner(),
            }),
            notifications,
        }
    }

    /// Service and state slot for one request; `None` once the page is gone
    fn session(&self) -> Option<(CrudService<ApiClient>, GuardedState<R>)> {
        let context = self.context.try_get_value()?;
        let slot = GuardedState {
            state: self.state,
            guard: context.guard,
        };
        Some((context.service, slot))
    }

    // ============================================================================
    // Queries (reactive)
    // ============================================================================

    pub fn items(&self) -> Vec<R> {
        self.state.with(|s| s.items().to_vec())
    }

    pub fn is_dialog_open(&self) -> bool {
        self.state.with(|s| s.dialog().is_some())
    }

    pub fn dialog_mode(&self) -> Option<DialogMode> {
        self.state.with(|s| s.dialog().map(|d| d.mode))
    }

    /// Current draft; the blank template when no dialog is open
    pub fn draft(&self) -> R::Draft {
        self.state.with(|s| {
            s.dialog()
                .map(|d| d.draft.clone())
                .unwrap_or_else(R::blank_draft)
        })
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.is_submitting())
    }

    pub fn is_deleting(&self, id: RecordId) -> bool {
        self.state.with(|s| s.is_deleting(id))
    }

    // ============================================================================
    // Commands
    // ============================================================================

    /// Fetch the list; failures are logged only
    pub fn load(&self) {
        let Some((service, slot)) = self.session() else {
            return;
        };
        spawn_local(async move {
            service.reload::<R>(&slot).await;
        });
    }

    pub fn open_create(&self) {
        self.apply(|s| s.open_create());
    }

    pub fn open_edit(&self, id: RecordId) {
        self.apply(|s| s.open_edit(id));
    }

    pub fn edit(&self, edit: <R::Draft as EditableDraft>::Edit) {
        self.apply(|s| s.edit(edit));
    }

    pub fn cancel(&self) {
        self.apply(|s| s.cancel());
    }

    pub fn save(&self) {
        let Some((service, slot)) = self.session() else {
            return;
        };
        let notifications = self.notifications;
        spawn_local(async move {
            service
                .submit::<R>(&slot, |n| notifications.push(n))
                .await;
        });
    }

    pub fn delete(&self, id: RecordId) {
        let Some((service, slot)) = self.session() else {
            return;
        };
        let notifications = self.notifications;
        spawn_local(async move {
            service
                .remove::<R>(&slot, id, |n| notifications.push(n))
                .await;
        });
    }

    fn apply<E: std::fmt::Display>(&self, f: impl FnOnce(&mut CrudState<R>) -> Result<(), E>) {
        let Some((_, slot)) = self.session() else {
            return;
        };
        if let Some(Err(rejection)) = slot.with_state(f) {
            log::debug!("{}: {}", R::list_name(), rejection);
        }
    }
}
