//! Request round trips of a record manager
//!
//! Each flow reads and writes the manager state only through a `StateSlot`, never
//! across an `.await`, so the same code drives the Leptos view model and the tests.

use super::state::{CrudState, DeleteCommand, DialogMode, SaveCommand};
use crate::shared::api_client::{ApiResult, Transport};
use crate::shared::notifications::Notification;
use contracts::domain::common::{EditableDraft, RecordId, Resource};

/// Access to manager state that may have gone away (view unmounted)
pub trait StateSlot<R: Resource> {
    /// Run `f` against the state; `None` if the state is no longer live
    fn with_state<U>(&self, f: impl FnOnce(&mut CrudState<R>) -> U) -> Option<U>;
}

#[derive(Debug, Clone)]
pub struct CrudService<T> {
    transport: T,
}

impl<T: Transport> CrudService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET the whole collection
    pub async fn list<R: Resource>(&self) -> ApiResult<Vec<R>> {
        self.transport.get(&R::collection_path()).await
    }

    /// POST (create) or PUT (edit) the draft snapshot
    pub async fn save<R: Resource>(&self, command: &SaveCommand<R::Draft>) -> ApiResult<()> {
        let payload = command.draft.to_payload();
        let response = match command.mode {
            DialogMode::Create => self.transport.post(&R::collection_path(), &payload).await,
            DialogMode::Edit => {
                self.transport
                    .put(&R::item_path(command.draft.id()), &payload)
                    .await
            }
        };
        // Created/updated record in the body is not needed: the list is refetched.
        response.map(|_| ())
    }

    pub async fn delete<R: Resource>(&self, command: &DeleteCommand) -> ApiResult<()> {
        self.transport.delete(&R::item_path(command.id)).await
    }

    // ============================================================================
    // Flows
    // ============================================================================

    /// Fetch the list and replace the state's copy
    ///
    /// Failures are only logged; the current list stays as it was.
    pub async fn reload<R: Resource>(&self, slot: &impl StateSlot<R>) {
        match self.list::<R>().await {
            Ok(items) => {
                if slot.with_state(|s| s.replace_items(items)).is_none() {
                    log::debug!("{} arrived after the view closed", R::list_name());
                }
            }
            Err(e) => log::error!("Error fetching {}: {}", R::list_name().to_lowercase(), e),
        }
    }

    /// Submit the open draft; on success notify and refresh the list
    ///
    /// Returns immediately when there is nothing to submit or a save is outstanding.
    pub async fn submit<R: Resource>(
        &self,
        slot: &impl StateSlot<R>,
        notify: impl Fn(Notification),
    ) {
        let command = match slot.with_state(|s| s.begin_save()) {
            Some(Ok(command)) => command,
            Some(Err(rejection)) => {
                log::debug!("Save of {} ignored: {}", R::element_name(), rejection);
                return;
            }
            None => return,
        };

        let result = self.save::<R>(&command).await;
        let Some(notification) = slot.with_state(|s| s.complete_save(&command, &result)) else {
            log::debug!("Save of {} finished after the view closed", R::element_name());
            return;
        };
        notify(notification);

        if result.is_ok() {
            self.reload(slot).await;
        }
    }

    /// Delete one row; on success notify and refresh the list
    pub async fn remove<R: Resource>(
        &self,
        slot: &impl StateSlot<R>,
        id: RecordId,
        notify: impl Fn(Notification),
    ) {
        let command = match slot.with_state(|s| s.begin_delete(id)) {
            Some(Ok(command)) => command,
            Some(Err(rejection)) => {
                log::debug!("Delete of {} ignored: {}", R::element_name(), rejection);
                return;
            }
            None => return,
        };

        let result = self.delete::<R>(&command).await;
        let Some(notification) = slot.with_state(|s| s.complete_delete(&command, &result)) else {
            log::debug!("Delete of {} finished after the view closed", R::element_name());
            return;
        };
        notify(notification);

        if result.is_ok() {
            self.reload(slot).await;
        }
    }
}
