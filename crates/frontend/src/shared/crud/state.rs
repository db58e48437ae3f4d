//! Dialog/list state machine shared by every record manager
//!
//! ```text
//! closed --open_create/open_edit--> open --begin_save--> submitting
//! submitting --ok--> closed
//! submitting --err--> open (draft kept, resubmit allowed)
//! open|submitting --cancel--> closed
//! ```
//!
//! Nothing here performs I/O: operations return commands, the caller executes them
//! and feeds the result back.

use crate::shared::api_client::ApiResult;
use crate::shared::notifications::Notification;
use contracts::domain::common::{EditableDraft, RecordId, Resource};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit,
}

impl DialogMode {
    /// "Add Category" / "Edit Category"
    pub fn title(self, element_name: &str) -> String {
        match self {
            DialogMode::Create => format!("Add {}", element_name),
            DialogMode::Edit => format!("Edit {}", element_name),
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            DialogMode::Create => "Save",
            DialogMode::Edit => "Update",
        }
    }
}

/// Identifies one save attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct DraftDialog<D> {
    pub mode: DialogMode,
    pub draft: D,
    in_flight: Option<SaveTicket>,
}

impl<D> DraftDialog<D> {
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }
}

/// Snapshot of a draft to POST (create) or PUT (edit)
#[derive(Debug, Clone, PartialEq)]
pub struct SaveCommand<D> {
    pub ticket: SaveTicket,
    pub mode: DialogMode,
    pub draft: D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    pub id: RecordId,
}

/// Why an operation was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("a dialog is already open")]
    DialogOpen,
    #[error("no dialog is open")]
    NoDialog,
    #[error("record {0} is not in the list")]
    UnknownRecord(RecordId),
    #[error("a save is already in progress")]
    SaveInFlight,
    #[error("record {0} is already being deleted")]
    DeleteInFlight(RecordId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudAction {
    Create,
    Update,
    Delete,
}

impl CrudAction {
    fn past(self) -> &'static str {
        match self {
            CrudAction::Create => "added",
            CrudAction::Update => "updated",
            CrudAction::Delete => "deleted",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            CrudAction::Create => "add",
            CrudAction::Update => "update",
            CrudAction::Delete => "delete",
        }
    }
}

impl From<DialogMode> for CrudAction {
    fn from(mode: DialogMode) -> Self {
        match mode {
            DialogMode::Create => CrudAction::Create,
            DialogMode::Edit => CrudAction::Update,
        }
    }
}

/// Toast text for the outcome of a mutating request
pub fn outcome_notification<R: Resource>(action: CrudAction, result: &ApiResult<()>) -> Notification {
    match result {
        Ok(()) => Notification::success(format!(
            "{} {} successfully",
            R::element_name(),
            action.past()
        )),
        Err(e) => Notification::error(format!(
            "Failed to {} {}: {}",
            action.verb(),
            R::element_name().to_lowercase(),
            e.message()
        )),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CrudState<R: Resource> {
    items: Vec<R>,
    dialog: Option<DraftDialog<R::Draft>>,
    deleting: BTreeSet<RecordId>,
    next_ticket: u64,
}

impl<R: Resource> Default for CrudState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            dialog: None,
            deleting: BTreeSet::new(),
            next_ticket: 0,
        }
    }
}

impl<R: Resource> CrudState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn dialog(&self) -> Option<&DraftDialog<R::Draft>> {
        self.dialog.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.dialog.as_ref().is_some_and(|d| d.is_submitting())
    }

    pub fn is_deleting(&self, id: RecordId) -> bool {
        self.deleting.contains(&id)
    }

    /// Swap in a freshly fetched list; the previous one is discarded whole
    pub fn replace_items(&mut self, items: Vec<R>) {
        self.items = items;
    }

    pub fn open_create(&mut self) -> Result<(), Rejection> {
        self.open(DialogMode::Create, R::blank_draft())
    }

    pub fn open_edit(&mut self, id: RecordId) -> Result<(), Rejection> {
        let draft = self
            .items
            .iter()
            .find(|r| r.id() == id)
            .map(R::to_draft)
            .ok_or(Rejection::UnknownRecord(id))?;
        self.open(DialogMode::Edit, draft)
    }

    fn open(&mut self, mode: DialogMode, draft: R::Draft) -> Result<(), Rejection> {
        if self.dialog.is_some() {
            return Err(Rejection::DialogOpen);
        }
        self.dialog = Some(DraftDialog {
            mode,
            draft,
            in_flight: None,
        });
        Ok(())
    }

    /// Apply one field update to the open draft
    pub fn edit(&mut self, edit: <R::Draft as EditableDraft>::Edit) -> Result<(), Rejection> {
        let dialog = self.dialog.as_mut().ok_or(Rejection::NoDialog)?;
        if dialog.is_submitting() {
            return Err(Rejection::SaveInFlight);
        }
        dialog.draft.apply(edit);
        Ok(())
    }

    /// Close the dialog and drop the draft
    ///
    /// Allowed while a save is outstanding; its completion then leaves the dialog alone.
    pub fn cancel(&mut self) -> Result<(), Rejection> {
        self.dialog.take().map(|_| ()).ok_or(Rejection::NoDialog)
    }

    pub fn begin_save(&mut self) -> Result<SaveCommand<R::Draft>, Rejection> {
        let dialog = self.dialog.as_mut().ok_or(Rejection::NoDialog)?;
        if dialog.is_submitting() {
            return Err(Rejection::SaveInFlight);
        }
        self.next_ticket += 1;
        let ticket = SaveTicket(self.next_ticket);
        dialog.in_flight = Some(ticket);
        Ok(SaveCommand {
            ticket,
            mode: dialog.mode,
            draft: dialog.draft.clone(),
        })
    }

    /// Feed back the result of a save
    ///
    /// Success closes the dialog, failure reopens it for editing with the draft intact.
    /// A dialog started by another attempt is never touched.
    pub fn complete_save(
        &mut self,
        command: &SaveCommand<R::Draft>,
        result: &ApiResult<()>,
    ) -> Notification {
        let owns_dialog = self
            .dialog
            .as_ref()
            .is_some_and(|d| d.in_flight == Some(command.ticket));
        if owns_dialog {
            match result {
                Ok(()) => self.dialog = None,
                Err(_) => {
                    if let Some(dialog) = self.dialog.as_mut() {
                        dialog.in_flight = None;
                    }
                }
            }
        }
        outcome_notification::<R>(command.mode.into(), result)
    }

    pub fn begin_delete(&mut self, id: RecordId) -> Result<DeleteCommand, Rejection> {
        if !self.items.iter().any(|r| r.id() == id) {
            return Err(Rejection::UnknownRecord(id));
        }
        if !self.deleting.insert(id) {
            return Err(Rejection::DeleteInFlight(id));
        }
        Ok(DeleteCommand { id })
    }

    /// Feed back the result of a delete; the list itself changes only on the next fetch
    pub fn complete_delete(&mut self, command: &DeleteCommand, result: &ApiResult<()>) -> Notification {
        self.deleting.remove(&command.id);
        outcome_notification::<R>(CrudAction::Delete, result)
    }
}
