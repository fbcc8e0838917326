//! Draft state machine for admin editing.
//!
//! Each editable record type owns one of these: `Idle -> Adding -> Idle` on
//! save/cancel, `Idle -> Editing(id) -> Idle` on save/cancel. At most one
//! draft per record type is open; opening another requires an explicit
//! discard of the pending one (the original UI silently abandoned it).

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    Adding {
        form: Value,
    },
    Editing {
        id: String,
        form: Value,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// A draft is already open and the caller did not ask to discard it.
    #[error("another draft is pending")]
    DraftPending,
}

impl EditorState {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    /// Id under edit, if any.
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            EditorState::Editing { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Open a blank new-record form.
    pub fn begin_add(&mut self, form: Value, discard_pending: bool) -> Result<(), EditorError> {
        if !self.is_idle() && !discard_pending {
            return Err(EditorError::DraftPending);
        }
        *self = EditorState::Adding { form };
        Ok(())
    }

    /// Open a form pre-populated from the record identified by `id`.
    pub fn begin_edit(
        &mut self,
        id: String,
        form: Value,
        discard_pending: bool,
    ) -> Result<(), EditorError> {
        if !self.is_idle() && !discard_pending {
            return Err(EditorError::DraftPending);
        }
        *self = EditorState::Editing { id, form };
        Ok(())
    }

    /// Abandon the open draft, if any. Cancelling an idle editor is a no-op.
    pub fn cancel(&mut self) {
        *self = EditorState::Idle;
    }

    /// A successful save exits to idle.
    pub fn finish(&mut self) {
        *self = EditorState::Idle;
    }

    pub fn view(&self) -> DraftView {
        match self {
            EditorState::Idle => DraftView {
                state: "idle",
                id: None,
                form: None,
            },
            EditorState::Adding { form } => DraftView {
                state: "adding",
                id: None,
                form: Some(form.clone()),
            },
            EditorState::Editing { id, form } => DraftView {
                state: "editing",
                id: Some(id.clone()),
                form: Some(form.clone()),
            },
        }
    }
}

/// Wire representation of a draft.
#[derive(Debug, Clone, Serialize)]
pub struct DraftView {
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<Value>,
}
