//! Member Edit Target
//!
//! At most one roster row is in edit mode. Clicking the edit button on that
//! row cancels; clicking it on any other row moves edit mode there and loads
//! the row into the draft.

use crate::models::{Member, MemberDraft};

/// Outcome of pressing a row's edit button
#[derive(Debug, Clone, PartialEq)]
pub enum EditToggle {
    /// Start editing this member with a fresh draft
    Open(u32, MemberDraft),
    /// Leave edit mode
    Close,
}

pub fn toggle_edit(current: Option<u32>, member: &Member) -> EditToggle {
    if current == Some(member.id) {
        EditToggle::Close
    } else {
        EditToggle::Open(member.id, MemberDraft::from(member))
    }
}

pub fn edit_button_label(current: Option<u32>, member_id: u32) -> &'static str {
    if current == Some(member_id) {
        "Cancelar"
    } else {
        "Modificar"
    }
}

/// Edit state after an update request finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub editing_id: Option<u32>,
    /// Refetch the roster
    pub reload: bool,
}

/// Success leaves edit mode and refetches; failure keeps the form open
pub fn after_submit<E>(current: Option<u32>, result: &Result<(), E>) -> SubmitOutcome {
    match result {
        Ok(()) => SubmitOutcome { editing_id: None, reload: true },
        Err(_) => SubmitOutcome { editing_id: current, reload: false },
    }
}
