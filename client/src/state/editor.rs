//! Create/edit modal state shared by the list pages.
//!
//! DESIGN
//! ======
//! One `Editor` per page holds whether the modal is open, which entity (if
//! any) is being edited, and the text draft bound to the form inputs. The
//! edit target decides POST vs PATCH at submit time.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use super::collection::Keyed;

/// Which request a submit should issue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(String),
}

impl SubmitTarget {
    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update(_))
    }
}

/// Modal form state for entity `E` with draft `D`.
#[derive(Clone, Debug)]
pub struct Editor<E, D> {
    pub open: bool,
    pub editing: Option<E>,
    pub draft: D,
}

impl<E, D: Default> Default for Editor<E, D> {
    fn default() -> Self {
        Self { open: false, editing: None, draft: D::default() }
    }
}

impl<E: Keyed, D> Editor<E, D> {
    /// Open the modal for a new record seeded with `draft`.
    pub fn open_create(&mut self, draft: D) {
        self.editing = None;
        self.draft = draft;
        self.open = true;
    }

    /// Open the modal pre-populated from `entity`.
    pub fn open_edit(&mut self, entity: E, draft: D) {
        self.editing = Some(entity);
        self.draft = draft;
        self.open = true;
    }

    /// Close without submitting. The draft is left as typed.
    pub fn dismiss(&mut self) {
        self.open = false;
        self.editing = None;
    }

    /// Close after a successful submit and reset the draft.
    pub fn finish(&mut self, reset: D) {
        self.dismiss();
        self.draft = reset;
    }

    pub fn target(&self) -> SubmitTarget {
        match &self.editing {
            Some(entity) => SubmitTarget::Update(entity.key().to_owned()),
            None => SubmitTarget::Create,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}
