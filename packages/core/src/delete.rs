//! Confirm-then-delete flow for list screens.

use crate::{ListController, Listable, RecordId, Toast};

/// Progress of a delete request on one screen.
///
/// The record leaves local state only after the backend acknowledges the
/// DELETE; there is no optimistic removal and no undo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteFlow {
    #[default]
    Idle,
    /// The confirmation modal is open for `id`.
    Confirming { id: RecordId, label: String },
    /// The DELETE request for `id` is in flight.
    InFlight { id: RecordId },
}

impl DeleteFlow {
    /// Ask for confirmation before deleting `id`.
    pub fn request(&mut self, id: RecordId, label: impl Into<String>) {
        *self = DeleteFlow::Confirming {
            id,
            label: label.into(),
        };
    }

    /// Dismiss the confirmation modal.
    pub fn cancel(&mut self) {
        if matches!(self, DeleteFlow::Confirming { .. }) {
            *self = DeleteFlow::Idle;
        }
    }

    /// Confirm the pending delete, returning the id to send.
    ///
    /// Returns `None` unless the modal is open.
    pub fn confirm(&mut self) -> Option<RecordId> {
        match std::mem::take(self) {
            DeleteFlow::Confirming { id, .. } => {
                *self = DeleteFlow::InFlight { id: id.clone() };
                Some(id)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// Return to idle once the request for `id` has completed.
    ///
    /// A confirmation opened for another record while the request was in
    /// flight stays open.
    pub fn finish(&mut self, id: &RecordId) {
        if matches!(self, DeleteFlow::InFlight { id: pending } if pending == id) {
            *self = DeleteFlow::Idle;
        }
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self, DeleteFlow::Confirming { .. })
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, DeleteFlow::InFlight { .. })
    }

    /// Label of the record awaiting confirmation.
    pub fn pending_label(&self) -> Option<&str> {
        match self {
            DeleteFlow::Confirming { label, .. } => Some(label),
            _ => None,
        }
    }
}

impl<R: Listable> ListController<R> {
    /// Apply the backend's answer to a DELETE of `id`.
    ///
    /// On success the record is removed; on failure local state is left as
    /// it was. Either way the toast to show is returned.
    pub fn apply_delete<E>(&mut self, id: &RecordId, outcome: Result<(), E>) -> Toast {
        match outcome {
            Ok(()) => {
                self.remove(id);
                Toast::success("Deleted successfully")
            }
            Err(_) => Toast::failure(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Correction, ToastKind};

    fn correction(id: &str) -> Correction {
        Correction {
            id: RecordId::from(id),
            name: Some(format!("Correction {id}")),
            ..Default::default()
        }
    }

    fn ids(list: &ListController<Correction>) -> Vec<&str> {
        list.records().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn confirm_moves_to_in_flight_and_yields_id() {
        let mut flow = DeleteFlow::default();
        assert_eq!(flow.confirm(), None);

        flow.request(RecordId::from("c2"), "Correction c2");
        assert!(flow.is_confirming());
        assert_eq!(flow.pending_label(), Some("Correction c2"));

        assert_eq!(flow.confirm(), Some(RecordId::from("c2")));
        assert!(flow.is_in_flight());
        assert_eq!(flow.confirm(), None);

        flow.finish(&RecordId::from("c2"));
        assert_eq!(flow, DeleteFlow::Idle);
    }

    #[test]
    fn finishing_one_delete_keeps_the_next_confirmation_open() {
        let mut flow = DeleteFlow::default();
        let first = RecordId::from("a");
        flow.request(first.clone(), "A");
        assert_eq!(flow.confirm(), Some(first.clone()));

        flow.request(RecordId::from("b"), "B");
        flow.finish(&first);
        assert!(flow.is_confirming());
        assert_eq!(flow.pending_label(), Some("B"));
    }

    #[test]
    fn cancel_closes_the_modal() {
        let mut flow = DeleteFlow::default();
        flow.request(RecordId::from("c1"), "c1");
        flow.cancel();
        assert_eq!(flow, DeleteFlow::Idle);
    }

    #[test]
    fn successful_delete_removes_exactly_that_record() {
        let mut list = ListController::new();
        list.load(vec![correction("c1"), correction("c2"), correction("c3")]);

        let toast = list.apply_delete(&RecordId::from("c2"), Ok::<(), String>(()));
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(ids(&list), vec!["c1", "c3"]);
    }

    #[test]
    fn failed_delete_leaves_list_unchanged() {
        let mut list = ListController::new();
        list.load(vec![correction("c1"), correction("c2")]);
        let before = list.clone();

        let toast = list.apply_delete(&RecordId::from("c2"), Err("500 Internal Server Error"));
        assert!(toast.is_error());
        assert_eq!(list, before);
    }
}
