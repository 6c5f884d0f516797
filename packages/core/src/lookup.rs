//! Identifier lookups for client-side joins.

use std::collections::HashMap;

use crate::RecordId;

/// A record with a backend identifier.
pub trait Identified {
    fn record_id(&self) -> &RecordId;
}

/// Index from identifier to record over a sibling collection.
///
/// Built once per render so that joins (event → contractors, correction →
/// user) are map lookups rather than scans.
#[derive(Debug, Clone)]
pub struct IdIndex<'a, R> {
    by_id: HashMap<&'a RecordId, &'a R>,
}

impl<'a, R: Identified> IdIndex<'a, R> {
    pub fn new(records: &'a [R]) -> Self {
        Self {
            by_id: records
                .iter()
                .map(|record| (record.record_id(), record))
                .collect(),
        }
    }

    pub fn get(&self, id: &RecordId) -> Option<&'a R> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Resolve `ids` to display names, skipping identifiers with no record.
pub fn resolve_names<'a, R, F>(ids: &[RecordId], index: &IdIndex<'a, R>, name: F) -> Vec<String>
where
    R: Identified,
    F: Fn(&'a R) -> String,
{
    ids.iter()
        .filter_map(|id| index.get(id))
        .map(name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::User;

    fn user(id: &str, name: &str) -> User {
        User {
            id: RecordId::from(id),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn index_finds_records_by_id() {
        let users = vec![user("u1", "Ada"), user("u2", "Grace")];
        let index = IdIndex::new(&users);
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.get(&RecordId::from("u2")).and_then(|u| u.name.as_deref()),
            Some("Grace")
        );
        assert!(index.get(&RecordId::from("missing")).is_none());
    }

    #[test]
    fn resolve_names_skips_dangling_ids() {
        let users = vec![user("u1", "Ada"), user("u2", "Grace")];
        let index = IdIndex::new(&users);
        let ids = vec![
            RecordId::from("u2"),
            RecordId::from("gone"),
            RecordId::from("u1"),
        ];
        let names = resolve_names(&ids, &index, |u| u.display_name().to_string());
        assert_eq!(names, vec!["Grace", "Ada"]);
    }
}
