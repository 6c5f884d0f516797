//! Generic list controller shared by every list screen.
//!
//! A screen holds its records in a [`ListController`] and renders the
//! projection: the records that match the free-text filter, ordered by the
//! active sort directive. The projection is derived on demand and never
//! mutates the source collection.

use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Identified, Panel, PanelToggle, RecordId, ViewMode};

/// Direction of a sort directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow shown next to the active sort option.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// The active sort key and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortDirective<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K> SortDirective<K> {
    pub fn ascending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// Compare two field values under this directive.
    ///
    /// Missing values always sort after present ones, whatever the direction.
    pub fn compare_values(&self, a: &SortValue<'_>, b: &SortValue<'_>) -> Ordering {
        match (a.is_missing(), b.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ordering = a.compare(b);
                match self.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            }
        }
    }
}

/// Comparable view of a single record field.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    Text(Cow<'a, str>),
    Number(f64),
    Time(DateTime<Utc>),
    Missing,
}

impl SortValue<'_> {
    pub fn is_missing(&self) -> bool {
        matches!(self, SortValue::Missing)
    }

    fn kind_rank(&self) -> u8 {
        match self {
            SortValue::Number(_) => 0,
            SortValue::Time(_) => 1,
            SortValue::Text(_) => 2,
            SortValue::Missing => 3,
        }
    }

    /// Ascending comparison of two values.
    ///
    /// Text compares with [`locale_compare`], numbers and timestamps
    /// numerically. Values of different kinds are ranked by kind so the
    /// ordering stays total.
    pub fn compare(&self, other: &SortValue<'_>) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => locale_compare(a, b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Time(a), SortValue::Time(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl<'a> From<&'a str> for SortValue<'a> {
    fn from(value: &'a str) -> Self {
        SortValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<Option<&'a str>> for SortValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(SortValue::Missing, SortValue::from)
    }
}

impl From<Option<f64>> for SortValue<'_> {
    fn from(value: Option<f64>) -> Self {
        value.map_or(SortValue::Missing, SortValue::Number)
    }
}

impl From<Option<DateTime<Utc>>> for SortValue<'_> {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(SortValue::Missing, SortValue::Time)
    }
}

/// Case-aware string ordering for display lists.
///
/// Strings are compared case-insensitively first; when they differ only in
/// case, the lower-case variant sorts first ("gala" < "Gala" < "picnic").
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a.cmp(folded_b).then_with(|| {
        a.chars()
            .zip(b.chars())
            .find(|(x, y)| x != y)
            .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            })
            .unwrap_or_else(|| a.len().cmp(&b.len()))
    })
}

fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

fn same_folded(a: &str, b: &str) -> bool {
    fold_case(a) == fold_case(b)
}

/// True when any field contains `query` as a case-insensitive substring.
///
/// An empty query matches everything.
pub fn matches_query<S: AsRef<str>>(fields: impl IntoIterator<Item = S>, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = fold_case(query);
    fields
        .into_iter()
        .any(|field| fold_case(field.as_ref()).contains(&needle))
}

/// Distinct non-empty values in case-aware order, e.g. the statuses offered
/// as quick filters.
pub fn distinct_values<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::new();
    for value in values.into_iter().flatten() {
        let value = value.trim();
        if !value.is_empty() && !distinct.iter().any(|seen| same_folded(seen, value)) {
            distinct.push(value.to_string());
        }
    }
    distinct.sort_by(|a, b| locale_compare(a, b));
    distinct
}

/// Sortable keys of one record type.
pub trait SortField: Copy + Eq + std::fmt::Debug + 'static {
    /// Every key, in the order the sort options are offered.
    const ALL: &'static [Self];

    /// Label for the sort option.
    fn label(self) -> &'static str;
}

/// A record that can be shown in a list screen.
pub trait Listable: Identified + Clone + PartialEq + std::fmt::Debug + 'static {
    type SortKey: SortField;

    /// Creation timestamp used for the default newest-first ordering.
    fn created_at(&self) -> Option<DateTime<Utc>>;

    /// Fields the free-text filter searches.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of `key` for this record.
    fn sort_value(&self, key: Self::SortKey) -> SortValue<'_>;
}

/// Filter and sort `records` into a projection.
///
/// `extra_fields` supplies derived searchable text per record, such as the
/// name of a joined user. The sort is stable, so records that compare equal
/// keep their relative order.
pub fn project<'a, R, F, S>(
    records: &'a [R],
    query: &str,
    sort: Option<SortDirective<R::SortKey>>,
    extra_fields: F,
) -> Vec<&'a R>
where
    R: Listable,
    F: Fn(&R) -> Vec<S>,
    S: AsRef<str>,
{
    let mut projection: Vec<&R> = records
        .iter()
        .filter(|record| {
            matches_query(record.search_fields(), query)
                || matches_query(extra_fields(*record), query)
        })
        .collect();

    if let Some(directive) = sort {
        projection.sort_by(|a, b| {
            directive.compare_values(&a.sort_value(directive.key), &b.sort_value(directive.key))
        });
    }

    projection
}

/// Local state of one list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ListController<R: Listable> {
    records: Vec<R>,
    query: String,
    sort: Option<SortDirective<R::SortKey>>,
    view: ViewMode,
    panel: PanelToggle,
    loading: bool,
}

impl<R: Listable> Default for ListController<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Listable> ListController<R> {
    /// Create an empty controller waiting for its first load.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            query: String::new(),
            sort: None,
            view: ViewMode::default(),
            panel: PanelToggle::default(),
            loading: true,
        }
    }

    /// Replace the records with a fresh fetch, newest first.
    pub fn load(&mut self, mut records: Vec<R>) {
        records.sort_by(|a, b| match (a.created_at(), b.created_at()) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        self.records = records;
        self.loading = false;
    }

    /// Mark the fetch as finished without data.
    pub fn fail_load(&mut self) {
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn sort(&self) -> Option<SortDirective<R::SortKey>> {
        self.sort
    }

    /// Direction of `key` if it is the active sort key.
    pub fn direction_of(&self, key: R::SortKey) -> Option<SortDirection> {
        self.sort
            .filter(|directive| directive.key == key)
            .map(|directive| directive.direction)
    }

    /// Select `key` as the sort key.
    ///
    /// Selecting the active key flips its direction; a new key starts ascending.
    pub fn toggle_sort(&mut self, key: R::SortKey) {
        self.sort = Some(match self.sort {
            Some(directive) if directive.key == key => SortDirective {
                key,
                direction: directive.direction.toggled(),
            },
            _ => SortDirective::ascending(key),
        });
    }

    /// Sort options in offer order, with the direction of the active one.
    pub fn sort_options(&self) -> Vec<(&'static str, Option<SortDirection>)> {
        <R::SortKey as SortField>::ALL
            .iter()
            .map(|key| (key.label(), self.direction_of(*key)))
            .collect()
    }

    /// `toggle_sort` for the key at `index` in [`SortField::ALL`].
    pub fn toggle_sort_at(&mut self, index: usize) {
        if let Some(key) = <R::SortKey as SortField>::ALL.get(index).copied() {
            self.toggle_sort(key);
        }
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
    }

    pub fn panel(&self) -> Option<Panel> {
        self.panel.open()
    }

    pub fn toggle_panel(&mut self, panel: Panel) {
        self.panel.toggle(panel);
    }

    /// Projection over the records' own searchable fields.
    pub fn projection(&self) -> Vec<R> {
        self.projection_with(|_| Vec::<&str>::new())
    }

    /// Projection that also searches derived fields.
    pub fn projection_with<F, S>(&self, extra_fields: F) -> Vec<R>
    where
        F: Fn(&R) -> Vec<S>,
        S: AsRef<str>,
    {
        project(&self.records, &self.query, self.sort, extra_fields)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.record_id() == id)
    }

    /// Merge `record` into the list: replace the record with the same id in
    /// place, or prepend it when it is new.
    pub fn upsert(&mut self, record: R) {
        match self
            .records
            .iter_mut()
            .find(|existing| existing.record_id() == record.record_id())
        {
            Some(existing) => *existing = record,
            None => self.records.insert(0, record),
        }
    }

    /// Remove the record with `id`, returning it.
    pub fn remove(&mut self, id: &RecordId) -> Option<R> {
        let position = self
            .records
            .iter()
            .position(|record| record.record_id() == id)?;
        Some(self.records.remove(position))
    }
}
