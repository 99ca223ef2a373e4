use std::collections::BTreeSet;
use std::fmt;

use crate::cell::CellValue;
use crate::error::GridError;

/// Identifier for a leaf column, unique within a schema.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Which filter UI and predicate a column uses.
///
/// Chosen once at schema-build time from a sample value, never
/// re-detected per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColumnFilterKind {
    /// Fuzzy text matching against the cell's display string.
    Text,
    /// Inclusive `[min, max]` range over numeric cells.
    NumericRange,
}

type Accessor<R> = Box<dyn Fn(&R) -> CellValue + Send + Sync>;

/// Definition of one leaf column: accessor, label, capability flags.
pub struct ColumnDef<R> {
    id: ColumnId,
    header: String,
    group: Option<String>,
    accessor: Accessor<R>,
    sortable: bool,
    filterable: bool,
    visible_by_default: bool,
}

impl<R> ColumnDef<R> {
    /// Create a column. Sortable, filterable, and visible by default.
    pub fn new(
        id: impl Into<ColumnId>,
        header: impl Into<String>,
        accessor: impl Fn(&R) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            group: None,
            accessor: Box::new(accessor),
            sortable: true,
            filterable: true,
            visible_by_default: true,
        }
    }

    /// Place this column under a shared parent header.
    pub fn group(mut self, label: impl Into<String>) -> Self {
        self.group = Some(label.into());
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Start hidden; the user can reveal it from the visibility menu.
    pub fn hidden_by_default(mut self) -> Self {
        self.visible_by_default = false;
        self
    }

    pub fn id(&self) -> &ColumnId {
        &self.id
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn group_label(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    pub fn default_visible(&self) -> bool {
        self.visible_by_default
    }

    /// Extract this column's cell from a row.
    pub fn cell(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }
}

impl<R> fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("group", &self.group)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("visible_by_default", &self.visible_by_default)
            .finish_non_exhaustive()
    }
}

/// Validated, ordered column set with inferred filter kinds.
pub struct Schema<R> {
    columns: Vec<ColumnDef<R>>,
    kinds: Vec<ColumnFilterKind>,
}

impl<R> Schema<R> {
    /// Build a schema, validating id uniqueness and inferring each
    /// filterable column's filter kind from the first non-missing cell
    /// in `sample`. An empty sample defaults every column to text.
    pub fn new(columns: Vec<ColumnDef<R>>, sample: &[R]) -> Result<Self, GridError> {
        if columns.is_empty() {
            return Err(GridError::EmptySchema);
        }
        let mut seen = BTreeSet::new();
        for col in &columns {
            if !seen.insert(col.id.clone()) {
                return Err(GridError::DuplicateColumn(col.id.clone()));
            }
        }
        let kinds = columns
            .iter()
            .map(|col| infer_kind(col, sample))
            .collect();
        Ok(Self { columns, kinds })
    }

    pub fn columns(&self) -> &[ColumnDef<R>] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, id: &ColumnId) -> Option<&ColumnDef<R>> {
        self.columns.iter().find(|col| &col.id == id)
    }

    pub fn position(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|col| &col.id == id)
    }

    /// The filter kind inferred for a column at build time.
    pub fn filter_kind(&self, id: &ColumnId) -> Option<ColumnFilterKind> {
        self.position(id).map(|ix| self.kinds[ix])
    }
}

impl<R> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("columns", &self.columns)
            .field("kinds", &self.kinds)
            .finish()
    }
}

fn infer_kind<R>(col: &ColumnDef<R>, sample: &[R]) -> ColumnFilterKind {
    let first = sample.iter().map(|row| col.cell(row)).find(|c| !c.is_missing());
    match first {
        Some(CellValue::Number(_)) => ColumnFilterKind::NumericRange,
        _ => ColumnFilterKind::Text,
    }
}

/// Group adjacent visible columns for a two-level header: returns
/// `(group label, span)` pairs in display order. Ungrouped columns get
/// a `None` label with span 1.
pub fn header_groups<R>(columns: &[&ColumnDef<R>]) -> Vec<(Option<String>, usize)> {
    let mut groups: Vec<(Option<String>, usize)> = Vec::new();
    for col in columns {
        let label = col.group_label().map(str::to_string);
        match groups.last_mut() {
            Some((last, span)) if label.is_some() && *last == label => *span += 1,
            _ => groups.push((label, 1)),
        }
    }
    groups
}
