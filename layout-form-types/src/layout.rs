use crate::Field;

/// One row of a layout: a full-width field or two fields side by side.
#[derive(Debug, Clone)]
pub enum Row {
    Single(Field),
    Pair(Field, Field),
}

impl Row {
    /// The fields of this row, left to right.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        let (first, second) = match self {
            Self::Single(field) => (field, None),
            Self::Pair(left, right) => (left, Some(right)),
        };
        std::iter::once(first).chain(second)
    }
}

impl From<Field> for Row {
    fn from(field: Field) -> Self {
        Self::Single(field)
    }
}

impl From<(Field, Field)> for Row {
    fn from((left, right): (Field, Field)) -> Self {
        Self::Pair(left, right)
    }
}

/// The caller-supplied, ordered structure of a form.
///
/// A layout is presentation-agnostic: it can be rendered to an HTML page,
/// driven in a native window, or scripted in tests. Row order is render order.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    rows: Vec<Row>,
}

impl Layout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append a full-width row.
    pub fn single(mut self, field: impl Into<Field>) -> Self {
        self.rows.push(Row::Single(field.into()));
        self
    }

    /// Append a two-column row.
    pub fn pair(mut self, left: impl Into<Field>, right: impl Into<Field>) -> Self {
        self.rows.push(Row::Pair(left.into(), right.into()));
        self
    }

    /// Append a spacer row.
    pub fn gap(self) -> Self {
        self.single(Field::Gap)
    }

    /// Get the rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// All fields in render order, pairs flattened left then right.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.rows.iter().flat_map(Row::fields)
    }

    /// Check if the layout has any rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
