//! Field registry: the flattened, checked view of a layout.

use std::collections::HashMap;

use crate::{Field, FieldName, Layout, LayoutError};

/// Position of a field inside a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSlot {
    /// Row index.
    pub row: usize,
    /// 0 for full-width rows and left cells, 1 for right cells.
    pub column: usize,
}

/// Flattened index of the data-bearing fields of a layout.
///
/// Built once per layout. Resolution fails if names collide or a confirmation
/// field points at something it cannot compare against.
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    /// Data-bearing names in render order.
    names: Vec<FieldName>,
    slots: HashMap<FieldName, FieldSlot>,
    /// Target name -> confirmation fields comparing against it.
    dependents: HashMap<FieldName, Vec<FieldName>>,
}

impl FieldRegistry {
    /// Flatten and check a layout.
    pub fn resolve(layout: &Layout) -> Result<Self, LayoutError> {
        let mut registry = Self::default();
        let mut duplicates: Vec<FieldName> = Vec::new();

        for (row, fields) in layout.rows().iter().enumerate() {
            for (column, field) in fields.fields().enumerate() {
                let Some(name) = field.name() else {
                    continue;
                };

                if registry.slots.contains_key(name) {
                    if !duplicates.contains(name) {
                        duplicates.push(name.clone());
                    }
                    continue;
                }

                registry.names.push(name.clone());
                registry.slots.insert(name.clone(), FieldSlot { row, column });
            }
        }

        if !duplicates.is_empty() {
            return Err(LayoutError::DuplicateNames(duplicates));
        }

        for field in layout.fields() {
            let (Some(name), Some(target)) = (field.name(), field.confirmation_target()) else {
                continue;
            };

            let Some(slot) = registry.slots.get(target) else {
                return Err(LayoutError::UnknownConfirmationTarget {
                    field: name.clone(),
                    target: target.clone(),
                });
            };

            let target_field = field_at(layout, *slot);
            if target == name || !target_field.is_some_and(|f| f.kind().is_text_valued()) {
                return Err(LayoutError::InvalidConfirmationTarget {
                    field: name.clone(),
                    target: target.clone(),
                });
            }

            registry
                .dependents
                .entry(target.clone())
                .or_default()
                .push(name.clone());
        }

        tracing::trace!(fields = registry.names.len(), "resolved form layout");
        Ok(registry)
    }

    /// Data-bearing names in render order.
    pub fn names(&self) -> &[FieldName] {
        &self.names
    }

    /// Where the named field sits in the layout.
    pub fn slot(&self, name: &str) -> Option<FieldSlot> {
        self.slots.get(name).copied()
    }

    /// Look up the named field in the layout it was resolved from.
    pub fn field<'a>(&self, layout: &'a Layout, name: &str) -> Option<&'a Field> {
        self.slot(name).and_then(|slot| field_at(layout, slot))
    }

    /// Confirmation fields that compare against the named field.
    pub fn dependents(&self, name: &str) -> &[FieldName] {
        self.dependents.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Number of data-bearing fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn field_at(layout: &Layout, slot: FieldSlot) -> Option<&Field> {
    layout.rows().get(slot.row)?.fields().nth(slot.column)
}
