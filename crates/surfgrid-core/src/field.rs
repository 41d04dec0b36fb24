//! Result-field catalog types.
//!
//! A [`FieldEntry`] is one named result surfaced to the results browser: an
//! identity field (ids as scalars), a derived field (computed from geometry),
//! or an imported field (read from the source file). Entries live in a
//! [`FieldCatalog`] in a fixed presentation order; the catalog is built once
//! per load by a single explicit builder, never mutated incrementally.

use glam::DVec3;

use crate::error::{Result, SurfgridError};

/// Whether a field's values are indexed by node or by filtered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldBinding {
    /// One value per node, aligned with the node id array.
    Node,
    /// One value per filtered element, aligned with the element id array.
    Cell,
}

/// The provenance of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// An id array surfaced as a scalar field (node id, element id, region).
    Identity,
    /// Computed during the load (normal components, per-cell node counts).
    Derived,
    /// A named scalar column read from the source file.
    Imported,
}

/// The realized values of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValues {
    /// Dense scalar array.
    Scalar(Vec<f64>),
    /// Dense vector array (the composite normal entry).
    Vector(Vec<DVec3>),
}

impl FieldValues {
    /// Returns the number of values.
    pub fn len(&self) -> usize {
        match self {
            FieldValues::Scalar(values) => values.len(),
            FieldValues::Vector(values) => values.len(),
        }
    }

    /// Returns whether the array is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One named result field with binding and display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEntry {
    /// Display name (also the lookup key within a catalog).
    pub name: String,
    /// Node or cell binding.
    pub binding: FieldBinding,
    /// Identity, derived, or imported.
    pub kind: FieldKind,
    /// The realized values; always eager.
    pub values: FieldValues,
    /// Printf-style display format hint. Identity fields carry none.
    pub data_format: Option<String>,
}

impl FieldEntry {
    /// Creates an identity field (no format hint).
    pub fn identity(name: impl Into<String>, binding: FieldBinding, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            binding,
            kind: FieldKind::Identity,
            values: FieldValues::Scalar(values),
            data_format: None,
        }
    }

    /// Creates a derived scalar field.
    pub fn derived(
        name: impl Into<String>,
        binding: FieldBinding,
        values: Vec<f64>,
        data_format: &str,
    ) -> Self {
        Self {
            name: name.into(),
            binding,
            kind: FieldKind::Derived,
            values: FieldValues::Scalar(values),
            data_format: Some(data_format.to_string()),
        }
    }

    /// Creates a derived vector field (the composite normal display entry).
    pub fn derived_vector(
        name: impl Into<String>,
        binding: FieldBinding,
        values: Vec<DVec3>,
        data_format: &str,
    ) -> Self {
        Self {
            name: name.into(),
            binding,
            kind: FieldKind::Derived,
            values: FieldValues::Vector(values),
            data_format: Some(data_format.to_string()),
        }
    }

    /// Creates an imported cell-bound scalar field.
    pub fn imported(name: impl Into<String>, values: Vec<f64>, data_format: &str) -> Self {
        Self {
            name: name.into(),
            binding: FieldBinding::Cell,
            kind: FieldKind::Imported,
            values: FieldValues::Scalar(values),
            data_format: Some(data_format.to_string()),
        }
    }
}

/// An ordered catalog of result fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldCatalog {
    entries: Vec<FieldEntry>,
}

impl FieldCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, preserving presentation order.
    pub fn push(&mut self, entry: FieldEntry) {
        self.entries.push(entry);
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in presentation order.
    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    /// Finds an entry by name.
    pub fn get(&self, name: &str) -> Option<&FieldEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Iterates over the entries in presentation order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldEntry> {
        self.entries.iter()
    }

    /// Verifies that every entry's length matches its owning id array.
    pub fn validate(&self, num_nodes: usize, num_cells: usize) -> Result<()> {
        for entry in &self.entries {
            let expected = match entry.binding {
                FieldBinding::Node => num_nodes,
                FieldBinding::Cell => num_cells,
            };
            if entry.values.len() != expected {
                return Err(SurfgridError::FieldLengthMismatch {
                    name: entry.name.clone(),
                    expected,
                    actual: entry.values.len(),
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FieldCatalog {
    type Item = &'a FieldEntry;
    type IntoIter = std::slice::Iter<'a, FieldEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
