//! Trait object interface for pipeline stages.
//!
//! Every table-level transformation implements [`Stage`], which lets the
//! pipeline store them as `Box<dyn Stage>`.

use crate::dataset::Table;
use crate::preprocessing::error::Result;

/// A table-to-table transformation.
///
/// `apply` borrows its input and returns a new table; the input is never
/// modified. Stages tolerate tables that lack the columns they act on.
pub trait Stage {
    /// Stage name for progress messages.
    fn name(&self) -> &'static str;

    /// Transform `table` into a new table.
    fn apply(&self, table: &Table) -> Result<Table>;
}

impl<S: Stage + ?Sized> Stage for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn apply(&self, table: &Table) -> Result<Table> {
        (**self).apply(table)
    }
}
