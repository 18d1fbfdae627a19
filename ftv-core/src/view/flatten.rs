//! src/view/flatten.rs
//! ============================================================================
//! # Tree Flattening
//!
//! Turns the nested expand/collapse tree into the ordered `(entry, depth)`
//! sequence the virtualized renderer consumes. Pre-order depth-first: an
//! expanded directory's children are spliced in immediately after it, at
//! `depth + 1`, before the next sibling. Collapsed directories contribute
//! exactly one row.

use smallvec::SmallVec;

use crate::fs::data_source::TreeDataSource;
use crate::model::entry::TreeEntry;
use crate::model::tree_state::TreeState;

/// Deepest row depth the flattener will descend to. Children of a row at
/// this depth are not visited, which terminates traversal of symlink cycles
/// (a cycle produces distinct, ever-growing paths, so only a depth bound
/// is a reliable guard without extra syscalls).
pub const MAX_DEPTH: usize = 64;

/// One row of the flattened tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
    pub entry: TreeEntry,
    pub depth: usize,
}

impl FlatRow {
    pub fn new(entry: TreeEntry, depth: usize) -> Self {
        Self { entry, depth }
    }
}

/// Flattens the tree exposed by `source` under the expansion set in `state`.
///
/// Iterative with an explicit stack: the tree shape is user input, so no
/// amount of expansion may overflow the call stack.
pub fn flatten_tree<D: TreeDataSource + ?Sized>(source: &D, state: &TreeState) -> Vec<FlatRow> {
    let mut rows: Vec<FlatRow> = Vec::new();
    let mut stack: SmallVec<[(TreeEntry, usize); 32]> = SmallVec::new();

    // Roots pushed in reverse so the stack pops them in listing order.
    for entry in source.root_items().into_iter().rev() {
        stack.push((entry, 0));
    }

    while let Some((entry, depth)) = stack.pop() {
        // Children go on the stack above the next sibling, so they pop
        // immediately after this row: pre-order by construction.
        if depth < MAX_DEPTH && entry.can_expand() && state.is_expanded(&entry) {
            for child in source.children(&entry).into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        rows.push(FlatRow::new(entry, depth));
    }

    rows
}
