// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-operation result values and their log formatting.

use alloc::vec::Vec;
use core::fmt;

use crate::types::Side;

/// What a single engine operation did.
///
/// Results are ephemeral: produced per call, never stored by the engine.
/// Every variant is a successful outcome; "duplicate" and "not found" are
/// distinct results, not errors.
///
/// The [`Display`](fmt::Display) impl produces the human-readable sentences
/// the operation log shows, for example `Inserted 40 to the left of 50` or
/// `Found 60. Path: 50 -> 70 -> 60`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OperationResult<T> {
    /// A new value was attached under `parent`, or as the root when `parent`
    /// is `None`.
    Inserted {
        /// The inserted value.
        value: T,
        /// The parent's value and the side the new node was attached on.
        parent: Option<(T, Side)>,
    },
    /// The value was already present; the tree is unchanged.
    DuplicateIgnored {
        /// The value that was offered.
        value: T,
    },
    /// A node with no children was detached.
    DeletedLeaf {
        /// The deleted value.
        value: T,
    },
    /// A node with exactly one child was removed and its child spliced into
    /// its position.
    DeletedWithOneChild {
        /// The deleted value.
        value: T,
        /// The value of the child that took the deleted node's place.
        replaced_by: T,
    },
    /// A node with two children had its value overwritten by its in-order
    /// successor, and the successor's original node was removed from the
    /// right subtree.
    DeletedWithSuccessor {
        /// The requested (overwritten) value.
        value: T,
        /// The promoted successor value.
        successor: T,
    },
    /// No node holds this value; the tree is unchanged.
    NotFoundForDeletion {
        /// The value that was requested for deletion.
        value: T,
    },
    /// The value was found; `path` lists every visited value, root first,
    /// target last.
    SearchFound {
        /// The value that was found.
        value: T,
        /// Root-to-target visit path, inclusive of the target.
        path: Vec<T>,
    },
    /// The value is absent; `path_tried` lists every visited value, ending
    /// at the last node before descent hit an absent child.
    SearchNotFound {
        /// The value that was looked for.
        value: T,
        /// Root-to-last-visited path.
        path_tried: Vec<T>,
    },
}

impl<T: fmt::Display + PartialOrd> fmt::Display for OperationResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inserted {
                value,
                parent: None,
            } => write!(f, "Inserted {value} as root"),
            Self::Inserted {
                value,
                parent: Some((parent, side)),
            } => {
                let side = match side {
                    Side::Left => "left",
                    Side::Right => "right",
                };
                write!(f, "Inserted {value} to the {side} of {parent}")
            }
            Self::DuplicateIgnored { value } => {
                write!(f, "Value {value} already exists in the tree")
            }
            Self::DeletedLeaf { value } => write!(f, "Deleted leaf node {value}"),
            Self::DeletedWithOneChild { value, replaced_by } => {
                // The side is recoverable from the ordering: a smaller
                // replacement can only have been the left child.
                let side = if replaced_by < value { "left" } else { "right" };
                write!(f, "Deleted node {value} and replaced with {side} child")
            }
            Self::DeletedWithSuccessor { value, successor } => {
                write!(f, "Replaced {value} with successor {successor}")
            }
            Self::NotFoundForDeletion { value } => {
                write!(f, "Value {value} not found; nothing deleted")
            }
            Self::SearchFound { value, path } => {
                write!(f, "Found {value}. Path: ")?;
                write_path(f, path)
            }
            Self::SearchNotFound { value, path_tried } => {
                write!(f, "Value {value} not found. Searched path: ")?;
                write_path(f, path_tried)
            }
        }
    }
}

fn write_path<T: fmt::Display>(f: &mut fmt::Formatter<'_>, path: &[T]) -> fmt::Result {
    let mut first = true;
    for v in path {
        if !first {
            f.write_str(" -> ")?;
        }
        first = false;
        write!(f, "{v}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn insert_messages() {
        let root: OperationResult<i64> = OperationResult::Inserted {
            value: 50,
            parent: None,
        };
        assert_eq!(root.to_string(), "Inserted 50 as root");

        let left = OperationResult::Inserted {
            value: 30,
            parent: Some((50, Side::Left)),
        };
        assert_eq!(left.to_string(), "Inserted 30 to the left of 50");

        let right = OperationResult::Inserted {
            value: 70,
            parent: Some((50, Side::Right)),
        };
        assert_eq!(right.to_string(), "Inserted 70 to the right of 50");

        let dup = OperationResult::DuplicateIgnored { value: 50 };
        assert_eq!(dup.to_string(), "Value 50 already exists in the tree");
    }

    #[test]
    fn delete_messages() {
        let leaf: OperationResult<i64> = OperationResult::DeletedLeaf { value: 20 };
        assert_eq!(leaf.to_string(), "Deleted leaf node 20");

        let one = OperationResult::DeletedWithOneChild {
            value: 70,
            replaced_by: 80,
        };
        assert_eq!(one.to_string(), "Deleted node 70 and replaced with right child");

        let one_left = OperationResult::DeletedWithOneChild {
            value: 70,
            replaced_by: 60,
        };
        assert_eq!(
            one_left.to_string(),
            "Deleted node 70 and replaced with left child"
        );

        let two = OperationResult::DeletedWithSuccessor {
            value: 30,
            successor: 40,
        };
        assert_eq!(two.to_string(), "Replaced 30 with successor 40");

        let missing = OperationResult::NotFoundForDeletion { value: 99 };
        assert_eq!(missing.to_string(), "Value 99 not found; nothing deleted");
    }

    #[test]
    fn search_messages() {
        let found: OperationResult<i64> = OperationResult::SearchFound {
            value: 60,
            path: vec![50, 70, 60],
        };
        assert_eq!(found.to_string(), "Found 60. Path: 50 -> 70 -> 60");

        let missing = OperationResult::SearchNotFound {
            value: 99,
            path_tried: vec![50, 70, 80],
        };
        assert_eq!(
            missing.to_string(),
            "Value 99 not found. Searched path: 50 -> 70 -> 80"
        );
    }
}
