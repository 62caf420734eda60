// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Crate-wide error taxonomy.
//!
//! Every failure the simulation can produce is one of these variants. The
//! binary catches them at its run boundary and prints a single diagnostic
//! line per kind; nothing is retried, and a failure mid-run leaves the
//! already-accumulated target count intact.

use crate::stack::EmptyStackError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the search core and its collaborators.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Stack underflow on pop or peek. A programming invariant violation in
    /// the traversal, never a map problem.
    #[error("cannot pop an empty stack")]
    EmptyStack(#[from] EmptyStackError),

    /// A neighbour slot outside 0..4 was requested.
    #[error("cannot use an index higher than 3 or lower than 0 to access cell neighbours (got {index})")]
    IndexOutOfRange { index: usize },

    /// A cell reference that the movement rules require was absent.
    #[error("the cell that is being accessed or modified does not exist")]
    NullReference,

    /// The map file was read but does not describe a valid map.
    #[error("invalid map format: {0}")]
    InvalidMapFormat(String),

    /// The map file does not exist.
    #[error("invalid file name given as input: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The map file exists but could not be read.
    #[error("there was a problem reading the file: {0}")]
    IoFailure(io::Error),
}

impl From<io::Error> for SearchError {
    fn from(err: io::Error) -> Self {
        SearchError::IoFailure(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lines_are_single_line() {
        let errors: Vec<SearchError> = vec![
            EmptyStackError.into(),
            SearchError::IndexOutOfRange { index: 7 },
            SearchError::NullReference,
            SearchError::InvalidMapFormat("row 2 has 4 cells, expected 5".into()),
            SearchError::FileNotFound {
                path: PathBuf::from("no-such.map"),
            },
            SearchError::IoFailure(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
        ];
        for err in errors {
            let line = err.to_string();
            assert!(!line.is_empty());
            assert!(!line.contains('\n'));
        }
    }

    #[test]
    fn test_empty_stack_converts() {
        let err: SearchError = EmptyStackError.into();
        assert!(matches!(err, SearchError::EmptyStack(_)));
    }
}
