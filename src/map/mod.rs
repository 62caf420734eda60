// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Map file parsing.
//!
//! A map is a plain-text file:
//!
//! ```text
//! 3
//! 5 4
//! S-+-T
//! .*|*.
//! ..+..
//! .....
//! ```
//!
//! Line one is the quiver size, line two is `width height`, and the
//! remaining lines are the grid rows, one glyph per cell:
//!
//! | glyph | cell kind       |
//! |-------|-----------------|
//! | `S`   | start           |
//! | `T`   | target          |
//! | `-`   | horizontal path |
//! | `\|`  | vertical path   |
//! | `+`   | cross path      |
//! | `*`   | black hole      |
//! | `.`   | plain           |
//!
//! Adjacent cells are neighbours in the four compass slots; slots past the
//! border stay empty. Exactly one start cell is required.

use crate::errors::SearchError;
use crate::grid::{Cell, CellGraph, CellId, CellKind, Direction};
use std::fs;
use std::io;
use std::path::Path;

/// Read and parse a map file.
///
/// A missing file is reported as `FileNotFound`; any other read problem as
/// `IOFailure`. Parse problems are `InvalidMapFormat`. None are retried.
pub fn load(path: &Path) -> Result<CellGraph, SearchError> {
    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => SearchError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => SearchError::IoFailure(err),
    })?;
    parse(&text)
}

/// Parse map text into a cell graph.
pub fn parse(text: &str) -> Result<CellGraph, SearchError> {
    let mut lines = text.lines();

    let quiver_line = lines
        .next()
        .ok_or_else(|| invalid("missing quiver size line"))?;
    let quiver_size: u32 = quiver_line
        .trim()
        .parse()
        .map_err(|_| invalid(&format!("invalid quiver size {:?}", quiver_line.trim())))?;
    if quiver_size == 0 {
        return Err(invalid("quiver size must be at least 1"));
    }

    let dim_line = lines
        .next()
        .ok_or_else(|| invalid("missing dimension line"))?;
    let mut dims = dim_line.split_whitespace();
    let width: usize = parse_dimension(dims.next(), dim_line)?;
    let height: usize = parse_dimension(dims.next(), dim_line)?;
    if dims.next().is_some() {
        return Err(invalid(&format!(
            "expected \"width height\", got {dim_line:?}"
        )));
    }
    if width == 0 || height == 0 {
        return Err(invalid("map dimensions must be positive"));
    }

    let mut cells = Vec::with_capacity(width * height);
    let mut start = None;
    for row in 0..height {
        let row_line = lines
            .next()
            .ok_or_else(|| invalid(&format!("missing row {row}: expected {height} rows")))?;
        let glyphs: Vec<char> = row_line.chars().collect();
        if glyphs.len() != width {
            return Err(invalid(&format!(
                "row {row} has {} cells, expected {width}",
                glyphs.len()
            )));
        }
        for (col, glyph) in glyphs.into_iter().enumerate() {
            let id = CellId(row * width + col);
            let kind = kind_for_glyph(glyph)
                .ok_or_else(|| invalid(&format!("unknown cell glyph {glyph:?} in row {row}")))?;
            if kind == CellKind::Start {
                if start.replace(id).is_some() {
                    return Err(invalid("map has more than one start cell"));
                }
            }
            cells.push(Cell::new(id, kind));
        }
    }
    if let Some(extra) = lines.next() {
        if !extra.trim().is_empty() {
            return Err(invalid(&format!("unexpected content after grid: {extra:?}")));
        }
    }

    let start = start.ok_or_else(|| invalid("map has no start cell"))?;
    wire_neighbours(&mut cells, width, height);

    Ok(CellGraph::from_parts(cells, start, quiver_size))
}

fn parse_dimension(field: Option<&str>, line: &str) -> Result<usize, SearchError> {
    field
        .and_then(|f| f.parse().ok())
        .ok_or_else(|| invalid(&format!("expected \"width height\", got {line:?}")))
}

fn kind_for_glyph(glyph: char) -> Option<CellKind> {
    match glyph {
        'S' => Some(CellKind::Start),
        'T' => Some(CellKind::Target),
        '-' => Some(CellKind::HorizontalPath),
        '|' => Some(CellKind::VerticalPath),
        '+' => Some(CellKind::CrossPath),
        '*' => Some(CellKind::BlackHole),
        '.' => Some(CellKind::Plain),
        _ => None,
    }
}

fn wire_neighbours(cells: &mut [Cell], width: usize, height: usize) {
    for row in 0..height {
        for col in 0..width {
            let idx = row * width + col;
            if row > 0 {
                cells[idx].set_neighbour(Direction::North, CellId(idx - width));
            }
            if col + 1 < width {
                cells[idx].set_neighbour(Direction::East, CellId(idx + 1));
            }
            if row + 1 < height {
                cells[idx].set_neighbour(Direction::South, CellId(idx + width));
            }
            if col > 0 {
                cells[idx].set_neighbour(Direction::West, CellId(idx - 1));
            }
        }
    }
}

fn invalid(message: &str) -> SearchError {
    SearchError::InvalidMapFormat(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_MAP: &str = "1\n3 1\nS+T\n";

    #[test]
    fn test_parse_small_map() {
        let graph = parse(SMALL_MAP).unwrap();
        assert_eq!(graph.quiver_size(), 1);
        assert_eq!(graph.cell_count(), 3);
        assert_eq!(graph.start(), CellId(0));
        assert_eq!(graph.kind(CellId(1)), CellKind::CrossPath);
        assert_eq!(graph.kind(CellId(2)), CellKind::Target);
    }

    #[test]
    fn test_neighbours_wired_row_major() {
        let graph = parse("1\n2 2\nS+\n|T\n").unwrap();
        assert_eq!(graph.neighbour(CellId(0), Direction::East), Some(CellId(1)));
        assert_eq!(graph.neighbour(CellId(0), Direction::South), Some(CellId(2)));
        assert_eq!(graph.neighbour(CellId(0), Direction::North), None);
        assert_eq!(graph.neighbour(CellId(0), Direction::West), None);
        assert_eq!(graph.neighbour(CellId(3), Direction::North), Some(CellId(1)));
        assert_eq!(graph.neighbour(CellId(3), Direction::West), Some(CellId(2)));
    }

    #[test]
    fn test_every_glyph_parses() {
        let graph = parse("2\n7 1\nST-|+*.\n").unwrap();
        let kinds: Vec<CellKind> = (0..7).map(|i| graph.kind(CellId(i))).collect();
        assert_eq!(
            kinds,
            vec![
                CellKind::Start,
                CellKind::Target,
                CellKind::HorizontalPath,
                CellKind::VerticalPath,
                CellKind::CrossPath,
                CellKind::BlackHole,
                CellKind::Plain,
            ]
        );
    }

    #[test]
    fn test_crlf_tolerated() {
        let graph = parse("1\r\n3 1\r\nS+T\r\n").unwrap();
        assert_eq!(graph.cell_count(), 3);
    }

    #[test]
    fn test_rejects_bad_quiver() {
        assert!(matches!(
            parse("zero\n3 1\nS+T\n"),
            Err(SearchError::InvalidMapFormat(_))
        ));
        assert!(matches!(
            parse("0\n3 1\nS+T\n"),
            Err(SearchError::InvalidMapFormat(_))
        ));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(parse("1\n3\nS+T\n").is_err());
        assert!(parse("1\n0 1\n\n").is_err());
        assert!(parse("1\n3 1 9\nS+T\n").is_err());
    }

    #[test]
    fn test_rejects_row_length_mismatch() {
        let err = parse("1\n3 1\nS+\n").unwrap_err();
        assert!(matches!(err, SearchError::InvalidMapFormat(_)));
    }

    #[test]
    fn test_rejects_missing_row() {
        assert!(parse("1\n3 2\nS+T\n").is_err());
    }

    #[test]
    fn test_rejects_unknown_glyph() {
        assert!(parse("1\n3 1\nS?T\n").is_err());
    }

    #[test]
    fn test_rejects_start_count() {
        assert!(parse("1\n3 1\nT+T\n").is_err());
        assert!(parse("1\n3 1\nS+S\n").is_err());
    }

    #[test]
    fn test_rejects_trailing_garbage() {
        assert!(parse("1\n3 1\nS+T\nextra\n").is_err());
    }
}
