//! Line-oriented edge-list parsing.
//!
//! Each record is `left right weight` separated by whitespace. Text after a
//! `#` is a comment and blank lines are skipped.

use std::str::FromStr;

/// One edge read from an edge-list file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeRecord {
    /// First endpoint.
    pub left: usize,
    /// Second endpoint.
    pub right: usize,
    /// Edge weight as written in the file.
    pub weight: f64,
}

/// Parses a single edge-list line.
///
/// Returns `Ok(None)` for blank and comment-only lines.
///
/// # Errors
/// Returns a human-readable reason when the line does not hold exactly three
/// fields or a field fails to parse.
///
/// # Examples
/// ```
/// use wgraph_cli::cli::{EdgeRecord, parse_edge_line};
///
/// let record = parse_edge_line("0 3 1.5 # bridge").expect("valid line");
/// assert_eq!(record, Some(EdgeRecord { left: 0, right: 3, weight: 1.5 }));
/// assert_eq!(parse_edge_line("   # comment"), Ok(None));
/// ```
pub fn parse_edge_line(line: &str) -> Result<Option<EdgeRecord>, String> {
    let content = line.split_once('#').map_or(line, |(before, _)| before);
    let mut fields = content.split_whitespace();
    let Some(first) = fields.next() else {
        return Ok(None);
    };
    let (Some(second), Some(third)) = (fields.next(), fields.next()) else {
        return Err("expected `left right weight`".to_owned());
    };
    if fields.next().is_some() {
        return Err("unexpected trailing fields".to_owned());
    }
    Ok(Some(EdgeRecord {
        left: parse_field(first, "left vertex")?,
        right: parse_field(second, "right vertex")?,
        weight: parse_field(third, "weight")?,
    }))
}

fn parse_field<T>(raw: &str, name: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|err| format!("invalid {name} `{raw}`: {err}"))
}
