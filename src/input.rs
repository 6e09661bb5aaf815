#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Reads puzzle descriptions.
//!
//! The format is line-oriented: the first line carries `<width> <height>`,
//! followed by `height` row-clue lines (top to bottom) and `width`
//! column-clue lines (left to right). Each clue line holds the block
//! lengths separated by whitespace; a lone `0` denotes an empty clue.

use std::io::BufRead;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid input at line {0}")]
    Invalid(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A puzzle as read from its textual description, not yet validated
/// against the solver's dimension and fit rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPuzzle {
    pub rows: usize,
    pub cols: usize,
    pub row_clues: Vec<Vec<u16>>,
    pub col_clues: Vec<Vec<u16>>,
}

/// Parses a puzzle description from `reader`.
///
/// # Errors
///
/// Returns [`ParseError::Invalid`] with the 1-based offending line number
/// when a line is missing, holds the wrong number of fields, or a field is
/// not a valid block length, and [`ParseError::Io`] on read failure.
pub fn parse_puzzle<R: BufRead>(reader: R) -> Result<ParsedPuzzle, ParseError> {
    let mut lines = reader.lines();
    let mut lineno = 0usize;

    let mut next_line = move || -> Result<(usize, String), ParseError> {
        lineno += 1;
        match lines.next() {
            // Premature end of input is blamed on the line that is missing.
            Some(line) => Ok((lineno, line?)),
            None => Err(ParseError::Invalid(lineno)),
        }
    };

    let (lineno, header) = next_line()?;
    let mut fields = header.split_whitespace();
    let cols = parse_dim(fields.next(), lineno)?;
    let rows = parse_dim(fields.next(), lineno)?;
    if fields.next().is_some() {
        return Err(ParseError::Invalid(lineno));
    }

    let mut read_clues = |count: usize| -> Result<Vec<Vec<u16>>, ParseError> {
        (0..count)
            .map(|_| {
                let (lineno, line) = next_line()?;
                parse_clue(&line, lineno)
            })
            .collect()
    };

    let row_clues = read_clues(rows)?;
    let col_clues = read_clues(cols)?;

    Ok(ParsedPuzzle {
        rows,
        cols,
        row_clues,
        col_clues,
    })
}

fn parse_dim(field: Option<&str>, lineno: usize) -> Result<usize, ParseError> {
    field
        .and_then(|s| s.parse().ok())
        .ok_or(ParseError::Invalid(lineno))
}

fn parse_clue(line: &str, lineno: usize) -> Result<Vec<u16>, ParseError> {
    let blocks: Vec<u16> = line
        .split_whitespace()
        .map(|field| field.parse().map_err(|_| ParseError::Invalid(lineno)))
        .collect::<Result<_, _>>()?;

    match blocks.as_slice() {
        [] => Err(ParseError::Invalid(lineno)),
        // A lone zero is the empty clue; zero is illegal anywhere else.
        [0] => Ok(Vec::new()),
        _ if blocks.contains(&0) => Err(ParseError::Invalid(lineno)),
        _ => Ok(blocks),
    }
}
