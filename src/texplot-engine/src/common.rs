// Copyright 2026 The Texplot Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::fmt;
use std::{error, result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidCharacter,
    BadCommandStart,
    NumberTooLong,
    BadNumber,
    UnexpectedToken,
    UnclosedGroup,
    UnknownIdent,
    UnknownCommand,
    MissingFuncArg,
    MissingExponent,
    ExtraToken,
    TooComplex,
}

impl ErrorCode {
    /// Stable human-readable text for this code; the CLI surfaces these
    /// verbatim, so changing one is a user-visible change.
    pub fn message(&self) -> &'static str {
        use ErrorCode::*;
        match self {
            InvalidCharacter => "invalid character",
            BadCommandStart => "command must be followed by letters",
            NumberTooLong => "oversized numeric literal",
            BadNumber => "malformed numeric literal",
            UnexpectedToken => "unexpected token at start of a term",
            UnclosedGroup => "missing closing delimiter",
            UnknownIdent => "unknown identifier",
            UnknownCommand => "unknown command",
            MissingFuncArg => "missing function argument",
            MissingExponent => "missing exponent after '^'",
            ExtraToken => "trailing input after expression",
            TooComplex => "expression too complex",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ErrorCode::*;
        let name = match self {
            InvalidCharacter => "invalid_character",
            BadCommandStart => "bad_command_start",
            NumberTooLong => "number_too_long",
            BadNumber => "bad_number",
            UnexpectedToken => "unexpected_token",
            UnclosedGroup => "unclosed_group",
            UnknownIdent => "unknown_ident",
            UnknownCommand => "unknown_command",
            MissingFuncArg => "missing_func_arg",
            MissingExponent => "missing_exponent",
            ExtraToken => "extra_token",
            TooComplex => "too_complex",
        };

        write!(f, "{name}")
    }
}

/// An error with a byte span into the source it was raised against.
/// This is what flows through the lexer and parser internally; it is
/// widened to a [ParseError] at the public entry point.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExprError {
    pub start: u16,
    pub end: u16,
    pub code: ErrorCode,
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.end, self.code)
    }
}

#[macro_export]
macro_rules! expr_err(
    ($code:tt, $start:expr, $end:expr) => {{
        use $crate::common::{ErrorCode, ExprError};
        Err(ExprError {
            start: $start as u16,
            end: $end as u16,
            code: ErrorCode::$code,
        })
    }}
);

/// A parse failure addressed by byte offset and 1-based column.
///
/// Columns restart at 1 after a newline and advance one per byte
/// otherwise (input is expected to be ASCII).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParseError {
    pub code: ErrorCode,
    pub offset: u16,
    pub col: u16,
}

impl ParseError {
    pub(crate) fn new(source: &str, err: ExprError) -> Self {
        ParseError {
            code: err.code,
            offset: err.start,
            col: column_for_offset(source, err.start as usize) as u16,
        }
    }

    pub fn message(&self) -> &'static str {
        self.code.message()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.col, self.code)
    }
}

impl error::Error for ParseError {}

pub type Result<T> = result::Result<T, ParseError>;

fn column_for_offset(text: &str, offset: usize) -> usize {
    let offset = offset.min(text.len());
    let line_start = match text.as_bytes()[..offset]
        .iter()
        .rposition(|&b| b == b'\n')
    {
        Some(newline) => newline + 1,
        None => 0,
    };
    offset - line_start + 1
}

#[test]
fn test_column_for_offset() {
    assert_eq!(1, column_for_offset("", 0));
    assert_eq!(1, column_for_offset("2+2", 0));
    assert_eq!(3, column_for_offset("2+2", 2));
    assert_eq!(4, column_for_offset("2+2", 3));
    // columns restart after a newline
    assert_eq!(1, column_for_offset("1+\n2", 3));
    assert_eq!(2, column_for_offset("1+\n2+y", 4));
    assert_eq!(3, column_for_offset("\n\n2+", 4));
    // offsets past the end clamp
    assert_eq!(4, column_for_offset("2+2", 17));
}

#[test]
fn test_error_display() {
    let err = ExprError {
        start: 2,
        end: 3,
        code: ErrorCode::UnknownIdent,
    };
    assert_eq!("2:3:unknown_ident", format!("{err}"));

    let err = ParseError::new("1+\ny", err);
    assert_eq!("unknown identifier", err.message());
}

#[test]
fn test_parse_error_columns() {
    let err = ParseError::new(
        "1+\ny+2",
        ExprError {
            start: 3,
            end: 4,
            code: ErrorCode::UnknownIdent,
        },
    );
    assert_eq!(3, err.offset);
    assert_eq!(1, err.col);
}
