// Copyright 2026 The Texplot Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::str::CharIndices;

use unicode_xid::UnicodeXID;

use self::Token::*;
use crate::common::ErrorCode::*;
use crate::common::{ErrorCode, ExprError};


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'input> {
    Plus,
    Minus,
    Mul,
    Div,
    Exp,
    Comma,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Ident(&'input str),
    Num(&'input str),
    /// A backslash command with the backslash stripped, e.g. `sin` for
    /// `\sin` or `,` for the thin-space command `\,`.
    Command(&'input str),
}

// long enough for any literal someone actually means
const MAX_NUMBER_LEN: usize = 127;

fn error<T>(code: ErrorCode, start: usize, end: usize) -> Result<T, ExprError> {
    Err(ExprError {
        start: start as u16,
        end: end as u16,
        code,
    })
}

pub type Spanned<T> = (usize, T, usize);

pub struct Lexer<'input> {
    text: &'input str,
    chars: CharIndices<'input>,
    lookahead: Option<(usize, char)>,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        let mut t = Lexer {
            text: input,
            chars: input.char_indices(),
            lookahead: None,
        };
        t.bump();
        t
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        self.lookahead = self.chars.next();
        self.lookahead
    }

    fn word(&mut self, idx0: usize) -> Spanned<&'input str> {
        match self.take_while(is_identifier_continue) {
            Some(end) => (idx0, &self.text[idx0..end], end),
            None => (idx0, &self.text[idx0..], self.text.len()),
        }
    }

    fn take_while<F>(&mut self, mut keep_going: F) -> Option<usize>
    where
        F: FnMut(char) -> bool,
    {
        loop {
            match self.lookahead {
                None => {
                    return None;
                }
                Some((idx1, c)) => {
                    if !keep_going(c) {
                        return Some(idx1);
                    } else {
                        self.bump();
                    }
                }
            }
        }
    }

    fn number(
        &mut self,
        idx0: usize,
        seen_decimal: bool,
    ) -> Result<Spanned<Token<'input>>, ExprError> {
        self.take_while(is_digit);
        if !seen_decimal {
            if let Some((_, '.')) = self.lookahead {
                self.bump();
                self.take_while(is_digit);
            }
        }
        let end = match self.lookahead {
            Some((end, _)) => end,
            None => self.text.len(),
        };
        if end - idx0 > MAX_NUMBER_LEN {
            return error(NumberTooLong, idx0, end);
        }
        Ok((idx0, Num(&self.text[idx0..end]), end))
    }

    #[allow(clippy::unnecessary_wraps)]
    fn consume(
        &mut self,
        i: usize,
        tok: Token<'input>,
        len: usize,
    ) -> Option<Result<Spanned<Token<'input>>, ExprError>> {
        self.bump();
        Some(Ok((i, tok, i + len)))
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Result<Spanned<Token<'input>>, ExprError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            return match self.lookahead {
                Some((i, '+')) => self.consume(i, Plus, 1),
                Some((i, '-')) => self.consume(i, Minus, 1),
                Some((i, '*')) => self.consume(i, Mul, 1),
                Some((i, '/')) => self.consume(i, Div, 1),
                Some((i, '^')) => self.consume(i, Exp, 1),
                Some((i, ',')) => self.consume(i, Comma, 1),
                Some((i, '(')) => self.consume(i, LParen, 1),
                Some((i, ')')) => self.consume(i, RParen, 1),
                Some((i, '{')) => self.consume(i, LBrace, 1),
                Some((i, '}')) => self.consume(i, RBrace, 1),
                Some((i, '\\')) => match self.bump() {
                    Some((idx1, c)) if is_identifier_start(c) => {
                        let (_, word, end) = self.word(idx1);
                        Some(Ok((i, Command(word), end)))
                    }
                    Some((idx1, c)) if is_punct_command(c) => {
                        self.bump();
                        Some(Ok((i, Command(&self.text[idx1..idx1 + 1]), idx1 + 1)))
                    }
                    _ => Some(error(BadCommandStart, i, i + 1)),
                },
                Some((i, '.')) => match self.bump() {
                    // a fraction like `.5`, with the integer part left off
                    Some((_, c)) if is_digit(c) => Some(self.number(i, true)),
                    _ => Some(error(InvalidCharacter, i, i + 1)),
                },
                Some((i, c)) if is_digit(c) => Some(self.number(i, false)),
                Some((i, c)) if is_identifier_start(c) => {
                    let (start, word, end) = self.word(i);
                    Some(Ok((start, Ident(word), end)))
                }
                Some((_, c)) if c.is_whitespace() => {
                    self.bump();
                    continue;
                }
                Some((i, _)) => {
                    self.bump(); // eat whatever is killing us
                    let end = match self.lookahead {
                        Some((end, _)) => end,
                        None => self.text.len(),
                    };
                    Some(error(InvalidCharacter, i, end))
                }
                None => None,
            };
        }
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_identifier_start(c: char) -> bool {
    UnicodeXID::is_xid_start(c) || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    UnicodeXID::is_xid_continue(c)
}

/// The TeX spacing commands are a backslash and one punctuation
/// character, with no letters to scan.
fn is_punct_command(c: char) -> bool {
    matches!(c, ',' | ';' | ':' | '!' | ' ')
}
