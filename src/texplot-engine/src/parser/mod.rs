// Copyright 2026 The Texplot Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Hand-written precedence-climbing parser for plot expressions.
//!
//! Tokens are pulled from the lexer one at a time, so the first error
//! from either layer, in token order, is the one reported.  Everything
//! after it is ignored.

use std::f64::consts::{E, PI};

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::builtins::{BuiltinFn, Loc, is_builtin_fn, is_layout_command};
use crate::common::ErrorCode::*;
use crate::common::{ErrorCode, ExprError, ParseError};
use crate::expr_err;
use crate::token::{Lexer, Spanned, Token};


/// Everything binds looser than this; the starting power for a
/// top-level or parenthesized expression.
const PREC_NONE: u8 = 0;

/// Stronger than any infix operator, so `-x^2` is `(-x)^2`.
const PREC_PREFIX: u8 = 40;

/// Parsing `((((...))))` recurses once per level of nesting; past this
/// depth we give up rather than chew through the stack.
const MAX_DEPTH: usize = 64;

/// TokenKind discriminant for peek comparisons without payload matching
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TokenKind {
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
    Ident,
    Num,
    Command,
}

impl<'a> From<&Token<'a>> for TokenKind {
    fn from(token: &Token<'a>) -> Self {
        match token {
            Token::Plus => TokenKind::Plus,
            Token::Minus => TokenKind::Minus,
            Token::Mul => TokenKind::Mul,
            Token::Div => TokenKind::Div,
            Token::Exp => TokenKind::Exp,
            Token::Comma => TokenKind::Comma,
            Token::LParen => TokenKind::LParen,
            Token::RParen => TokenKind::RParen,
            Token::LBrace => TokenKind::LBrace,
            Token::RBrace => TokenKind::RBrace,
            Token::Ident(_) => TokenKind::Ident,
            Token::Num(_) => TokenKind::Num,
            Token::Command(_) => TokenKind::Command,
        }
    }
}

/// Whether a token can open a primary; in infix position such a token
/// means implicit multiplication.
fn starts_primary(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Num
            | TokenKind::Ident
            | TokenKind::Command
            | TokenKind::LParen
            | TokenKind::LBrace
    )
}

/// Parser state: the lexer plus one token of lookahead.
struct Parser<'input> {
    lexer: Lexer<'input>,
    text: &'input str,
    lookahead: Option<Spanned<Token<'input>>>,
    depth: usize,
}

impl<'input> Parser<'input> {
    fn new(text: &'input str) -> Result<Self, ExprError> {
        let mut p = Parser {
            lexer: Lexer::new(text),
            text,
            lookahead: None,
            depth: 0,
        };
        p.bump()?;
        Ok(p)
    }

    /// Pull the next token into the lookahead slot.
    fn bump(&mut self) -> Result<(), ExprError> {
        self.lookahead = match self.lexer.next() {
            Some(Ok(tok)) => Some(tok),
            Some(Err(err)) => return Err(err),
            None => None,
        };
        Ok(())
    }

    /// Peek at the current token without consuming it
    fn peek(&self) -> Option<&Spanned<Token<'input>>> {
        self.lookahead.as_ref()
    }

    /// Peek at the kind of the current token
    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|(_, tok, _)| TokenKind::from(tok))
    }

    /// Consume the current token and pull its successor.  A lex error
    /// surfaces here, at the point its token would become visible.
    fn advance(&mut self) -> Result<Spanned<Token<'input>>, ExprError> {
        let tok = match self.lookahead.take() {
            Some(tok) => tok,
            None => {
                let pos = self.eof_position();
                return expr_err!(UnexpectedToken, pos, pos + 1);
            }
        };
        self.bump()?;
        Ok(tok)
    }

    /// Expect the current token to match the expected kind, failing
    /// with the given code if not
    fn expect(
        &mut self,
        expected: TokenKind,
        code: ErrorCode,
    ) -> Result<Spanned<Token<'input>>, ExprError> {
        if self.peek_kind() == Some(expected) {
            self.advance()
        } else {
            self.err_here(code)
        }
    }

    /// Get the position for end-of-input errors
    fn eof_position(&self) -> usize {
        self.text.len()
    }

    /// An error spanning the current token, or the end of input if
    /// there is none.
    fn err_here<T>(&self, code: ErrorCode) -> Result<T, ExprError> {
        let (start, end) = match self.peek() {
            Some(&(start, _, end)) => (start, end),
            None => {
                let pos = self.eof_position();
                (pos, pos + 1)
            }
        };
        Err(ExprError {
            start: start as u16,
            end: end as u16,
            code,
        })
    }

    fn at_layout_command(&self) -> bool {
        matches!(self.peek(), Some((_, Token::Command(name), _)) if is_layout_command(name))
    }

    /// Discard spacing commands like `\quad` or `\left`; they can sit
    /// at any token boundary and mean nothing.
    fn skip_layout(&mut self) -> Result<(), ExprError> {
        while self.at_layout_command() {
            self.advance()?;
        }
        Ok(())
    }

    fn enter(&mut self) -> Result<(), ExprError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return self.err_here(TooComplex);
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parse an expression, consuming operators that bind more tightly
    /// than `min_prec`.
    fn parse_expr(&mut self, min_prec: u8) -> Result<Expr, ExprError> {
        self.enter()?;

        let mut left = self.parse_prefix()?;

        loop {
            self.skip_layout()?;

            let (op, implicit) = match self.peek_kind() {
                Some(TokenKind::Plus) => (BinaryOp::Add, false),
                Some(TokenKind::Minus) => (BinaryOp::Sub, false),
                Some(TokenKind::Mul) => (BinaryOp::Mul, false),
                Some(TokenKind::Div) => (BinaryOp::Div, false),
                Some(TokenKind::Exp) => (BinaryOp::Exp, false),
                // a primary right after a complete operand is
                // multiplication with the star left off: `2x`, `2(3+4)`
                Some(kind) if starts_primary(kind) => (BinaryOp::Mul, true),
                _ => break,
            };

            let prec = op.precedence();
            if prec <= min_prec {
                break;
            }

            if !implicit {
                self.advance()?;
            }

            // `^` takes its right operand at one power lower, grouping
            // `2^3^2` as `2^(3^2)`; the others group left to right
            let right = if op == BinaryOp::Exp {
                self.parse_expr(prec - 1)?
            } else {
                self.parse_expr(prec)?
            };

            let loc = left.get_loc().union(&right.get_loc());
            left = Expr::Op2(op, Box::new(left), Box::new(right), loc);
        }

        self.leave();
        Ok(left)
    }

    /// Parse prefix negation, which chains (`--5` is 5) and hugs its
    /// operand tighter than any infix operator.
    fn parse_prefix(&mut self) -> Result<Expr, ExprError> {
        self.skip_layout()?;

        if self.peek_kind() == Some(TokenKind::Minus) {
            let (lpos, _, _) = self.advance()?;
            let operand = self.parse_expr(PREC_PREFIX)?;
            let loc = Loc::new(lpos, operand.get_loc().end as usize);
            return Ok(Expr::Op1(UnaryOp::Negative, Box::new(operand), loc));
        }

        self.parse_primary()
    }

    /// Parse an atomic expression: a literal, `x`, a group, or a
    /// command form.
    fn parse_primary(&mut self) -> Result<Expr, ExprError> {
        match self.peek_kind() {
            Some(TokenKind::Num) => {
                let (lpos, tok, rpos) = self.advance()?;
                let Token::Num(s) = tok else { unreachable!() };
                match s.parse::<f64>() {
                    Ok(n) => Ok(Expr::Const(n, Loc::new(lpos, rpos))),
                    Err(_) => expr_err!(BadNumber, lpos, rpos),
                }
            }
            Some(TokenKind::Ident) => {
                let Some(&(lpos, tok, rpos)) = self.peek() else {
                    unreachable!()
                };
                let expr = match tok {
                    Token::Ident("x") => Expr::Var(Loc::new(lpos, rpos)),
                    Token::Ident("pi") => Expr::Const(PI, Loc::new(lpos, rpos)),
                    Token::Ident("e") => Expr::Const(E, Loc::new(lpos, rpos)),
                    _ => return expr_err!(UnknownIdent, lpos, rpos),
                };
                self.advance()?;
                Ok(expr)
            }
            Some(TokenKind::Command) => self.parse_command(),
            Some(TokenKind::LParen) => self.parse_group(TokenKind::RParen),
            Some(TokenKind::LBrace) => self.parse_group(TokenKind::RBrace),
            _ => self.err_here(UnexpectedToken),
        }
    }

    /// Parse `(expr)` or `{expr}`, which plain group, or `(a, b)`,
    /// the two components of a parametric curve.  The closer has to
    /// match the opener.
    fn parse_group(&mut self, closer: TokenKind) -> Result<Expr, ExprError> {
        let (lpos, _, _) = self.advance()?;
        let first = self.parse_expr(PREC_NONE)?;

        if self.peek_kind() == Some(TokenKind::Comma) {
            self.advance()?;
            let second = self.parse_expr(PREC_NONE)?;
            let (_, _, rpos) = self.expect(closer, UnclosedGroup)?;
            return Ok(Expr::Pair(
                Box::new(first),
                Box::new(second),
                Loc::new(lpos, rpos),
            ));
        }

        self.expect(closer, UnclosedGroup)?;
        Ok(first)
    }

    /// Parse a command form: `\frac{num}{den}` or one of the named
    /// functions, e.g. `\sin x`, `\sin(x)`, `\sin^{2}(x)`.
    fn parse_command(&mut self) -> Result<Expr, ExprError> {
        let Some(&(lpos, Token::Command(name), rpos)) = self.peek() else {
            unreachable!()
        };

        if name == "frac" {
            self.advance()?;
            return self.parse_frac(lpos);
        }

        if !is_builtin_fn(name) {
            return expr_err!(UnknownCommand, lpos, rpos);
        }
        self.advance()?;
        self.skip_layout()?;

        // an optional superscript sits between the name and the
        // argument: `\sin^{2}(x)` is sin(x) squared
        let mut sup = None;
        if self.peek_kind() == Some(TokenKind::Exp) {
            self.advance()?;
            self.skip_layout()?;
            if self.peek_kind() != Some(TokenKind::LBrace) {
                return self.err_here(MissingExponent);
            }
            self.enter()?;
            sup = Some(self.parse_primary()?);
            self.leave();
            self.skip_layout()?;
        }

        // the argument is a single primary: `\sin x`, `\sin(x)`,
        // `\sin{x}` all take the same path
        match self.peek_kind() {
            Some(kind) if starts_primary(kind) => {}
            _ => return self.err_here(MissingFuncArg),
        }
        // chained applications recurse here without passing through
        // parse_expr, so this path needs its own depth guard
        self.enter()?;
        let arg = self.parse_primary()?;
        self.leave();

        let loc = Loc::new(lpos, arg.get_loc().end as usize);
        let Some(call) = BuiltinFn::new(name, arg) else {
            return expr_err!(UnknownCommand, lpos, rpos);
        };
        let app = Expr::App(call, loc);

        Ok(match sup {
            Some(sup) => {
                let loc = app.get_loc().union(&sup.get_loc());
                Expr::Op2(BinaryOp::Exp, Box::new(app), Box::new(sup), loc)
            }
            None => app,
        })
    }

    fn parse_frac(&mut self, lpos: usize) -> Result<Expr, ExprError> {
        let num = self.frac_arg()?;
        let den = self.frac_arg()?;
        let loc = Loc::new(lpos, den.get_loc().end as usize);
        Ok(Expr::Frac(Box::new(num), Box::new(den), loc))
    }

    /// One `{expr}` brace group of a `\frac{num}{den}`.
    fn frac_arg(&mut self) -> Result<Expr, ExprError> {
        self.skip_layout()?;
        if self.peek_kind() != Some(TokenKind::LBrace) {
            return self.err_here(MissingFuncArg);
        }
        self.parse_group(TokenKind::RBrace)
    }
}

/// Parse an expression string into a tree.
///
/// The whole input must form one expression; anything left over after
/// it is an error.  The returned error carries the byte offset and
/// 1-based column of the first problem found.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    parse_inner(source).map_err(|err| ParseError::new(source, err))
}

fn parse_inner(source: &str) -> Result<Expr, ExprError> {
    let mut parser = Parser::new(source)?;
    let expr = parser.parse_expr(PREC_NONE)?;

    if parser.peek().is_some() {
        return parser.err_here(ExtraToken);
    }

    Ok(expr)
}
