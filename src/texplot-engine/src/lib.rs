// Copyright 2026 The Texplot Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

#![forbid(unsafe_code)]

mod ast;
mod builtins;
pub mod common;
mod interpreter;
mod parser;
mod results;
mod sweep;
mod token;

#[cfg(test)]
mod parse_proptest;

pub use self::ast::{BinaryOp, Expr, UnaryOp, Visitor, latex_eqn};
pub use self::builtins::{BuiltinFn, Loc};
pub use self::common::{ErrorCode, ParseError, Result};
pub use self::interpreter::{eval, eval_pair};
pub use self::parser::parse;
pub use self::results::Results;
pub use self::sweep::{SweepSpecs, sweep};
