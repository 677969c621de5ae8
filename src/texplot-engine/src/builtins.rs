// Copyright 2026 The Texplot Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::fmt;

use crate::ast::Expr;

/// Loc describes a location in an expression by the starting point and ending
/// point. Expressions are strings typed by humans -- u16 is long enough.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Hash)]
pub struct Loc {
    pub start: u16,
    pub end: u16,
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

impl Loc {
    pub fn new(start: usize, end: usize) -> Self {
        Loc {
            start: start as u16,
            end: end as u16,
        }
    }

    /// union takes a second Loc and returns the inclusive range from the
    /// start of the earlier token to the end of the later token.
    pub fn union(&self, rhs: &Self) -> Self {
        Loc {
            start: self.start.min(rhs.start),
            end: self.end.max(rhs.end),
        }
    }
}

#[test]
fn test_loc_basics() {
    let a = Loc { start: 2, end: 6 };
    assert_eq!(a, Loc::new(2, 6));

    let b = Loc { start: 5, end: 9 };
    assert_eq!(Loc::new(2, 9), a.union(&b));

    let c = Loc { start: 0, end: 3 };
    assert_eq!(Loc::new(0, 6), a.union(&c));
}

/// The single-argument functions the grammar knows by name, e.g. `\sin`.
#[derive(PartialEq, Clone, Debug)]
pub enum BuiltinFn {
    Sin(Box<Expr>),
    Cos(Box<Expr>),
    Tan(Box<Expr>),
    Log(Box<Expr>),
    Exp(Box<Expr>),
    Sqrt(Box<Expr>),
}

impl BuiltinFn {
    pub fn name(&self) -> &'static str {
        use BuiltinFn::*;
        match self {
            Sin(_) => "sin",
            Cos(_) => "cos",
            Tan(_) => "tan",
            Log(_) => "log",
            Exp(_) => "exp",
            Sqrt(_) => "sqrt",
        }
    }

    pub(crate) fn new(name: &str, arg: Expr) -> Option<BuiltinFn> {
        use BuiltinFn::*;
        let arg = Box::new(arg);
        match name {
            "sin" => Some(Sin(arg)),
            "cos" => Some(Cos(arg)),
            "tan" => Some(Tan(arg)),
            "log" => Some(Log(arg)),
            "exp" => Some(Exp(arg)),
            "sqrt" => Some(Sqrt(arg)),
            _ => None,
        }
    }

    pub fn arg(&self) -> &Expr {
        use BuiltinFn::*;
        match self {
            Sin(a) | Cos(a) | Tan(a) | Log(a) | Exp(a) | Sqrt(a) => a,
        }
    }
}

pub fn is_builtin_fn(name: &str) -> bool {
    matches!(name, "sin" | "cos" | "tan" | "log" | "exp" | "sqrt")
}

/// Commands that only affect typeset layout; the parser discards them at
/// any token boundary. The one-character entries are the TeX spacing
/// commands (`\,` `\;` `\:` `\!` and control space).
const LAYOUT_COMMANDS: &[&str] = &[
    "left", "right", "quad", "qquad", ",", ";", ":", "!", " ",
];

pub fn is_layout_command(name: &str) -> bool {
    LAYOUT_COMMANDS.contains(&name)
}

#[test]
fn test_builtin_lookup() {
    assert!(is_builtin_fn("sqrt"));
    assert!(is_builtin_fn("tan"));
    assert!(!is_builtin_fn("frac"));
    assert!(!is_builtin_fn("sinh"));

    assert!(is_layout_command("left"));
    assert!(is_layout_command(","));
    assert!(!is_layout_command("sin"));
}
