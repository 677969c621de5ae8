// Copyright 2026 The Texplot Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use crate::builtins::{BuiltinFn, Loc};

/// Expr is a parsed expression tree.  Each node owns its children
/// outright; there is no sharing and there are no cycles.
#[derive(PartialEq, Clone, Debug)]
pub enum Expr {
    Const(f64, Loc),
    /// The free variable `x` (or the parameter of a curve).
    Var(Loc),
    App(BuiltinFn, Loc),
    Frac(Box<Expr>, Box<Expr>, Loc),
    /// The two components of a parametric curve, e.g. `(\cos(x), \sin(x))`.
    /// Only useful at the root of a tree; anywhere else it evaluates to NaN.
    Pair(Box<Expr>, Box<Expr>, Loc),
    Op1(UnaryOp, Box<Expr>, Loc),
    Op2(BinaryOp, Box<Expr>, Box<Expr>, Loc),
}

impl Expr {
    #[cfg(test)]
    pub(crate) fn strip_loc(self) -> Self {
        let loc = Loc::default();
        match self {
            Expr::Const(n, _loc) => Expr::Const(n, loc),
            Expr::Var(_loc) => Expr::Var(loc),
            Expr::App(func, _loc) => {
                use BuiltinFn::*;
                let func = match func {
                    Sin(a) => Sin(Box::new(a.strip_loc())),
                    Cos(a) => Cos(Box::new(a.strip_loc())),
                    Tan(a) => Tan(Box::new(a.strip_loc())),
                    Log(a) => Log(Box::new(a.strip_loc())),
                    Exp(a) => Exp(Box::new(a.strip_loc())),
                    Sqrt(a) => Sqrt(Box::new(a.strip_loc())),
                };
                Expr::App(func, loc)
            }
            Expr::Frac(num, den, _loc) => {
                Expr::Frac(Box::new(num.strip_loc()), Box::new(den.strip_loc()), loc)
            }
            Expr::Pair(a, b, _loc) => {
                Expr::Pair(Box::new(a.strip_loc()), Box::new(b.strip_loc()), loc)
            }
            Expr::Op1(op, r, _loc) => Expr::Op1(op, Box::new(r.strip_loc()), loc),
            Expr::Op2(op, l, r, _loc) => {
                Expr::Op2(op, Box::new(l.strip_loc()), Box::new(r.strip_loc()), loc)
            }
        }
    }

    pub(crate) fn get_loc(&self) -> Loc {
        match self {
            Expr::Const(_, loc) => *loc,
            Expr::Var(loc) => *loc,
            Expr::App(_, loc) => *loc,
            Expr::Frac(_, _, loc) => *loc,
            Expr::Pair(_, _, loc) => *loc,
            Expr::Op1(_, _, loc) => *loc,
            Expr::Op2(_, _, _, loc) => *loc,
        }
    }
}

pub trait Visitor<T> {
    fn walk(&mut self, e: &Expr) -> T;
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl BinaryOp {
    // higher the precedence, the tighter the binding.
    // e.g. Mul.precedence() > Add.precedence()
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOp::Add => 10,
            BinaryOp::Sub => 10,
            BinaryOp::Mul => 20,
            BinaryOp::Div => 20,
            BinaryOp::Exp => 30,
        }
    }
}

fn child_needs_parens(parent: &Expr, child: &Expr, is_rhs: bool) -> bool {
    match parent {
        // no children so doesn't matter
        Expr::Const(_, _) | Expr::Var(_) => false,
        // children sit inside the node's own braces or parens
        Expr::App(_, _) | Expr::Frac(_, _, _) | Expr::Pair(_, _, _) => false,
        Expr::Op1(_, _, _) => matches!(child, Expr::Op2(_, _, _, _)),
        Expr::Op2(parent_op, _, _, _) => match child {
            Expr::Const(_, _)
            | Expr::Var(_)
            | Expr::App(_, _)
            | Expr::Frac(_, _, _)
            | Expr::Pair(_, _, _)
            | Expr::Op1(_, _, _) => false,
            // 3 * 2 + 1
            Expr::Op2(child_op, _, _, _) => {
                if parent_op.precedence() != child_op.precedence() {
                    // if we have `3 * (2 + 3)`, the parent's precedence
                    // is higher than the child and we need enclosing parens
                    parent_op.precedence() > child_op.precedence()
                } else if *parent_op == BinaryOp::Exp {
                    // `^` associates right, so a left child at the same
                    // level regroups without parens: `(3^2)^2` vs `3^3^2`
                    !is_rhs
                } else {
                    // the others associate left, so it is the right child
                    // that needs them: `8 / (4 / 2)` vs `8 / 4 / 2`
                    is_rhs
                }
            }
        },
    }
}

fn paren_if_necessary(parent: &Expr, child: &Expr, eqn: String, is_rhs: bool) -> String {
    if child_needs_parens(parent, child, is_rhs) {
        format!("({eqn})")
    } else {
        eqn
    }
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum UnaryOp {
    Negative,
}

struct LatexVisitor {}

impl Visitor<String> for LatexVisitor {
    fn walk(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::Const(n, _) => n.to_string(),
            Expr::Var(_) => "x".to_owned(),
            Expr::App(func, _) => {
                let arg = self.walk(func.arg());
                format!("\\{}({})", func.name(), arg)
            }
            Expr::Frac(num, den, _) => {
                let num = self.walk(num);
                let den = self.walk(den);
                format!("\\frac{{{num}}}{{{den}}}")
            }
            Expr::Pair(a, b, _) => {
                let a = self.walk(a);
                let b = self.walk(b);
                format!("({a}, {b})")
            }
            Expr::Op1(op, r, _) => {
                let r = paren_if_necessary(expr, r, self.walk(r), false);
                let op: &str = match op {
                    UnaryOp::Negative => "-",
                };
                format!("{op}{r}")
            }
            Expr::Op2(op, l, r, _) => {
                let l = paren_if_necessary(expr, l, self.walk(l), false);
                let r = paren_if_necessary(expr, r, self.walk(r), true);
                let op: &str = match op {
                    BinaryOp::Add => "+",
                    BinaryOp::Sub => "-",
                    BinaryOp::Exp => {
                        // superscripts carry their own braces
                        return format!("{l}^{{{r}}}");
                    }
                    BinaryOp::Mul => "*",
                    BinaryOp::Div => "/",
                };
                format!("{l} {op} {r}")
            }
        }
    }
}

/// Render a tree back to source form.  The output parses to the tree it
/// was printed from, parenthesized only where grouping demands it.
pub fn latex_eqn(expr: &Expr) -> String {
    let mut visitor = LatexVisitor {};
    visitor.walk(expr)
}

#[test]
fn test_latex_eqn() {
    assert_eq!(
        "2 + x",
        latex_eqn(&Expr::Op2(
            BinaryOp::Add,
            Box::new(Expr::Const(2.0, Loc::new(0, 1))),
            Box::new(Expr::Var(Loc::new(4, 5))),
            Loc::new(0, 5),
        ))
    );
    assert_eq!(
        "-x",
        latex_eqn(&Expr::Op1(
            UnaryOp::Negative,
            Box::new(Expr::Var(Loc::new(1, 2))),
            Loc::new(0, 2),
        ))
    );
    assert_eq!(
        "-(2 * x)",
        latex_eqn(&Expr::Op1(
            UnaryOp::Negative,
            Box::new(Expr::Op2(
                BinaryOp::Mul,
                Box::new(Expr::Const(2.0, Loc::default())),
                Box::new(Expr::Var(Loc::default())),
                Loc::default(),
            )),
            Loc::default(),
        ))
    );
    assert_eq!(
        "2 * (x + 1)",
        latex_eqn(&Expr::Op2(
            BinaryOp::Mul,
            Box::new(Expr::Const(2.0, Loc::default())),
            Box::new(Expr::Op2(
                BinaryOp::Add,
                Box::new(Expr::Var(Loc::default())),
                Box::new(Expr::Const(1.0, Loc::default())),
                Loc::default(),
            )),
            Loc::default(),
        ))
    );
    // right child at the same level keeps its grouping
    assert_eq!(
        "8 / (4 / 2)",
        latex_eqn(&Expr::Op2(
            BinaryOp::Div,
            Box::new(Expr::Const(8.0, Loc::default())),
            Box::new(Expr::Op2(
                BinaryOp::Div,
                Box::new(Expr::Const(4.0, Loc::default())),
                Box::new(Expr::Const(2.0, Loc::default())),
                Loc::default(),
            )),
            Loc::default(),
        ))
    );
    assert_eq!(
        "2^{3^{2}}",
        latex_eqn(&Expr::Op2(
            BinaryOp::Exp,
            Box::new(Expr::Const(2.0, Loc::default())),
            Box::new(Expr::Op2(
                BinaryOp::Exp,
                Box::new(Expr::Const(3.0, Loc::default())),
                Box::new(Expr::Const(2.0, Loc::default())),
                Loc::default(),
            )),
            Loc::default(),
        ))
    );
    assert_eq!(
        "(3^{2})^{2}",
        latex_eqn(&Expr::Op2(
            BinaryOp::Exp,
            Box::new(Expr::Op2(
                BinaryOp::Exp,
                Box::new(Expr::Const(3.0, Loc::default())),
                Box::new(Expr::Const(2.0, Loc::default())),
                Loc::default(),
            )),
            Box::new(Expr::Const(2.0, Loc::default())),
            Loc::default(),
        ))
    );
    assert_eq!(
        "\\frac{x}{2}",
        latex_eqn(&Expr::Frac(
            Box::new(Expr::Var(Loc::default())),
            Box::new(Expr::Const(2.0, Loc::default())),
            Loc::default(),
        ))
    );
    assert_eq!(
        "\\sin(x)^{2}",
        latex_eqn(&Expr::Op2(
            BinaryOp::Exp,
            Box::new(Expr::App(
                BuiltinFn::Sin(Box::new(Expr::Var(Loc::default()))),
                Loc::default(),
            )),
            Box::new(Expr::Const(2.0, Loc::default())),
            Loc::default(),
        ))
    );
    assert_eq!(
        "(\\cos(x), \\sin(x))",
        latex_eqn(&Expr::Pair(
            Box::new(Expr::App(
                BuiltinFn::Cos(Box::new(Expr::Var(Loc::default()))),
                Loc::default(),
            )),
            Box::new(Expr::App(
                BuiltinFn::Sin(Box::new(Expr::Var(Loc::default()))),
                Loc::default(),
            )),
            Loc::default(),
        ))
    );
}
