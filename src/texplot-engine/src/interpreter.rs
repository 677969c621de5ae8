// Copyright 2026 The Texplot Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Tree-walking evaluator over plain f64s.
//!
//! Evaluation is total: division by zero, domain errors, and pairs in
//! scalar position all follow IEEE semantics and come back as inf or
//! NaN rather than failing.

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::builtins::BuiltinFn;

/// Evaluate `expr` with the free variable bound to `x`.
pub fn eval(expr: &Expr, x: f64) -> f64 {
    match expr {
        Expr::Const(n, _) => *n,
        Expr::Var(_) => x,
        Expr::App(func, _) => match func {
            BuiltinFn::Sin(a) => eval(a, x).sin(),
            BuiltinFn::Cos(a) => eval(a, x).cos(),
            BuiltinFn::Tan(a) => eval(a, x).tan(),
            BuiltinFn::Log(a) => eval(a, x).ln(),
            BuiltinFn::Exp(a) => eval(a, x).exp(),
            BuiltinFn::Sqrt(a) => eval(a, x).sqrt(),
        },
        Expr::Frac(num, den, _) => eval(num, x) / eval(den, x),
        // a pair has no scalar value
        Expr::Pair(_, _, _) => f64::NAN,
        Expr::Op1(UnaryOp::Negative, r, _) => -eval(r, x),
        Expr::Op2(op, l, r, _) => {
            let l = eval(l, x);
            let r = eval(r, x);
            match op {
                BinaryOp::Add => l + r,
                BinaryOp::Sub => l - r,
                BinaryOp::Mul => l * r,
                BinaryOp::Div => l / r,
                BinaryOp::Exp => l.powf(r),
            }
        }
    }
}

/// Evaluate a parametric pair at `t`, giving the point it traces.
///
/// Returns `None` when the tree is not a pair at the root.
pub fn eval_pair(expr: &Expr, t: f64) -> Option<(f64, f64)> {
    match expr {
        Expr::Pair(a, b, _) => Some((eval(a, t), eval(b, t))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use float_cmp::approx_eq;

    use super::*;
    use crate::parser::parse;

    fn eval_str(input: &str, x: f64) -> f64 {
        eval(&parse(input).unwrap(), x)
    }

    #[test]
    fn test_eval_arithmetic() {
        assert_eq!(eval_str("1 + 2 * 3", 0.0), 7.0);
        assert_eq!(eval_str("2^3^2", 0.0), 512.0);
        assert_eq!(eval_str("8/4/2", 0.0), 1.0);
        assert_eq!(eval_str("2(3 + 4)", 0.0), 14.0);
        assert_eq!(eval_str("--5", 0.0), 5.0);
        assert_eq!(eval_str("2^-1", 0.0), 0.5);
    }

    #[test]
    fn test_eval_variable() {
        assert_eq!(eval_str("2x", 5.0), 10.0);
        assert_eq!(eval_str("x^2", -3.0), 9.0);
        assert_eq!(eval_str("x", 0.25), 0.25);
    }

    #[test]
    fn test_eval_named_constants() {
        assert_eq!(eval_str("pi", 0.0), PI);
        assert_eq!(eval_str("\\cos(pi)", 0.0), -1.0);
        // log means the natural log, so this is exactly one
        assert!(approx_eq!(f64, eval_str("\\log(e)", 0.0), 1.0));
    }

    #[test]
    fn test_eval_functions() {
        assert_eq!(eval_str("\\sin(0)", 0.0), 0.0);
        assert_eq!(eval_str("\\cos(0)", 0.0), 1.0);
        assert_eq!(eval_str("\\tan(0)", 0.0), 0.0);
        assert_eq!(eval_str("\\exp(0)", 0.0), 1.0);
        assert_eq!(eval_str("\\sqrt{9}", 0.0), 3.0);
        assert!(approx_eq!(f64, eval_str("\\sin^{2}(x)", PI / 2.0), 1.0));
    }

    #[test]
    fn test_frac_matches_division() {
        assert_eq!(eval_str("\\frac{1}{3}", 0.0), eval_str("1/3", 0.0));
        assert_eq!(eval_str("\\frac{x}{2}", 7.0), 3.5);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval_str("1/x", 0.0), f64::INFINITY);
        assert_eq!(eval_str("\\frac{1}{x}", 0.0), f64::INFINITY);
        assert!(eval_str("x/x", 0.0).is_nan());
    }

    #[test]
    fn test_domain_edges() {
        assert!(eval_str("\\sqrt{x}", -1.0).is_nan());
        assert_eq!(eval_str("\\log(x)", 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_pair_in_scalar_position_is_nan() {
        assert!(eval_str("(1, 2)", 0.0).is_nan());
        assert!(eval_str("(1, 2) + 3", 0.0).is_nan());
    }

    #[test]
    fn test_eval_pair() {
        let ast = parse("(\\cos(x), \\sin(x))").unwrap();
        assert_eq!(eval_pair(&ast, 0.0), Some((1.0, 0.0)));

        let ast = parse("x").unwrap();
        assert_eq!(eval_pair(&ast, 0.0), None);
    }

    #[test]
    fn test_eval_is_deterministic() {
        let ast = parse("\\sin(x) + \\frac{2}{3}^{x}").unwrap();
        let a = eval(&ast, 0.1);
        let b = eval(&ast, 0.1);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
