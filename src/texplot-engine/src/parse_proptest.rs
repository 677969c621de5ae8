// Copyright 2026 The Texplot Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Property-based tests for the LaTeX printer using proptest.
//!
//! These tests verify that:
//! 1. Printed trees reparse without error
//! 2. The reparse yields the tree that was printed, up to spans
//! 3. Evaluation commutes with a print/parse round trip

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;

use crate::ast::{BinaryOp, Expr, UnaryOp, latex_eqn};
use crate::builtins::{BuiltinFn, Loc};
use crate::interpreter::eval;
use crate::parser::parse;

// Strategy helpers for generating trees whose literals print in plain
// decimal notation

fn const_strategy() -> impl Strategy<Value = Expr> {
    // positive and modest, so Display stays within the literal grammar;
    // negative values are produced through Op1 below
    prop_oneof![
        Just(0.0),
        Just(1.0),
        (1i32..1000).prop_map(|n| n as f64),
        (1i32..1000).prop_map(|n| n as f64 / 4.0),
        (1i32..100).prop_map(|n| n as f64 / 10.0),
    ]
    .prop_map(|n| Expr::Const(n, Loc::default()))
}

fn leaf_strategy() -> impl Strategy<Value = Expr> {
    prop_oneof![const_strategy(), Just(Expr::Var(Loc::default()))]
}

fn binary_op_strategy() -> impl Strategy<Value = BinaryOp> {
    prop_oneof![
        Just(BinaryOp::Add),
        Just(BinaryOp::Sub),
        Just(BinaryOp::Mul),
        Just(BinaryOp::Div),
        Just(BinaryOp::Exp),
    ]
}

fn app_strategy(inner: BoxedStrategy<Expr>) -> impl Strategy<Value = Expr> {
    prop_oneof![
        inner.clone().prop_map(|a| BuiltinFn::Sin(Box::new(a))),
        inner.clone().prop_map(|a| BuiltinFn::Cos(Box::new(a))),
        inner.clone().prop_map(|a| BuiltinFn::Tan(Box::new(a))),
        inner.clone().prop_map(|a| BuiltinFn::Log(Box::new(a))),
        inner.clone().prop_map(|a| BuiltinFn::Exp(Box::new(a))),
        inner.prop_map(|a| BuiltinFn::Sqrt(Box::new(a))),
    ]
    .prop_map(|func| Expr::App(func, Loc::default()))
}

fn expr_strategy() -> BoxedStrategy<Expr> {
    leaf_strategy()
        .prop_recursive(4, 32, 2, |inner| {
            prop_oneof![
                (binary_op_strategy(), inner.clone(), inner.clone()).prop_map(|(op, l, r)| {
                    Expr::Op2(op, Box::new(l), Box::new(r), Loc::default())
                }),
                inner
                    .clone()
                    .prop_map(|a| Expr::Op1(UnaryOp::Negative, Box::new(a), Loc::default())),
                (inner.clone(), inner.clone()).prop_map(|(num, den)| {
                    Expr::Frac(Box::new(num), Box::new(den), Loc::default())
                }),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| {
                    Expr::Pair(Box::new(a), Box::new(b), Loc::default())
                }),
                app_strategy(inner),
            ]
        })
        .boxed()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn printed_trees_reparse(t in expr_strategy()) {
        let printed = latex_eqn(&t);
        let reparsed = parse(&printed);
        prop_assert!(
            reparsed.is_ok(),
            "could not reparse {:?}: {:?}",
            printed,
            reparsed.err()
        );
        prop_assert_eq!(reparsed.unwrap().strip_loc(), t);
    }

    #[test]
    fn eval_commutes_with_round_trip(t in expr_strategy(), x in -10.0f64..10.0) {
        let reparsed = parse(&latex_eqn(&t)).unwrap();
        prop_assert_eq!(eval(&t, x).to_bits(), eval(&reparsed, x).to_bits());
    }
}
