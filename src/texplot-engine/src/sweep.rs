// Copyright 2026 The Texplot Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Sampling an expression across a range.

use crate::ast::Expr;
use crate::interpreter::{eval, eval_pair};
use crate::results::Results;

/// The sample range and density for a sweep.
#[derive(Clone, Copy, Debug)]
pub struct SweepSpecs {
    pub min: f64,
    pub max: f64,
    pub samples: usize,
}

impl Default for SweepSpecs {
    fn default() -> Self {
        SweepSpecs {
            min: -10.0,
            max: 10.0,
            samples: 900,
        }
    }
}

impl SweepSpecs {
    /// The i-th sample position.  The first and last samples land
    /// exactly on `min` and `max`.
    fn sample_at(&self, i: usize) -> f64 {
        if self.samples < 2 {
            return self.min;
        }
        let t = i as f64 / (self.samples - 1) as f64;
        self.min * (1.0 - t) + self.max * t
    }
}

/// Evaluate `expr` at evenly spaced sample points, one row per point.
///
/// A scalar tree sweeps the free variable over the range and yields
/// x,y rows; a pair at the root is parametric and yields t,x,y rows
/// with both components evaluated at the same parameter value.  Rows
/// where evaluation hits undefined math carry NaN or inf rather than
/// being dropped, leaving gap handling to the consumer.
pub fn sweep(expr: &Expr, specs: &SweepSpecs) -> Results {
    use rayon::prelude::*;

    let (names, step_size) = if matches!(expr, Expr::Pair(_, _, _)) {
        (vec!["t", "x", "y"], 3)
    } else {
        (vec!["x", "y"], 2)
    };

    let mut data = vec![0.0; specs.samples * step_size];
    data.par_chunks_mut(step_size)
        .enumerate()
        .for_each(|(i, row)| {
            let t = specs.sample_at(i);
            match eval_pair(expr, t) {
                Some((x, y)) => {
                    row[0] = t;
                    row[1] = x;
                    row[2] = y;
                }
                None => {
                    row[0] = t;
                    row[1] = eval(expr, t);
                }
            }
        });

    Results {
        names,
        data: data.into_boxed_slice(),
        step_size,
        step_count: specs.samples,
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_sweep_shape() {
        let ast = parse("x^2").unwrap();
        let specs = SweepSpecs {
            min: -3.0,
            max: 7.0,
            samples: 5,
        };

        let results = sweep(&ast, &specs);
        assert_eq!(results.names, vec!["x", "y"]);
        assert_eq!(results.step_size, 2);
        assert_eq!(results.step_count, 5);

        let rows: Vec<&[f64]> = results.iter().collect();
        assert_eq!(rows[0], &[-3.0, 9.0]);
        assert_eq!(rows[4], &[7.0, 49.0]);
    }

    #[test]
    fn test_sweep_endpoints_exact() {
        // 0.1 + (0.3 - 0.1) would overshoot in floating point
        let ast = parse("x").unwrap();
        let specs = SweepSpecs {
            min: 0.1,
            max: 0.3,
            samples: 3,
        };

        let results = sweep(&ast, &specs);
        let rows: Vec<&[f64]> = results.iter().collect();
        assert_eq!(rows[0][0], 0.1);
        assert_eq!(rows[2][0], 0.3);
    }

    #[test]
    fn test_sweep_keeps_nonfinite_rows() {
        let ast = parse("1/x").unwrap();
        let specs = SweepSpecs {
            min: -1.0,
            max: 1.0,
            samples: 3,
        };

        let results = sweep(&ast, &specs);
        let rows: Vec<&[f64]> = results.iter().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().any(|row| !row[1].is_finite()));
    }

    #[test]
    fn test_sweep_pair_root() {
        let ast = parse("(\\cos(x), \\sin(x))").unwrap();
        let specs = SweepSpecs {
            min: 0.0,
            max: PI,
            samples: 2,
        };

        let results = sweep(&ast, &specs);
        assert_eq!(results.names, vec!["t", "x", "y"]);
        assert_eq!(results.step_size, 3);

        let rows: Vec<&[f64]> = results.iter().collect();
        assert_eq!(rows[0], &[0.0, 1.0, 0.0]);
        assert_eq!(rows[1][0], PI);
        assert_eq!(rows[1][1], -1.0);
    }

    #[test]
    fn test_sweep_degenerate_sample_counts() {
        let ast = parse("2x").unwrap();

        let specs = SweepSpecs {
            min: 5.0,
            max: 6.0,
            samples: 0,
        };
        assert_eq!(sweep(&ast, &specs).iter().count(), 0);

        let specs = SweepSpecs { samples: 1, ..specs };
        let results = sweep(&ast, &specs);
        let rows: Vec<&[f64]> = results.iter().collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], &[5.0, 10.0]);
    }

    #[test]
    fn test_default_specs() {
        let specs = SweepSpecs::default();
        assert_eq!(specs.min, -10.0);
        assert_eq!(specs.max, 10.0);
        assert_eq!(specs.samples, 900);
    }
}
