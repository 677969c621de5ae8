// Copyright 2026 The Texplot Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use clap::Parser;

use texplot_engine::{Expr, SweepSpecs, eval, eval_pair, latex_eqn, parse, sweep};

const EXIT_FAILURE: i32 = 1;

#[macro_export]
macro_rules! die(
    ($($arg:tt)*) => { {
        use std;
        eprintln!($($arg)*);
        std::process::exit(EXIT_FAILURE)
    } }
);

/// Sample LaTeX math expressions into tab-separated tables.
#[derive(Parser, Debug)]
#[command(name = "texplot", version, about, long_about = None)]
struct Args {
    /// Expression to plot, e.g. '\frac{\sin(x)}{x}' or '(\cos(x), \sin(x))'
    #[arg(short, long, allow_hyphen_values = true)]
    expr: String,

    /// Start of the x range
    #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
    xmin: f64,

    /// End of the x range
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    xmax: f64,

    /// Start of the parameter range for parametric pairs (defaults to xmin)
    #[arg(long, allow_hyphen_values = true)]
    tmin: Option<f64>,

    /// End of the parameter range for parametric pairs (defaults to xmax)
    #[arg(long, allow_hyphen_values = true)]
    tmax: Option<f64>,

    /// Number of rows in the output table
    #[arg(long, default_value_t = 900)]
    samples: usize,

    /// Evaluate at a single point and print the value instead of sweeping
    #[arg(long, allow_hyphen_values = true)]
    at: Option<f64>,

    /// Print the canonical LaTeX form of the parsed expression and exit
    #[arg(long)]
    latex: bool,
}

fn main() {
    let args = Args::parse();

    let expr = match parse(&args.expr) {
        Ok(expr) => expr,
        Err(err) => {
            die!("error: {} at column {}", err.message(), err.col);
        }
    };

    if args.latex {
        println!("{}", latex_eqn(&expr));
        return;
    }

    if let Some(at) = args.at {
        match eval_pair(&expr, at) {
            Some((x, y)) => println!("{}\t{}", x, y),
            None => println!("{}", eval(&expr, at)),
        }
        return;
    }

    if args.samples < 2 {
        die!("error: --samples must be at least 2, not {}", args.samples);
    }

    let (min, max) = if matches!(expr, Expr::Pair(_, _, _)) {
        (
            args.tmin.unwrap_or(args.xmin),
            args.tmax.unwrap_or(args.xmax),
        )
    } else {
        (args.xmin, args.xmax)
    };
    if !(min < max) {
        die!("error: empty sample range ({} to {})", min, max);
    }

    let specs = SweepSpecs {
        min,
        max,
        samples: args.samples,
    };
    let results = sweep(&expr, &specs);
    results.print_tsv();
}
