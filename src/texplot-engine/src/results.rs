// Copyright 2026 The Texplot Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

/// A row-major table of sweep output: `step_count` rows of
/// `step_size` columns each.
pub struct Results {
    /// Column headers, in row order
    pub names: Vec<&'static str>,
    // one large allocation
    pub data: Box<[f64]>,
    pub step_size: usize,
    pub step_count: usize,
}

impl Results {
    pub fn print_tsv(&self) {
        // print header
        for (i, name) in self.names.iter().enumerate() {
            print!("{name}");
            if i == self.names.len() - 1 {
                println!();
            } else {
                print!("\t");
            }
        }

        for curr in self.iter() {
            for (i, val) in curr.iter().enumerate() {
                print!("{val}");
                if i == curr.len() - 1 {
                    println!();
                } else {
                    print!("\t");
                }
            }
        }
    }

    pub fn iter(&self) -> std::iter::Take<std::slice::Chunks<'_, f64>> {
        self.data.chunks(self.step_size).take(self.step_count)
    }
}
