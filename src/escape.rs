// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time test.  A point `c` on the complex plane is iterated
//! through `z = z * z + c`, starting from zero, until either the
//! orbit leaves the circle of radius two or we run out of patience.

use num::Complex;

/// The squared escape radius.  Once `|z|^2` reaches this, the orbit is
/// guaranteed to run off to infinity.
pub const ESCAPE_THRESHOLD: f64 = 4.0;

/// Returns the (zero-based) iteration at which the orbit of `c` first
/// reached the escape threshold, or `max_depth` if it never did.  The
/// result always lies in `0..=max_depth`.
///
/// Points deep inside the set never escape, so the loop bound is the
/// only thing that ends the iteration for them.
pub fn escape_depth(c: Complex<f64>, max_depth: usize) -> usize {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    for i in 0..max_depth {
        z = z * z + c;
        if z.norm_sqr() >= ESCAPE_THRESHOLD {
            return i;
        }
    }
    max_depth
}

/// True if `c` survived `max_depth` iterations without escaping.
pub fn is_member(c: Complex<f64>, max_depth: usize) -> bool {
    escape_depth(c, max_depth) == max_depth
}
