#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which repeatedly squaring a number and adding `c`, starting from
//! zero, never runs off to infinity.  We can't iterate forever, so each
//! point gets a fixed budget of iterations; points that leave the
//! circle of radius two before the budget runs out are outside the set,
//! and how quickly they left is the number used to colour them.  Points
//! that never left are drawn black.
//!
//! Rendering is a pipeline: a raster position is mapped to a point on
//! the complex plane (`planes`), the point is iterated (`escape`), the
//! escape depth is turned into a colour (`intensity`), and the colour
//! is handed to a `PixelSink` (`sink`).  The `driver` runs that
//! pipeline over every pixel, on one thread or several.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

pub mod config;
pub mod driver;
pub mod error;
pub mod escape;
pub mod intensity;
pub mod parse;
pub mod planes;
pub mod sink;

pub use config::RasterConfig;
pub use driver::{evaluate, render, render_buffer, render_threaded};
pub use error::{Error, Result};
pub use escape::escape_depth;
pub use intensity::colour_value;
pub use planes::{PlaneMapper, Position};
pub use sink::{ImageSink, Pixel, PixelSink};
