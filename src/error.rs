// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The error type shared by the configuration and rendering paths.

use std::result;

/// Everything that can go wrong before or during a render.  Once a
/// `RasterConfig` exists, the sequential renderer cannot fail; these
/// are all precondition violations caught at the edges.
#[derive(Debug, Fail, PartialEq)]
pub enum Error {
    /// The integral plane has no pixels in it.
    #[fail(display = "invalid raster dimensions {}x{}", width, height)]
    InvalidDimensions {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// An iteration cap of zero would make every point a member.
    #[fail(display = "maximum depth must be at least 1")]
    InvalidDepth,

    /// The corners of the complex plane are not ordered.
    #[fail(display = "invalid complex plane: {}", _0)]
    InvalidPlane(String),

    /// The renderer was asked to use no workers at all.
    #[fail(display = "thread count must be at least 1")]
    InvalidThreads,

    /// A worker thread panicked before finishing its rows.
    #[fail(display = "a render worker panicked")]
    WorkerPanicked,
}

/// Shorthand for results carrying our error.
pub type Result<T> = result::Result<T, Error>;
