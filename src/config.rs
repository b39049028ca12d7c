// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The one immutable value every render reads from.

use num::Complex;

use error::{Error, Result};
use planes::PlaneMapper;

/// Default iteration cap.
pub const DEFAULT_MAX_DEPTH: usize = 500;

/// Default half-width of the square window, in pixels.  The window is
/// `2 * radius` pixels on a side.
pub const DEFAULT_RADIUS: usize = 400;

/// Half the span of the complex plane covered by the square preset, on
/// both axes.  The preset covers `[-2, 2] x [-2, 2]`.
pub const PLANE_HALF_SPAN: f64 = 2.0;

/// The raster size, the region of the complex plane it covers, and the
/// iteration cap.  Built once and never changed; workers share it by
/// reference.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterConfig {
    plane: PlaneMapper,
    max_depth: usize,
}

impl RasterConfig {
    /// A raster of `width` by `height` pixels covering the rectangle
    /// between `upper_left` and `lower_right`, iterating at most
    /// `max_depth` times per pixel.
    pub fn new(
        width: usize,
        height: usize,
        upper_left: Complex<f64>,
        lower_right: Complex<f64>,
        max_depth: usize,
    ) -> Result<RasterConfig> {
        if max_depth == 0 {
            return Err(Error::InvalidDepth);
        }
        let plane = PlaneMapper::new(width, height, upper_left, lower_right)?;
        debug!(
            "raster {}x{} over {} .. {}, scale {:?}, depth {}",
            width,
            height,
            upper_left,
            lower_right,
            plane.scale(),
            max_depth
        );
        Ok(RasterConfig { plane, max_depth })
    }

    /// The square-window preset: `2 * radius` pixels on a side,
    /// covering `[-2, 2] x [-2, 2]`.  A radius too large to double is
    /// an invalid dimension.
    pub fn from_radius(radius: usize, max_depth: usize) -> Result<RasterConfig> {
        let side = radius.checked_mul(2).ok_or(Error::InvalidDimensions {
            width: radius,
            height: radius,
        })?;
        RasterConfig::new(
            side,
            side,
            Complex::new(-PLANE_HALF_SPAN, PLANE_HALF_SPAN),
            Complex::new(PLANE_HALF_SPAN, -PLANE_HALF_SPAN),
            max_depth,
        )
    }

    /// The plane mapper for this raster.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// Raster width in pixels.
    pub fn width(&self) -> usize {
        self.plane.width()
    }

    /// Raster height in pixels.
    pub fn height(&self) -> usize {
        self.plane.height()
    }

    /// The iteration cap.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for RasterConfig {
    fn default() -> Self {
        RasterConfig::from_radius(DEFAULT_RADIUS, DEFAULT_MAX_DEPTH)
            .expect("the default raster is non-empty and correctly ordered")
    }
}
