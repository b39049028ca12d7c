// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0 in
//! the upper left, and a rectangle on the complex plane defined by its
//! upper-left and lower-right corners.  Rows count downward while the
//! imaginary axis counts upward, so the vertical axis is flipped.
use num::Complex;

use error::{Error, Result};

/// The column and row of a pixel on the integral plane.  Column is the
/// x-component, row the y-component, and row 0 is the top of the
/// raster.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian
/// plane, and a complex cartesian plane.  Maps points from one to the
/// other with a fixed affine transform.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneMapper {
    width: usize,
    height: usize,
    // The complex value at pixel (0, 0).
    upper_left: Complex<f64>,
    lower_right: Complex<f64>,
    // Distance on the complex plane covered by one pixel, horizontally
    // and vertically.
    scale: (f64, f64),
}

impl PlaneMapper {
    /// Takes the size of the integral plane and the two corners of the
    /// complex plane it covers.  The upper-left corner must be strictly
    /// to the left of and above the lower-right corner.
    pub fn new(
        width: usize,
        height: usize,
        upper_left: Complex<f64>,
        lower_right: Complex<f64>,
    ) -> Result<PlaneMapper> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        if !(upper_left.re.is_finite()
            && upper_left.im.is_finite()
            && lower_right.re.is_finite()
            && lower_right.im.is_finite())
        {
            return Err(Error::InvalidPlane(
                "the corners of the complex plane must be finite".to_string(),
            ));
        }

        if !(upper_left.re < lower_right.re) {
            return Err(Error::InvalidPlane(
                "the upper left corner is not to the left of the lower right corner".to_string(),
            ));
        }

        if !(upper_left.im > lower_right.im) {
            return Err(Error::InvalidPlane(
                "the upper left corner is not above the lower right corner".to_string(),
            ));
        }

        let scale = (
            (lower_right.re - upper_left.re) / (width as f64),
            (upper_left.im - lower_right.im) / (height as f64),
        );

        // Finite corners can still be too far apart, or too close, to
        // give a usable step per pixel.
        if !(scale.0.is_finite() && scale.0 > 0.0 && scale.1.is_finite() && scale.1 > 0.0) {
            return Err(Error::InvalidPlane(format!(
                "the pixel scale {:?} is not a finite positive step",
                scale
            )));
        }

        Ok(PlaneMapper {
            width,
            height,
            upper_left,
            lower_right,
            scale,
        })
    }

    /// Width of the integral plane, in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the integral plane, in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The complex value of the upper-left pixel.
    pub fn upper_left(&self) -> Complex<f64> {
        self.upper_left
    }

    /// The lower-right corner of the complex region.  The last pixel
    /// maps to one pixel-scale short of it on both axes.
    pub fn lower_right(&self) -> Complex<f64> {
        self.lower_right
    }

    /// Complex distance per pixel along the real and imaginary axes.
    pub fn scale(&self) -> (f64, f64) {
        self.scale
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Never true for a mapper built through `new`, which rejects empty
    /// planes.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Given a pixel on the integral cartesian plane, return the
    /// complex number at the equivalent location on the complex plane.
    pub fn position_to_point(&self, position: &Position) -> Complex<f64> {
        Complex::new(
            (position.0 as f64) * self.scale.0 + self.upper_left.re,
            self.upper_left.im - (position.1 as f64) * self.scale.1,
        )
    }

    /// Given a complex number, map it to the pixel containing it, or
    /// `None` if it lies outside the raster.
    pub fn point_to_position(&self, point: &Complex<f64>) -> Option<Position> {
        let left = ((point.re - self.upper_left.re) / self.scale.0).floor();
        let top = ((self.upper_left.im - point.im) / self.scale.1).floor();
        if left < 0.0
            || left >= (self.width as f64)
            || top < 0.0
            || top >= (self.height as f64)
        {
            return None;
        }
        Some(Position(left as usize, top as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: usize) -> PlaneMapper {
        PlaneMapper::new(size, size, Complex::new(-2.0, 2.0), Complex::new(2.0, -2.0)).unwrap()
    }

    #[test]
    fn planemapper_fails_on_flipped_real_axis() {
        let pm = PlaneMapper::new(4, 4, Complex::new(1.0, 1.0), Complex::new(-1.0, -1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_fails_on_flipped_imaginary_axis() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_fails_on_empty_raster() {
        let ul = Complex::new(-1.0, 1.0);
        let lr = Complex::new(1.0, -1.0);
        assert_eq!(
            PlaneMapper::new(0, 4, ul, lr),
            Err(Error::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
        assert!(PlaneMapper::new(4, 0, ul, lr).is_err());
    }

    #[test]
    fn planemapper_fails_on_infinite_corners() {
        let inf = ::std::f64::INFINITY;
        let pm = PlaneMapper::new(2, 2, Complex::new(-inf, 2.0), Complex::new(inf, -2.0));
        assert!(pm.is_err());
        let pm = PlaneMapper::new(2, 2, Complex::new(-2.0, inf), Complex::new(2.0, -2.0));
        assert!(pm.is_err());
        let pm = PlaneMapper::new(2, 2, Complex::new(-2.0, 2.0), Complex::new(inf, -inf));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_fails_on_nan_corners() {
        let nan = ::std::f64::NAN;
        let pm = PlaneMapper::new(2, 2, Complex::new(nan, 2.0), Complex::new(2.0, -2.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_fails_on_overflowing_scale() {
        let max = ::std::f64::MAX;
        let pm = PlaneMapper::new(2, 2, Complex::new(-max, 2.0), Complex::new(max, -2.0));
        match pm {
            Err(Error::InvalidPlane(msg)) => assert!(msg.contains("pixel scale")),
            other => panic!("expected an invalid plane, got {:?}", other),
        }
    }

    #[test]
    fn planemapper_fails_on_vanishing_scale() {
        let tiny = 5e-324;
        let pm = PlaneMapper::new(
            1_000_000,
            2,
            Complex::new(0.0, 2.0),
            Complex::new(tiny, -2.0),
        );
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_passes_on_good_shape() {
        let pm = square(4);
        assert_eq!(pm.len(), 16);
        assert!(!pm.is_empty());
        assert_eq!(pm.scale(), (1.0, 1.0));
    }

    #[test]
    fn top_left_pixel_is_the_upper_left_corner() {
        let pm = square(800);
        assert_eq!(pm.position_to_point(&Position(0, 0)), Complex::new(-2.0, 2.0));
    }

    #[test]
    fn bottom_right_pixel_is_within_one_pixel_of_the_lower_right_corner() {
        let pm = square(800);
        let (dx, dy) = pm.scale();
        let p = pm.position_to_point(&Position(799, 799));
        assert!((p.re - 2.0).abs() <= dx + 1e-12);
        assert!((p.im + 2.0).abs() <= dy + 1e-12);
    }

    #[test]
    fn rows_count_down_the_imaginary_axis() {
        let pm = square(4);
        assert_eq!(pm.position_to_point(&Position(2, 2)), Complex::new(0.0, 0.0));
        assert_eq!(pm.position_to_point(&Position(0, 3)), Complex::new(-2.0, -1.0));
        assert_eq!(pm.position_to_point(&Position(3, 0)), Complex::new(1.0, 2.0));
    }

    #[test]
    fn non_square_planes_keep_separate_scales() {
        let pm =
            PlaneMapper::new(8, 2, Complex::new(-2.0, 1.0), Complex::new(2.0, -1.0)).unwrap();
        assert_eq!(pm.scale(), (0.5, 1.0));
        assert_eq!(pm.position_to_point(&Position(4, 1)), Complex::new(0.0, 0.0));
    }

    #[test]
    fn point_to_position_inverts_position_to_point() {
        let pm = square(640);
        for &(col, row) in &[(0, 0), (320, 320), (639, 0), (0, 639), (639, 639), (17, 401)] {
            let point = pm.position_to_point(&Position(col, row));
            // Nudge into the middle of the pixel so flooring is stable.
            let (dx, dy) = pm.scale();
            let centre = Complex::new(point.re + dx / 2.0, point.im - dy / 2.0);
            assert_eq!(pm.point_to_position(&centre), Some(Position(col, row)));
        }
    }

    #[test]
    fn point_to_position_rejects_points_off_the_raster() {
        let pm = square(4);
        assert_eq!(pm.point_to_position(&Complex::new(-2.5, 0.0)), None);
        assert_eq!(pm.point_to_position(&Complex::new(0.0, 2.5)), None);
        assert_eq!(pm.point_to_position(&Complex::new(2.0, 0.0)), None);
        assert_eq!(pm.point_to_position(&Complex::new(0.0, -2.0)), None);
    }
}
