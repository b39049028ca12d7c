// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Where finished pixels go.  The renderer knows nothing about windows
//! or files; it hands each pixel to a `PixelSink` exactly once.

use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use std::fs::File;
use std::io;
use std::path::Path;

use intensity::to_rgb;

/// A finished pixel: its raster position and packed `0xRRGGBB` colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pixel {
    /// Column, counting right from 0.
    pub col: usize,
    /// Row, counting down from 0.
    pub row: usize,
    /// Packed colour in `0..=0xFFFFFF`.
    pub colour: u32,
}

/// Anything that can accept pixels from the renderer.
pub trait PixelSink {
    /// Called exactly once per pixel.
    fn set_pixel(&mut self, col: usize, row: usize, colour: u32);
}

/// Collects pixels in the order they were emitted.
impl PixelSink for Vec<Pixel> {
    fn set_pixel(&mut self, col: usize, row: usize, colour: u32) {
        self.push(Pixel { col, row, colour });
    }
}

/// An 8-bit RGB image buffer, written out as a binary PPM.
#[derive(Debug)]
pub struct ImageSink {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl ImageSink {
    /// An all-black image of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        ImageSink {
            width,
            height,
            pixels: vec![0 as u8; width * height * 3],
        }
    }

    /// The raw RGB bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// The RGB channels of one pixel.
    ///
    /// # Panics
    ///
    /// Panics if `col` or `row` lies outside the image.
    pub fn rgb(&self, col: usize, row: usize) -> [u8; 3] {
        self.check_bounds(col, row);
        let offset = (row * self.width + col) * 3;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
        ]
    }

    fn check_bounds(&self, col: usize, row: usize) {
        assert!(
            col < self.width && row < self.height,
            "pixel ({}, {}) is outside the {}x{} image",
            col,
            row,
            self.width,
            self.height
        );
    }

    /// Writes the buffer to `outfile` as a binary PPM.
    pub fn write_pnm<P: AsRef<Path>>(&self, outfile: P) -> Result<(), io::Error> {
        let output = File::create(outfile.as_ref())?;
        let mut encoder =
            PNMEncoder::new(output).with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
        encoder.encode(
            &self.pixels[..],
            self.width as u32,
            self.height as u32,
            ColorType::RGB(8),
        )?;
        info!("wrote {}x{} image to {}", self.width, self.height, outfile.as_ref().display());
        Ok(())
    }
}

/// # Panics
///
/// `set_pixel` panics if `col` or `row` lies outside the image, rather
/// than spilling into a neighbouring row.
impl PixelSink for ImageSink {
    fn set_pixel(&mut self, col: usize, row: usize, colour: u32) {
        self.check_bounds(col, row);
        let offset = (row * self.width + col) * 3;
        self.pixels[offset..offset + 3].copy_from_slice(&to_rgb(colour));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_keeps_emission_order() {
        let mut sink: Vec<Pixel> = vec![];
        sink.set_pixel(1, 0, 7);
        sink.set_pixel(0, 1, 9);
        assert_eq!(
            sink,
            vec![
                Pixel {
                    col: 1,
                    row: 0,
                    colour: 7
                },
                Pixel {
                    col: 0,
                    row: 1,
                    colour: 9
                },
            ]
        );
    }

    #[test]
    fn image_sink_unpacks_colours_into_place() {
        let mut sink = ImageSink::new(3, 2);
        sink.set_pixel(2, 1, 0xFD02FF);
        assert_eq!(sink.rgb(2, 1), [0xFD, 0x02, 0xFF]);
        assert_eq!(sink.rgb(0, 0), [0, 0, 0]);
        assert_eq!(&sink.as_bytes()[15..18], &[0xFD, 0x02, 0xFF]);
    }

    #[test]
    #[should_panic(expected = "outside the 3x2 image")]
    fn image_sink_rejects_columns_past_the_edge() {
        let mut sink = ImageSink::new(3, 2);
        sink.set_pixel(3, 0, 0xFFFFFF);
    }

    #[test]
    #[should_panic(expected = "outside the 3x2 image")]
    fn rgb_rejects_rows_past_the_edge() {
        let sink = ImageSink::new(3, 2);
        sink.rgb(0, 2);
    }
}
