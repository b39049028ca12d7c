// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns an escape depth into a packed colour value.
//!
//! The shade is linear in how early the point escaped: 255 for points
//! that left on the first iteration, 0 for points that never left.  The
//! shade is then cubed, which pushes most of the visible gradient
//! toward the dark end near the boundary of the set.  The packed result
//! is read as `0xRRGGBB`, so the cube also spreads it across channels.

/// Linear shade in `0..=255` for an escape depth.  Uses integer
/// division, so anything at or beyond `max_depth` is black.  A zero
/// `max_depth` caps every point immediately, so it is black too.
pub fn shade(depth: usize, max_depth: usize) -> u32 {
    if max_depth == 0 {
        return 0;
    }
    let remaining = max_depth.saturating_sub(depth);
    (255 * remaining / max_depth) as u32
}

/// The packed colour for an escape depth: the shade, cubed.  Always in
/// `0..=0xFFFFFF`.
pub fn colour_value(depth: usize, max_depth: usize) -> u32 {
    shade(depth, max_depth).pow(3)
}

/// Unpacks a `0xRRGGBB` value into its three channels.
pub fn to_rgb(colour: u32) -> [u8; 3] {
    [
        ((colour >> 16) & 0xff) as u8,
        ((colour >> 8) & 0xff) as u8,
        (colour & 0xff) as u8,
    ]
}
