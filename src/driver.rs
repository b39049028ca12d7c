// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Walks the raster and feeds every pixel to a sink.
//!
//! Pixels never depend on one another, so the multi-threaded path just
//! hands whole rows to workers from a shared queue.  Each worker writes
//! only into its own row of a shared buffer, and the buffer is emitted
//! in row-major order afterwards, so both paths produce exactly the
//! same sequence of `set_pixel` calls.

use crossbeam;
use itertools::iproduct;
use std::sync::Mutex;

use config::RasterConfig;
use error::{Error, Result};
use escape::escape_depth;
use intensity::colour_value;
use planes::Position;
use sink::PixelSink;

/// Map one raster position to the plane, run the escape test, and
/// return its packed colour.
pub fn evaluate(config: &RasterConfig, position: &Position) -> u32 {
    let point = config.plane().position_to_point(position);
    let depth = escape_depth(point, config.max_depth());
    colour_value(depth, config.max_depth())
}

/// The single-threaded renderer.  Emits every pixel, row by row, left
/// to right, top to bottom.
pub fn render<S: PixelSink>(config: &RasterConfig, sink: &mut S) {
    info!(
        "rendering {}x{} at depth {}",
        config.width(),
        config.height(),
        config.max_depth()
    );
    for (row, col) in iproduct!(0..config.height(), 0..config.width()) {
        sink.set_pixel(col, row, evaluate(config, &Position(col, row)));
    }
    info!("render complete");
}

/// Computes the whole raster with `threads` workers and returns the
/// colours in row-major order.
pub fn render_buffer(config: &RasterConfig, threads: usize) -> Result<Vec<u32>> {
    if threads == 0 {
        return Err(Error::InvalidThreads);
    }

    info!(
        "rendering {}x{} at depth {} on {} threads",
        config.width(),
        config.height(),
        config.max_depth(),
        threads
    );

    let mut buffer = vec![0 as u32; config.plane().len()];
    {
        let rows = Mutex::new(buffer.chunks_mut(config.width()).enumerate());
        let rows = &rows;
        crossbeam::scope(|spawner| {
            for worker in 0..threads {
                spawner.spawn(move |_| loop {
                    // A poisoned queue means another worker panicked;
                    // the scope reports that, so just stop.
                    let next = rows.lock().ok().and_then(|mut queue| queue.next());
                    match next {
                        Some((row, colours)) => {
                            trace!("worker {} took row {}", worker, row);
                            for (col, colour) in colours.iter_mut().enumerate() {
                                *colour = evaluate(config, &Position(col, row));
                            }
                        }
                        None => {
                            break;
                        }
                    }
                });
            }
        })
        .map_err(|_| Error::WorkerPanicked)?;
    }

    info!("render complete");
    Ok(buffer)
}

/// The multi-threaded renderer.  Pixels reach the sink in the same
/// order `render` would emit them.
pub fn render_threaded<S: PixelSink>(
    config: &RasterConfig,
    threads: usize,
    sink: &mut S,
) -> Result<()> {
    let width = config.width();
    let buffer = render_buffer(config, threads)?;
    for (offset, colour) in buffer.into_iter().enumerate() {
        sink.set_pixel(offset % width, offset / width, colour);
    }
    Ok(())
}
