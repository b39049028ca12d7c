// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
extern crate failure;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use failure::{err_msg, Error};
use mandelbrot::parse::{parse_complex, parse_pair};
use mandelbrot::{ImageSink, RasterConfig};
use std::str::FromStr;

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const RADIUS: &str = "radius";
const UPPERLEFT: &str = "upperleft";
const LOWERRIGHT: &str = "lowerright";
const THREADS: &str = "threads";
const DEPTH: &str = "depth";

// Twice the default radius, and the default iteration cap.
const DEFAULT_SIZE: &str = "800x800";
const DEFAULT_DEPTH: &str = "500";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandel")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Escape-time Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file (binary PPM)"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value(DEFAULT_SIZE)
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(RADIUS)
                .required(false)
                .long(RADIUS)
                .short("r")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        8192,
                        "Could not parse radius",
                        "Radius must be between 1 and 8192",
                    )
                })
                .help("Render a square window 2*RADIUS pixels wide over [-2,2]x[-2,2]; overrides size and corners"),
        )
        .arg(
            Arg::with_name(UPPERLEFT)
                .required(false)
                .long(UPPERLEFT)
                .short("u")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.0,2.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse upper left corner"))
                .help("Upper left corner of the complex plane"),
        )
        .arg(
            Arg::with_name(LOWERRIGHT)
                .required(false)
                .long(LOWERRIGHT)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("2.0,-2.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse lower right corner"))
                .help("Lower right corner of the complex plane"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in the renderer"),
        )
        .arg(
            Arg::with_name(DEPTH)
                .required(false)
                .long(DEPTH)
                .short("d")
                .takes_value(true)
                .default_value(DEFAULT_DEPTH)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        10_000,
                        "Could not parse iteration depth",
                        "Iteration depth must be between 1 and 10000",
                    )
                })
                .help("Maximum number of iterations per pixel"),
        )
        .get_matches()
}

fn config_from(matches: &ArgMatches) -> Result<RasterConfig, Error> {
    let depth = usize::from_str(matches.value_of(DEPTH).unwrap_or_default())?;

    if let Some(radius) = matches.value_of(RADIUS) {
        return Ok(RasterConfig::from_radius(usize::from_str(radius)?, depth)?);
    }

    let size: (usize, usize) = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair(s, 'x'))
        .ok_or_else(|| err_msg("Error parsing image dimensions"))?;
    let upper_left = matches
        .value_of(UPPERLEFT)
        .and_then(parse_complex)
        .ok_or_else(|| err_msg("Error parsing upper left point"))?;
    let lower_right = matches
        .value_of(LOWERRIGHT)
        .and_then(parse_complex)
        .ok_or_else(|| err_msg("Error parsing lower right point"))?;

    Ok(RasterConfig::new(
        size.0,
        size.1,
        upper_left,
        lower_right,
        depth,
    )?)
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let config = config_from(matches)?;
    let threads = usize::from_str(matches.value_of(THREADS).unwrap_or_default())?;
    let output = matches
        .value_of(OUTPUT)
        .ok_or_else(|| err_msg("No output file given"))?;

    let mut image = ImageSink::new(config.width(), config.height());
    if threads == 1 {
        mandelbrot::render(&config, &mut image);
    } else {
        mandelbrot::render_threaded(&config, threads, &mut image)?;
    }
    image.write_pnm(output)?;
    debug!("done");
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
