// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns a finished heatmap into a PNG file.

use image::png::PNGEncoder;
use image::ColorType;
use itertools::iproduct;
use std::fs::File;
use std::path::Path;

use crate::colour::temperature_to_rgb;
use crate::errors::RenderError;
use crate::heatmap::Heatmap;

/// Run every cell of the heatmap through the colour ramp and pack the
/// results into an 8-bit RGB buffer, row-major, three bytes a pixel.
pub fn pixelate(heatmap: &Heatmap) -> Vec<u8> {
    let (width, height) = (heatmap.width(), heatmap.height());
    let cells = heatmap.as_slice();
    let mut pixels = vec![0 as u8; 3 * width * height];
    for (row, column) in iproduct!(0..height, 0..width) {
        let offset = row * width + column;
        let rgb = temperature_to_rgb(cells[offset]);
        pixels[3 * offset..3 * offset + 3].copy_from_slice(&rgb);
    }
    pixels
}

/// Encode an RGB buffer as a PNG and write it to `path`, replacing
/// whatever was there.
pub fn write_png<P: AsRef<Path>>(
    path: P,
    pixels: &[u8],
    width: usize,
    height: usize,
) -> Result<(), RenderError> {
    let path = path.as_ref();
    let io_error = |cause| RenderError::Io {
        path: path.display().to_string(),
        cause,
    };
    let output = File::create(path).map_err(io_error)?;
    let encoder = PNGEncoder::new(output);
    encoder
        .encode(pixels, width as u32, height as u32, ColorType::RGB(8))
        .map_err(io_error)?;
    Ok(())
}

/// Colour a heatmap and write it out as a PNG.
pub fn emit<P: AsRef<Path>>(heatmap: &Heatmap, path: P) -> Result<(), RenderError> {
    let pixels = pixelate(heatmap);
    write_png(path, &pixels, heatmap.width(), heatmap.height())
}
