#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Clifford attractor renderer
//!
//! A Clifford attractor is what you get when you take a point on the
//! plane and repeatedly feed it through a pair of coupled sines and
//! cosines.  Almost every starting point ends up on the same tangled
//! curve after a handful of iterations, so the picture is made by
//! throwing a very large number of random points at the map and
//! counting how many of them land on each pixel.
//!
//! Those counts are a heatmap.  Cold pixels stay black; warmer ones go
//! red, then yellow, then white, and the result is written out as a
//! PNG.  The counting is spread across several workers, each with its
//! own heatmap and its own random number generator, and the heatmaps
//! are summed once every worker is done.

pub mod attractor;
pub mod colour;
pub mod config;
pub mod emitter;
pub mod errors;
pub mod heatmap;
pub mod plane;
pub mod renderer;

pub use attractor::{Attractor, Coefficients, Point};
pub use config::{Config, Preset};
pub use errors::RenderError;
pub use heatmap::Heatmap;
pub use plane::PlaneMapper;
pub use renderer::{Progress, Render, Renderer, SeedSource, Stats};
