// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The things that can go wrong while rendering.  Points that fall
//! off the canvas are not among them; those are simply dropped.

use failure::Fail;
use std::io;

/// Every failure the renderer reports back to its caller.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The configuration describes something that cannot be rendered,
    /// such as an empty canvas or zero workers.
    #[fail(display = "Invalid configuration: {}", _0)]
    InvalidConfig(String),

    /// Two heatmaps of different shapes were asked to merge.
    #[fail(
        display = "Cannot merge a {}x{} heatmap into a {}x{} heatmap",
        from_width, from_height, into_width, into_height
    )]
    DimensionMismatch {
        /// Width of the heatmap being merged in.
        from_width: usize,
        /// Height of the heatmap being merged in.
        from_height: usize,
        /// Width of the receiving heatmap.
        into_width: usize,
        /// Height of the receiving heatmap.
        into_height: usize,
    },

    /// A worker thread died before handing back its partial heatmap.
    #[fail(display = "A render worker panicked")]
    WorkerPanicked,

    /// The encoder could not write the image.
    #[fail(display = "Could not write {}: {}", path, cause)]
    Io {
        /// The file we were writing.
        path: String,
        /// What the operating system said about it.
        #[cause]
        cause: io::Error,
    },
}
