// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The heatmap: one visit counter per pixel, stored row-major.  Each
//! worker fills its own, and they are summed together at the end.

use crate::attractor::Point;
use crate::errors::RenderError;
use crate::plane::PlaneMapper;

/// A grid of visit counts, `height` rows of `width` cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Heatmap {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl Heatmap {
    /// An all-zero heatmap the size of the plane's canvas.
    pub fn new(plane: &PlaneMapper) -> Heatmap {
        Heatmap::with_size(plane.width(), plane.height())
    }

    /// An all-zero heatmap of the given size.
    pub fn with_size(width: usize, height: usize) -> Heatmap {
        Heatmap {
            width,
            height,
            cells: vec![0 as u32; width * height],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the heatmap has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The raw counters, row-major.
    pub fn as_slice(&self) -> &[u32] {
        &self.cells
    }

    /// The count at a given row and column, if that cell exists.
    pub fn get(&self, row: usize, column: usize) -> Option<u32> {
        if row < self.height && column < self.width {
            Some(self.cells[row * self.width + column])
        } else {
            None
        }
    }

    /// Count a visit to the cell under `point`.  Points that land off
    /// the canvas are dropped without complaint; the return value says
    /// which happened.
    #[inline]
    pub fn accumulate(&mut self, plane: &PlaneMapper, point: &Point) -> bool {
        match plane.point_to_offset(point) {
            Some(offset) if offset < self.cells.len() => {
                self.cells[offset] = self.cells[offset].saturating_add(1);
                true
            }
            _ => false,
        }
    }

    /// Add another heatmap of the same shape into this one, cell by
    /// cell.
    pub fn merge(&mut self, other: &Heatmap) -> Result<(), RenderError> {
        if self.width != other.width || self.height != other.height {
            return Err(RenderError::DimensionMismatch {
                from_width: other.width,
                from_height: other.height,
                into_width: self.width,
                into_height: self.height,
            });
        }
        for (cell, visits) in self.cells.iter_mut().zip(other.cells.iter()) {
            *cell = cell.saturating_add(*visits);
        }
        Ok(())
    }

    /// Sum of every counter: the number of points that landed on the
    /// canvas.
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&c| u64::from(c)).sum()
    }

    /// The hottest cell's count.
    pub fn max(&self) -> u32 {
        self.cells.iter().cloned().max().unwrap_or(0)
    }
}
