// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0 in
//! the upper left corner, and the real plane of the attractor, whose
//! origin sits in the middle of the image.  Both axes are flipped on
//! the way through: larger x lands further left, larger y further up.
use crate::attractor::Point;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// The row and column a point maps to.  Signed, because a point can
/// map to a cell that is off the canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cell(pub i64, pub i64);

/// Maps points from the attractor's real plane onto the integral
/// plane of the image.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// The width and height of the integral plane.
    pub integral_plane: IntegralPlane,
    /// Pixels per unit of real space.
    pub scale: f64,
    // Where the real origin lands, as (column, row).
    centre: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the image and the number of
    /// pixels per unit of real space.
    pub fn new(width: usize, height: usize, scale: f64) -> PlaneMapper {
        PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            scale,
            centre: ((width as f64) / 2.0, (height as f64) / 2.0),
        }
    }

    /// Width of the integral plane.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// Height of the integral plane.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given a point on the real plane, find the cell it falls in,
    /// whether or not that cell is on the canvas.  Fractions are
    /// truncated toward zero, so anything in (-1, 0) lands on row or
    /// column 0.
    pub fn point_to_cell(&self, point: &Point) -> Cell {
        let row = self.centre.1 - self.scale * point.y;
        let column = self.centre.0 - self.scale * point.x;
        Cell(row as i64, column as i64)
    }

    /// Maps a point to the linear offset of its cell in a row-major
    /// buffer, or None if the cell is off the canvas.
    pub fn point_to_offset(&self, point: &Point) -> Option<usize> {
        let Cell(row, column) = self.point_to_cell(point);
        if row < 0
            || column < 0
            || row >= (self.integral_plane.1 as i64)
            || column >= (self.integral_plane.0 as i64)
        {
            return None;
        }
        Some((row as usize) * self.integral_plane.0 + (column as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_the_centre() {
        let pm = PlaneMapper::new(10, 10, 1.0);
        assert_eq!(pm.point_to_cell(&Point::new(0.0, 0.0)), Cell(5, 5));
        assert_eq!(pm.point_to_offset(&Point::new(0.0, 0.0)), Some(55));
    }

    #[test]
    fn origin_maps_to_the_centre_of_large_planes() {
        let pm = PlaneMapper::new(1920, 1080, 250.0);
        assert_eq!(pm.point_to_cell(&Point::new(0.0, 0.0)), Cell(540, 960));
    }

    #[test]
    fn axes_are_flipped() {
        let pm = PlaneMapper::new(10, 10, 1.0);
        assert_eq!(pm.point_to_cell(&Point::new(2.0, 0.0)), Cell(5, 3));
        assert_eq!(pm.point_to_cell(&Point::new(0.0, 2.0)), Cell(3, 5));
        assert_eq!(pm.point_to_cell(&Point::new(-2.0, -2.0)), Cell(7, 7));
    }

    #[test]
    fn scale_stretches_the_real_plane() {
        let pm = PlaneMapper::new(100, 100, 10.0);
        assert_eq!(pm.point_to_cell(&Point::new(1.0, -1.0)), Cell(60, 40));
    }

    #[test]
    fn fractions_truncate_toward_zero() {
        let pm = PlaneMapper::new(10, 10, 1.0);
        // 5 - 5.5 = -0.5, which truncates to 0 rather than -1.
        assert_eq!(pm.point_to_cell(&Point::new(0.0, 5.5)), Cell(0, 5));
        assert_eq!(pm.point_to_offset(&Point::new(0.0, 5.5)), Some(5));
        assert_eq!(pm.point_to_cell(&Point::new(0.25, 0.0)), Cell(5, 4));
    }

    #[test]
    fn off_canvas_points_have_no_offset() {
        let pm = PlaneMapper::new(10, 10, 1.0);
        assert_eq!(pm.point_to_cell(&Point::new(0.0, 6.0)), Cell(-1, 5));
        assert_eq!(pm.point_to_offset(&Point::new(0.0, 6.0)), None);
        assert_eq!(pm.point_to_offset(&Point::new(0.0, -5.0)), None);
        assert_eq!(pm.point_to_offset(&Point::new(-5.0, 0.0)), None);
        assert_eq!(pm.point_to_offset(&Point::new(6.0, 0.0)), None);
    }

    #[test]
    fn last_row_and_column_are_on_canvas() {
        let pm = PlaneMapper::new(10, 10, 1.0);
        assert_eq!(pm.point_to_offset(&Point::new(-4.0, -4.0)), Some(99));
    }

    #[test]
    fn plane_sizes() {
        let pm = PlaneMapper::new(4, 3, 1.0);
        assert_eq!(pm.len(), 12);
        assert!(!pm.is_empty());
        assert!(PlaneMapper::new(0, 3, 1.0).is_empty());
    }
}
