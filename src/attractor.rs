// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The Clifford attractor itself.
//!
//! The map takes a point (x, y) to
//!
//! ```text
//! x' = sin(a·y) + c·cos(a·x)
//! y' = sin(b·x) + d·cos(b·y)
//! ```
//!
//! Whatever point you start from, after a dozen or so applications
//! the orbit has fallen onto the attractor, which is bounded by
//! `1 + |c|` horizontally and `1 + |d|` vertically.  Throw enough
//! random starting points at it and the places they land trace out
//! its shape.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// A point in attractor space.  Not a pixel; see `PlaneMapper` for
/// how one becomes the other.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Constructor.
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

/// The four constants that pick out one attractor from the family.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coefficients {
    /// Frequency applied to y in x', and to x in the cosine term of x'.
    pub a: f64,
    /// Frequency applied to x in y', and to y in the cosine term of y'.
    pub b: f64,
    /// Amplitude of the cosine term of x'.
    pub c: f64,
    /// Amplitude of the cosine term of y'.
    pub d: f64,
}

/// A Clifford map with fixed coefficients.
#[derive(Copy, Clone, Debug)]
pub struct Attractor {
    coefficients: Coefficients,
}

impl Attractor {
    /// Constructor.
    pub fn new(coefficients: Coefficients) -> Attractor {
        Attractor { coefficients }
    }

    /// Apply the map once.  Both coordinates are computed from the
    /// old point before either is replaced.
    #[inline]
    pub fn step(&self, p: Point) -> Point {
        let Coefficients { a, b, c, d } = self.coefficients;
        Point {
            x: (a * p.y).sin() + c * (a * p.x).cos(),
            y: (b * p.x).sin() + d * (b * p.y).cos(),
        }
    }

    /// Apply the map `iterations` times, starting from `seed`.
    pub fn orbit(&self, seed: Point, iterations: usize) -> Point {
        (0..iterations).fold(seed, |p, _| self.step(p))
    }
}

/// An endless supply of starting points, uniformly distributed over
/// the square [-1, 1] x [-1, 1].  Each worker owns one of these, so
/// there is never a generator shared between threads.
pub struct SeedPoints<R: Rng>(Uniform<f64>, R);

impl<R: Rng> SeedPoints<R> {
    /// Wrap a random number generator.
    pub fn new(rng: R) -> Self {
        SeedPoints(Uniform::new_inclusive(-1.0_f64, 1.0), rng)
    }

    /// The next starting point.
    pub fn get(&mut self) -> Point {
        let x = self.0.sample(&mut self.1);
        let y = self.0.sample(&mut self.1);
        Point { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ribbon() -> Attractor {
        Attractor::new(Coefficients {
            a: 1.46,
            b: 2.2,
            c: 1.94,
            d: 1.17,
        })
    }

    #[test]
    fn zero_iterations_returns_the_seed() {
        let seed = Point::new(0.25, -0.75);
        assert_eq!(ribbon().orbit(seed, 0), seed);
    }

    #[test]
    fn one_iteration_is_one_step() {
        let seed = Point::new(0.5, 0.5);
        let attractor = ribbon();
        assert_eq!(attractor.orbit(seed, 1), attractor.step(seed));
    }

    #[test]
    fn step_updates_both_coordinates_from_the_old_point() {
        let attractor = Attractor::new(Coefficients {
            a: 1.0,
            b: 1.0,
            c: 1.0,
            d: 1.0,
        });
        let p = attractor.step(Point::new(0.0, 0.0));
        // x' = sin(0) + cos(0), y' = sin(0) + cos(0); had y' seen the
        // new x it would be sin(1) + 1.
        assert_eq!(p, Point::new(1.0, 1.0));
    }

    #[test]
    fn step_matches_the_formula() {
        let attractor = ribbon();
        let (x, y) = (0.3_f64, -0.6_f64);
        let p = attractor.step(Point::new(x, y));
        let ex = (1.46 * y).sin() + 1.94 * (1.46 * x).cos();
        let ey = (2.2 * x).sin() + 1.17 * (2.2 * y).cos();
        assert!((p.x - ex).abs() < 1e-12);
        assert!((p.y - ey).abs() < 1e-12);
    }

    #[test]
    fn orbits_stay_bounded() {
        let attractor = ribbon();
        let mut seeds = SeedPoints::new(StdRng::seed_from_u64(3));
        for _ in 0..1000 {
            let p = attractor.orbit(seeds.get(), 15);
            assert!(p.x.abs() <= 1.0 + 1.94 + 1e-9);
            assert!(p.y.abs() <= 1.0 + 1.17 + 1e-9);
        }
    }

    #[test]
    fn seeds_fall_inside_the_unit_square() {
        let mut seeds = SeedPoints::new(StdRng::seed_from_u64(11));
        for _ in 0..1000 {
            let p = seeds.get();
            assert!(p.x >= -1.0 && p.x <= 1.0);
            assert!(p.y >= -1.0 && p.y <= 1.0);
        }
    }

    #[test]
    fn seeded_generators_repeat_themselves() {
        let mut first = SeedPoints::new(StdRng::seed_from_u64(42));
        let mut second = SeedPoints::new(StdRng::seed_from_u64(42));
        for _ in 0..100 {
            assert_eq!(first.get(), second.get());
        }
    }
}
