// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Every knob the renderer has.  None of these are exposed on the
//! command line; instead there are two compiled-in presets, and the
//! binary lets you pick one.

use crate::attractor::Coefficients;
use crate::errors::RenderError;
use std::str::FromStr;

/// The full description of a single render pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// The four constants of the Clifford map.
    pub coefficients: Coefficients,
    /// How many times each seed point is pushed through the map
    /// before it is plotted.
    pub iterations: usize,
    /// The total point budget, shared out among the workers.
    pub points: usize,
    /// Pixels per unit of attractor space.
    pub scale: f64,
    /// Width of the output image, in pixels.
    pub width: usize,
    /// Height of the output image, in pixels.
    pub height: usize,
    /// Number of worker threads.
    pub workers: usize,
    /// If set, worker 0 reports progress every this many points.
    pub progress_every: Option<usize>,
}

impl Config {
    /// The default fiery render: the coefficients that produce the
    /// folded-ribbon attractor, with progress reporting switched on.
    pub fn tracked() -> Config {
        Config {
            coefficients: Coefficients {
                a: 1.46,
                b: 2.2,
                c: 1.94,
                d: 1.17,
            },
            iterations: 15,
            points: 200_000_000,
            scale: 250.0,
            width: 1920,
            height: 1080,
            workers: 8,
            progress_every: Some(1000),
        }
    }

    /// The classic Clifford coefficients, rendered silently.
    pub fn quiet() -> Config {
        Config {
            coefficients: Coefficients {
                a: -1.4,
                b: 1.6,
                c: 1.0,
                d: 0.7,
            },
            iterations: 15,
            points: 100_000_000,
            scale: 250.0,
            width: 1920,
            height: 1080,
            workers: 8,
            progress_every: None,
        }
    }

    /// The number of points each worker draws.  The remainder of an
    /// uneven split is not drawn by anyone.
    pub fn points_per_worker(&self) -> usize {
        if self.workers == 0 {
            0
        } else {
            self.points / self.workers
        }
    }

    /// Reject configurations that cannot produce an image.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "the canvas {}x{} has no pixels",
                self.width, self.height
            )));
        }
        if self.workers == 0 {
            return Err(RenderError::InvalidConfig(
                "at least one worker is required".to_string(),
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(RenderError::InvalidConfig(format!(
                "the scale must be a positive number, not {}",
                self.scale
            )));
        }
        if self.progress_every == Some(0) {
            return Err(RenderError::InvalidConfig(
                "progress cannot be reported every 0 points".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::tracked()
    }
}

/// The named presets the binary can choose between.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Preset {
    /// See `Config::tracked`.
    Tracked,
    /// See `Config::quiet`.
    Quiet,
}

impl Preset {
    /// Every preset name, for help text and validation.
    pub const NAMES: &'static [&'static str] = &["tracked", "quiet"];

    /// The configuration this preset stands for.
    pub fn config(self) -> Config {
        match self {
            Preset::Tracked => Config::tracked(),
            Preset::Quiet => Config::quiet(),
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tracked" => Ok(Preset::Tracked),
            "quiet" => Ok(Preset::Quiet),
            _ => Err(format!(
                "Unknown preset '{}', expected one of: {}",
                s,
                Preset::NAMES.join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        assert!(Config::tracked().validate().is_ok());
        assert!(Config::quiet().validate().is_ok());
    }

    #[test]
    fn only_the_tracked_preset_reports_progress() {
        assert_eq!(Config::tracked().progress_every, Some(1000));
        assert_eq!(Config::quiet().progress_every, None);
        assert_eq!(Config::default(), Config::tracked());
    }

    #[test]
    fn presets_parse_by_name() {
        assert_eq!("tracked".parse::<Preset>(), Ok(Preset::Tracked));
        assert_eq!("quiet".parse::<Preset>(), Ok(Preset::Quiet));
        assert!("loud".parse::<Preset>().is_err());
        assert_eq!(Preset::Quiet.config(), Config::quiet());
    }

    #[test]
    fn uneven_budgets_are_truncated() {
        let config = Config {
            points: 10,
            workers: 3,
            ..Config::quiet()
        };
        assert_eq!(config.points_per_worker(), 3);
    }

    #[test]
    fn empty_canvas_is_rejected() {
        let config = Config {
            width: 0,
            ..Config::quiet()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_workers_are_rejected() {
        let config = Config {
            workers: 0,
            ..Config::quiet()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.points_per_worker(), 0);
    }

    #[test]
    fn zero_cadence_is_rejected() {
        let config = Config {
            progress_every: Some(0),
            ..Config::tracked()
        };
        assert!(config.validate().is_err());
    }
}
