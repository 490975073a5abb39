// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The point generator.  Every worker throws its share of random
//! seeds at the attractor and counts where they land in a heatmap of
//! its own; once every worker has been joined, the heatmaps are added
//! together.  Nothing is written to shared memory during the run
//! except a progress counter, and that one is atomic.

use crossbeam::thread::ScopedJoinHandle;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::attractor::{Attractor, SeedPoints};
use crate::config::Config;
use crate::errors::RenderError;
use crate::heatmap::Heatmap;
use crate::plane::PlaneMapper;

// How often a worker publishes its count when nobody is listening
// for progress.
const SILENT_BATCH: usize = 4096;

/// A snapshot of how far the render has got.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Progress {
    /// Points drawn so far, by all workers together.
    pub drawn: usize,
    /// The configured point budget.
    pub total: usize,
}

impl Progress {
    /// `drawn` as a percentage of `total`.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            100.0 * (self.drawn as f64) / (self.total as f64)
        }
    }
}

/// Where the workers get their randomness.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SeedSource {
    /// Every worker seeds its own generator from the operating system.
    Entropy,
    /// Worker `k` seeds its generator with `seed + k`.  Renders made
    /// with the same seed and worker count are identical.
    Fixed(u64),
}

impl SeedSource {
    fn rng_for(self, worker: usize) -> StdRng {
        match self {
            SeedSource::Entropy => StdRng::from_entropy(),
            SeedSource::Fixed(seed) => StdRng::seed_from_u64(seed.wrapping_add(worker as u64)),
        }
    }
}

/// Counts kept over a render.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stats {
    /// Every point generated, whether or not it landed on the canvas.
    pub drawn: usize,
    /// The points that landed on the canvas.
    pub plotted: u64,
}

/// A finished render.
#[derive(Clone, Debug)]
pub struct Render {
    /// The merged visit counts.
    pub heatmap: Heatmap,
    /// What it took to get them.
    pub stats: Stats,
}

/// Holds the parameters by which a heatmap is generated.  Once set,
/// this object should not be mutable.
pub struct Renderer {
    config: Config,
    attractor: Attractor,
    plane: PlaneMapper,
    progress: Option<Box<dyn Fn(Progress) + Send + Sync>>,
}

impl Renderer {
    /// Validates the configuration and builds a renderer for it.
    pub fn new(config: Config) -> Result<Self, RenderError> {
        config.validate()?;
        Ok(Renderer {
            config,
            attractor: Attractor::new(config.coefficients),
            plane: PlaneMapper::new(config.width, config.height, config.scale),
            progress: None,
        })
    }

    /// Install a progress hook.  It is called from worker 0 only, every
    /// `progress_every` of that worker's points; if the configuration
    /// has no cadence, it is never called.
    pub fn with_progress<F>(mut self, hook: F) -> Self
    where
        F: Fn(Progress) + Send + Sync + 'static,
    {
        self.progress = Some(Box::new(hook));
        self
    }

    /// The configuration this renderer was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The mapping from attractor space to the canvas.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// Draw `share` points into a fresh heatmap.  `drawn` is the
    /// counter shared by all workers; it is advanced in batches rather
    /// than point by point.
    fn plot_share<R: Rng>(
        &self,
        worker: usize,
        share: usize,
        rng: R,
        drawn: &AtomicUsize,
    ) -> Heatmap {
        debug!("worker {} drawing {} points", worker, share);
        let mut heatmap = Heatmap::new(&self.plane);
        let mut seeds = SeedPoints::new(rng);
        let hook = match (worker, self.config.progress_every, &self.progress) {
            (0, Some(_), Some(hook)) => Some(hook),
            _ => None,
        };
        let batch = self.config.progress_every.unwrap_or(SILENT_BATCH);
        let mut pending = 0;
        for _ in 0..share {
            let point = self.attractor.orbit(seeds.get(), self.config.iterations);
            heatmap.accumulate(&self.plane, &point);
            pending += 1;
            if pending == batch {
                let so_far = drawn.fetch_add(pending, Ordering::Relaxed) + pending;
                pending = 0;
                if let Some(hook) = hook {
                    hook(Progress {
                        drawn: so_far,
                        total: self.config.points,
                    });
                }
            }
        }
        drawn.fetch_add(pending, Ordering::Relaxed);
        debug!("worker {} finished", worker);
        heatmap
    }

    /// Render the whole point budget on the calling thread, with a
    /// generator supplied by the caller.
    pub fn render_single<R: Rng>(&self, rng: R) -> Render {
        let drawn = AtomicUsize::new(0);
        let heatmap = self.plot_share(0, self.config.points, rng, &drawn);
        let stats = Stats {
            drawn: drawn.load(Ordering::SeqCst),
            plotted: heatmap.total(),
        };
        Render { heatmap, stats }
    }

    /// Given a collection of partial heatmaps, merge them all into a
    /// single one.
    fn render_merge(&self, partials: &[Heatmap]) -> Result<Heatmap, RenderError> {
        let mut heatmap = Heatmap::new(&self.plane);
        for partial in partials {
            heatmap.merge(partial)?;
        }
        debug!("merged {} partial heatmaps", partials.len());
        Ok(heatmap)
    }

    /// The multi-threaded render.  Each of the configured workers
    /// draws `points / workers` points; whatever is left over from an
    /// uneven split is not drawn.
    pub fn render(&self, seeds: SeedSource) -> Result<Render, RenderError> {
        let share = self.config.points_per_worker();
        let drawn = AtomicUsize::new(0);

        let partials = crossbeam::scope(|spawner| {
            let handles: Vec<ScopedJoinHandle<Heatmap>> = (0..self.config.workers)
                .map(|worker| {
                    let rng = seeds.rng_for(worker);
                    let drawn = &drawn;
                    spawner.spawn(move |_| self.plot_share(worker, share, rng, drawn))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().map_err(|_| RenderError::WorkerPanicked))
                .collect::<Result<Vec<Heatmap>, RenderError>>()
        })
        .map_err(|_| RenderError::WorkerPanicked)?;
        let partials = partials?;

        let heatmap = self.render_merge(&partials)?;
        let stats = Stats {
            drawn: drawn.load(Ordering::SeqCst),
            plotted: heatmap.total(),
        };
        Ok(Render { heatmap, stats })
    }
}
