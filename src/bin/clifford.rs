// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use clifford::emitter;
use clifford::{Preset, Progress, Renderer, SeedSource};
use log::{info, warn};
use std::str::FromStr;

const OUTPUT: &str = "image.png";

const PRESET: &str = "preset";
const SEED: &str = "seed";

fn validate_parse<T: FromStr>(s: &str, err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

fn args<'a>() -> ArgMatches<'a> {
    App::new("clifford")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Clifford attractor heatmap renderer; writes image.png")
        .arg(
            Arg::with_name(PRESET)
                .required(false)
                .long(PRESET)
                .short("p")
                .takes_value(true)
                .default_value("tracked")
                .possible_values(Preset::NAMES)
                .help("Which compiled-in configuration to render"),
        )
        .arg(
            Arg::with_name(SEED)
                .required(false)
                .long(SEED)
                .short("s")
                .takes_value(true)
                .validator(|s| validate_parse::<u64>(&s, "Could not parse seed"))
                .help("Seed the workers' generators for a repeatable image"),
        )
        .get_matches()
}

fn report(progress: Progress) {
    println!("\x1b[A\x1b[2K{}% complete", progress.percent());
}

fn main() {
    env_logger::init();
    let matches = args();

    let preset = Preset::from_str(matches.value_of(PRESET).unwrap_or("tracked"))
        .expect("Error parsing preset");
    let seeds = match matches.value_of(SEED) {
        Some(seed) => SeedSource::Fixed(u64::from_str(seed).expect("Error parsing seed")),
        None => SeedSource::Entropy,
    };
    let config = preset.config();

    let cpus = num_cpus::get();
    if config.workers > cpus {
        warn!(
            "{} workers requested but only {} CPUs are available",
            config.workers, cpus
        );
    }

    println!(
        "Drawing {} points using {} threads...\n",
        config.points, config.workers
    );

    let renderer = match Renderer::new(config) {
        Ok(renderer) => renderer.with_progress(report),
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
    };

    let render = match renderer.render(seeds) {
        Ok(render) => render,
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "{} points drawn, {} landed on the canvas, hottest pixel {}",
        render.stats.drawn,
        render.stats.plotted,
        render.heatmap.max()
    );

    if let Err(e) = emitter::emit(&render.heatmap, OUTPUT) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
    info!("wrote {}", OUTPUT);
}
