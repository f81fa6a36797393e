//! Prints enharmonic equivalents of a note and the best respellings of a
//! few scales.
//!
//! Usage: `enharmonic-demo [config.json]`, where the optional JSON document
//! may set `note`, `scales` and any spelling parameter:
//!
//! ```json
//! {"note": "G#", "scales": [["C", "D#", "F", "G#", "A#"]], "accidental": "#"}
//! ```

use std::{error::Error, fs, time::Instant};

use enharmonic::{
    primitives::{parse_scale, render_scale},
    spelling::{all_candidates, equivalents, weigh},
    Pitch, Scale, SpellingConfig,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    note: Pitch,
    scales: Vec<Scale>,
    #[serde(flatten)]
    spelling: SpellingConfig,
}
impl Default for DemoConfig {
    fn default() -> Self {
        let scales = [
            vec!["C#", "D#", "F#", "G#", "A#"],
            vec!["C", "D", "D#", "E", "G", "A"],
            vec!["C", "D", "D#", "F", "G", "A", "A#"],
            vec!["C", "C#", "D#", "E", "F#", "G", "A", "A#"],
        ];
        Self {
            note: "C#".parse().expect("valid default note"),
            scales: scales
                .into_iter()
                .map(|tokens| parse_scale(tokens).expect("valid default scale"))
                .collect(),
            spelling: SpellingConfig::default(),
        }
    }
}

type Step = fn(&DemoConfig) -> Result<(), Box<dyn Error>>;

fn print_equivalents(config: &DemoConfig) -> Result<(), Box<dyn Error>> {
    let start = Instant::now();
    let found = equivalents(&config.note, &config.spelling)?;
    let elapsed = start.elapsed();
    println!("Enharmonic equivalences for {}:", config.note);
    println!("  {}", render_scale(&found));
    println!("  computed in {elapsed:?}");
    Ok(())
}

fn print_respellings(config: &DemoConfig) -> Result<(), Box<dyn Error>> {
    let accidental = config.spelling.accidental;
    for scale in config.scales.iter() {
        let start = Instant::now();
        let candidates = all_candidates(scale, &config.spelling)?;
        let ranked = weigh(scale, candidates, accidental);
        let elapsed = start.elapsed();
        println!("[{}] with {accidental}:", render_scale(scale));
        for candidate in ranked.iter() {
            println!(
                "  {:>5}  {}",
                candidate.weight,
                render_scale(&candidate.scale)
            );
        }
        println!("  computed in {elapsed:?}");
    }
    Ok(())
}

fn load_config() -> Result<DemoConfig, Box<dyn Error>> {
    match std::env::args().nth(1) {
        None => Ok(DemoConfig::default()),
        Some(path) => {
            log::info!("reading config from {path}");
            let config: DemoConfig =
                serde_json::from_str(&fs::read_to_string(path)?)?;
            config.spelling.validate()?;
            Ok(config)
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let config = load_config()?;
    log::debug!("{config:?}");
    let steps: [(&str, Step); 2] = [
        ("Equivalents", print_equivalents),
        ("Respellings", print_respellings),
    ];
    for (name, step) in steps {
        log::info!("running step: {name}");
        step(&config)?;
    }
    Ok(())
}
