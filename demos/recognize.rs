//! Recognizes a few sample gestures against a template library.
//!
//! ```text
//! cargo run --example recognize --features serde -- [templates.ron]
//! ```
//!
//! Without an argument a small built-in library is used and printed as RON,
//! which can be saved and edited to try other templates.

use std::{env, error::Error, fs};

use dollar_recognizer::{
    point::from_strokes, recognize_with, Algorithm, GestureTemplate, RecognizerConfig, Score,
};
use ron::ser::{to_string_pretty, PrettyConfig};

/// $P distances above this are reported as "no match"
const MAX_DISTANCE: f64 = 10.0;
/// $1 scores below this are reported as "no match"
const MIN_SCORE: f64 = 0.8;

fn default_templates() -> Vec<GestureTemplate> {
    vec![
        GestureTemplate::new(
            from_strokes(&[vec![(0.0, 40.0), (30.0, 80.0), (100.0, 0.0)]]),
            "check",
        ),
        GestureTemplate::new(
            from_strokes(&[vec![(0.0, 0.0), (50.0, 80.0), (100.0, 0.0), (0.0, 0.0)]]),
            "triangle",
        ),
        GestureTemplate::new(
            from_strokes(&[
                vec![(0.0, 0.0), (100.0, 100.0)],
                vec![(100.0, 0.0), (0.0, 100.0)],
            ]),
            "x",
        ),
        GestureTemplate::new(
            from_strokes(&[
                vec![(0.0, 30.0), (100.0, 30.0)],
                vec![(0.0, 70.0), (100.0, 70.0)],
            ]),
            "equals",
        ),
    ]
}

fn describe(score: Score, name: &str) -> String {
    match score {
        Score::Similarity(s) if s < MIN_SCORE => format!("No match (score: {s:.3})"),
        Score::Distance(d) if d > MAX_DISTANCE => format!("No match (distance: {d:.3})"),
        Score::Similarity(s) => format!("{name} (score: {s:.3})"),
        Score::Distance(d) => format!("{name} (distance: {d:.3})"),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let templates: Vec<GestureTemplate> = match env::args().nth(1) {
        Some(path) => ron::from_str(&fs::read_to_string(path)?)?,
        None => {
            let templates = default_templates();
            println!("{}", to_string_pretty(&templates, PrettyConfig::default())?);
            templates
        }
    };

    let gestures = [
        (
            "sloppy check",
            from_strokes(&[vec![(210.0, 145.0), (228.0, 170.0), (240.0, 178.0), (290.0, 110.0)]]),
        ),
        (
            "x drawn backwards",
            from_strokes(&[
                vec![(0.0, 100.0), (100.0, 0.0)],
                vec![(100.0, 100.0), (0.0, 0.0)],
            ]),
        ),
    ];

    for (label, points) in &gestures {
        for algorithm in [Algorithm::DollarOne, Algorithm::DollarP] {
            let config = RecognizerConfig::new(algorithm);
            match recognize_with(points, &templates, &config) {
                Ok(result) => println!(
                    "{label} / {algorithm:?}: {}",
                    describe(result.score, &result.name)
                ),
                Err(err) => println!("{label} / {algorithm:?}: {err}"),
            }
        }
    }
    Ok(())
}
