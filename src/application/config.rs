//! Driver configuration, read from command-line flags.
//!
//! Defaults reproduce the classic console run: 25x25 area, the fixed
//! seed pattern, one generation per second, no generation cap.

use std::time::Duration;

use crate::domain::{Area, Pattern, Strategy, presets};
use crate::error::{LifeError, Result};

const FLAGS: &str = "\
  --width N             area width (default 25)
  --height N            area height (default 25)
  --delay-ms N          pause between generations in ms (default 1000)
  --pattern NAME        seed pattern, see below (default seed)
  --random DENSITY      fill the area randomly instead of seeding a pattern
  --parallel            evaluate generations on all cores
  --max-generations N   stop after generation N even if cells remain
  --help                print this message";

/// Largest accepted width or height; frames and random fills walk the whole area
pub const MAX_DIMENSION: i64 = 10_000;

/// Help text, with the preset list taken from the pattern library
pub fn usage() -> String {
    let mut text = format!("usage: sparse_life [options]\n\n{FLAGS}\n\npatterns:\n");
    for pattern in presets::all_patterns() {
        text.push_str(&format!("  {:<20}  {}\n", pattern.name, pattern.description));
    }
    text
}

/// Density used by `--random` when the flag is given without a value
pub const DEFAULT_DENSITY: f64 = 0.3;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub area: Area,
    pub delay: Duration,
    pub pattern: Pattern,
    /// When set, the area is filled randomly and `pattern` is ignored
    pub random_density: Option<f64>,
    pub strategy: Strategy,
    pub max_generations: Option<u64>,
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            area: Area::default(),
            delay: Duration::from_secs(1),
            pattern: presets::seed(),
            random_density: None,
            strategy: Strategy::default(),
            max_generations: None,
            show_help: false,
        }
    }
}

impl Config {
    /// Parse flags, excluding the program name
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut width = config.area.width();
        let mut height = config.area.height();

        let mut args = args.into_iter().map(Into::into).peekable();
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--width" => width = parse_value(&flag, args.next())?,
                "--height" => height = parse_value(&flag, args.next())?,
                "--delay-ms" => {
                    config.delay = Duration::from_millis(parse_value(&flag, args.next())?);
                }
                "--pattern" => {
                    let name = args.next().ok_or_else(|| LifeError::MissingValue(flag.clone()))?;
                    config.pattern =
                        presets::by_name(&name).ok_or(LifeError::UnknownPattern(name))?;
                }
                "--random" => {
                    // Density is optional; a following flag means "use the default"
                    let density = match args.next_if(|next| !next.starts_with("--")) {
                        Some(raw) => parse_value(&flag, Some(raw))?,
                        None => DEFAULT_DENSITY,
                    };
                    if !(0.0..=1.0).contains(&density) {
                        return Err(LifeError::InvalidDensity(density));
                    }
                    config.random_density = Some(density);
                }
                "--parallel" => config.strategy = Strategy::Parallel,
                "--max-generations" => {
                    config.max_generations = Some(parse_value(&flag, args.next())?);
                }
                "--help" | "-h" => config.show_help = true,
                _ => return Err(LifeError::UnknownFlag(flag)),
            }
        }

        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(LifeError::AreaTooLarge { width, height, max: MAX_DIMENSION });
        }
        config.area = Area::new(width, height)?;
        Ok(config)
    }

    /// True once `generation` has reached the configured cap
    pub fn reached_limit(&self, generation: u64) -> bool {
        self.max_generations.is_some_and(|max| generation >= max)
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T> {
    let value = value.ok_or_else(|| LifeError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| LifeError::InvalidArgument {
        flag: flag.to_string(),
        value,
    })
}
