use crate::consts::{
    DEFAULT_FILLER_CATEGORY, DEFAULT_TARGET_SPEED, DEVIATION_PENALTY, DEVIATION_TOLERANCE,
    MAX_EVALUATIONS, PROGRESS_INTERVAL, RESULT_LIMIT,
};
use crate::error::{MarchError, MsResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub scoring: ScoringParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Stop after this many full pairings have been scored.
    #[arg(long, default_value_t = MAX_EVALUATIONS)]
    pub max_evaluations: usize,
    #[arg(long, default_value_t = RESULT_LIMIT)]
    pub result_limit: usize,
    #[arg(long, default_value_t = PROGRESS_INTERVAL)]
    pub progress_interval: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_evaluations: MAX_EVALUATIONS,
            result_limit: RESULT_LIMIT,
            progress_interval: PROGRESS_INTERVAL,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    /// Desired march speed in percent.
    #[arg(short = 't', long, default_value_t = DEFAULT_TARGET_SPEED)]
    pub target_speed: f32,
    #[arg(long, default_value_t = DEVIATION_TOLERANCE)]
    pub deviation_tolerance: f32,
    #[arg(long, default_value_t = DEVIATION_PENALTY)]
    pub deviation_penalty: f32,
    /// Category fillers report for synergy checks.
    #[arg(long, default_value = DEFAULT_FILLER_CATEGORY)]
    pub filler_category: String,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            target_speed: DEFAULT_TARGET_SPEED,
            deviation_tolerance: DEVIATION_TOLERANCE,
            deviation_penalty: DEVIATION_PENALTY,
            filler_category: DEFAULT_FILLER_CATEGORY.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MsResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            MarchError::Config(format!(
                "Failed to read config file {:?}: {}",
                path.as_ref(),
                e
            ))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MsResult<()> {
        if self.search.result_limit == 0 {
            return Err(MarchError::Config("result_limit must be at least 1".into()));
        }
        if self.search.max_evaluations == 0 {
            return Err(MarchError::Config(
                "max_evaluations must be at least 1".into(),
            ));
        }
        if !self.scoring.target_speed.is_finite() {
            return Err(MarchError::Config("target_speed must be finite".into()));
        }
        if self.scoring.deviation_tolerance < 0.0 {
            return Err(MarchError::Config(
                "deviation_tolerance cannot be negative".into(),
            ));
        }
        Ok(())
    }

    /// Copies every value the user typed on the command line over the
    /// file-provided base. Defaults filled in by clap are ignored.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(search.max_evaluations);
        update_if_present!(search.result_limit);
        update_if_present!(search.progress_interval);

        update_if_present!(scoring.target_speed);
        update_if_present!(scoring.deviation_tolerance);
        update_if_present!(scoring.deviation_penalty);
        update_if_present!(scoring.filler_category);
    }
}
