use crate::cli::Args;
use anyhow::{Context, Result};
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use stripe_shift::EffectParams;

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Config {
    #[derivative(Default(value = "PathBuf::from(\".\")"))]
    pub output_dir: PathBuf,

    pub randomize: bool,

    pub seed: Option<u64>,

    pub effect: EffectParams,
}

impl Config {
    /// Settings from the optional config file with command line overrides
    /// applied on top.
    pub fn load(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("read config file {}", path.display()))?;
                Self::from_toml(&text)
                    .with_context(|| format!("parse config file {}", path.display()))?
            }
            None => Self::default(),
        };

        config.merge_args(args);
        log::debug!("{config:?}");

        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str::<Config>(text)?)
    }

    fn merge_args(&mut self, args: &Args) {
        let effect = &mut self.effect;

        if let Some(v) = args.min_height {
            effect.min_stripe_height = v;
        }
        if let Some(v) = args.max_height {
            effect.max_stripe_height = v;
        }
        if let Some(v) = args.min_shift {
            effect.min_stripe_shift = v;
        }
        if let Some(v) = args.max_shift {
            effect.max_stripe_shift = v;
        }

        if let Some(v) = switch(args.horizontal_mirror, args.no_horizontal_mirror) {
            effect.horizontal_rotate_enabled = v;
        }
        if let Some(v) = switch(args.vertical_mirror, args.no_vertical_mirror) {
            effect.vertical_rotate_enabled = v;
        }

        if let Some(dir) = &args.output_dir {
            self.output_dir = dir.clone();
        }

        if let Some(v) = switch(args.randomize, args.no_randomize) {
            self.randomize = v;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
    }
}

// `--flag` / `--no-flag` pair, `None` when neither was given.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
