use nestwalk_config::{NestwalkConfig, OutputFormat};
use nestwalk_engine::{Visit, WalkOptions};

use crate::Args;

/// Effective settings after layering flags over config over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub options: WalkOptions,
    pub format: OutputFormat,
    pub max_depth: Option<usize>,
    pub skip_keys: Vec<String>,
}

impl Settings {
    pub fn resolve(args: &Args, config: Option<&NestwalkConfig>) -> Self {
        let mut options = config.map(NestwalkConfig::walk_options).unwrap_or_default();
        let output = config.map(NestwalkConfig::output).unwrap_or_default();

        if let Some(order) = args.order {
            options.order = order;
        }
        if let Some(key_order) = args.key_order {
            options.key_order = key_order;
        }

        // Flags replace the configured skip list rather than extending it.
        let skip_keys = if args.skip.is_empty() {
            output.skip_keys
        } else {
            args.skip.clone()
        };

        Self {
            options,
            format: args.format.unwrap_or(output.format),
            max_depth: args.max_depth.or(output.max_depth),
            skip_keys,
        }
    }

    /// Pruning hook for the walker: stops at `max_depth` and at skipped keys.
    pub fn pruner<N>(&self) -> impl Fn(&Visit<N>) -> bool + '_ {
        move |visit: &Visit<N>| {
            self.max_depth.is_some_and(|max| visit.depth() >= max)
                || self.skip_keys.iter().any(|key| *key == visit.key)
        }
    }
}
