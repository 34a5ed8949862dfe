use std::path::PathBuf;

/// Command-line settings for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// JSON scenario to play instead of the built-in one.
    pub scenario_path: Option<PathBuf>,
    /// Seed for the Enter-key coin flip (entropy when absent).
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Positional arguments: `[scenario.json] [seed]`. `args[0]` is the program name.
    pub fn from_args(args: &[String]) -> Self {
        Self {
            scenario_path: args
                .get(1)
                .filter(|s| !s.is_empty() && s.as_str() != "-")
                .map(PathBuf::from),
            seed: args.get(2).and_then(|s| s.parse().ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_without_args() {
        assert_eq!(GameConfig::from_args(&args(&["lost-puppy"])), GameConfig::default());
    }

    #[test]
    fn test_path_and_seed() {
        let config = GameConfig::from_args(&args(&["lost-puppy", "kitten.json", "99"]));
        assert_eq!(config.scenario_path, Some(PathBuf::from("kitten.json")));
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_dash_keeps_builtin_and_bad_seed_is_dropped() {
        let config = GameConfig::from_args(&args(&["lost-puppy", "-", "nope"]));
        assert_eq!(config, GameConfig::default());
    }
}
