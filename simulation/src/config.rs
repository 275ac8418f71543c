use std::path::Path;

use serde::Deserialize;

use crate::error::SimulationError;

pub const PLAYERS_ENV: &str = "CARD_GAME_PLAYERS";
pub const SEED_ENV: &str = "CARD_GAME_SEED";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub players: Vec<String>,
    pub seed: Option<u64>,
    pub delay_ms: Option<u64>,
}

impl GameConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SimulationError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, SimulationError> {
        let yaml = std::fs::read_to_string(path)?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_yaml_str(&yaml)
    }

    pub fn from_env() -> Result<Self, SimulationError> {
        Self::from_env_lookup(|key| std::env::var(key).ok())
    }

    /// `CARD_GAME_PLAYERS` is a comma separated list of names.
    pub fn from_env_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SimulationError> {
        let players = lookup(PLAYERS_ENV)
            .map(|names| {
                names
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let seed = lookup(SEED_ENV)
            .map(|seed| {
                seed.trim()
                    .parse::<u64>()
                    .map_err(|_| SimulationError::MalformedInput(seed))
            })
            .transpose()?;
        Ok(Self {
            players,
            seed,
            delay_ms: None,
        })
    }

    /// Field by field, the first layer that sets a value wins.
    pub fn from_cli_or_env_or_yaml(cli: GameConfig, env: GameConfig, yaml: Option<GameConfig>) -> Self {
        let yaml = yaml.unwrap_or_default();
        let players = [cli.players, env.players, yaml.players]
            .into_iter()
            .find(|players| !players.is_empty())
            .unwrap_or_default();
        Self {
            players,
            seed: cli.seed.or(env.seed).or(yaml.seed),
            delay_ms: cli.delay_ms.or(env.delay_ms).or(yaml.delay_ms),
        }
    }
}
