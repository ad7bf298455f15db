use crate::core::{MIN_ANSWERS, ScoringOptions, TipSelection};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "pairscore.toml";

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub scoring: ScoringConfig,
    pub tips: TipsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    pub json: bool,
    pub color: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            json: false,
            color: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    pub min_answers: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_answers: MIN_ANSWERS,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TipMode {
    #[default]
    Deterministic,
    Random,
}

impl fmt::Display for TipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deterministic => write!(f, "deterministic"),
            Self::Random => write!(f, "random"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TipsConfig {
    pub selection: TipMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl TipsConfig {
    pub fn tip_selection(&self) -> TipSelection {
        match (self.seed, self.selection) {
            (Some(seed), _) => TipSelection::Seeded(seed),
            (None, TipMode::Deterministic) => TipSelection::Deterministic,
            (None, TipMode::Random) => TipSelection::Random,
        }
    }
}

impl Config {
    pub fn scoring_options(&self) -> ScoringOptions {
        ScoringOptions {
            min_answers: self.scoring.min_answers,
            tips: self.tips.tip_selection(),
        }
    }
}

pub fn load_config(cli_config_path: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    if let Some(path) = cli_config_path {
        if !path.exists() {
            bail!(
                "config file not found at {} (passed with --config)",
                path.display()
            );
        }

        return Ok(LoadedConfig {
            config: read_config(path)?,
            source: Some(path.to_path_buf()),
        });
    }

    let local_path = cwd.join(CONFIG_FILE_NAME);
    if local_path.exists() {
        return Ok(LoadedConfig {
            config: read_config(&local_path)?,
            source: Some(local_path),
        });
    }

    Ok(LoadedConfig {
        config: Config::default(),
        source: None,
    })
}

pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "refusing to overwrite existing config file: {}",
            path.display()
        );
    }

    let content = default_config_toml()?;
    fs::write(path, content).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

pub fn default_config_toml() -> Result<String> {
    toml::to_string_pretty(&Config::default()).context("failed to serialize default config")
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading config file {}", path.display()))?;
    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("failed parsing config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips() {
        let content = default_config_toml().unwrap();
        assert!(content.contains("min_answers = 10"));
        assert!(content.contains("selection = \"deterministic\""));
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn partial_files_fill_defaults() {
        let parsed: Config = toml::from_str("[tips]\nseed = 42\n").unwrap();
        assert_eq!(parsed.scoring.min_answers, 10);
        assert!(parsed.general.color);
        assert_eq!(parsed.tips.tip_selection(), TipSelection::Seeded(42));

        let random: Config = toml::from_str("[tips]\nselection = \"random\"\n").unwrap();
        assert_eq!(random.scoring_options().tips, TipSelection::Random);
    }

    #[test]
    fn loads_local_file_then_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(None, dir.path()).unwrap();
        assert!(loaded.source.is_none());
        assert_eq!(loaded.config, Config::default());

        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[general]\njson = true\n",
        )
        .unwrap();
        let loaded = load_config(None, dir.path()).unwrap();
        assert!(loaded.config.general.json);
        assert_eq!(loaded.source, Some(dir.path().join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("custom.toml");
        let err = load_config(Some(&missing), dir.path()).unwrap_err();
        assert!(err.to_string().contains("passed with --config"));
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        write_default_config(&path).unwrap();
        assert!(write_default_config(&path).is_err());
    }

    #[test]
    fn init_writes_to_custom_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        write_default_config(&path).unwrap();

        let loaded = load_config(Some(&path), dir.path()).unwrap();
        assert_eq!(loaded.source, Some(path));
        assert_eq!(loaded.config, Config::default());
        assert!(!dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn tip_mode_displays_as_written_in_toml() {
        assert_eq!(TipMode::Deterministic.to_string(), "deterministic");
        assert_eq!(TipMode::Random.to_string(), "random");
    }

    #[test]
    fn rejects_unknown_tip_mode() {
        assert!(toml::from_str::<Config>("[tips]\nselection = \"sometimes\"\n").is_err());
    }
}
