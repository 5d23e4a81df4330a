use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    app::effect::EffectOptions,
    cli::{Cli, ColorArg},
    domain::palette::HueFamily,
};

pub const DEFAULT_FPS: u8 = 60;
pub const FPS_RANGE: (u8, u8) = (15, 120);
pub const CONFIG_DIR_ENV: &str = "THUNDER_CONFIG_DIR";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path} failed")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing config {path} failed")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("fps {0} is outside {min}..={max}", min = FPS_RANGE.0, max = FPS_RANGE.1)]
    InvalidFps(u8),
    #[error("tint must be a finite number of degrees")]
    InvalidTint,
}

/// On-disk config. Every field is optional; CLI flags win over it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub blue: Option<bool>,
    pub hue_family: Option<f64>,
    pub tint: Option<f64>,
    pub class_name: Option<String>,
    pub fps: Option<u8>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EffectConfig {
    pub palette: HueFamily,
    pub tint: Option<f64>,
    pub class_name: Option<String>,
    pub fps: u8,
    pub seed: Option<u64>,
    pub color: ColorArg,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            palette: HueFamily::White,
            tint: None,
            class_name: None,
            fps: DEFAULT_FPS,
            seed: None,
            color: ColorArg::Auto,
        }
    }
}

impl EffectConfig {
    pub fn effect_options(&self) -> EffectOptions {
        EffectOptions {
            palette: self.palette,
            tint: self.tint,
            class_name: self.class_name.clone(),
        }
    }
}

pub fn load_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn default_config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_DIR_ENV).map(|dir| PathBuf::from(dir).join(CONFIG_FILE_NAME))
}

/// Explicit `--config` must exist; the default location is optional.
pub fn resolve(cli: &Cli) -> Result<EffectConfig, ConfigError> {
    let file = match &cli.config {
        Some(path) => load_file_config(path)?,
        None => match default_config_path() {
            Some(path) if path.is_file() => load_file_config(&path)?,
            _ => FileConfig::default(),
        },
    };
    merge(cli, file)
}

pub fn merge(cli: &Cli, file: FileConfig) -> Result<EffectConfig, ConfigError> {
    let tint = cli.tint.or(file.tint);
    if tint.is_some_and(|deg| !deg.is_finite()) {
        return Err(ConfigError::InvalidTint);
    }

    // Without an explicit selector a non-zero tint picks blue, as the tint
    // filter only exists for that palette.
    let palette = if cli.blue {
        HueFamily::ElectricBlue
    } else if cli.hue_family.is_some() {
        HueFamily::from_selector(cli.hue_family)
    } else if let Some(blue) = file.blue {
        if blue {
            HueFamily::ElectricBlue
        } else {
            HueFamily::White
        }
    } else if file.hue_family.is_some() {
        HueFamily::from_selector(file.hue_family)
    } else {
        HueFamily::from_selector(tint)
    };

    let fps = cli.fps.or(file.fps).unwrap_or(DEFAULT_FPS);
    if !(FPS_RANGE.0..=FPS_RANGE.1).contains(&fps) {
        return Err(ConfigError::InvalidFps(fps));
    }

    Ok(EffectConfig {
        palette,
        tint,
        class_name: cli.class_name.clone().or(file.class_name),
        fps,
        seed: cli.seed.or(file.seed),
        color: cli.effective_color_mode(),
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::test_support::test_cli;

    #[test]
    fn defaults_to_white_without_tint() {
        let config = merge(&test_cli(), FileConfig::default()).expect("config");
        assert_eq!(config.palette, HueFamily::White);
        assert_eq!(config.palette.tint_filter(config.tint), None);
        assert_eq!(config.fps, DEFAULT_FPS);
    }

    #[test]
    fn lone_tint_selects_blue() {
        let cli = Cli::parse_from(["terminal-thunder", "--tint", "90"]);
        let config = merge(&cli, FileConfig::default()).expect("config");
        assert_eq!(config.palette, HueFamily::ElectricBlue);
        assert_eq!(config.palette.tint_filter(config.tint), Some(90.0));

        let cli = Cli::parse_from(["terminal-thunder", "--tint", "0"]);
        let config = merge(&cli, FileConfig::default()).expect("config");
        assert_eq!(config.palette, HueFamily::White);
        assert_eq!(config.palette.tint_filter(config.tint), None);
    }

    #[test]
    fn file_tint_yields_to_explicit_white() {
        let file = FileConfig {
            blue: Some(false),
            tint: Some(45.0),
            ..FileConfig::default()
        };
        let config = merge(&test_cli(), file).expect("config");
        assert_eq!(config.palette, HueFamily::White);

        let file = FileConfig {
            tint: Some(-30.0),
            ..FileConfig::default()
        };
        let config = merge(&test_cli(), file).expect("config");
        assert_eq!(config.palette, HueFamily::ElectricBlue);
    }

    #[test]
    fn cli_overrides_file() {
        let mut cli = test_cli();
        cli.hue_family = Some(0.0);
        cli.fps = Some(30);
        cli.class_name = Some("backdrop".to_string());
        let file = FileConfig {
            blue: Some(true),
            tint: Some(90.0),
            fps: Some(24),
            class_name: Some("file".to_string()),
            ..FileConfig::default()
        };
        let config = merge(&cli, file).expect("config");
        assert_eq!(config.palette, HueFamily::White);
        assert_eq!(config.tint, Some(90.0));
        assert_eq!(config.palette.tint_filter(config.tint), None);
        assert_eq!(config.fps, 30);
        assert_eq!(config.class_name.as_deref(), Some("backdrop"));
    }

    #[test]
    fn file_hue_family_selects_blue() {
        let file = FileConfig {
            hue_family: Some(1.0),
            tint: Some(45.0),
            ..FileConfig::default()
        };
        let config = merge(&test_cli(), file).expect("config");
        assert_eq!(config.palette, HueFamily::ElectricBlue);
        assert_eq!(config.palette.tint_filter(config.tint), Some(45.0));
    }

    #[test]
    fn rejects_out_of_range_file_fps() {
        let file = FileConfig {
            fps: Some(5),
            ..FileConfig::default()
        };
        assert!(matches!(
            merge(&test_cli(), file),
            Err(ConfigError::InvalidFps(5))
        ));
    }

    #[test]
    fn no_color_flag_flows_into_config() {
        let mut cli = test_cli();
        cli.no_color = true;
        let config = merge(&cli, FileConfig::default()).expect("config");
        assert_eq!(config.color, ColorArg::Never);
    }

    #[test]
    fn loads_and_rejects_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let good = dir.path().join("good.json");
        fs::write(&good, r#"{"blue": true, "tint": 30, "seed": 9}"#).expect("write");
        let loaded = load_file_config(&good).expect("load");
        assert_eq!(loaded.blue, Some(true));
        assert_eq!(loaded.tint, Some(30.0));
        assert_eq!(loaded.seed, Some(9));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"{"colour": "blue"}"#).expect("write");
        assert!(matches!(
            load_file_config(&bad),
            Err(ConfigError::Parse { .. })
        ));

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            load_file_config(&missing),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn explicit_config_path_is_required_to_exist() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut cli = test_cli();
        cli.config = Some(dir.path().join("absent.json"));
        assert!(resolve(&cli).is_err());

        let present = dir.path().join("present.json");
        fs::write(&present, r#"{"hue_family": 2, "class_name": "hero"}"#).expect("write");
        cli.config = Some(present);
        let config = resolve(&cli).expect("resolve");
        assert_eq!(config.palette, HueFamily::ElectricBlue);
        assert_eq!(config.class_name.as_deref(), Some("hero"));
        assert_eq!(config.seed, Some(7));
    }
}
