use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::BudgetError,
    ledger::IdPolicy,
    utils::paths::{app_data_dir, config_file_in, ensure_dir},
};

const TMP_SUFFIX: &str = "tmp";

/// Keys accepted by [`Config::set`], in display order.
pub const CONFIG_KEYS: &[&str] = &[
    "currency_symbol",
    "id_policy",
    "plain_mode",
    "high_contrast_mode",
    "screen_reader_mode",
];

/// Presentation preferences for the shell. The ledger itself is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub id_policy: IdPolicy,
    pub plain_mode: bool,
    pub high_contrast_mode: bool,
    pub screen_reader_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
            id_policy: IdPolicy::default(),
            plain_mode: false,
            high_contrast_mode: false,
            screen_reader_mode: false,
        }
    }
}

impl Config {
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), BudgetError> {
        match key {
            "currency_symbol" => {
                let symbol = value.trim();
                if symbol.is_empty() {
                    return Err(BudgetError::InvalidInput(
                        "currency_symbol must not be empty".into(),
                    ));
                }
                self.currency_symbol = symbol.to_string();
            }
            "id_policy" => {
                self.id_policy = value.parse().map_err(BudgetError::InvalidInput)?;
            }
            "plain_mode" => self.plain_mode = parse_flag(key, value)?,
            "high_contrast_mode" => self.high_contrast_mode = parse_flag(key, value)?,
            "screen_reader_mode" => self.screen_reader_mode = parse_flag(key, value)?,
            other => {
                return Err(BudgetError::InvalidInput(format!(
                    "unknown config key `{other}` (expected one of: {})",
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency_symbol", self.currency_symbol.clone()),
            ("id_policy", self.id_policy.to_string()),
            ("plain_mode", self.plain_mode.to_string()),
            ("high_contrast_mode", self.high_contrast_mode.to_string()),
            ("screen_reader_mode", self.screen_reader_mode.to_string()),
        ]
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, BudgetError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => Err(BudgetError::InvalidInput(format!(
            "`{other}` is not a valid value for {key} (use true/false)"
        ))),
    }
}

/// Loads and saves `config.json` under the application directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl AsRef<Path>) -> Self {
        Self {
            path: config_file_in(base.as_ref()),
        }
    }

    pub fn load(&self) -> Result<Config, BudgetError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), BudgetError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), BudgetError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
