use std::{
    fs::{create_dir_all, File},
    io::{BufReader, Write},
    path::PathBuf,
};

use clap::ValueEnum;
use home::home_dir;
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Output format for the diagnostic commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    output_format: Option<OutputFormat>,
}

impl Config {
    // folder placed in $HOME directory
    const FOLDER: &'static str = ".gmdls";

    pub const fn get_output_format(&self) -> Option<OutputFormat> {
        self.output_format
    }

    pub fn set_output_format(
        &mut self,
        new_output_format: Option<OutputFormat>,
    ) -> Result<(), AppError> {
        if self.output_format == new_output_format {
            // no op
            Ok(())
        } else {
            self.output_format = new_output_format;
            self.save_config()
        }
    }

    fn get_base_path() -> Result<PathBuf, AppError> {
        let home = home_dir()
            .ok_or_else(|| AppError::ConfigError("Could not find home directory".to_string()))?;
        let path = home.join(Self::FOLDER);
        Ok(path)
    }

    fn get_path() -> Result<PathBuf, AppError> {
        let base = Self::get_base_path()?;
        Ok(base.join("config.json"))
    }

    /// Creates config if it does not exist
    pub fn read_config() -> Result<Self, AppError> {
        let base_path = Self::get_base_path()?;
        if !base_path.exists() {
            create_dir_all(base_path)?;
        }
        let config_path = Self::get_path()?;
        if !config_path.exists() {
            // create empty config
            Config::default().save_config()?;
        }
        let file = File::open(config_path)?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader).map_err(|err| {
            AppError::ConfigError(format!("Could not read local configuration {err:}"))
        })?;
        Ok(config)
    }

    /// Assumes the config folder exists
    pub fn save_config(&self) -> Result<(), AppError> {
        let config_path = Self::get_path()?;
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            AppError::ConfigError(format!("Could not save local configuration {err:}"))
        })?;
        let mut file = File::create(config_path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
