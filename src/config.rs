use crate::error::{IngredientAiError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub ocr_lang: String,
    pub ocr_timeout_seconds: u64,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            ocr_lang: "eng".into(),
            ocr_timeout_seconds: 30,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        config.apply_env();
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| IngredientAiError::Config("домашний каталог не найден".into()))?;
        Ok(home.join(".config").join("ingredient-ai").join("config.json"))
    }

    // PORT и OCR_LANG из окружения перекрывают файл конфигурации
    fn apply_env(&mut self) {
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                self.port = port;
            }
        }
        if let Ok(lang) = std::env::var("OCR_LANG") {
            self.ocr_lang = lang;
        }
    }
}
