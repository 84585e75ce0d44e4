use anyhow::{Context, Result};
use checkers::ui::renderer::Glyphs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub coordinates: bool,
    pub glyphs: GlyphConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            coordinates: true,
            glyphs: GlyphConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    pub red_man: char,
    pub red_king: char,
    pub black_man: char,
    pub black_king: char,
    pub dark: char,
    pub light: char,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        let glyphs = Glyphs::default();
        Self {
            red_man: glyphs.red_man,
            red_king: glyphs.red_king,
            black_man: glyphs.black_man,
            black_king: glyphs.black_king,
            dark: glyphs.dark,
            light: glyphs.light,
        }
    }
}

impl From<&GlyphConfig> for Glyphs {
    fn from(cfg: &GlyphConfig) -> Self {
        Glyphs {
            red_man: cfg.red_man,
            red_king: cfg.red_king,
            black_man: cfg.black_man,
            black_king: cfg.black_king,
            dark: cfg.dark,
            light: cfg.light,
        }
    }
}

impl Config {
    /// Reads the YAML file at `path` if there is one, otherwise the defaults.
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        match path {
            Some(p) if p.exists() => {
                let content = fs::read_to_string(p)
                    .with_context(|| format!("failed to read config {}", p.display()))?;
                Self::parse(&content).with_context(|| format!("failed to parse config {}", p.display()))
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}
