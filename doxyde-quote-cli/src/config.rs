// Doxyde - A modern, AI-native CMS built with Rust
// Copyright (C) 2025 Doxyde Project Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use anyhow::{bail, Result};
use doxyde_quote::models::{QuoteConfig, StaticHostApi, StyleTokens};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "doxyde-quote.toml";
pub const ENV_PREFIX: &str = "DOXYDE_QUOTE_";

/// Tool settings that may be given at the top level of the environment,
/// e.g. `DOXYDE_QUOTE_DEFAULTALIGNMENT=center`
const QUOTE_ENV_KEYS: [&str; 6] = [
    "defaultalignment",
    "default_alignment",
    "quoteplaceholder",
    "quote_placeholder",
    "captionplaceholder",
    "caption_placeholder",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Tool configuration passed to every quote block
    #[serde(default)]
    pub quote: QuoteConfig,

    #[serde(default)]
    pub styles: StylesConfig,

    /// Interface strings, keyed by their English text
    #[serde(default)]
    pub translations: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StylesConfig {
    #[serde(default = "default_block_class")]
    pub block: String,

    #[serde(default = "default_input_class")]
    pub input: String,
}

impl Default for StylesConfig {
    fn default() -> Self {
        Self {
            block: default_block_class(),
            input: default_input_class(),
        }
    }
}

impl Config {
    /// Load from the TOML file (explicit path, or `doxyde-quote.toml` when
    /// present) and `DOXYDE_QUOTE_` environment variables, in that order.
    ///
    /// Nested keys use `__` (`DOXYDE_QUOTE_STYLES__BLOCK`); the quote tool
    /// settings are also read without the section name.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                path
            }
            None => Path::new(DEFAULT_CONFIG_FILE),
        };

        let config: Config = Figment::new()
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Env::prefixed(ENV_PREFIX).filter_map(|key| {
                QUOTE_ENV_KEYS
                    .iter()
                    .find(|name| key.as_str().eq_ignore_ascii_case(name))
                    .map(|name| format!("quote.{}", name).into())
            }))
            .extract()?;

        Ok(config)
    }

    pub fn host_api(&self) -> StaticHostApi {
        StaticHostApi::new()
            .with_styles(StyleTokens {
                block: self.styles.block.clone(),
                input: self.styles.input.clone(),
            })
            .with_translations(self.translations.clone())
    }
}

fn default_block_class() -> String {
    StyleTokens::default().block
}

fn default_input_class() -> String {
    StyleTokens::default().input
}
