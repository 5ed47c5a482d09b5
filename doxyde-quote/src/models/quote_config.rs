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

use crate::models::alignment::Alignment;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

pub const DEFAULT_QUOTE_PLACEHOLDER: &str = "Enter a quote";
pub const DEFAULT_CAPTION_PLACEHOLDER: &str = "Enter a caption";

/// User configuration of the quote tool, as registered with the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteConfig {
    #[serde(
        default,
        alias = "quote_placeholder",
        alias = "quoteplaceholder",
        skip_serializing_if = "Option::is_none"
    )]
    pub quote_placeholder: Option<String>,

    #[serde(
        default,
        alias = "caption_placeholder",
        alias = "captionplaceholder",
        skip_serializing_if = "Option::is_none"
    )]
    pub caption_placeholder: Option<String>,

    #[serde(
        default,
        alias = "default_alignment",
        alias = "defaultalignment",
        deserialize_with = "lenient_alignment",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_alignment: Option<Alignment>,
}

impl QuoteConfig {
    pub fn with_default_alignment(mut self, alignment: Alignment) -> Self {
        self.default_alignment = Some(alignment);
        self
    }

    pub fn with_quote_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.quote_placeholder = Some(placeholder.into());
        self
    }

    pub fn with_caption_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.caption_placeholder = Some(placeholder.into());
        self
    }

    /// Placeholder for the quote text, empty strings count as unset
    pub fn resolved_quote_placeholder(&self) -> String {
        non_empty(self.quote_placeholder.as_deref())
            .unwrap_or(DEFAULT_QUOTE_PLACEHOLDER)
            .to_string()
    }

    /// Placeholder for the caption, empty strings count as unset
    pub fn resolved_caption_placeholder(&self) -> String {
        non_empty(self.caption_placeholder.as_deref())
            .unwrap_or(DEFAULT_CAPTION_PLACEHOLDER)
            .to_string()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Unknown alignments in configuration are dropped so that block
/// construction can keep falling back to `left`.
fn lenient_alignment<'de, D>(deserializer: D) -> Result<Option<Alignment>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    let alignment = match raw {
        None | Some(Value::Null) => None,
        Some(value) => {
            let parsed = Alignment::from_value(Some(&value));
            if parsed.is_none() {
                warn!("Ignoring unknown defaultAlignment {} in quote config", value);
            }
            parsed
        }
    };
    Ok(alignment)
}
