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

use crate::error::Result;
use crate::models::alignment::Alignment;
use crate::models::component_trait::{extract_text, ComponentEq};
use crate::models::quote_config::QuoteConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Persisted state of a quote block
///
/// This is the only shape exchanged with the host across save, reload,
/// copy/paste and block conversion. Deserializing goes through
/// `from_value` with the default config, so it never rejects a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct QuoteRecord {
    pub text: String,
    pub caption: String,
    pub alignment: Alignment,
}

impl From<Value> for QuoteRecord {
    fn from(data: Value) -> Self {
        Self::from_value(&data, &QuoteConfig::default())
    }
}

impl QuoteRecord {
    pub fn new(text: impl Into<String>, caption: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            text: text.into(),
            caption: caption.into(),
            alignment,
        }
    }

    /// Build a record from untyped prior data, applying the defaulting rules.
    ///
    /// Alignment precedence: a valid `alignment` in `data`, then the
    /// configured default, then `left`. Never fails.
    pub fn from_value(data: &Value, config: &QuoteConfig) -> Self {
        let alignment = match Alignment::from_value(data.get("alignment")) {
            Some(alignment) => alignment,
            None => {
                let fallback = config.default_alignment.unwrap_or_default();
                if let Some(raw) = data.get("alignment").filter(|v| !v.is_null()) {
                    debug!("Rejected quote alignment {}, using '{}'", raw, fallback);
                }
                fallback
            }
        };

        Self {
            text: extract_text(data, "text"),
            caption: extract_text(data, "caption"),
            alignment,
        }
    }

    /// Parse prior data from JSON text. Only malformed JSON is an error.
    pub fn from_json(json: &str, config: &QuoteConfig) -> Result<Self> {
        let data: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&data, config))
    }

    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "text": self.text,
            "caption": self.caption,
            "alignment": self.alignment.as_str(),
        })
    }

    pub fn has_caption(&self) -> bool {
        !self.caption.is_empty()
    }
}

impl ComponentEq for QuoteRecord {
    fn content_equals(&self, other: &Self) -> bool {
        self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_data_defaults() {
        let record = QuoteRecord::from_value(&json!({}), &QuoteConfig::default());
        assert_eq!(record, QuoteRecord::new("", "", Alignment::Left));
    }

    #[test]
    fn test_null_data_defaults() {
        let record = QuoteRecord::from_value(&Value::Null, &QuoteConfig::default());
        assert_eq!(record, QuoteRecord::default());
    }

    #[test]
    fn test_valid_alignment_beats_config_default() {
        let config = QuoteConfig::default().with_default_alignment(Alignment::Center);
        let record = QuoteRecord::from_value(&json!({"alignment": "left"}), &config);
        assert_eq!(record.alignment, Alignment::Left);
    }

    #[test]
    fn test_invalid_alignment_uses_config_default() {
        let config = QuoteConfig::default().with_default_alignment(Alignment::Center);
        let record = QuoteRecord::from_value(&json!({"alignment": "right"}), &config);
        assert_eq!(record.alignment, Alignment::Center);
    }

    #[test]
    fn test_invalid_alignment_without_config_is_left() {
        let record =
            QuoteRecord::from_value(&json!({"alignment": "justify"}), &QuoteConfig::default());
        assert_eq!(record.alignment, Alignment::Left);
    }

    #[test]
    fn test_non_string_fields_are_empty() {
        let record = QuoteRecord::from_value(
            &json!({"text": 5, "caption": null, "alignment": true}),
            &QuoteConfig::default(),
        );
        assert_eq!(record, QuoteRecord::default());
    }

    #[test]
    fn test_from_json() {
        let record = QuoteRecord::from_json(
            r#"{"text": "Time is money", "caption": "Franklin"}"#,
            &QuoteConfig::default().with_default_alignment(Alignment::Center),
        )
        .unwrap();
        assert_eq!(
            record,
            QuoteRecord::new("Time is money", "Franklin", Alignment::Center)
        );
    }

    #[test]
    fn test_from_json_rejects_malformed_json() {
        assert!(QuoteRecord::from_json("{not json", &QuoteConfig::default()).is_err());
    }

    #[test]
    fn test_content_equals() {
        let a = QuoteRecord::new("x", "y", Alignment::Left);
        assert!(a.content_equals(&a.clone()));
        assert!(!a.content_equals(&QuoteRecord::new("x", "y", Alignment::Center)));
    }

    #[test]
    fn test_deserialize_applies_defaulting() {
        let record: QuoteRecord =
            serde_json::from_str(r#"{"text": "a", "caption": 7, "alignment": "right"}"#).unwrap();
        assert_eq!(record, QuoteRecord::new("a", "", Alignment::Left));

        let record: QuoteRecord = serde_json::from_str(r#"{"alignment": "center"}"#).unwrap();
        assert_eq!(record, QuoteRecord::new("", "", Alignment::Center));
    }

    #[test]
    fn test_serde_round_trip() {
        let record = QuoteRecord::new("x<br>y", "z", Alignment::Center);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(serde_json::from_str::<QuoteRecord>(&json).unwrap(), record);
    }

    #[test]
    fn test_to_value_shape() {
        let record = QuoteRecord::new("a<br>b", "c", Alignment::Center);
        assert_eq!(
            record.to_value(),
            json!({"text": "a<br>b", "caption": "c", "alignment": "center"})
        );
    }
}
