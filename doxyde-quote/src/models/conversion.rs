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

use crate::models::quote_config::QuoteConfig;
use crate::models::quote_record::QuoteRecord;

/// Separator placed between quote text and caption in plain text exports
pub const CAPTION_SEPARATOR: &str = " \u{2014} ";

/// Flatten a quote into a single string for conversion to another block type
pub fn export_text(record: &QuoteRecord) -> String {
    if record.has_caption() {
        format!("{}{}{}", record.text, CAPTION_SEPARATOR, record.caption)
    } else {
        record.text.clone()
    }
}

/// Create a quote from plain text coming from another block type
pub fn import_text(text: &str, config: &QuoteConfig) -> QuoteRecord {
    QuoteRecord {
        text: text.to_string(),
        caption: String::new(),
        alignment: config.default_alignment.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::alignment::Alignment;

    #[test]
    fn test_export_without_caption() {
        let record = QuoteRecord::new("Hello", "", Alignment::Left);
        assert_eq!(export_text(&record), "Hello");
    }

    #[test]
    fn test_export_with_caption() {
        let record = QuoteRecord::new("Hello", "World", Alignment::Center);
        assert_eq!(export_text(&record), "Hello — World");
    }

    #[test]
    fn test_export_keeps_markup() {
        let record = QuoteRecord::new("line one<br>line two", "Anon", Alignment::Left);
        assert_eq!(export_text(&record), "line one<br>line two — Anon");
    }

    #[test]
    fn test_import() {
        let record = import_text("Just text", &QuoteConfig::default());
        assert_eq!(record.text, "Just text");
        assert_eq!(record.caption, "");
        assert_eq!(record.alignment, Alignment::Left);
    }

    #[test]
    fn test_import_uses_configured_alignment() {
        let config = QuoteConfig::default().with_default_alignment(Alignment::Center);
        assert_eq!(import_text("x", &config).alignment, Alignment::Center);
    }
}
