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

use std::collections::HashMap;
use tracing::info;

/// Base CSS class names supplied by the editor host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTokens {
    /// Class shared by every block wrapper
    pub block: String,
    /// Class shared by every editable input
    pub input: String,
}

impl Default for StyleTokens {
    fn default() -> Self {
        Self {
            block: "cdx-block".to_string(),
            input: "cdx-input".to_string(),
        }
    }
}

/// Services the editor host exposes to a block
pub trait HostApi: Send + Sync {
    /// Style tokens used when building the block surface
    fn styles(&self) -> StyleTokens;

    /// Translate an interface string
    fn translate(&self, key: &str) -> String;
}

/// Receives the "content changed" signal emitted by a block
pub trait BlockChangeSink: Send + Sync {
    fn dispatch_change(&self);
}

/// Host API backed by fixed style tokens and a translation dictionary
#[derive(Debug, Clone, Default)]
pub struct StaticHostApi {
    styles: StyleTokens,
    translations: HashMap<String, String>,
}

impl StaticHostApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_styles(mut self, styles: StyleTokens) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_translation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.translations.insert(key.into(), value.into());
        self
    }

    pub fn with_translations(mut self, translations: HashMap<String, String>) -> Self {
        self.translations.extend(translations);
        self
    }
}

impl HostApi for StaticHostApi {
    fn styles(&self) -> StyleTokens {
        self.styles.clone()
    }

    fn translate(&self, key: &str) -> String {
        // Untranslated keys are shown as-is
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// Change sink that only logs, for hosts without autosave
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingChangeSink;

impl BlockChangeSink for LoggingChangeSink {
    fn dispatch_change(&self) {
        info!("Quote block changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_default_styles() {
        let api = StaticHostApi::new();
        assert_eq!(api.styles().block, "cdx-block");
        assert_eq!(api.styles().input, "cdx-input");
    }

    #[test]
    fn test_translate_falls_back_to_key() {
        let api = StaticHostApi::new().with_translation("Align Left", "Aligner à gauche");
        assert_eq!(api.translate("Align Left"), "Aligner à gauche");
        assert_eq!(api.translate("Align Center"), "Align Center");
    }

    #[test]
    fn test_custom_styles() {
        let api = StaticHostApi::new().with_styles(StyleTokens {
            block: "ce-block".to_string(),
            input: "ce-input".to_string(),
        });
        assert_eq!(api.styles().block, "ce-block");
    }

    #[test]
    fn test_logging_sink_is_shareable() {
        let sink: Arc<dyn BlockChangeSink> = Arc::new(LoggingChangeSink);
        let other = Arc::clone(&sink);
        sink.dispatch_change();
        other.dispatch_change();
        assert_eq!(Arc::strong_count(&sink), 2);
    }
}
