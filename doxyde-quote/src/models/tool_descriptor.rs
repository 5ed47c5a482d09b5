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
use crate::models::conversion::export_text;
use crate::models::quote_config::{DEFAULT_CAPTION_PLACEHOLDER, DEFAULT_QUOTE_PLACEHOLDER};
use crate::models::quote_record::QuoteRecord;
use serde::Serialize;
use std::collections::BTreeMap;

pub const ICON_QUOTE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" fill="none" viewBox="0 0 24 24"><path stroke="currentColor" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 12C10 12 10 8 6 8M10 12V16H6V12H10ZM18 12C18 12 18 8 14 8M18 12V16H14V12H18Z"/></svg>"#;

pub const ICON_ALIGN_LEFT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" fill="none" viewBox="0 0 24 24"><path stroke="currentColor" stroke-linecap="round" stroke-width="2" d="M17 7L5 7"/><path stroke="currentColor" stroke-linecap="round" stroke-width="2" d="M17 17H5"/><path stroke="currentColor" stroke-linecap="round" stroke-width="2" d="M13 12L5 12"/></svg>"#;

pub const ICON_ALIGN_CENTER: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" fill="none" viewBox="0 0 24 24"><path stroke="currentColor" stroke-linecap="round" stroke-width="2" d="M18 7L6 7"/><path stroke="currentColor" stroke-linecap="round" stroke-width="2" d="M18 17H6"/><path stroke="currentColor" stroke-linecap="round" stroke-width="2" d="M16 12L8 12"/></svg>"#;

/// Icon shown next to an alignment entry in the settings menu
pub fn alignment_icon(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => ICON_ALIGN_LEFT,
        Alignment::Center => ICON_ALIGN_CENTER,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toolbox {
    pub icon: &'static str,
    pub title: &'static str,
}

/// How the host converts between quotes and other block types
#[derive(Debug, Clone, Serialize)]
pub struct ConversionConfig {
    /// Record field that receives imported plain text
    pub import: &'static str,
    #[serde(skip)]
    pub export: fn(&QuoteRecord) -> String,
}

/// Allowed markup per record field; `true` keeps the tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SanitizeRules(BTreeMap<&'static str, BTreeMap<&'static str, bool>>);

impl SanitizeRules {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn field(mut self, field: &'static str, allowed_tags: &[&'static str]) -> Self {
        let tags = allowed_tags.iter().map(|tag| (*tag, true)).collect();
        self.0.insert(field, tags);
        self
    }

    /// Tags a field may keep, `None` if the field has no rule
    pub fn allowed_tags(&self, field: &str) -> Option<Vec<&'static str>> {
        self.0.get(field).map(|tags| {
            tags.iter()
                .filter(|(_, allowed)| **allowed)
                .map(|(tag, _)| *tag)
                .collect()
        })
    }
}

impl Default for SanitizeRules {
    fn default() -> Self {
        Self::new()
    }
}

/// Static capabilities the quote tool declares to the host at registration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub is_read_only_supported: bool,
    pub toolbox: Toolbox,
    pub contentless: bool,
    pub enable_line_breaks: bool,
    pub conversion_config: ConversionConfig,
    pub sanitize: SanitizeRules,
    pub default_quote_placeholder: &'static str,
    pub default_caption_placeholder: &'static str,
    pub default_alignment: Alignment,
    pub alignments: Vec<Alignment>,
}

impl ToolDescriptor {
    pub fn quote() -> Self {
        Self {
            is_read_only_supported: true,
            toolbox: Toolbox {
                icon: ICON_QUOTE,
                title: "Quote",
            },
            contentless: true,
            enable_line_breaks: true,
            conversion_config: ConversionConfig {
                import: "text",
                export: export_text,
            },
            sanitize: SanitizeRules::new()
                .field("text", &["br"])
                .field("caption", &["br"])
                .field("alignment", &[]),
            default_quote_placeholder: DEFAULT_QUOTE_PLACEHOLDER,
            default_caption_placeholder: DEFAULT_CAPTION_PLACEHOLDER,
            default_alignment: Alignment::default(),
            alignments: Alignment::ALL.to_vec(),
        }
    }
}
