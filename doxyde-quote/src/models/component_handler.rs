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
use crate::models::component_trait::ComponentEq;
use crate::models::conversion::{export_text, import_text};
use crate::models::quote_config::QuoteConfig;
use crate::models::quote_record::QuoteRecord;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Trait for handling block-type-specific logic
pub trait ComponentHandler: Send + Sync {
    /// Get the block type this handler manages
    fn component_type(&self) -> &'static str;

    /// Build content from plain text (paste or conversion from another type)
    fn parse_content(&self, raw_content: &str) -> Result<Value, String>;

    /// Get default content for a new block
    fn default_content(&self) -> Value;

    /// Flatten content to plain text for conversion to another type
    fn export_text(&self, content: &Value) -> String;

    /// Validate the content before saving
    fn validate_content(&self, _content: &Value) -> Result<(), String> {
        Ok(())
    }

    /// Compare content of two blocks for equality
    fn content_equals(&self, content1: &Value, content2: &Value) -> bool {
        content1 == content2
    }
}

/// Registry for block handlers
pub struct ComponentRegistry {
    handlers: HashMap<String, Arc<dyn ComponentHandler>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register<H: ComponentHandler + 'static>(&mut self, handler: H) {
        let component_type = handler.component_type().to_string();
        self.handlers.insert(component_type, Arc::new(handler));
    }

    pub fn get_handler(&self, component_type: &str) -> Option<Arc<dyn ComponentHandler>> {
        self.handlers.get(component_type).cloned()
    }

    fn handler(&self, component_type: &str) -> Result<Arc<dyn ComponentHandler>, String> {
        self.get_handler(component_type)
            .ok_or_else(|| format!("Unknown block type '{}'", component_type))
    }

    pub fn parse_content(&self, component_type: &str, raw_content: &str) -> Result<Value, String> {
        self.handler(component_type)?.parse_content(raw_content)
    }

    pub fn default_content(&self, component_type: &str) -> Result<Value, String> {
        Ok(self.handler(component_type)?.default_content())
    }

    pub fn validate_content(&self, component_type: &str, content: &Value) -> Result<(), String> {
        self.handler(component_type)?.validate_content(content)
    }

    pub fn export_text(&self, component_type: &str, content: &Value) -> Result<String, String> {
        Ok(self.handler(component_type)?.export_text(content))
    }

    /// Compare content of two blocks; unknown types fall back to full comparison
    pub fn content_equals(&self, component_type: &str, content1: &Value, content2: &Value) -> bool {
        match self.get_handler(component_type) {
            Some(handler) => handler.content_equals(content1, content2),
            None => content1 == content2,
        }
    }

    /// Convert content between block types through plain text
    pub fn convert(&self, from: &str, content: &Value, to: &str) -> Result<Value, String> {
        let source = self.handler(from)?;
        let target = self.handler(to)?;
        let text = source.export_text(content);
        debug!("Converting {} block to {} ({} chars)", from, to, text.len());
        target.parse_content(&text)
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Handler for quote blocks
#[derive(Debug, Clone, Default)]
pub struct QuoteComponentHandler {
    pub config: QuoteConfig,
}

impl QuoteComponentHandler {
    pub fn new(config: QuoteConfig) -> Self {
        Self { config }
    }

    fn normalize(&self, content: &Value) -> QuoteRecord {
        QuoteRecord::from_value(content, &self.config)
    }
}

impl ComponentHandler for QuoteComponentHandler {
    fn component_type(&self) -> &'static str {
        "quote"
    }

    fn parse_content(&self, raw_content: &str) -> Result<Value, String> {
        Ok(import_text(raw_content, &self.config).to_value())
    }

    fn default_content(&self) -> Value {
        QuoteRecord {
            alignment: self.config.default_alignment.unwrap_or_default(),
            ..QuoteRecord::default()
        }
        .to_value()
    }

    fn export_text(&self, content: &Value) -> String {
        export_text(&self.normalize(content))
    }

    fn validate_content(&self, content: &Value) -> Result<(), String> {
        if !content.is_object() {
            return Err("Quote content must be an object".to_string());
        }

        for field in ["text", "caption"] {
            if let Some(value) = content.get(field) {
                if !value.is_string() {
                    return Err(format!("Quote '{}' must be a string", field));
                }
            }
        }

        if let Some(alignment) = content.get("alignment") {
            if Alignment::from_value(Some(alignment)).is_none() {
                return Err(format!(
                    "Invalid quote alignment {}. Must be one of: left, center",
                    alignment
                ));
            }
        }

        Ok(())
    }

    fn content_equals(&self, content1: &Value, content2: &Value) -> bool {
        self.normalize(content1)
            .content_equals(&self.normalize(content2))
    }
}

/// Handler for plain paragraph blocks
pub struct TextComponentHandler;

impl ComponentHandler for TextComponentHandler {
    fn component_type(&self) -> &'static str {
        "text"
    }

    fn parse_content(&self, raw_content: &str) -> Result<Value, String> {
        Ok(json!({
            "text": raw_content
        }))
    }

    fn default_content(&self) -> Value {
        json!({
            "text": ""
        })
    }

    fn export_text(&self, content: &Value) -> String {
        content
            .get("text")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string()
    }

    fn content_equals(&self, content1: &Value, content2: &Value) -> bool {
        // Only the text field is persisted
        content1.get("text") == content2.get("text")
    }
}

/// Create a registry with the quote and text handlers
pub fn create_default_registry(config: QuoteConfig) -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();

    registry.register(QuoteComponentHandler::new(config));
    registry.register(TextComponentHandler);

    registry
}
