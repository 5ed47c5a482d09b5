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
use crate::models::host::{BlockChangeSink, HostApi, StaticHostApi};
use crate::models::quote_config::QuoteConfig;
use crate::models::quote_record::QuoteRecord;
use crate::models::surface::{EditableRegion, QuoteCss, QuoteSurface};
use crate::models::tool_descriptor::alignment_icon;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Constructor parameters handed over by the host
pub struct QuoteParams {
    /// Previously saved data, possibly partial or malformed
    pub data: Value,
    pub config: QuoteConfig,
    pub api: Arc<dyn HostApi>,
    pub read_only: bool,
    /// Present when the host tracks changes for autosave and undo
    pub block: Option<Arc<dyn BlockChangeSink>>,
}

impl QuoteParams {
    pub fn new(data: Value, config: QuoteConfig) -> Self {
        Self {
            data,
            config,
            api: Arc::new(StaticHostApi::new()),
            read_only: false,
            block: None,
        }
    }

    pub fn with_api(mut self, api: Arc<dyn HostApi>) -> Self {
        self.api = api;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_block(mut self, block: Arc<dyn BlockChangeSink>) -> Self {
        self.block = Some(block);
        self
    }
}

/// One entry of the block settings menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TuneMenuItem {
    pub icon: &'static str,
    pub label: String,
    pub is_active: bool,
    pub close_on_activate: bool,
    /// Alignment applied when the entry is activated
    pub alignment: Alignment,
}

/// A quote block instance
pub struct QuoteBlock {
    api: Arc<dyn HostApi>,
    block: Option<Arc<dyn BlockChangeSink>>,
    read_only: bool,
    quote_placeholder: String,
    caption_placeholder: String,
    css: QuoteCss,
    data: QuoteRecord,
}

impl QuoteBlock {
    pub fn new(params: QuoteParams) -> Self {
        let QuoteParams {
            data,
            config,
            api,
            read_only,
            block,
        } = params;

        let css = QuoteCss::from_styles(&api.styles());
        let data = QuoteRecord::from_value(&data, &config);
        debug!(
            "Created quote block (alignment={}, read_only={})",
            data.alignment, read_only
        );

        Self {
            api,
            block,
            read_only,
            quote_placeholder: config.resolved_quote_placeholder(),
            caption_placeholder: config.resolved_caption_placeholder(),
            css,
            data,
        }
    }

    pub fn data(&self) -> &QuoteRecord {
        &self.data
    }

    pub fn alignment(&self) -> Alignment {
        self.data.alignment
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn quote_placeholder(&self) -> &str {
        &self.quote_placeholder
    }

    pub fn caption_placeholder(&self) -> &str {
        &self.caption_placeholder
    }

    /// Build the surface the host displays: the quote text and caption regions
    pub fn render(&self) -> QuoteSurface {
        let text = EditableRegion {
            classes: vec![self.css.input.clone(), self.css.text.clone()],
            inner_html: self.data.text.clone(),
            content_editable: !self.read_only,
            placeholder: self.quote_placeholder.clone(),
        };
        let caption = EditableRegion {
            classes: vec![self.css.input.clone(), self.css.caption.clone()],
            inner_html: self.data.caption.clone(),
            content_editable: !self.read_only,
            placeholder: self.caption_placeholder.clone(),
        };

        QuoteSurface {
            classes: vec![self.css.base_class.clone(), self.css.wrapper.clone()],
            regions: vec![text, caption],
        }
    }

    /// Read the current surface content back into the record.
    ///
    /// A missing region stores an empty string. The returned record is the
    /// block's own state.
    pub fn save(&mut self, surface: &QuoteSurface) -> &QuoteRecord {
        self.data.text = surface
            .query_by_class(&self.css.text)
            .map(|region| region.inner_html.clone())
            .unwrap_or_default();
        self.data.caption = surface
            .query_by_class(&self.css.caption)
            .map(|region| region.inner_html.clone())
            .unwrap_or_default();

        &self.data
    }

    /// Settings menu entries, one per alignment
    pub fn render_settings(&self) -> Vec<TuneMenuItem> {
        Alignment::ALL
            .iter()
            .map(|alignment| TuneMenuItem {
                icon: alignment_icon(*alignment),
                label: self.api.translate(&alignment.label()),
                is_active: self.data.alignment == *alignment,
                close_on_activate: true,
                alignment: *alignment,
            })
            .collect()
    }

    /// Apply a settings menu entry
    pub fn activate_tune(&mut self, item: &TuneMenuItem) {
        self.set_alignment(item.alignment);
    }

    /// Switch alignment and notify the host that the block changed
    pub fn set_alignment(&mut self, tune: Alignment) {
        self.data.alignment = tune;
        debug!("Quote alignment set to {}", tune);

        if let Some(block) = &self.block {
            block.dispatch_change();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingSink {
        changes: AtomicUsize,
    }

    impl BlockChangeSink for CountingSink {
        fn dispatch_change(&self) {
            self.changes.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn block(data: Value, config: QuoteConfig) -> QuoteBlock {
        QuoteBlock::new(QuoteParams::new(data, config))
    }

    #[test]
    fn test_empty_block_saves_defaults() {
        let mut quote = block(json!({}), QuoteConfig::default());
        let surface = quote.render();
        let saved = quote.save(&surface).clone();
        assert_eq!(saved, QuoteRecord::new("", "", Alignment::Left));
    }

    #[test]
    fn test_config_default_alignment_applies_when_data_has_none() {
        let quote = block(
            json!({"text": "Time is money", "caption": "Franklin"}),
            QuoteConfig::default().with_default_alignment(Alignment::Center),
        );
        assert_eq!(quote.alignment(), Alignment::Center);
        assert_eq!(quote.data().text, "Time is money");
        assert_eq!(quote.data().caption, "Franklin");
    }

    #[test]
    fn test_placeholders() {
        let quote = block(json!({}), QuoteConfig::default());
        assert_eq!(quote.quote_placeholder(), "Enter a quote");
        assert_eq!(quote.caption_placeholder(), "Enter a caption");

        let quote = block(
            json!({}),
            QuoteConfig::default()
                .with_quote_placeholder("Quote...")
                .with_caption_placeholder("Author..."),
        );
        assert_eq!(quote.quote_placeholder(), "Quote...");
        assert_eq!(quote.caption_placeholder(), "Author...");
    }

    #[test]
    fn test_render_regions() {
        let quote = block(json!({"text": "A<br>B", "caption": "C"}), QuoteConfig::default());
        let surface = quote.render();

        assert_eq!(surface.classes, vec!["cdx-block", "cdx-quote"]);
        let text = surface.query_by_class("cdx-quote__text").unwrap();
        assert_eq!(text.inner_html, "A<br>B");
        assert_eq!(text.classes, vec!["cdx-input", "cdx-quote__text"]);
        assert_eq!(text.placeholder, "Enter a quote");
        assert!(text.content_editable);

        let caption = surface.query_by_class("cdx-quote__caption").unwrap();
        assert_eq!(caption.inner_html, "C");
        assert_eq!(caption.placeholder, "Enter a caption");
    }

    #[test]
    fn test_render_read_only() {
        let quote = QuoteBlock::new(
            QuoteParams::new(json!({"text": "x"}), QuoteConfig::default()).read_only(true),
        );
        assert!(quote.is_read_only());
        let surface = quote.render();
        assert!(surface.regions.iter().all(|region| !region.content_editable));
    }

    #[test]
    fn test_save_reads_edits() {
        let mut quote = block(json!({"text": "old", "caption": "old"}), QuoteConfig::default());
        let mut surface = quote.render();
        surface
            .query_by_class_mut("cdx-quote__text")
            .unwrap()
            .set_inner_html("new text");
        surface
            .query_by_class_mut("cdx-quote__caption")
            .unwrap()
            .set_inner_html("new caption");

        let saved = quote.save(&surface);
        assert_eq!(saved.text, "new text");
        assert_eq!(saved.caption, "new caption");
        assert_eq!(quote.data().text, "new text");
    }

    #[test]
    fn test_save_with_missing_region() {
        let mut quote = block(json!({"text": "keep", "caption": "drop"}), QuoteConfig::default());
        let mut surface = quote.render();
        surface.remove_by_class("cdx-quote__caption");

        let saved = quote.save(&surface);
        assert_eq!(saved.text, "keep");
        assert_eq!(saved.caption, "");
    }

    #[test]
    fn test_save_is_idempotent() {
        let mut quote = block(json!({"text": "a", "alignment": "center"}), QuoteConfig::default());
        let surface = quote.render();
        let first = quote.save(&surface).clone();
        let second = quote.save(&surface).clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_toggle_then_save() {
        let mut quote = block(json!({"text": "a", "caption": "b"}), QuoteConfig::default());
        let surface = quote.render();
        quote.set_alignment(Alignment::Center);
        assert_eq!(quote.save(&surface).alignment, Alignment::Center);
    }

    #[test]
    fn test_toggle_notifies_sink() {
        let sink = Arc::new(CountingSink::default());
        let mut quote = QuoteBlock::new(
            QuoteParams::new(json!({}), QuoteConfig::default()).with_block(sink.clone()),
        );

        quote.set_alignment(Alignment::Center);
        quote.set_alignment(Alignment::Center);
        assert_eq!(sink.changes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_toggle_without_sink() {
        let mut quote = block(json!({}), QuoteConfig::default());
        quote.set_alignment(Alignment::Center);
        assert_eq!(quote.alignment(), Alignment::Center);
    }

    #[test]
    fn test_render_settings() {
        let quote = block(json!({"alignment": "center"}), QuoteConfig::default());
        let items = quote.render_settings();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "Align Left");
        assert_eq!(items[0].alignment, Alignment::Left);
        assert!(!items[0].is_active);
        assert_eq!(items[1].label, "Align Center");
        assert!(items[1].is_active);
        assert!(items.iter().all(|item| item.close_on_activate));
    }

    #[test]
    fn test_settings_labels_are_translated() {
        let api = StaticHostApi::new()
            .with_translation("Align Left", "Links")
            .with_translation("Align Center", "Zentriert");
        let quote = QuoteBlock::new(
            QuoteParams::new(json!({}), QuoteConfig::default()).with_api(Arc::new(api)),
        );
        let labels: Vec<String> = quote.render_settings().into_iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Links", "Zentriert"]);
    }

    #[test]
    fn test_activate_tune() {
        let mut quote = block(json!({}), QuoteConfig::default());
        let center = quote.render_settings().remove(1);
        quote.activate_tune(&center);
        assert_eq!(quote.alignment(), Alignment::Center);
        assert!(quote.render_settings()[1].is_active);
    }
}
