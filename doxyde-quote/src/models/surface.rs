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

use crate::models::component_trait::escape_html;
use crate::models::host::StyleTokens;

pub const WRAPPER_CLASS: &str = "cdx-quote";
pub const TEXT_CLASS: &str = "cdx-quote__text";
pub const CAPTION_CLASS: &str = "cdx-quote__caption";

/// CSS class names of a quote block, resolved once from the host styles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteCss {
    pub base_class: String,
    pub wrapper: String,
    pub input: String,
    pub text: String,
    pub caption: String,
}

impl QuoteCss {
    pub fn from_styles(styles: &StyleTokens) -> Self {
        Self {
            base_class: styles.block.clone(),
            wrapper: WRAPPER_CLASS.to_string(),
            input: styles.input.clone(),
            text: TEXT_CLASS.to_string(),
            caption: CAPTION_CLASS.to_string(),
        }
    }
}

/// One editable area of the rendered block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableRegion {
    pub classes: Vec<String>,
    pub inner_html: String,
    pub content_editable: bool,
    pub placeholder: String,
}

impl EditableRegion {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Replace the region content, as a user edit would
    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.inner_html = html.into();
    }

    fn to_html(&self) -> String {
        format!(
            r#"<div class="{}" contenteditable="{}" data-placeholder="{}">{}</div>"#,
            escape_html(&self.classes.join(" ")),
            self.content_editable,
            escape_html(&self.placeholder),
            self.inner_html
        )
    }
}

/// The UI surface handed to the host by `QuoteBlock::render`.
///
/// A `<blockquote>` wrapper with the editable regions as children. The host
/// owns it after rendering and hands it back on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSurface {
    pub classes: Vec<String>,
    pub regions: Vec<EditableRegion>,
}

impl QuoteSurface {
    /// First region carrying `class`, like a DOM `querySelector`
    pub fn query_by_class(&self, class: &str) -> Option<&EditableRegion> {
        self.regions.iter().find(|region| region.has_class(class))
    }

    pub fn query_by_class_mut(&mut self, class: &str) -> Option<&mut EditableRegion> {
        self.regions.iter_mut().find(|region| region.has_class(class))
    }

    /// Detach every region carrying `class`, returning how many were removed
    pub fn remove_by_class(&mut self, class: &str) -> usize {
        let before = self.regions.len();
        self.regions.retain(|region| !region.has_class(class));
        before - self.regions.len()
    }

    pub fn to_html(&self) -> String {
        let mut html = format!(
            r#"<blockquote class="{}">"#,
            escape_html(&self.classes.join(" "))
        );
        for region in &self.regions {
            html.push_str(&region.to_html());
        }
        html.push_str("</blockquote>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(class: &str, html: &str) -> EditableRegion {
        EditableRegion {
            classes: vec!["cdx-input".to_string(), class.to_string()],
            inner_html: html.to_string(),
            content_editable: true,
            placeholder: "Type".to_string(),
        }
    }

    fn surface() -> QuoteSurface {
        QuoteSurface {
            classes: vec!["cdx-block".to_string(), WRAPPER_CLASS.to_string()],
            regions: vec![region(TEXT_CLASS, "Hello"), region(CAPTION_CLASS, "World")],
        }
    }

    #[test]
    fn test_css_from_styles() {
        let css = QuoteCss::from_styles(&StyleTokens::default());
        assert_eq!(css.base_class, "cdx-block");
        assert_eq!(css.input, "cdx-input");
        assert_eq!(css.text, "cdx-quote__text");
        assert_eq!(css.caption, "cdx-quote__caption");
    }

    #[test]
    fn test_query_by_class() {
        let surface = surface();
        assert_eq!(surface.query_by_class(TEXT_CLASS).unwrap().inner_html, "Hello");
        assert_eq!(surface.query_by_class(CAPTION_CLASS).unwrap().inner_html, "World");
        assert!(surface.query_by_class("cdx-quote__author").is_none());
    }

    #[test]
    fn test_remove_by_class() {
        let mut surface = surface();
        assert_eq!(surface.remove_by_class(CAPTION_CLASS), 1);
        assert!(surface.query_by_class(CAPTION_CLASS).is_none());
        assert_eq!(surface.remove_by_class(CAPTION_CLASS), 0);
    }

    #[test]
    fn test_to_html() {
        let html = surface().to_html();
        assert_eq!(
            html,
            concat!(
                r#"<blockquote class="cdx-block cdx-quote">"#,
                r#"<div class="cdx-input cdx-quote__text" contenteditable="true" data-placeholder="Type">Hello</div>"#,
                r#"<div class="cdx-input cdx-quote__caption" contenteditable="true" data-placeholder="Type">World</div>"#,
                "</blockquote>"
            )
        );
    }

    #[test]
    fn test_placeholder_is_escaped() {
        let mut surface = surface();
        surface.query_by_class_mut(TEXT_CLASS).unwrap().placeholder = r#"Say "hi""#.to_string();
        assert!(surface.to_html().contains(r#"data-placeholder="Say &quot;hi&quot;""#));
    }
}
