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

use crate::config::Config;
use anyhow::{Context, Result};
use doxyde_quote::models::{
    create_default_registry, export_text, import_text, Alignment, LoggingChangeSink, QuoteBlock,
    QuoteParams, ToolDescriptor,
};
use doxyde_quote::sanitizer::sanitize_record;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

fn parse_data(input: &str) -> Result<Value> {
    if input.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_str(input).context("Input is not valid JSON")
}

fn build_block(config: &Config, input: &str, read_only: bool) -> Result<QuoteBlock> {
    let params = QuoteParams::new(parse_data(input)?, config.quote.clone())
        .with_api(Arc::new(config.host_api()))
        .read_only(read_only)
        .with_block(Arc::new(LoggingChangeSink));
    Ok(QuoteBlock::new(params))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

/// Construct, render and save without edits
pub fn normalize(config: &Config, input: &str) -> Result<String> {
    let mut block = build_block(config, input, false)?;
    let surface = block.render();
    to_json(block.save(&surface))
}

pub fn export(config: &Config, input: &str) -> Result<String> {
    let block = build_block(config, input, false)?;
    Ok(export_text(block.data()))
}

pub fn import(config: &Config, text: &str) -> Result<String> {
    to_json(&import_text(text, &config.quote))
}

pub fn render(config: &Config, input: &str, read_only: bool) -> Result<String> {
    let block = build_block(config, input, read_only)?;
    Ok(block.render().to_html())
}

pub fn settings(config: &Config, input: &str) -> Result<String> {
    let block = build_block(config, input, false)?;
    to_json(&block.render_settings())
}

pub fn align(config: &Config, input: &str, alignment: Alignment) -> Result<String> {
    let mut block = build_block(config, input, false)?;
    let surface = block.render();
    block.set_alignment(alignment);
    to_json(block.save(&surface))
}

pub fn sanitize(config: &Config, input: &str) -> Result<String> {
    let mut block = build_block(config, input, false)?;
    let surface = block.render();
    let rules = ToolDescriptor::quote().sanitize;
    to_json(&sanitize_record(block.save(&surface), &rules))
}

pub fn describe() -> Result<String> {
    to_json(&ToolDescriptor::quote())
}

pub fn convert(config: &Config, input: &str, from: &str, to: &str) -> Result<String> {
    let registry = create_default_registry(config.quote.clone());
    let content = parse_data(input)?;
    registry
        .validate_content(from, &content)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Invalid {} content", from))?;

    let converted = registry
        .convert(from, &content, to)
        .map_err(anyhow::Error::msg)?;
    info!("Converted {} block to {}", from, to);
    to_json(&converted)
}
