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

use crate::models::quote_record::QuoteRecord;
use crate::models::tool_descriptor::SanitizeRules;
use ammonia::Builder;
use tracing::debug;

/// Clean `html` keeping only `allowed_tags`, with no attributes
pub fn clean_field(html: &str, allowed_tags: &[&str]) -> String {
    let mut builder = Builder::empty();
    builder.add_tags(allowed_tags.iter().copied());
    builder.clean(html).to_string()
}

/// Apply the declared sanitize rules to the markup fields of a record.
///
/// Fields without a rule are left as they are.
pub fn sanitize_record(record: &QuoteRecord, rules: &SanitizeRules) -> QuoteRecord {
    let mut cleaned = record.clone();

    if let Some(tags) = rules.allowed_tags("text") {
        cleaned.text = clean_field(&record.text, &tags);
    }
    if let Some(tags) = rules.allowed_tags("caption") {
        cleaned.caption = clean_field(&record.caption, &tags);
    }

    if cleaned != *record {
        debug!("Sanitizer removed markup from quote record");
    }
    cleaned
}
