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

//! Quote block component for the Doxyde block editor
//!
//! A quote block holds a quote text, a caption and an alignment. The editor
//! host constructs it from previously saved data, renders its surface, and
//! reads the record back on save.
//!
//! ```
//! use doxyde_quote::models::{Alignment, QuoteBlock, QuoteConfig, QuoteParams};
//! use serde_json::json;
//!
//! let mut block = QuoteBlock::new(QuoteParams::new(
//!     json!({"text": "Time is money", "caption": "Franklin"}),
//!     QuoteConfig::default(),
//! ));
//! let surface = block.render();
//! block.set_alignment(Alignment::Center);
//!
//! let record = block.save(&surface);
//! assert_eq!(record.alignment, Alignment::Center);
//! assert_eq!(doxyde_quote::models::export_text(record), "Time is money — Franklin");
//! ```

pub mod error;
pub mod models;
pub mod sanitizer;

pub use error::{QuoteError, Result};
