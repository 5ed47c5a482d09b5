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

pub mod alignment;
pub mod component_handler;
pub mod component_trait;
pub mod conversion;
pub mod host;
pub mod quote_block;
pub mod quote_config;
pub mod quote_record;
pub mod surface;
pub mod tool_descriptor;

pub use alignment::*;
pub use component_handler::*;
pub use component_trait::*;
pub use conversion::*;
pub use host::*;
pub use quote_block::*;
pub use quote_config::*;
pub use quote_record::*;
pub use surface::*;
pub use tool_descriptor::*;
