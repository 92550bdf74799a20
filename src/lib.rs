/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! # r3bl_termtint
//!
//! This crate composes styled text fragments into mixed-style sequences and renders
//! them as ANSI colored terminal output, or as plain text when color output is
//! disabled.
//!
//! - [StyledText] is a run of text carrying one uniform [Style] (a foreground
//!   [Color], a background [Color], and/or a list of [Modifier]s).
//! - [StyledTexts] is an ordered sequence of fragments, produced by concatenating
//!   fragments, sequences, and bare `&str` with `+` / `+=` in any combination.
//! - Both support character-precise slicing ([StyledTexts::substring],
//!   [StyledTexts::char_at]) and case folding, all of which carry the style of the
//!   text they originate from.
//! - Rendering goes through [std::fmt::Display]. Each part is emitted as one SGR
//!   escape sequence, its text, and a reset; parts with no style at all are emitted
//!   as raw text. The process-wide [global_color_mode] switch turns escape output
//!   off entirely.
//!
//! # Example usage:
//!
//! ```rust
//! use r3bl_termtint::{Color, ConvertToPlainText, Modifier, Style, StyledText, red};
//!
//! let error_label = StyledText::new(
//!     "ERROR",
//!     Style::new()
//!         .fg(Color::White)
//!         .bg(Color::Red)
//!         .modifier(Modifier::Bold),
//! );
//! let line = error_label + red(" Connection failed");
//!
//! // Mixed-style sequences support character-precise operations.
//! assert_eq!(line.len(), 23);
//! assert_eq!(line.substring(0, 5).to_plain_text().as_str(), "ERROR");
//!
//! // Render to the terminal.
//! line.println();
//! ```

// Attach sources.
pub mod ansi_escape_codes;
pub mod color;
pub mod color_mode;
pub mod error;
pub mod modifier;
pub mod style;
pub mod styled_text;
pub mod styled_texts;

// Re-export.
pub use ansi_escape_codes::*;
pub use color::*;
pub use color_mode::*;
pub use error::*;
pub use modifier::*;
pub use style::*;
pub use styled_text::*;
pub use styled_texts::*;
