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

use std::fmt::{self, Display, Formatter};

use smallstr::SmallString;

use crate::{Color, IndexOutOfRange, Modifier, Style, ansi_escape_codes::RESET,
            global_color_mode};

/// A run of text carrying one uniform [Style]. This is the atom that styled sequences
/// are built out of.
///
/// - `text` and `style` are fixed at construction. Every transform (slicing, case
///   folding, adding a color) returns a new value; the original is never touched. This
///   makes fragments freely shareable across threads.
/// - The style is stored by value, so no two fragments can alias the same style data.
/// - Concatenation with `+` produces a [`crate::StyledTexts`] sequence, and works with
///   another fragment, a sequence, or bare `&str` on either side.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_termtint::{Color, Modifier, Style, StyledText, red};
///
/// // Verbose construction.
/// let error_label = StyledText::new(
///     "ERROR",
///     Style::new()
///         .fg(Color::White)
///         .bg(Color::Red)
///         .modifier(Modifier::Bold),
/// );
///
/// // Using the constructor functions.
/// let message = red(" Connection failed");
///
/// let line = error_label + message;
/// println!("{line}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    text: sizing::StringStyledText,
    style: Style,
}

pub mod sizing {
    use super::SmallString;

    /// Default inline storage for fragment text; spills to the heap if the text gets
    /// larger than this.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;
    pub type StringStyledText = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;
}

/// Conversion to plain text with all style information discarded. Used for
/// equality-of-content checks, never for terminal output (that is what [Display] is
/// for).
pub trait ConvertToPlainText {
    fn to_plain_text(&self) -> sizing::StringStyledText;
}

/// Macro to make building [StyledText] easy.
///
/// Here's an example.
/// ```rust
/// use r3bl_termtint::{Color, Style, styled_text};
///
/// let st = styled_text!("Hello", Style::new().fg(Color::Red));
/// assert_eq!(st.get_text(), "Hello");
/// ```
#[macro_export]
macro_rules! styled_text {
    () => {
        $crate::StyledText::default()
    };
    ($text_arg: expr) => {
        $crate::StyledText::unstyled($text_arg)
    };
    ($text_arg: expr, $style_arg: expr) => {
        $crate::StyledText::new($text_arg, $style_arg)
    };
}

mod styled_text_impl {
    use super::*;

    impl StyledText {
        pub fn new(arg_text: impl Into<sizing::StringStyledText>, style: Style) -> Self {
            StyledText {
                text: arg_text.into(),
                style,
            }
        }

        /// A fragment with an empty style. This is what bare text coerces to when it
        /// is concatenated with styled values.
        pub fn unstyled(arg_text: impl Into<sizing::StringStyledText>) -> Self {
            Self::new(arg_text, Style::default())
        }

        pub fn get_text(&self) -> &str {
            self.text.as_str()
        }

        pub fn get_style(&self) -> &Style {
            &self.style
        }

        /// Number of characters (not bytes) in the fragment text.
        pub fn len(&self) -> usize {
            self.text.chars().count()
        }

        pub fn is_empty(&self) -> bool {
            self.text.is_empty()
        }

        pub fn println(&self) {
            println!("{}", self);
        }

        pub fn print(&self) {
            print!("{}", self);
        }

        /// This is different than the [Display] trait implementation, because it
        /// doesn't allocate a new [String], but instead allocates an inline buffer on
        /// the stack. If this buffer gets larger than
        /// [sizing::DEFAULT_STRING_STORAGE_SIZE], it will spill to the heap.
        pub fn to_small_str(&self) -> sizing::StringStyledText {
            format!("{}", self).into()
        }
    }

    impl ConvertToPlainText for StyledText {
        fn to_plain_text(&self) -> sizing::StringStyledText {
            self.text.clone()
        }
    }
}

mod transform_ops {
    use super::*;

    impl StyledText {
        /// A new fragment over the character range `[start, end)`, carrying an
        /// identical style. Bounds are clamped like standard slicing; this never
        /// fails. Offsets count characters, not bytes.
        pub fn substring(&self, start: usize, end: usize) -> Self {
            let text: String = self
                .text
                .chars()
                .skip(start)
                .take(end.saturating_sub(start))
                .collect();
            StyledText::new(text, self.style.clone())
        }

        /// The single-character fragment at `index`, carrying an identical style.
        ///
        /// # Errors
        ///
        /// [IndexOutOfRange] if `index` is not within `[0, len())`.
        pub fn char_at(&self, index: usize) -> Result<Self, IndexOutOfRange> {
            match self.text.chars().nth(index) {
                Some(character) => {
                    Ok(StyledText::new(character.to_string(), self.style.clone()))
                }
                None => Err(IndexOutOfRange {
                    index,
                    len: self.len(),
                }),
            }
        }

        /// Uppercases the text; the style is carried over unchanged.
        pub fn to_uppercase(&self) -> Self {
            StyledText::new(self.text.to_uppercase(), self.style.clone())
        }

        /// Lowercases the text; the style is carried over unchanged.
        pub fn to_lowercase(&self) -> Self {
            StyledText::new(self.text.to_lowercase(), self.style.clone())
        }

        /// Uppercases the first alphabetic character of every word and lowercases
        /// every other alphabetic character, where a word starts after any
        /// non-alphabetic character. The style is carried over unchanged.
        pub fn to_title_case(&self) -> Self {
            let mut text = String::with_capacity(self.text.len());
            let mut at_word_start = true;
            for character in self.text.chars() {
                if character.is_alphabetic() {
                    if at_word_start {
                        text.extend(character.to_uppercase());
                    } else {
                        text.extend(character.to_lowercase());
                    }
                    at_word_start = false;
                } else {
                    text.push(character);
                    at_word_start = true;
                }
            }
            StyledText::new(text, self.style.clone())
        }

        /// Uppercases the first character and lowercases the rest of the fragment
        /// text. Both transforms are locale-invariant. The style is carried over
        /// unchanged.
        pub fn capitalize(&self) -> Self {
            let mut chars = self.text.chars();
            let text: String = match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            };
            StyledText::new(text, self.style.clone())
        }
    }
}

mod style_builder_ops {
    use super::*;

    impl StyledText {
        pub fn fg(self, color: Color) -> Self {
            StyledText {
                style: self.style.fg(color),
                text: self.text,
            }
        }

        pub fn bg(self, color: Color) -> Self {
            StyledText {
                style: self.style.bg(color),
                text: self.text,
            }
        }

        pub fn modifier(self, modifier: Modifier) -> Self {
            StyledText {
                style: self.style.modifier(modifier),
                text: self.text,
            }
        }
    }
}

pub fn black(text: impl Into<sizing::StringStyledText>) -> StyledText {
    StyledText::new(text, Style::new().fg(Color::Black))
}

pub fn red(text: impl Into<sizing::StringStyledText>) -> StyledText {
    StyledText::new(text, Style::new().fg(Color::Red))
}

pub fn green(text: impl Into<sizing::StringStyledText>) -> StyledText {
    StyledText::new(text, Style::new().fg(Color::Green))
}

pub fn yellow(text: impl Into<sizing::StringStyledText>) -> StyledText {
    StyledText::new(text, Style::new().fg(Color::Yellow))
}

pub fn blue(text: impl Into<sizing::StringStyledText>) -> StyledText {
    StyledText::new(text, Style::new().fg(Color::Blue))
}

pub fn magenta(text: impl Into<sizing::StringStyledText>) -> StyledText {
    StyledText::new(text, Style::new().fg(Color::Magenta))
}

pub fn cyan(text: impl Into<sizing::StringStyledText>) -> StyledText {
    StyledText::new(text, Style::new().fg(Color::Cyan))
}

pub fn white(text: impl Into<sizing::StringStyledText>) -> StyledText {
    StyledText::new(text, Style::new().fg(Color::White))
}

pub fn bold(text: impl Into<sizing::StringStyledText>) -> StyledText {
    StyledText::new(text, Style::new().modifier(Modifier::Bold))
}

pub fn dim(text: impl Into<sizing::StringStyledText>) -> StyledText {
    StyledText::new(text, Style::new().modifier(Modifier::Dim))
}

pub fn italic(text: impl Into<sizing::StringStyledText>) -> StyledText {
    StyledText::new(text, Style::new().modifier(Modifier::Italic))
}

pub fn underline(text: impl Into<sizing::StringStyledText>) -> StyledText {
    StyledText::new(text, Style::new().modifier(Modifier::Underline))
}

pub fn strikethrough(text: impl Into<sizing::StringStyledText>) -> StyledText {
    StyledText::new(text, Style::new().modifier(Modifier::Strikethrough))
}

mod display_trait_impl {
    use super::*;

    impl Display for StyledText {
        /// Renders the fragment. The color mode is read here, at format time, not at
        /// construction time.
        ///
        /// - Color mode disabled: the raw text, no escape bytes.
        /// - Empty SGR param list: the raw text, not even an empty escape.
        /// - Otherwise: one escape sequence, the text, then [RESET].
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            if !global_color_mode::is_enabled() {
                return write!(f, "{}", self.get_text());
            }
            let params = self.style.sgr_params();
            if params.is_empty() {
                return write!(f, "{}", self.get_text());
            }
            write!(f, "{}", params)?;
            write!(f, "{}", self.get_text())?;
            write!(f, "{RESET}")
        }
    }
}
