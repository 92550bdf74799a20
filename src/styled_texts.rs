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

use std::{fmt::{self, Display, Formatter},
          ops::{Add, AddAssign, Index}};

use crate::{ConvertToPlainText, IndexOutOfRange, StyledText, styled_text::sizing};

mod parts_sizing {
    use super::StyledText;

    /// Vec outperforms `SmallVec` for the parts list:
    /// - Faster extend operations (the main bottleneck)
    /// - No `SmallVec::try_grow` overhead
    /// - Better drop performance
    pub(crate) type VecStyledTexts = Vec<StyledText>;
}

/// An ordered sequence of [StyledText] fragments representing mixed-style text.
///
/// A sequence is only ever produced by composition: `+` / `+=` over any mix of
/// fragments, sequences, and bare `&str` (which coerces to an unstyled fragment), the
/// [styled_texts!](crate::styled_texts!) macro, or [StyledTexts::from_parts].
/// Concatenating a sequence absorbs its parts, so sequences never nest. Once built, a
/// sequence is immutable the same way a fragment is: every transform returns a new
/// value.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_termtint::{ConvertToPlainText, red, styled_texts};
///
/// let greeting = red("Hello") + " World";
/// assert_eq!(greeting.to_plain_text().as_str(), "Hello World");
///
/// let rainbow = styled_texts! {
///     red("R"),
///     r3bl_termtint::green("G"),
///     r3bl_termtint::blue("B"),
/// };
/// assert_eq!(rainbow.part_count(), 3);
/// println!("{rainbow}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledTexts {
    inner: parts_sizing::VecStyledTexts,
}

/// Macro to make building [StyledTexts] easy.
///
/// Here's an example.
/// ```rust
/// use r3bl_termtint::{Color, Style, styled_text, styled_texts};
///
/// let st_vec = styled_texts! {
///     styled_text!("Hello", Style::new().fg(Color::Red)),
///     styled_text!(" World"),
/// };
/// ```
#[macro_export]
macro_rules! styled_texts {
    (
        $($styled_text_arg : expr),*
        $(,)* /* Optional trailing comma https://stackoverflow.com/a/43143459/2085356. */
    ) =>
    {
        {
            let mut styled_texts: $crate::StyledTexts = Default::default();
            $(
                styled_texts += $styled_text_arg;
            )*
            styled_texts
        }
    };
}

mod styled_texts_impl {
    use super::*;

    impl StyledTexts {
        /// Builds a sequence from an ordered list of fragments. Zero-length fragments
        /// are dropped so that rendering stays minimal.
        pub fn from_parts(parts: impl IntoIterator<Item = StyledText>) -> Self {
            let mut acc = StyledTexts::default();
            for part in parts {
                acc.push(part);
            }
            acc
        }

        pub(super) fn push(&mut self, part: StyledText) {
            if !part.is_empty() {
                self.inner.push(part);
            }
        }

        /// Number of characters (not bytes, not parts) across all parts.
        pub fn len(&self) -> usize {
            self.inner.iter().map(StyledText::len).sum()
        }

        pub fn is_empty(&self) -> bool {
            self.inner.is_empty()
        }

        pub fn part_count(&self) -> usize {
            self.inner.len()
        }

        pub fn iter(&self) -> core::slice::Iter<'_, StyledText> {
            self.inner.iter()
        }

        pub fn println(&self) {
            println!("{}", self);
        }

        pub fn print(&self) {
            print!("{}", self);
        }

        /// One numbered `index: [style, text]` line per part. Debugging aid.
        pub fn pretty_print(&self) -> String {
            let mut acc = vec![];
            for (index, part) in self.inner.iter().enumerate() {
                acc.push(format!(
                    "{index}: [{:?}, {}]",
                    part.get_style(),
                    part.get_text()
                ));
            }
            acc.join("\n")
        }
    }

    impl ConvertToPlainText for StyledTexts {
        fn to_plain_text(&self) -> sizing::StringStyledText {
            let mut acc = sizing::StringStyledText::new();
            for part in &self.inner {
                acc.push_str(part.get_text());
            }
            acc
        }
    }
}

mod transform_ops {
    use super::*;

    impl StyledTexts {
        /// Character-precise slice across part boundaries: walks the parts with a
        /// running offset and keeps each part's overlap with `[start, end)`. Bounds
        /// are clamped like standard slicing; parts that fall entirely outside the
        /// range are omitted. This never fails.
        pub fn substring(&self, start: usize, end: usize) -> Self {
            let mut acc = StyledTexts::default();
            let mut offset = 0;
            for part in &self.inner {
                if offset >= end {
                    break;
                }
                let part_len = part.len();
                let local_start = start.saturating_sub(offset);
                let local_end = end.saturating_sub(offset).min(part_len);
                if local_start < local_end {
                    acc.push(part.substring(local_start, local_end));
                }
                offset += part_len;
            }
            acc
        }

        /// The single-character fragment at `index`, carrying the style of the part
        /// it originates from. Locates the containing part with the same offset walk
        /// as [StyledTexts::substring].
        ///
        /// # Errors
        ///
        /// [IndexOutOfRange] if `index` is not within `[0, len())`.
        pub fn char_at(&self, index: usize) -> Result<StyledText, IndexOutOfRange> {
            let mut offset = 0;
            for part in &self.inner {
                let part_len = part.len();
                if index < offset + part_len {
                    return part.char_at(index - offset);
                }
                offset += part_len;
            }
            Err(IndexOutOfRange { index, len: offset })
        }

        /// Uppercases every part; part boundaries and each part's style are
        /// preserved.
        pub fn to_uppercase(&self) -> Self {
            StyledTexts {
                inner: self.inner.iter().map(StyledText::to_uppercase).collect(),
            }
        }

        /// Lowercases every part; part boundaries and each part's style are
        /// preserved.
        pub fn to_lowercase(&self) -> Self {
            StyledTexts {
                inner: self.inner.iter().map(StyledText::to_lowercase).collect(),
            }
        }

        /// Title-cases every part; part boundaries and each part's style are
        /// preserved.
        pub fn to_title_case(&self) -> Self {
            StyledTexts {
                inner: self.inner.iter().map(StyledText::to_title_case).collect(),
            }
        }

        /// Capitalizes the first part only (its full text, per
        /// [StyledText::capitalize] semantics); every other part is left untouched,
        /// including its case. An empty sequence is a no-op.
        pub fn capitalize(&self) -> Self {
            let mut parts = self.inner.clone();
            if let Some(first) = parts.first_mut() {
                *first = first.capitalize();
            }
            StyledTexts { inner: parts }
        }
    }
}

/// Lazy iterator over single-character fragments of a [StyledTexts], each carrying its
/// originating part's style. Left-to-right part order, then character order within
/// each part. Re-obtaining the iterator from [StyledTexts::chars] restarts it.
#[derive(Clone, Debug)]
pub struct StyledChars<'a> {
    parts: core::slice::Iter<'a, StyledText>,
    current: Option<(&'a StyledText, core::str::Chars<'a>)>,
}

mod char_iteration_ops {
    use super::*;

    impl StyledTexts {
        pub fn chars(&self) -> StyledChars<'_> {
            StyledChars {
                parts: self.inner.iter(),
                current: None,
            }
        }
    }

    impl Iterator for StyledChars<'_> {
        type Item = StyledText;

        fn next(&mut self) -> Option<StyledText> {
            loop {
                if let Some((part, chars)) = &mut self.current {
                    if let Some(character) = chars.next() {
                        return Some(StyledText::new(
                            character.to_string(),
                            part.get_style().clone(),
                        ));
                    }
                }
                let part = self.parts.next()?;
                self.current = Some((part, part.get_text().chars()));
            }
        }
    }

    impl<'a> IntoIterator for &'a StyledTexts {
        type Item = &'a StyledText;
        type IntoIter = core::slice::Iter<'a, StyledText>;

        fn into_iter(self) -> Self::IntoIter {
            self.iter()
        }
    }
}

mod impl_ops {
    use super::*;

    impl Index<usize> for StyledTexts {
        type Output = StyledText;

        fn index(&self, index: usize) -> &Self::Output {
            &self.inner[index]
        }
    }

    impl AddAssign<StyledText> for StyledTexts {
        fn add_assign(&mut self, rhs: StyledText) {
            self.push(rhs);
        }
    }

    impl AddAssign<StyledTexts> for StyledTexts {
        fn add_assign(&mut self, rhs: StyledTexts) {
            // Absorb the other sequence's parts; sequences never nest. The parts are
            // already normalized (no zero-length entries).
            self.inner.extend(rhs.inner);
        }
    }

    impl AddAssign<&str> for StyledTexts {
        fn add_assign(&mut self, rhs: &str) {
            self.push(StyledText::unstyled(rhs));
        }
    }

    impl Add<StyledText> for StyledText {
        type Output = StyledTexts;

        fn add(self, rhs: StyledText) -> StyledTexts {
            StyledTexts::from_parts([self, rhs])
        }
    }

    impl Add<StyledTexts> for StyledText {
        type Output = StyledTexts;

        fn add(self, rhs: StyledTexts) -> StyledTexts {
            let mut acc = StyledTexts::default();
            acc += self;
            acc += rhs;
            acc
        }
    }

    impl Add<&str> for StyledText {
        type Output = StyledTexts;

        fn add(self, rhs: &str) -> StyledTexts {
            self + StyledText::unstyled(rhs)
        }
    }

    impl Add<StyledText> for StyledTexts {
        type Output = StyledTexts;

        fn add(mut self, rhs: StyledText) -> StyledTexts {
            self += rhs;
            self
        }
    }

    impl Add<StyledTexts> for StyledTexts {
        type Output = StyledTexts;

        fn add(mut self, rhs: StyledTexts) -> StyledTexts {
            self += rhs;
            self
        }
    }

    impl Add<&str> for StyledTexts {
        type Output = StyledTexts;

        fn add(mut self, rhs: &str) -> StyledTexts {
            self += rhs;
            self
        }
    }

    impl Add<StyledText> for &str {
        type Output = StyledTexts;

        fn add(self, rhs: StyledText) -> StyledTexts {
            StyledText::unstyled(self) + rhs
        }
    }

    impl Add<StyledTexts> for &str {
        type Output = StyledTexts;

        fn add(self, rhs: StyledTexts) -> StyledTexts {
            StyledText::unstyled(self) + rhs
        }
    }
}

mod impl_display {
    use super::*;

    impl Display for StyledTexts {
        /// Renders each part in order. Every part is escaped and reset
        /// independently, so the visual effect of a part never depends on its
        /// neighbors.
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            for part in &self.inner {
                write!(f, "{part}")?;
            }
            Ok(())
        }
    }
}
