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

use smallvec::SmallVec;

use crate::{Color, Modifier, SgrParams};

mod sizing {
    use super::{Modifier, SmallVec};

    /// Every distinct [Modifier] fits inline; spills to the heap beyond this.
    pub(crate) const MAX_STYLE_MODIFIER_SIZE: usize = 8;
    pub(crate) type InlineVecModifiers = SmallVec<[Modifier; MAX_STYLE_MODIFIER_SIZE]>;
}

/// The style carried by one styled fragment: an optional foreground [Color], an
/// optional background [Color], and an ordered set of [Modifier]s. Each slot holds at
/// most one value.
///
/// A `Style` is a plain value. Fragments store their own copy at construction, so no
/// two fragments can observe each other's style changing.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_termtint::{Color, Modifier, Style};
///
/// let style = Style::new()
///     .fg(Color::White)
///     .bg(Color::Red)
///     .modifier(Modifier::Bold);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub color_fg: Option<Color>,
    pub color_bg: Option<Color>,
    pub modifiers: sizing::InlineVecModifiers,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.color_fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.color_bg = Some(color);
        self
    }

    /// Appends `modifier`, preserving supply order. A modifier that is already present
    /// is skipped, so the render pass never emits the same code twice.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        if !self.modifiers.contains(&modifier) {
            self.modifiers.push(modifier);
        }
        self
    }

    /// No slot is populated. A plain style renders as raw text with no escape
    /// sequence at all.
    pub fn is_plain(&self) -> bool {
        self.color_fg.is_none() && self.color_bg.is_none() && self.modifiers.is_empty()
    }

    /// The ordered SGR parameter list for this style: foreground code, then background
    /// code, then each modifier code in supply order.
    pub fn sgr_params(&self) -> SgrParams {
        let mut params = SgrParams::default();
        if let Some(color) = self.color_fg {
            params.push(color.fg_code());
        }
        if let Some(color) = self.color_bg {
            params.push(color.bg_code());
        }
        for modifier in &self.modifiers {
            params.push(modifier.code());
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Style;
    use crate::{Color, Modifier};

    #[test]
    fn test_default_style_is_plain() {
        let style = Style::default();
        assert!(style.is_plain());
        assert!(style.sgr_params().is_empty());
    }

    #[test]
    fn test_sgr_params_order_is_fg_bg_modifiers() {
        let style = Style::new()
            .modifier(Modifier::Bold)
            .bg(Color::Red)
            .fg(Color::White)
            .modifier(Modifier::Underline);
        // Supply order of fg / bg does not matter; the param order is fixed.
        assert_eq!(style.sgr_params().to_string(), "\x1b[37;41;1;4m");
    }

    #[test]
    fn test_modifier_dedup() {
        let style = Style::new()
            .modifier(Modifier::Bold)
            .modifier(Modifier::Italic)
            .modifier(Modifier::Bold);
        assert_eq!(style.modifiers.len(), 2);
        assert_eq!(style.sgr_params().to_string(), "\x1b[1;3m");
    }

    #[test]
    fn test_one_value_per_slot() {
        let style = Style::new().fg(Color::Red).fg(Color::Green);
        assert_eq!(style.color_fg, Some(Color::Green));
        assert_eq!(style.sgr_params().len(), 1);
    }
}
