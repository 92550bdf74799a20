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

//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://stackoverflow.com/questions/4842424/list-of-ansi-color-escape-sequences>

use strum_macros::{EnumCount, EnumIter};

/// The sixteen classic ANSI terminal colors. Each variant maps to a fixed pair of SGR
/// codes: one for use as a foreground color, and one for use as a background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

mod color_impl {
    use super::Color;

    impl Color {
        /// SGR code that sets this color as the foreground.
        #[rustfmt::skip]
        pub fn fg_code(&self) -> u8 {
            match self {
                Color::Black         => 30,
                Color::Red           => 31,
                Color::Green         => 32,
                Color::Yellow        => 33,
                Color::Blue          => 34,
                Color::Magenta       => 35,
                Color::Cyan          => 36,
                Color::White         => 37,
                Color::BrightBlack   => 90,
                Color::BrightRed     => 91,
                Color::BrightGreen   => 92,
                Color::BrightYellow  => 93,
                Color::BrightBlue    => 94,
                Color::BrightMagenta => 95,
                Color::BrightCyan    => 96,
                Color::BrightWhite   => 97,
            }
        }

        /// SGR code that sets this color as the background.
        #[rustfmt::skip]
        pub fn bg_code(&self) -> u8 {
            match self {
                Color::Black         => 40,
                Color::Red           => 41,
                Color::Green         => 42,
                Color::Yellow        => 43,
                Color::Blue          => 44,
                Color::Magenta       => 45,
                Color::Cyan          => 46,
                Color::White         => 47,
                Color::BrightBlack   => 100,
                Color::BrightRed     => 101,
                Color::BrightGreen   => 102,
                Color::BrightYellow  => 103,
                Color::BrightBlue    => 104,
                Color::BrightMagenta => 105,
                Color::BrightCyan    => 106,
                Color::BrightWhite   => 107,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::{EnumCount as _, IntoEnumIterator};
    use test_case::test_case;

    use super::Color;

    #[test_case(Color::Black, 30, 40)]
    #[test_case(Color::Red, 31, 41)]
    #[test_case(Color::Green, 32, 42)]
    #[test_case(Color::White, 37, 47)]
    #[test_case(Color::BrightBlack, 90, 100)]
    #[test_case(Color::BrightCyan, 96, 106)]
    #[test_case(Color::BrightWhite, 97, 107)]
    fn test_color_codes(color: Color, fg: u8, bg: u8) {
        assert_eq!(color.fg_code(), fg);
        assert_eq!(color.bg_code(), bg);
    }

    #[test]
    fn test_palette_is_closed() {
        assert_eq!(Color::COUNT, 16);
        // Background codes are offset from foreground codes by 10 across the whole
        // palette.
        for color in Color::iter() {
            assert_eq!(color.bg_code(), color.fg_code() + 10);
        }
    }
}
