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

use strum_macros::{EnumCount, EnumIter};

/// Text attributes that can be applied to a styled fragment alongside its colors. Each
/// variant maps to a single fixed SGR code.
///
/// More info: <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum Modifier {
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Reverse,
    Hidden,
    Strikethrough,
}

impl Modifier {
    /// SGR code for this attribute.
    #[rustfmt::skip]
    pub fn code(&self) -> u8 {
        match self {
            Modifier::Bold          => 1,
            Modifier::Dim           => 2,
            Modifier::Italic        => 3,
            Modifier::Underline     => 4,
            Modifier::Blink         => 5,
            Modifier::Reverse       => 7,
            Modifier::Hidden        => 8,
            Modifier::Strikethrough => 9,
        }
    }
}
