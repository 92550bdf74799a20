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
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>

use std::fmt::{Display, Formatter, Result};

use smallvec::SmallVec;

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

/// `ESC[0m` - resets every color and attribute set by a preceding SGR sequence.
pub const RESET: &str = "\x1b[0m";

mod sizing {
    use super::SmallVec;

    /// Foreground code + background code + every distinct modifier code fits inline;
    /// spills to the heap beyond this.
    pub(crate) const MAX_SGR_PARAMS_SIZE: usize = 12;
    pub(crate) type InlineVecSgrParams = SmallVec<[u8; MAX_SGR_PARAMS_SIZE]>;
}

/// One SGR parameter list. Displays as a single escape sequence: `ESC[` followed by the
/// params joined by `;`, terminated by `m`. An empty list must not be displayed at all;
/// callers check [`SgrParams::is_empty`] first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SgrParams {
    inner: sizing::InlineVecSgrParams,
}

impl SgrParams {
    pub fn push(&mut self, param: u8) {
        self.inner.push(param);
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

mod sgr_params_impl {
    use super::*;

    impl Display for SgrParams {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{CSI}")?;
            let mut first = true;
            for param in &self.inner {
                if first {
                    first = false;
                } else {
                    write!(f, ";")?;
                }
                write!(f, "{param}")?;
            }
            write!(f, "{SGR}")
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{RESET, SgrParams};

    #[test]
    fn reset() {
        assert_eq!(RESET, "\x1b[0m");
    }

    #[test]
    fn single_param() {
        let mut params = SgrParams::default();
        params.push(31);
        assert_eq!(params.to_string(), "\x1b[31m");
    }

    #[test]
    fn multiple_params_joined_by_semicolon() {
        let mut params = SgrParams::default();
        params.push(37);
        params.push(41);
        params.push(1);
        assert_eq!(params.to_string(), "\x1b[37;41;1m");
    }

    #[test]
    fn empty_params() {
        let params = SgrParams::default();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
    }
}
