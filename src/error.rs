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

/// Single-character index access outside `[0, len)`, on either a fragment or a
/// sequence. This is the only failure this crate defines; every other operation is
/// total. It is not recoverable by the library and propagates to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("character index {index} is out of range for styled text of length {len}")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::IndexOutOfRange;

    #[test]
    fn test_error_message() {
        let err = IndexOutOfRange { index: 100, len: 5 };
        assert_eq!(
            err.to_string(),
            "character index 100 is out of range for styled text of length 5"
        );
    }
}
