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

use std::sync::atomic::{AtomicBool, Ordering};

/// Global switch controlling whether rendering emits ANSI escape sequences or plain
/// text. Process lifetime, starts out enabled, mutated only by [enable](global_color_mode::enable)
/// and [disable](global_color_mode::disable).
///
/// This is a global because the same on/off state has to be observed by every render
/// call in the process. The render pass reads it at format time; it is not captured
/// when a fragment is constructed. A render that races a toggle call observes
/// whichever value is current at the instant of the read.
pub mod global_color_mode {
    use super::{AtomicBool, Ordering};

    static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);

    /// Rendering emits ANSI escape sequences. This is the initial state.
    pub fn enable() {
        COLOR_ENABLED.store(true, Ordering::SeqCst);
    }

    /// Rendering emits plain text with no escape sequences, regardless of style
    /// content.
    pub fn disable() {
        COLOR_ENABLED.store(false, Ordering::SeqCst);
    }

    /// # Testing support
    ///
    /// The [serial_test](https://crates.io/crates/serial_test) crate is used to test
    /// this module. In any test which touches the color mode, please use the
    /// `#[serial]` attribute to annotate that test. Otherwise there will be flakiness
    /// in the test results (tests are run in parallel using many threads).
    pub fn is_enabled() -> bool {
        COLOR_ENABLED.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::global_color_mode;

    #[test]
    #[serial]
    fn cycle_1() {
        global_color_mode::disable();
        assert_eq!(global_color_mode::is_enabled(), false);
    }

    #[test]
    #[serial]
    fn cycle_2() {
        global_color_mode::enable();
        assert_eq!(global_color_mode::is_enabled(), true);
    }

    #[test]
    #[serial]
    fn cycle_3() {
        global_color_mode::disable();
        global_color_mode::enable();
        assert_eq!(global_color_mode::is_enabled(), true);
    }
}
