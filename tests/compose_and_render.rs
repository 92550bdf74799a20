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

//! End to end coverage of composing styled values and rendering them, across the
//! public surface of the crate: concatenation in every combination, character-precise
//! slicing and indexing, case folding, and exact escape-byte output under both color
//! modes.

use pretty_assertions::assert_eq;
use r3bl_termtint::{Color, ConvertToPlainText, IndexOutOfRange, Modifier, Style,
                    StyledText, StyledTexts, global_color_mode, green, red, styled_text,
                    styled_texts};
use serial_test::serial;

#[test]
fn concatenation_is_associative_in_content_and_style() {
    let a = red("a");
    let b = StyledText::unstyled("bb");
    let c = green("ccc");

    let left = (a.clone() + b.clone()) + c.clone();
    let right = a + (b + c);

    assert_eq!(left, right);
    assert_eq!(left.len(), right.len());
    assert_eq!(left.to_plain_text(), right.to_plain_text());
}

#[serial]
#[test]
fn associative_groupings_render_identically() {
    global_color_mode::enable();

    let a = red("a");
    let b = StyledText::unstyled("bb");
    let c = green("ccc");

    let left = (a.clone() + b.clone()) + c.clone();
    let right = a + (b + c);
    assert_eq!(format!("{left}"), format!("{right}"));
}

#[test]
fn char_at_agrees_with_plain_text() {
    let st_vec = styled_texts! {
        styled_text!("Hi", Style::new().fg(Color::Red)),
        styled_text!("There", Style::new().bg(Color::Blue)),
        styled_text!("!"),
    };
    let plain = st_vec.to_plain_text();

    for (index, expected) in plain.chars().enumerate() {
        let ch = st_vec.char_at(index).unwrap();
        assert_eq!(ch.get_text(), expected.to_string());
    }

    // Style comes from the originating part.
    assert_eq!(st_vec.char_at(0).unwrap().get_style(), st_vec[0].get_style());
    assert_eq!(st_vec.char_at(2).unwrap().get_style(), st_vec[1].get_style());
    assert_eq!(st_vec.char_at(7).unwrap().get_style(), st_vec[2].get_style());
}

#[test]
fn substring_agrees_with_plain_text_slicing() {
    let st_vec = red("Hi") + green("There") + "!";
    let plain: String = st_vec.to_plain_text().as_str().to_string();

    for start in 0..=plain.len() {
        for end in start..=plain.len() {
            let sliced = st_vec.substring(start, end);
            assert_eq!(sliced.to_plain_text().as_str(), &plain[start..end]);
        }
    }
}

#[serial]
#[test]
fn disabled_color_mode_always_renders_plain_text() {
    global_color_mode::disable();

    let st_vec = styled_texts! {
        styled_text!("Hello", Style::new().fg(Color::Red).modifier(Modifier::Bold)),
        styled_text!(" World", Style::new().bg(Color::Blue)),
    };
    let rendered = format!("{st_vec}");
    assert_eq!(rendered, "Hello World");
    assert_eq!(rendered, st_vec.to_plain_text().as_str());
    assert!(!rendered.contains('\x1b'));

    global_color_mode::enable();
}

#[serial]
#[test]
fn render_is_idempotent() {
    global_color_mode::enable();

    let st_vec = red("Hello") + " World";
    assert_eq!(format!("{st_vec}"), format!("{st_vec}"));

    global_color_mode::disable();
    assert_eq!(format!("{st_vec}"), format!("{st_vec}"));
    global_color_mode::enable();
}

#[test]
fn case_folds_preserve_style() {
    let style = Style::new().fg(Color::Magenta).modifier(Modifier::Underline);
    let fragment = StyledText::new("mIxEd CaSe", style.clone());

    assert_eq!(fragment.to_uppercase().get_style(), &style);
    assert_eq!(fragment.to_lowercase().get_style(), &style);
    assert_eq!(fragment.to_title_case().get_style(), &style);
    assert_eq!(fragment.capitalize().get_style(), &style);
}

#[serial]
#[test]
fn scenario_styled_fragment_plus_bare_text() {
    global_color_mode::enable();

    // The bare text becomes its own unstyled part: it is rendered raw, outside the
    // escaped region, not folded into the styled part.
    let line = StyledText::new("Hello", Style::new().fg(Color::Red)) + " World";
    assert_eq!(line.part_count(), 2);
    assert_eq!(format!("{line}"), "\x1b[31mHello\x1b[0m World");
}

#[serial]
#[test]
fn scenario_foreground_code_precedes_modifier_code() {
    global_color_mode::enable();

    let fragment = StyledText::new(
        "G",
        Style::new().fg(Color::Green).modifier(Modifier::Bold),
    );
    assert_eq!(format!("{fragment}"), "\x1b[32;1mG\x1b[0m");
}

#[test]
fn scenario_slice_across_fragment_boundaries() {
    let st_vec = StyledTexts::from_parts([
        styled_text!("Hi", Style::new().fg(Color::Red)),
        styled_text!("There"),
    ]);

    let sliced = st_vec.substring(1, 5);
    assert_eq!(sliced.to_plain_text().as_str(), "iThe");
    assert_eq!(sliced[0].get_style(), &Style::new().fg(Color::Red));
    assert_eq!(sliced[1].get_style(), &Style::default());
}

#[test]
fn scenario_out_of_range_index_vs_clamped_slice() {
    let fragment = red("Hello");
    let sequence = red("Hello") + green("!");

    assert_eq!(
        fragment.char_at(100),
        Err(IndexOutOfRange {
            index: 100,
            len: 5
        })
    );
    assert_eq!(
        sequence.char_at(100),
        Err(IndexOutOfRange {
            index: 100,
            len: 6
        })
    );

    // A slice with `end` beyond the length clamps silently and returns the available
    // suffix.
    assert_eq!(fragment.substring(3, 100).get_text(), "lo");
    assert_eq!(sequence.substring(3, 100).to_plain_text().as_str(), "lo!");
}

#[test]
fn capitalize_touches_only_the_first_part() {
    let st_vec = styled_text!("heLLo", Style::new().fg(Color::Red))
        + styled_text!(" WORLD", Style::new().fg(Color::Green));

    let capitalized = st_vec.capitalize();
    assert_eq!(capitalized.to_plain_text().as_str(), "Hello WORLD");
    assert_eq!(capitalized[0].get_style(), &Style::new().fg(Color::Red));
    assert_eq!(capitalized[1].get_style(), &Style::new().fg(Color::Green));
}

#[serial]
#[test]
fn every_part_is_escaped_and_reset_independently() {
    global_color_mode::enable();

    let st_vec = styled_texts! {
        styled_text!("a", Style::new().fg(Color::Red)),
        styled_text!("b", Style::new().fg(Color::Green).modifier(Modifier::Bold)),
        styled_text!("c"),
    };
    assert_eq!(
        format!("{st_vec}"),
        "\x1b[31ma\x1b[0m\x1b[32;1mb\x1b[0mc"
    );
}
