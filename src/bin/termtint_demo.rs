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

use r3bl_termtint::{Color, Modifier, Style, StyledText, bold, global_color_mode, red,
                    styled_texts};
use strum::IntoEnumIterator;

fn main() {
    print_title();
    print_foreground_color_table();
    print_background_color_table();
    print_modifier_table();
    print_combination_examples();
    print_color_mode_demo();
    println!();
}

fn print_section_header(text: &str) {
    let header = StyledText::new(
        text,
        Style::new()
            .fg(Color::BrightWhite)
            .modifier(Modifier::Bold)
            .modifier(Modifier::Underline),
    );
    println!();
    header.println();
    println!();
}

fn print_title() {
    let style = Style::new().fg(Color::BrightCyan).modifier(Modifier::Bold);
    StyledText::new("╔═════════════════════════════════╗", style.clone()).println();
    StyledText::new("║    TermTint Demo Application    ║", style.clone()).println();
    StyledText::new("╚═════════════════════════════════╝", style).println();
}

fn print_foreground_color_table() {
    print_section_header("FOREGROUND COLORS");

    for color in Color::iter() {
        let label = StyledText::new(
            format!("{:<15}", format!("{color:?}")),
            Style::new().fg(Color::BrightBlack),
        );
        let sample = StyledText::new("Sample Text", Style::new().fg(color));
        (label + " " + sample).println();
    }
}

fn print_background_color_table() {
    print_section_header("BACKGROUND COLORS");

    for color in Color::iter() {
        // Keep the sample legible regardless of the background shade.
        let fg_color = match color {
            Color::White | Color::BrightWhite | Color::BrightYellow | Color::BrightCyan => {
                Color::Black
            }
            _ => Color::White,
        };

        let label = StyledText::new(
            format!("{:<15}", format!("{color:?}")),
            Style::new().fg(Color::BrightBlack),
        );
        let sample = StyledText::new(
            " Sample Text ",
            Style::new().fg(fg_color).bg(color),
        );
        (label + " " + sample).println();
    }
}

fn print_modifier_table() {
    print_section_header("TEXT MODIFIERS");

    for modifier in Modifier::iter() {
        let label = StyledText::new(
            format!("{:<15}", format!("{modifier:?}")),
            Style::new().fg(Color::BrightBlack),
        );
        let sample = StyledText::new(
            "Sample Text",
            Style::new().fg(Color::Cyan).modifier(modifier),
        );
        (label + " " + sample).println();
    }
}

fn print_combination_examples() {
    print_section_header("COMBINATION EXAMPLES");

    let error_label = StyledText::new(
        "ERROR",
        Style::new()
            .fg(Color::White)
            .bg(Color::Red)
            .modifier(Modifier::Bold),
    );
    (error_label + red(" Connection failed")).println();

    let success_label = StyledText::new(
        "SUCCESS",
        Style::new()
            .fg(Color::Black)
            .bg(Color::Green)
            .modifier(Modifier::Bold),
    );
    (success_label + r3bl_termtint::green(" Operation completed")).println();

    let warning_label = StyledText::new(
        "WARNING",
        Style::new()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .modifier(Modifier::Bold),
    );
    (warning_label + r3bl_termtint::yellow(" Low disk space")).println();

    let info_label = StyledText::new(
        "INFO",
        Style::new()
            .fg(Color::White)
            .bg(Color::Blue)
            .modifier(Modifier::Bold),
    );
    (info_label + r3bl_termtint::cyan(" Loading configuration...")).println();

    println!();
    let rainbow = styled_texts! {
        bold("R").fg(Color::Red),
        bold("A").fg(Color::Yellow),
        bold("I").fg(Color::Green),
        bold("N").fg(Color::Cyan),
        bold("B").fg(Color::Blue),
        bold("O").fg(Color::Magenta),
        bold("W").fg(Color::Red),
        r3bl_termtint::white(" Text!"),
    };
    rainbow.println();
}

fn print_color_mode_demo() {
    print_section_header("COLOR MODE");

    let line = red("This line is red when colors are enabled.");

    global_color_mode::disable();
    println!("> global_color_mode::disable()");
    line.println();

    global_color_mode::enable();
    println!("> global_color_mode::enable()");
    line.println();
}
