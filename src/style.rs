// Copyright (c) 2026 MCU-Debug Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Terminal style attributes for emitted lines.

use colored::{Color, ColoredString, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,
    Bold,
    Italic,
    Underline,
    BlinkSlow,
    BlinkRapid,
}

/// Style used when the configuration does not name one.
pub const DEFAULT_STYLE: &[Style] = &[Style::Green];

impl Style {
    fn apply(self, s: ColoredString) -> ColoredString {
        match self {
            Style::Black => s.color(Color::Black),
            Style::Red => s.color(Color::Red),
            Style::Green => s.color(Color::Green),
            Style::Yellow => s.color(Color::Yellow),
            Style::Blue => s.color(Color::Blue),
            Style::Magenta => s.color(Color::Magenta),
            Style::Cyan => s.color(Color::Cyan),
            Style::White => s.color(Color::White),
            Style::BgBlack => s.on_color(Color::Black),
            Style::BgRed => s.on_color(Color::Red),
            Style::BgGreen => s.on_color(Color::Green),
            Style::BgYellow => s.on_color(Color::Yellow),
            Style::BgBlue => s.on_color(Color::Blue),
            Style::BgMagenta => s.on_color(Color::Magenta),
            Style::BgCyan => s.on_color(Color::Cyan),
            Style::BgWhite => s.on_color(Color::White),
            Style::Bold => s.bold(),
            Style::Italic => s.italic(),
            Style::Underline => s.underline(),
            // Terminals only get one blink attribute through `colored`.
            Style::BlinkSlow | Style::BlinkRapid => s.blink(),
        }
    }
}

/// Apply `styles` in order to `text`. Whether escape codes are produced follows `colored`'s
/// global policy (`NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`, and whether stdout is a terminal,
/// regardless of where the line is written).
pub fn paint(text: &str, styles: &[Style]) -> ColoredString {
    styles
        .iter()
        .fold(ColoredString::from(text), |s, style| style.apply(s))
}
