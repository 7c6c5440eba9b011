//! Common drawing code.

use super::Draw;
use std::io::Write;
use termion::{clear, color, cursor};

impl Draw {
    pub(super) fn clear_screen(&mut self) {
        writeln!(self.stdout, "{}", clear::All).unwrap();
    }

    pub(super) fn default_bg() -> impl color::Color {
        color::Black
    }
    pub(super) fn default_fg() -> impl color::Color {
        color::LightWhite
    }

    pub(super) fn set_colors(
        &mut self,
        foreground: impl color::Color,
        background: impl color::Color,
    ) {
        write!(
            self.stdout,
            "{}{}",
            color::Fg(foreground),
            color::Bg(background),
        )
        .unwrap();
    }

    pub(super) fn draw_box(&mut self, col1: usize, row1: usize, col2: usize, row2: usize) {
        use std::cmp::{max, min};
        for col in min(col1, col2)..=max(col1, col2) {
            for row in min(row1, row2)..=max(row1, row2) {
                self.draw_text(col, row, "█");
            }
        }
    }

    pub fn draw_text(&mut self, col: usize, row: usize, text: &str) {
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        let row = u16::try_from(row).unwrap_or(u16::MAX);

        write!(self.stdout, "{}{}", cursor::Goto(col, row), text).unwrap();
    }

    pub fn set_up_terminal(&mut self) {
        write!(
            self.stdout,
            "{}{}{}{}{}",
            color::Fg(Self::default_fg()),
            color::Bg(Self::default_bg()),
            clear::All,
            cursor::Goto(1, 1),
            cursor::Hide,
        )
        .unwrap();
        self.flush();
    }

    pub fn restore_terminal(&mut self) {
        write!(
            self.stdout,
            "{}{}{}{}{}",
            color::Fg(color::Reset),
            color::Bg(color::Reset),
            clear::All,
            cursor::Goto(1, 1),
            cursor::Show,
        )
        .unwrap();
        self.flush();
    }

    /// Box over the roster area, sized to fit `width` x `height` of text.
    fn text_box_corners(width: usize, height: usize) -> (usize, usize, usize, usize) {
        const TOP_LEFT: (usize, usize) = (6, 3);
        (
            TOP_LEFT.0,
            TOP_LEFT.1,
            TOP_LEFT.0 + width + 3,
            TOP_LEFT.1 + height + 1,
        )
    }

    pub(super) fn draw_text_box(&mut self, lines: &[&str]) {
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let (col1, row1, col2, row2) = Self::text_box_corners(width, lines.len());

        self.set_colors(color::LightBlue, Self::default_bg());
        self.draw_box(col1, row1, col2, row2);
        self.set_colors(color::White, Self::default_bg());
        self.draw_box(col1 + 1, row1 + 1, col2 - 1, row2 - 1);

        self.set_colors(color::LightBlack, color::White);
        let (col, mut row) = (col1 + 2, row1 + 1);
        for line in lines {
            self.draw_text(col, row, line);
            row += 1;
        }
    }
}
