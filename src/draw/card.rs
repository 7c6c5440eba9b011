//! Draws a card.

use super::Draw;
use crate::deck::TableCard;

impl Draw {
    pub(super) const CARD_WIDTH: usize = 3;

    /// `selected` marks the card standing for its actor's initiative.
    pub(super) fn display_card(
        &mut self,
        card: &TableCard,
        selected: bool,
        col: usize,
        row: usize,
    ) {
        use termion::color::*;
        let text = if card.face_up {
            match (card.card.is_joker(), card.card.suit.is_red(), selected) {
                (true, _, true) => self.set_colors(Magenta, LightYellow),
                (true, _, false) => self.set_colors(Magenta, White),
                (false, true, true) => self.set_colors(Red, LightYellow),
                (false, true, false) => self.set_colors(Red, White),
                (false, false, true) => self.set_colors(Black, LightYellow),
                (false, false, false) => self.set_colors(Black, White),
            }
            card.card.to_string()
        } else if self.debug_mode {
            if card.card.suit.is_red() {
                self.set_colors(LightRed, LightBlack);
            } else {
                self.set_colors(Black, LightBlack);
            }
            card.card.to_string()
        } else if selected {
            self.set_colors(LightGreen, Yellow);
            "st".to_string()
        } else {
            self.set_colors(LightGreen, LightBlack);
            "st".to_string()
        };

        self.draw_text(col, row, &format!("{text:<width$}", width = Self::CARD_WIDTH));
    }

    pub(super) fn display_card_cursor(&mut self, col: usize, row: usize) {
        self.draw_text(col - 1, row, "[");
        self.draw_text(col + Self::CARD_WIDTH, row, "]");
    }
}
