//! Draws the deck and discard piles.

use super::Draw;
use crate::session::Session;
use crate::stack::StackId;
use termion::color;

impl Draw {
    const PILES_ROW: usize = 2;
    const DECK_COL: usize = 2;
    const DISCARD_COL: usize = 18;

    pub(super) fn display_piles(&mut self, session: &Session) {
        use color::*;
        let row = Self::PILES_ROW;

        self.set_colors(Self::default_fg(), Self::default_bg());
        self.draw_text(Self::DECK_COL, row, "Deck");
        let deck_col = Self::DECK_COL + 5;
        if let Some(top) = session.stack(StackId::Deck).top_card() {
            self.display_card(top, false, deck_col, row);
        } else {
            self.set_colors(Green, LightBlack);
            self.draw_text(deck_col, row, " O ");
        }
        self.set_colors(LightBlack, Self::default_bg());
        self.draw_text(deck_col + 4, row, &session.deck_count().to_string());

        self.set_colors(Self::default_fg(), Self::default_bg());
        self.draw_text(Self::DISCARD_COL, row, "Discard");
        let discard_col = Self::DISCARD_COL + 8;
        if let Some(top) = session.stack(StackId::Discard).top_card() {
            self.display_card(top, false, discard_col, row);
        } else {
            self.set_colors(Blue, LightBlack);
            self.draw_text(discard_col, row, " _ ");
        }
        self.set_colors(LightBlack, Self::default_bg());
        self.draw_text(discard_col + 4, row, &session.discard_count().to_string());
    }
}
