//! Draws the rows of actors and their hands.

use super::Draw;
use crate::actor::ActorColor;
use crate::selection::{Cursor, Slot};
use crate::session::Session;
use termion::color;

impl Draw {
    pub(super) const ROSTER_INIT_ROW: usize = 4;
    const ROSTER_COL: usize = 2;
    pub(super) const NAME_WIDTH: usize = 14;
    const HAND_COL: usize = Self::ROSTER_COL + Self::NAME_WIDTH + 3;
    const HAND_COL_STEP: usize = 5;

    pub(super) fn actor_color(color: ActorColor) -> color::AnsiValue {
        match color {
            ActorColor::White => color::AnsiValue(15),
            ActorColor::Red => color::AnsiValue(9),
            ActorColor::Green => color::AnsiValue(10),
            ActorColor::Yellow => color::AnsiValue(11),
            ActorColor::Blue => color::AnsiValue(12),
            ActorColor::Magenta => color::AnsiValue(13),
            ActorColor::Cyan => color::AnsiValue(14),
        }
    }

    pub(super) fn display_roster(&mut self, session: &Session, cursor: Cursor) {
        for (line, slot) in Slot::all(session).into_iter().enumerate() {
            let row = Self::ROSTER_INIT_ROW + line;
            let under_cursor = cursor.line == line;

            self.set_colors(color::LightGreen, Self::default_bg());
            self.draw_text(Self::ROSTER_COL - 1, row, if under_cursor { "▸" } else { " " });

            match slot {
                Slot::Row(index) => {
                    self.set_colors(color::LightBlack, Self::default_bg());
                    self.draw_text(
                        Self::ROSTER_COL,
                        row,
                        &format!("── Row {} ──", index + 1),
                    );
                }
                Slot::Actor { actor, .. } => {
                    let Ok(actor) = session.actor(actor) else {
                        continue;
                    };
                    let name: String = actor.name.chars().take(Self::NAME_WIDTH).collect();
                    self.set_colors(Self::actor_color(actor.color), Self::default_bg());
                    self.draw_text(Self::ROSTER_COL + 1, row, &name);

                    let selected = session.selected_card(actor.id).ok().flatten();
                    let hand = actor.hand(session.deck());
                    let mut col = Self::HAND_COL;
                    for (index, card) in hand.cards_top_to_bottom().into_iter().enumerate() {
                        self.display_card(card, selected == Some(card.id), col, row);
                        if under_cursor && cursor.card == index {
                            self.set_colors(Self::default_fg(), color::LightGreen);
                            self.display_card_cursor(col, row);
                        }
                        col += Self::HAND_COL_STEP;
                    }
                }
            }
        }
    }
}
