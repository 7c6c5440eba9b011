//! Draws the resolved turn order.

use super::Draw;
use crate::session::Session;
use crate::turn_order::Tier;
use termion::color;

impl Draw {
    const TURN_ORDER_COL: usize = 60;
    const SPARE_CARDS: usize = 3;

    pub(super) fn display_turn_order(&mut self, session: &Session) {
        let col = Self::TURN_ORDER_COL;
        let mut row = Self::ROSTER_INIT_ROW;
        self.set_colors(color::LightYellow, Self::default_bg());
        self.draw_text(col, row, "Turn order");

        let mut position = 0;
        for entry in session.turn_order() {
            row += 1;
            let Ok(actor) = session.actor(entry.actor) else {
                continue;
            };
            let card = entry.card.and_then(|id| session.card(id).ok());

            match (entry.tier, card) {
                (Tier::Revealed, Some(card)) => {
                    position += 1;
                    self.set_colors(Self::default_fg(), Self::default_bg());
                    self.draw_text(col, row, &format!("{position:>2}."));
                    self.display_card(card, false, col + 4, row);

                    // other face-up cards the actor could switch to, best first
                    let spare_col = col + 9 + Self::NAME_WIDTH;
                    self.set_colors(color::LightBlack, Self::default_bg());
                    let spares = actor
                        .hand(session.deck())
                        .cards_best_to_worst()
                        .into_iter()
                        .filter(|spare| spare.face_up && spare.id != card.id)
                        .take(Self::SPARE_CARDS);
                    for (index, spare) in spares.enumerate() {
                        let spare_col = spare_col + index * (Self::CARD_WIDTH + 1);
                        self.draw_text(spare_col, row, &spare.card.to_string());
                    }
                    self.set_colors(Self::actor_color(actor.color), Self::default_bg());
                }
                (Tier::Hidden, _) => {
                    self.set_colors(color::LightGreen, color::LightBlack);
                    self.draw_text(col + 4, row, "?? ");
                    self.set_colors(Self::actor_color(actor.color), Self::default_bg());
                }
                _ => {
                    self.set_colors(color::LightBlack, Self::default_bg());
                    self.draw_text(col + 4, row, " - ");
                }
            }
            let name: String = actor.name.chars().take(Self::NAME_WIDTH).collect();
            self.draw_text(col + 8, row, &name);
        }
    }
}
