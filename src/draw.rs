//! Terminal rendering. Reads the session through its query surface only.

mod card;
mod common;
mod deck;
mod roster;
mod turn_order;

use crate::selection::Slot;
use crate::session::Session;
use crate::tui::{Controller, Mode};
use std::cmp::max;
use std::io::{stdout, Stdout, Write};
use termion::color;
use termion::raw::{IntoRawMode, RawTerminal};

pub struct Draw {
    stdout: RawTerminal<Stdout>,
    /// Show face-down cards' identities, dimmed.
    pub debug_mode: bool,
}

impl Draw {
    pub fn new(debug_mode: bool) -> std::io::Result<Self> {
        Ok(Self {
            stdout: stdout().into_raw_mode()?,
            debug_mode,
        })
    }

    pub fn display(&mut self, session: &Session, controller: &Controller) {
        self.clear_screen();
        self.set_colors(Self::default_fg(), Self::default_bg());

        self.display_title();
        self.display_piles(session);
        self.display_roster(session, controller.cursor);
        self.display_turn_order(session);

        let bottom = Self::ROSTER_INIT_ROW
            + max(Slot::all(session).len(), session.actor_count() + 1)
            + 1;
        self.display_commands(session, bottom);
        self.display_status(controller, bottom + 1);

        if controller.mode == Mode::Help {
            self.display_help();
        }

        self.set_colors(Self::default_fg(), Self::default_bg());
        self.flush();
    }

    fn display_title(&mut self) {
        self.set_colors(color::LightYellow, Self::default_bg());
        self.draw_text(1, 1, "CardPal");
        self.set_colors(color::LightBlack, Self::default_bg());
        self.draw_text(40, 1, "h: Help  Esc: Quit");
    }

    /// Round commands, greyed out while they would be rejected.
    fn display_commands(&mut self, session: &Session, row: usize) {
        let commands = [
            ("d: Deal", session.can_deal_to_all() && session.actor_count() > 0),
            ("+: Draw", session.can_draw()),
            ("r: Reveal", session.can_reveal_all()),
            ("s: Shuffle", true),
        ];
        let mut col = 2;
        for (label, enabled) in commands {
            if enabled {
                self.set_colors(color::White, Self::default_bg());
            } else {
                self.set_colors(color::LightBlack, Self::default_bg());
            }
            self.draw_text(col, row, label);
            col += label.chars().count() + 2;
        }
    }

    fn display_status(&mut self, controller: &Controller, row: usize) {
        match &controller.mode {
            Mode::Rename { buffer, .. } => {
                self.set_colors(color::LightYellow, Self::default_bg());
                self.draw_text(2, row, format!("Name: {buffer}_").as_str());
            }
            _ => {
                self.set_colors(color::LightBlack, Self::default_bg());
                self.draw_text(2, row, controller.status.as_str());
            }
        }
    }

    fn display_help(&mut self) {
        self.draw_text_box(&[
            "Controls:",
            "",
            " Arrow keys: Move cursor",
            " Space: Reveal, then select card",
            " d: Deal one card to everyone",
            " +: Draw a card for this actor",
            " r: Reveal all held cards",
            " f: Flip card without selecting",
            " x: Discard card under cursor",
            " s: Shuffle everything into deck",
            " a / Delete: Add / remove actor",
            " n: Rename  c: Change color",
            " R / W: Add / remove row",
            " Esc, Ctrl+c: Quit",
        ]);
    }

    fn flush(&mut self) {
        self.stdout.flush().unwrap();
    }
}
