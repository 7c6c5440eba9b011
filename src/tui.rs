use crate::actor::ActorId;
use crate::draw::Draw;
use crate::error::Result;
use crate::selection::Cursor;
use crate::session::{Interaction, Session};
use log::warn;
use std::io::stdin;
use termion::event::Key;
use termion::input::TermRead;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Mode {
    Normal,
    Help,
    Rename {
        actor: ActorId,
        buffer: String,
    },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Maps keys to session commands. Holds no terminal, so it can be driven
/// directly in tests.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Controller {
    pub cursor: Cursor,
    pub mode: Mode,
    pub status: String,
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            cursor: Cursor::default(),
            mode: Mode::Normal,
            status: "Press d to deal a round".to_string(),
        }
    }
}

impl Controller {
    pub fn handle_key(&mut self, key: Key, session: &mut Session) -> Flow {
        let flow = match self.mode.clone() {
            Mode::Normal => self.handle_normal_key(key, session),
            Mode::Help => {
                self.mode = Mode::Normal;
                Flow::Continue
            }
            Mode::Rename { actor, buffer } => {
                self.handle_rename_key(key, actor, buffer, session);
                Flow::Continue
            }
        };
        self.cursor.apply_rules(session);
        flow
    }

    fn handle_normal_key(&mut self, key: Key, session: &mut Session) -> Flow {
        let actor = self.cursor.actor(session);
        let card = self.cursor.card(session);
        match key {
            Key::Esc | Key::Ctrl('c') => return Flow::Quit,
            Key::Up => self.cursor.move_up(),
            Key::Down => self.cursor.move_down(),
            Key::Left => self.cursor.move_left(),
            Key::Right => self.cursor.move_right(),
            Key::Char('h') => self.mode = Mode::Help,
            Key::Char(' ') => match (actor, card) {
                (Some(actor), Some(card)) => {
                    let result = session.select_card(actor, card).map(|interaction| {
                        match interaction {
                            Interaction::Revealed => "Revealed card",
                            Interaction::Selected => "Selected card for initiative",
                        }
                        .to_string()
                    });
                    self.report(result);
                }
                _ => self.status = "No card under the cursor".to_string(),
            },
            Key::Char('f') => match card {
                Some(card) => {
                    let result = session.flip_face_up(card).map(|flipped| {
                        if flipped { "Flipped" } else { "Already face-up" }.to_string()
                    });
                    self.report(result);
                }
                None => self.status = "No card under the cursor".to_string(),
            },
            Key::Char('d') => {
                let result = session
                    .deal_to_all()
                    .map(|()| format!("Dealt {} cards", session.actor_count()));
                self.report(result);
            }
            Key::Char('+') => match actor {
                Some(actor) => {
                    let result = session.draw_one(actor).map(|_| "Drew a card".to_string());
                    self.report(result);
                }
                None => self.status = "Move the cursor onto an actor to draw".to_string(),
            },
            Key::Char('r') => {
                if session.can_reveal_all() {
                    let result = session
                        .reveal_all()
                        .map(|flipped| format!("Revealed {flipped} cards"));
                    self.report(result);
                } else {
                    self.status = "Nobody is holding a card".to_string();
                }
            }
            Key::Char('x') => match card {
                Some(card) => {
                    let result = session.discard(card).map(|_| "Discarded".to_string());
                    self.report(result);
                }
                None => self.status = "No card under the cursor".to_string(),
            },
            Key::Char('s') => {
                session.collect_and_shuffle();
                self.status = "Shuffled all cards into the deck".to_string();
            }
            Key::Char('a') => {
                let name = format!("Actor {}", session.actor_count() + 1);
                let row = self.cursor.row(session);
                let result = session.add_actor(row, name.as_str());
                match result {
                    Ok(actor) => {
                        self.cursor.go_to_actor(actor, session);
                        self.mode = Mode::Rename {
                            actor,
                            buffer: name,
                        };
                        self.status = "Type a name, Enter to keep it".to_string();
                    }
                    Err(e) => self.report(Err(e)),
                }
            }
            Key::Delete | Key::Char('-') => match actor {
                Some(actor) => {
                    let result = session
                        .remove_actor(actor)
                        .map(|removed| format!("Removed {}", removed.name));
                    self.report(result);
                }
                None => self.status = "Move the cursor onto an actor to remove".to_string(),
            },
            Key::Char('n') => {
                if let Some(actor) = actor.and_then(|id| session.actor(id).ok()) {
                    self.mode = Mode::Rename {
                        actor: actor.id,
                        buffer: actor.name.clone(),
                    };
                    self.status = "Type a name, Enter to keep it".to_string();
                }
            }
            Key::Char('c') => {
                if let Some(actor) = actor {
                    let result = session.cycle_actor_color(actor).map(|()| String::new());
                    self.report(result);
                }
            }
            Key::Char('R') => {
                let row = session.add_row();
                self.status = format!("Added row {}", row + 1);
            }
            Key::Char('W') => {
                let row = self.cursor.row(session);
                let result = session
                    .remove_row(row)
                    .map(|()| format!("Removed row {}", row + 1));
                self.report(result);
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_rename_key(
        &mut self,
        key: Key,
        actor: ActorId,
        mut buffer: String,
        session: &mut Session,
    ) {
        match key {
            Key::Char('\n') => {
                let result = session
                    .rename_actor(actor, buffer.trim())
                    .map(|()| String::new());
                self.report(result);
                self.mode = Mode::Normal;
                return;
            }
            Key::Esc => {
                self.status.clear();
                self.mode = Mode::Normal;
                return;
            }
            Key::Backspace => {
                buffer.pop();
            }
            Key::Char(c) if !c.is_control() => buffer.push(c),
            _ => {}
        }
        self.mode = Mode::Rename { actor, buffer };
    }

    fn report(&mut self, result: Result<String>) {
        match result {
            Ok(message) => self.status = message,
            Err(e) => {
                warn!("rejected: {e}");
                self.status = e.to_string();
            }
        }
    }
}

pub fn run(session: &mut Session, debug_mode: bool) -> std::io::Result<()> {
    let mut draw = Draw::new(debug_mode)?;
    let mut controller = Controller::default();

    draw.set_up_terminal();
    draw.display(session, &controller);

    for key in stdin().keys() {
        if controller.handle_key(key?, session) == Flow::Quit {
            break;
        }
        draw.display(session, &controller);
    }

    draw.restore_terminal();
    Ok(())
}
