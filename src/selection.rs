use crate::actor::ActorId;
use crate::deck::CardId;
use crate::session::Session;
use std::cmp::min;

/// One line of the roster display: a row header or an actor.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Slot {
    Row(usize),
    Actor { row: usize, actor: ActorId },
}

impl Slot {
    pub fn row(self) -> usize {
        match self {
            Self::Row(row) | Self::Actor { row, .. } => row,
        }
    }

    /// Roster lines in display order.
    pub fn all(session: &Session) -> Vec<Slot> {
        let mut slots = vec![];
        for (row, members) in session.roster().rows().iter().enumerate() {
            slots.push(Slot::Row(row));
            for actor in &members.actors {
                slots.push(Slot::Actor {
                    row,
                    actor: actor.id,
                });
            }
        }
        slots
    }
}

/// The roster cursor: a display line plus a card index within that actor's
/// hand, counted from the top card.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Cursor {
    pub line: usize,
    pub card: usize,
}

impl Cursor {
    /// for the Up key
    pub fn move_up(&mut self) {
        self.line = self.line.saturating_sub(1);
        self.card = 0;
    }

    /// for the Down key
    pub fn move_down(&mut self) {
        self.line += 1;
        self.card = 0;
    }

    /// for the Left key
    pub fn move_left(&mut self) {
        self.card = self.card.saturating_sub(1);
    }

    /// for the Right key
    pub fn move_right(&mut self) {
        self.card += 1;
    }

    /// Moves the cursor onto `actor`'s line.
    pub fn go_to_actor(&mut self, actor: ActorId, session: &Session) {
        if let Some(line) = Slot::all(session)
            .iter()
            .position(|slot| matches!(slot, Slot::Actor { actor: a, .. } if *a == actor))
        {
            self.line = line;
            self.card = 0;
        }
    }

    /// Clamp to the current roster after any move or state change.
    pub fn apply_rules(&mut self, session: &Session) {
        let slots = Slot::all(session);
        self.line = min(self.line, slots.len().saturating_sub(1));

        let hand_len = self
            .actor(session)
            .and_then(|actor| session.hand(actor).ok())
            .map_or(0, |hand| hand.len());
        self.card = min(self.card, hand_len.saturating_sub(1));
    }

    pub fn slot(&self, session: &Session) -> Option<Slot> {
        Slot::all(session).get(self.line).copied()
    }

    /// Row of the line under the cursor.
    pub fn row(&self, session: &Session) -> usize {
        self.slot(session).map_or(0, Slot::row)
    }

    pub fn actor(&self, session: &Session) -> Option<ActorId> {
        match self.slot(session)? {
            Slot::Actor { actor, .. } => Some(actor),
            Slot::Row(_) => None,
        }
    }

    pub fn card(&self, session: &Session) -> Option<CardId> {
        let hand = session.hand(self.actor(session)?).ok()?;
        hand.cards_top_to_bottom().get(self.card).map(|card| card.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> (Session, Vec<ActorId>) {
        let mut session = Session::new(StdRng::seed_from_u64(5));
        let a = session.add_actor(0, "A").unwrap();
        let b = session.add_actor(0, "B").unwrap();
        let row = session.add_row();
        let c = session.add_actor(row, "C").unwrap();
        (session, vec![a, b, c])
    }

    #[test]
    fn test_slots() {
        let (session, ids) = session();
        assert_eq!(
            Slot::all(&session),
            vec![
                Slot::Row(0),
                Slot::Actor { row: 0, actor: ids[0] },
                Slot::Actor { row: 0, actor: ids[1] },
                Slot::Row(1),
                Slot::Actor { row: 1, actor: ids[2] },
            ]
        );
    }

    #[test]
    fn test_cursor_walks_lines() {
        let (session, ids) = session();
        let mut cursor = Cursor::default();
        assert_eq!(cursor.actor(&session), None);
        assert_eq!(cursor.row(&session), 0);

        cursor.move_down();
        cursor.apply_rules(&session);
        assert_eq!(cursor.actor(&session), Some(ids[0]));

        for _ in 0..10 {
            cursor.move_down();
            cursor.apply_rules(&session);
        }
        assert_eq!(cursor.line, 4);
        assert_eq!(cursor.actor(&session), Some(ids[2]));
        assert_eq!(cursor.row(&session), 1);

        cursor.move_up();
        cursor.apply_rules(&session);
        assert_eq!(cursor.slot(&session), Some(Slot::Row(1)));
    }

    #[test]
    fn test_cursor_card_is_clamped_to_hand() {
        let (mut session, ids) = session();
        let mut cursor = Cursor::default();
        cursor.go_to_actor(ids[1], &session);
        assert_eq!(cursor.card(&session), None);

        session.draw_one(ids[1]).unwrap();
        session.draw_one(ids[1]).unwrap();
        for _ in 0..5 {
            cursor.move_right();
            cursor.apply_rules(&session);
        }
        assert_eq!(cursor.card, 1);

        let bottom = session.hand(ids[1]).unwrap().cards_bottom_to_top()[0].id;
        assert_eq!(cursor.card(&session), Some(bottom));

        session.discard(bottom).unwrap();
        cursor.apply_rules(&session);
        assert_eq!(cursor.card, 0);
    }

    #[test]
    fn test_cursor_survives_actor_removal() {
        let (mut session, ids) = session();
        let mut cursor = Cursor::default();
        cursor.go_to_actor(ids[2], &session);
        session.remove_actor(ids[2]).unwrap();
        cursor.apply_rules(&session);
        assert_eq!(cursor.slot(&session), Some(Slot::Row(1)));
    }
}
