//! Actors grouped into display rows. Rows only affect layout; the roster's
//! flattened order is the natural order used by the turn-order resolver.

use crate::actor::{Actor, ActorId};
use crate::error::{Error, Result};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Row {
    pub actors: Vec<Actor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    rows: Vec<Row>,
    next_id: u32,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// A roster always holds at least one row.
    pub fn new() -> Self {
        Self {
            rows: vec![Row::default()],
            next_id: 0,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Every actor, rows top to bottom, left to right within a row.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.rows.iter().flat_map(|row| row.actors.iter())
    }

    pub fn actors_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        self.rows.iter_mut().flat_map(|row| row.actors.iter_mut())
    }

    pub fn actor_count(&self) -> usize {
        self.rows.iter().map(|row| row.actors.len()).sum()
    }

    pub fn actor(&self, id: ActorId) -> Result<&Actor> {
        self.actors()
            .find(|actor| actor.id == id)
            .ok_or(Error::NoSuchActor(id))
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Result<&mut Actor> {
        self.actors_mut()
            .find(|actor| actor.id == id)
            .ok_or(Error::NoSuchActor(id))
    }

    /// (row, index within row) of an actor.
    pub fn position(&self, id: ActorId) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(row_index, row)| {
            row.actors
                .iter()
                .position(|actor| actor.id == id)
                .map(|index| (row_index, index))
        })
    }

    /// Appends an empty row and returns its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(Row::default());
        self.rows.len() - 1
    }

    pub fn add_actor(&mut self, row: usize, name: impl Into<String>) -> Result<ActorId> {
        let id = ActorId(self.next_id);
        let row_count = self.rows.len();
        let target = self.rows.get_mut(row).ok_or_else(|| {
            Error::InvalidRosterState(format!("row {row} does not exist ({row_count} rows)"))
        })?;
        target.actors.push(Actor::new(id, name));
        self.next_id += 1;
        Ok(id)
    }

    /// Detaches an actor. The caller is responsible for its cards.
    pub fn remove_actor(&mut self, id: ActorId) -> Result<Actor> {
        let (row, index) = self.position(id).ok_or(Error::NoSuchActor(id))?;
        Ok(self.rows[row].actors.remove(index))
    }

    /// Detaches a row and its actors. Removing the last row leaves a fresh
    /// empty one behind. The caller is responsible for the actors' cards.
    pub fn remove_row(&mut self, row: usize) -> Result<Row> {
        if row >= self.rows.len() {
            return Err(Error::InvalidRosterState(format!(
                "row {row} does not exist ({} rows)",
                self.rows.len()
            )));
        }
        let removed = self.rows.remove(row);
        if self.rows.is_empty() {
            self.rows.push(Row::default());
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_roster_has_one_empty_row() {
        let roster = Roster::new();
        assert_eq!(roster.rows().len(), 1);
        assert_eq!(roster.actor_count(), 0);
    }

    #[test]
    fn test_actor_order_spans_rows() {
        let mut roster = Roster::new();
        let second_row = roster.add_row();
        let c = roster.add_actor(second_row, "C").unwrap();
        let a = roster.add_actor(0, "A").unwrap();
        let b = roster.add_actor(0, "B").unwrap();

        let order: Vec<_> = roster.actors().map(|actor| actor.id).collect();
        assert_eq!(order, vec![a, b, c]);
        assert_eq!(roster.position(c), Some((1, 0)));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut roster = Roster::new();
        let a = roster.add_actor(0, "A").unwrap();
        roster.remove_actor(a).unwrap();
        let b = roster.add_actor(0, "A").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_add_actor_to_missing_row() {
        let mut roster = Roster::new();
        assert!(matches!(
            roster.add_actor(3, "A"),
            Err(Error::InvalidRosterState(_))
        ));
        assert_eq!(roster.actor_count(), 0);
    }

    #[test]
    fn test_remove_missing_actor() {
        let mut roster = Roster::new();
        assert_eq!(
            roster.remove_actor(ActorId(4)),
            Err(Error::NoSuchActor(ActorId(4)))
        );
    }

    #[test]
    fn test_removing_last_row_recreates_empty_row() {
        let mut roster = Roster::new();
        roster.add_actor(0, "A").unwrap();

        let removed = roster.remove_row(0).unwrap();
        assert_eq!(removed.actors.len(), 1);
        assert_eq!(roster.rows().len(), 1);
        assert!(roster.rows()[0].actors.is_empty());
    }

    #[test]
    fn test_remove_missing_row() {
        let mut roster = Roster::new();
        assert!(matches!(
            roster.remove_row(1),
            Err(Error::InvalidRosterState(_))
        ));
        assert_eq!(roster.rows().len(), 1);
    }
}
