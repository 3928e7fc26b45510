//! Session state for the interactive loop.
//!
//! A [`Session`] owns everything one run of the loop needs between
//! commands: the current sort selection, the redisplay flag, and an
//! immutable snapshot of the listing last shown to the user. Delete and
//! update resolve display positions against that snapshot, never against a
//! freshly re-sorted fetch, so a position always refers to the row the
//! user is looking at.
use log::debug;
use thiserror::Error;

use crate::{
    command::Command,
    query::{Direction, SortField},
    storage::{Meal, MealStore, StorageError},
};

/// List of possible errors while executing a command.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Display position outside the listing last shown.
    #[error("no row at position {position} (listing has {rows} rows)")]
    BadPosition { position: usize, rows: usize },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Whether the loop keeps running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session {
    sort_field: SortField,
    direction: Direction,
    snapshot: Vec<Meal>,
    redisplay: bool,
}

impl Default for Session {
    fn default() -> Self {
        // First screen: best-rated meals on top.
        Self {
            sort_field: SortField::Stars,
            direction: Direction::HigherToLower,
            snapshot: Vec::new(),
            redisplay: true,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one redisplay decision. A suppressed cycle re-arms the
    /// flag, so suppression only ever lasts a single iteration.
    pub fn take_redisplay(&mut self) -> bool {
        if self.redisplay {
            true
        } else {
            self.redisplay = true;
            false
        }
    }

    /// Fetches the listing for the current sort selection and replaces the
    /// position-resolution snapshot.
    pub fn refresh(&mut self, store: &MealStore) -> Result<&[Meal], SessionError> {
        self.snapshot = store.fetch_all(self.sort_field, self.direction)?;
        Ok(&self.snapshot)
    }

    /// Status line describing the current sort selection.
    pub fn describe_query(&self) -> String {
        format!(
            "sort by={} , direction={}",
            self.sort_field.label(),
            self.direction.label()
        )
    }

    /// Row at a 1-based display position in the snapshot.
    fn resolve(&self, position: usize) -> Result<&Meal, SessionError> {
        position
            .checked_sub(1)
            .and_then(|index| self.snapshot.get(index))
            .ok_or(SessionError::BadPosition {
                position,
                rows: self.snapshot.len(),
            })
    }

    /// Applies one parsed command against the store.
    ///
    /// Position resolution happens here, against the snapshot taken by the
    /// last [`refresh`](Self::refresh); a sort change between a redisplay
    /// and a delete does not shift which row a position names.
    pub fn execute(&mut self, command: Command, store: &MealStore) -> Result<Flow, SessionError> {
        match command {
            Command::Help => {
                self.redisplay = false;
                Ok(Flow::Continue)
            }
            Command::Query(field, direction) => {
                debug!("sort selection changed to {field:?} {direction:?}");
                self.sort_field = field;
                self.direction = direction;
                Ok(Flow::Continue)
            }
            Command::Insert {
                name,
                prep_time,
                cost,
                stars,
            } => {
                store.insert(&name, prep_time, cost, stars)?;
                Ok(Flow::Continue)
            }
            Command::Delete { position } => {
                let id = self.resolve(position)?.id;
                store.delete(id)?;
                Ok(Flow::Continue)
            }
            Command::Update {
                position,
                prep_time,
                cost,
                stars,
            } => {
                let id = self.resolve(position)?.id;
                store.update(id, prep_time, cost, stars)?;
                Ok(Flow::Continue)
            }
            Command::Exit => Ok(Flow::Exit),
        }
    }
}
