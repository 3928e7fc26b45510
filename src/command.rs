//! Command grammar for the interactive loop.
//!
//! A line of input is split on commas, checked for exact arity, and turned
//! into a [`Command`] variant. Parsing failures are their own error type,
//! separate from anything that can go wrong while executing a command; the
//! loop reports both the same way but they never mix.
//!
//! Delete and update take a *display position* — the 1-based row number of
//! the listing last shown — not a durable storage id. The session resolves
//! the position; the parser only guarantees it is a positive integer.
use thiserror::Error;

use crate::query::{Direction, SortField};

/// Grammar summary printed by the `h` command.
pub const HELP: &str = "\
q,<s|c|t>,<h|l> - query sort (s=stars, c=cost, t=time, h=higher to lower, l=lower to higher)
i,<name>,<stars>,<cost>,<time> - insert
d,<position> - delete
u,<position>,<stars>,<cost>,<time> - update
h - help
x - exit";

/// List of possible errors the command parser can throw.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unrecognized command '{0}'")]
    Unrecognized(String),

    #[error("invalid '{command}' command, {reason}")]
    InvalidArguments { command: String, reason: String },

    #[error("no command provided")]
    Empty,
}

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the grammar; the listing is not redrawn afterwards.
    Help,
    /// Change the sort selection used by the next fetch.
    Query(SortField, Direction),
    /// Persist a new meal.
    Insert {
        name: String,
        prep_time: i64,
        cost: i64,
        stars: i64,
    },
    /// Remove the meal at a display position.
    Delete { position: usize },
    /// Overwrite the mutable fields of the meal at a display position.
    Update {
        position: usize,
        prep_time: i64,
        cost: i64,
        stars: i64,
    },
    /// End the session.
    Exit,
}

impl TryFrom<&str> for Command {
    type Error = CommandError;

    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let params: Vec<&str> = line.split(',').collect();

        // On the wire, insert and update carry stars, cost, time in that
        // order; the storage signature is (name, prep_time, cost, stars).
        match (params[0], params.len()) {
            ("h", 1) => Ok(Self::Help),
            ("x", 1) => Ok(Self::Exit),
            ("q", 3) => Ok(Self::Query(
                SortField::from_code(params[1]),
                Direction::from_code(params[2]),
            )),
            ("i", 5) => Ok(Self::Insert {
                name: params[1].to_string(),
                stars: int_arg("i", params[2])?,
                cost: int_arg("i", params[3])?,
                prep_time: int_arg("i", params[4])?,
            }),
            ("d", 2) => Ok(Self::Delete {
                position: position_arg("d", params[1])?,
            }),
            ("u", 5) => Ok(Self::Update {
                position: position_arg("u", params[1])?,
                stars: int_arg("u", params[2])?,
                cost: int_arg("u", params[3])?,
                prep_time: int_arg("u", params[4])?,
            }),
            ("", 1) => Err(CommandError::Empty),
            _ => Err(CommandError::Unrecognized(line.to_string())),
        }
    }
}

fn int_arg(command: &str, raw: &str) -> Result<i64, CommandError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidArguments {
            command: command.to_string(),
            reason: format!("'{raw}' is not an integer"),
        })
}

fn position_arg(command: &str, raw: &str) -> Result<usize, CommandError> {
    let position = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| CommandError::InvalidArguments {
            command: command.to_string(),
            reason: format!("'{raw}' is not a valid position"),
        })?;
    if position == 0 {
        return Err(CommandError::InvalidArguments {
            command: command.to_string(),
            reason: "positions start at 1".to_string(),
        });
    }
    Ok(position)
}
