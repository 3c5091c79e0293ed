//! Shared helpers for command handlers.

pub mod parsing;
pub mod prompt;

pub use parsing::{
    parse_action, parse_datetime, parse_duration, parse_emotion, parse_location,
    parse_sensation_pair, parse_urge_type,
};
