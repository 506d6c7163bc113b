//! Inbound radio line framing.
//!
//! Frame format: `+IPD[,<id>]:<index>,<itemCount>`, for example
//! `+IPD,52:3,2`. The optional link id is ignored.

use crate::error::FrameError;

use super::Command;

/// Prefix the radio module puts in front of received data.
pub const FRAME_PREFIX: &str = "+IPD";

/// Parse one received line into a [`Command`].
///
/// Surrounding whitespace (including a trailing CR/LF) is ignored.
///
/// # Errors
///
/// - `FrameError::MissingPrefix` if the line does not start with `+IPD`
/// - `FrameError::MissingColon` if there is no `:` after the prefix
/// - `FrameError::MissingComma` if the payload is a bare value
/// - `FrameError::InvalidNumber` if either field is not a signed integer
pub fn parse_frame(line: &str) -> Result<Command, FrameError> {
    let line = line.trim();
    let rest = line
        .strip_prefix(FRAME_PREFIX)
        .ok_or(FrameError::MissingPrefix)?;

    let (header, payload) = rest.split_once(':').ok_or(FrameError::MissingColon)?;
    if !header.is_empty() && !header.starts_with(',') {
        return Err(FrameError::MissingPrefix);
    }

    let (index, item_count) = payload.split_once(',').ok_or(FrameError::MissingComma)?;

    Ok(Command {
        index: parse_field(index)?,
        item_count: parse_field(item_count)?,
    })
}

fn parse_field(field: &str) -> Result<i32, FrameError> {
    field
        .trim()
        .parse::<i32>()
        .map_err(|_| FrameError::InvalidNumber)
}
