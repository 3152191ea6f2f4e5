use crate::error::{Result, SantaError};
use crate::token::Token;
use serde::{Deserialize, Serialize};

/// One edge of the gift circle: `giver` gives a present to `receiver`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub giver: Token,
    pub receiver: Token,
}

/// Build the gift circle over an already-shuffled token list.
///
/// Each token gives to the next one and the last wraps around to the first,
/// so for any `n >= 2` distinct tokens the result is always a single cycle
/// with no self-assignment: everyone gives exactly once and receives exactly
/// once, and whoever gives to you is never the person you give to (for n > 2).
pub fn build_circle(tokens: &[Token]) -> Result<Vec<Assignment>> {
    if tokens.len() < 2 {
        return Err(SantaError::TooFewParticipants(tokens.len()));
    }
    Ok(tokens
        .iter()
        .enumerate()
        .map(|(i, giver)| Assignment {
            giver: giver.clone(),
            receiver: tokens[(i + 1) % tokens.len()].clone(),
        })
        .collect())
}
