//! Waypoint lists from comma-separated decimals.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::path::Waypoint;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("expected a multiple of 3 components, got {count}")]
    ComponentCount { count: usize },
    #[error("component {index} is not a number: {token:?}")]
    InvalidNumber {
        index: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Parse `"x,y,z,x,y,z,..."` into waypoints with zero roll.
///
/// Tokens are trimmed. Either the whole list parses or nothing is returned.
///
/// ```
/// use smoothpath::{parse_waypoints, Waypoint};
///
/// let w = parse_waypoints("1.0,2.0,3.0,4.0,5.0,6.0").unwrap();
/// assert_eq!(w, vec![Waypoint::from_xyz(1.0, 2.0, 3.0), Waypoint::from_xyz(4.0, 5.0, 6.0)]);
/// assert!(parse_waypoints("1.0,2.0").is_err());
/// ```
pub fn parse_waypoints(input: &str) -> Result<Vec<Waypoint>, ParseError> {
    let tokens: Vec<&str> = input.split(',').map(str::trim).collect();
    if tokens.len() % 3 != 0 {
        return Err(ParseError::ComponentCount {
            count: tokens.len(),
        });
    }
    let values = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            token.parse::<f64>().map_err(|source| ParseError::InvalidNumber {
                index,
                token: (*token).to_string(),
                source,
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;
    Ok(values
        .chunks_exact(3)
        .map(|c| Waypoint::from_xyz(c[0], c[1], c[2]))
        .collect())
}
