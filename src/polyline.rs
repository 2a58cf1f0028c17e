//! Polyline representation for route geometries.
//!
//! Geometry is kept as decoded [`Coordinate`]s inside the planner. The
//! compact "encoded polyline algorithm format" (precision 5) is produced at
//! the boundary, when a leg or the whole trip is handed to the front end.

use geo_types::Coord;
use serde::{Deserialize, Serialize};

use crate::error::PolylineError;
use crate::model::Coordinate;

const PRECISION: u32 = 5;

/// Printable range of encoded characters.
const FIRST_CHAR: u8 = 63;
const LAST_CHAR: u8 = 126;
/// Characters at or above this carry a continuation bit.
const CONTINUATION_CHAR: u8 = FIRST_CHAR + 0x20;
/// A precision-5 delta between two valid coordinates fits in 6 chunks; 7
/// leaves headroom while keeping running sums far from `i64` overflow.
const MAX_CHUNKS_PER_VALUE: usize = 7;

/// A route geometry as decoded coordinates, in route order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Parses an encoded polyline string.
    pub fn decode(encoded: &str) -> Result<Self, PolylineError> {
        check_value_lengths(encoded)?;
        let line = ::polyline::decode_polyline(encoded, PRECISION)
            .map_err(|err| PolylineError::Decode(err.to_string()))?;

        Ok(Self {
            points: line
                .into_iter()
                .map(|coord| Coordinate::new(coord.y, coord.x))
                .collect(),
        })
    }

    /// Fails on points outside the valid latitude/longitude range.
    pub fn encode(&self) -> Result<String, PolylineError> {
        let coords = self.points.iter().map(|point| Coord {
            x: point.lng,
            y: point.lat,
        });
        ::polyline::encode_coordinates(coords, PRECISION)
            .map_err(|err| PolylineError::Encode(err.to_string()))
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }
}

/// Shorthand for encoding a borrowed coordinate slice.
pub fn encode(points: &[Coordinate]) -> Result<String, PolylineError> {
    Polyline::new(points.to_vec()).encode()
}

/// Rejects foreign characters and overlong values before decoding.
fn check_value_lengths(encoded: &str) -> Result<(), PolylineError> {
    let mut chunks = 0;
    for (index, byte) in encoded.bytes().enumerate() {
        if !(FIRST_CHAR..=LAST_CHAR).contains(&byte) {
            return Err(PolylineError::InvalidCharacter {
                index,
                ch: char::from(byte),
            });
        }
        chunks += 1;
        if chunks > MAX_CHUNKS_PER_VALUE {
            return Err(PolylineError::Overflow {
                index: index + 1 - chunks,
            });
        }
        if byte < CONTINUATION_CHAR {
            chunks = 0;
        }
    }
    Ok(())
}
