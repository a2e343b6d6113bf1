use crate::error::TourError;
use std::io::Write;
use tour_domain::{Planet, RawValue};
use tracing::debug;

const POSITIONS: [i32; 2] = [7, 11];

pub(super) fn run<W: Write>(out: &mut W) -> Result<(), TourError> {
    for position in POSITIONS {
        let found = Planet::from_raw_value(position);
        debug!(position, ?found, "Planet lookup");

        match found {
            Some(planet) => writeln!(out, "Planet at position {position}: {planet}")?,
            None => writeln!(out, "No planet at position {position}")?,
        }
    }

    Ok(())
}
