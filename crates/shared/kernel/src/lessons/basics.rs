use crate::error::TourError;
use std::io::Write;
use tour_domain::CompassPoint;

pub(super) fn run<W: Write>(out: &mut W) -> Result<(), TourError> {
    let mut direction_to_head = CompassPoint::West;
    writeln!(out, "Heading {direction_to_head}")?;

    // Same binding, different variant; the type never changes.
    direction_to_head = CompassPoint::East;
    writeln!(out, "Move to {direction_to_head}")?;

    Ok(())
}
