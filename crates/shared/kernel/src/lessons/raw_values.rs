use crate::error::TourError;
use std::io::Write;
use tour_domain::{AsciiControlCharacter, CompassHeading, IntoEnumIterator, Planet, RawValue};

/// Raw values spelled out on every variant.
pub(super) fn run<W: Write>(out: &mut W) -> Result<(), TourError> {
    for control in AsciiControlCharacter::iter() {
        writeln!(out, "{control} raw value: {:?}", control.raw_value())?;
    }

    Ok(())
}

/// Raw values the derive filled in: counting up, or the variant's own name.
pub(super) fn run_implicit<W: Write>(out: &mut W) -> Result<(), TourError> {
    let earth_order = Planet::Earth.raw_value();
    writeln!(out, "{} raw value: {earth_order}", Planet::Earth)?;

    let sunset_direction = CompassHeading::West.raw_value();
    writeln!(out, "{} raw value: {sunset_direction}", CompassHeading::West)?;

    Ok(())
}
