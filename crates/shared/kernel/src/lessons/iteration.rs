use crate::error::TourError;
use std::io::Write;
use tour_domain::{Beverage, EnumCount, IntoEnumIterator};

pub(super) fn run<W: Write>(out: &mut W) -> Result<(), TourError> {
    writeln!(out, "{} beverages available", Beverage::COUNT)?;

    for beverage in Beverage::iter() {
        writeln!(out, "{beverage}")?;
    }

    Ok(())
}
