use crate::error::TourError;
use std::io::Write;
use tour_domain::{CompassPoint, Planet};

pub(super) fn run<W: Write>(out: &mut W) -> Result<(), TourError> {
    writeln!(out, "{}", remark(CompassPoint::East))?;

    for planet in [Planet::Earth, Planet::Mars] {
        writeln!(out, "{}", safety(planet))?;
    }

    Ok(())
}

/// Every point named, no fallback.
const fn remark(point: CompassPoint) -> &'static str {
    match point {
        CompassPoint::North => "Lots of planets have a north",
        CompassPoint::South => "Watch out for penguins",
        CompassPoint::East => "Where the sun rises",
        CompassPoint::West => "Where the skies are blue",
    }
}

/// One planet named, a catch-all for the other seven.
const fn safety(planet: Planet) -> &'static str {
    match planet {
        Planet::Earth => "Mostly harmless",
        _ => "Not a safe place for humans",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tour_domain::IntoEnumIterator;

    #[test]
    fn every_point_has_its_own_remark() {
        let remarks: Vec<&str> = CompassPoint::iter().map(remark).collect();
        assert_eq!(
            remarks,
            [
                "Lots of planets have a north",
                "Watch out for penguins",
                "Where the sun rises",
                "Where the skies are blue",
            ]
        );
    }

    #[test]
    fn catch_all_covers_every_other_planet() {
        let harmless = Planet::iter().filter(|p| safety(*p) == "Mostly harmless").count();
        assert_eq!(harmless, 1);
        assert_eq!(safety(Planet::Neptune), "Not a safe place for humans");
    }
}
