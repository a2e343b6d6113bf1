use crate::RawValue;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// The four points of a compass, with no payload and no raw value.
///
/// A `match` over a `CompassPoint` has to name every point or end with a catch-all arm.
/// Leaving one out is rejected before the program ever runs:
///
/// ```compile_fail
/// use tour_domain::CompassPoint;
///
/// fn describe(point: CompassPoint) -> &'static str {
///     match point {
///         CompassPoint::North => "Lots of planets have a north",
///         CompassPoint::South => "Watch out for penguins",
///         CompassPoint::East => "Where the sun rises",
///         // `West` is missing
///     }
/// }
/// ```
///
/// A wildcard arm restores exhaustiveness:
///
/// ```
/// use tour_domain::CompassPoint;
///
/// fn is_north(point: CompassPoint) -> bool {
///     match point {
///         CompassPoint::North => true,
///         _ => false,
///     }
/// }
///
/// assert!(is_north(CompassPoint::North));
/// assert!(!is_north(CompassPoint::West));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum CompassPoint {
    North,
    South,
    East,
    West,
}

impl CompassPoint {
    /// The point half a turn away.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

/// Compass points again, this time backed by string raw values.
///
/// No variant spells its raw value out: each one is the variant's own name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, RawValue)]
#[strum(serialize_all = "camelCase")]
#[raw_value(type = &'static str)]
pub enum CompassHeading {
    North,
    South,
    East,
    West,
}

impl From<CompassPoint> for CompassHeading {
    fn from(point: CompassPoint) -> Self {
        match point {
            CompassPoint::North => Self::North,
            CompassPoint::South => Self::South,
            CompassPoint::East => Self::East,
            CompassPoint::West => Self::West,
        }
    }
}
