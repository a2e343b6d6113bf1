use crate::RawValue;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// The planets in order from the sun. Only `Mercury` spells out its raw value;
/// the rest count up from it, so a raw value is the planet's position.
///
/// ```
/// use tour_domain::{Planet, RawValue};
///
/// assert_eq!(Planet::Earth.raw_value(), 3);
/// assert_eq!(Planet::from_raw_value(7), Some(Planet::Uranus));
/// assert_eq!(Planet::from_raw_value(9), None);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    RawValue,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
#[raw_value(type = i32)]
pub enum Planet {
    #[raw = 1]
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}
