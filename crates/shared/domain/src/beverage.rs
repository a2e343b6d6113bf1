use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// Drinks on the menu. Every case can be listed and counted:
///
/// ```
/// use tour_domain::{Beverage, EnumCount, IntoEnumIterator};
///
/// assert_eq!(Beverage::COUNT, 3);
/// assert_eq!(Beverage::iter().next(), Some(Beverage::Coffee));
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
pub enum Beverage {
    Coffee,
    Tea,
    Juice,
}
