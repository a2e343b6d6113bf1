use crate::RawValue;
use strum_macros::{Display, EnumCount, EnumIter};

/// ASCII control characters, each backed by an explicit `char` raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, RawValue)]
#[strum(serialize_all = "camelCase")]
#[raw_value(type = char)]
pub enum AsciiControlCharacter {
    #[raw = '\t']
    Tab,
    #[raw = '\n']
    LineFeed,
    #[raw = '\r']
    CarriageReturn,
}
