//! Raw values: a fixed scalar behind every variant, with a forward accessor and a
//! partial reverse constructor.
//!
//! Implementations come from `#[derive(RawValue)]`. The derive refuses anything that would
//! break the one-to-one mapping, so a type carrying a payload never gets an impl:
//!
//! ```compile_fail
//! use tour_domain::RawValue;
//!
//! #[derive(RawValue)]
//! #[raw_value(type = i32)]
//! enum Barcode {
//!     Upc(i32, i32, i32, i32),
//! }
//! ```
//!
//! Nor does a type where two variants would share a raw value:
//!
//! ```compile_fail
//! use tour_domain::RawValue;
//!
//! #[derive(RawValue)]
//! #[raw_value(type = u8)]
//! enum Signal {
//!     #[raw = 1]
//!     Green,
//!     #[raw = 0]
//!     Amber,
//!     Red, // implicitly 1 again
//! }
//! ```

use std::fmt::Debug;
use strum::IntoEnumIterator;

/// A closed variant set where each variant owns exactly one scalar raw value.
pub trait RawValue: Sized {
    /// The scalar behind each variant (an integer, `char`, or `&'static str`).
    type Raw: Copy + PartialEq + Debug + 'static;

    /// The raw value of this variant.
    fn raw_value(&self) -> Self::Raw;

    /// The variant whose raw value is `raw`, or `None` when no variant has it.
    ///
    /// Never falls back to a default variant.
    fn from_raw_value(raw: Self::Raw) -> Option<Self>;

    /// Every raw value, in variant declaration order.
    fn all_raw_values() -> Vec<Self::Raw>
    where
        Self: IntoEnumIterator,
    {
        Self::iter().map(|variant| variant.raw_value()).collect()
    }
}

/// Returned by the derived `TryFrom` impls when no variant owns the raw value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{raw} is not a raw value of {type_name}")]
pub struct UnknownRawValue {
    type_name: &'static str,
    raw: String,
}

impl UnknownRawValue {
    #[must_use]
    pub fn new(type_name: &'static str, raw: impl Into<String>) -> Self {
        Self { type_name, raw: raw.into() }
    }

    /// Name of the enum the lookup ran against.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The rejected raw value, in its `Debug` form.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}
