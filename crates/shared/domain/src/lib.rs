//! # Domain Models
//!
//! The closed variant sets the tour walks through, with minimal dependencies
//! (`serde`, `strum`, `thiserror`, and the workspace derive crate).
//! Keep it lean: no I/O, no logging, just data and the pure helpers that belong to it.
//!
//! | Type                      | Feature shown                                  |
//! |---------------------------|------------------------------------------------|
//! | [`CompassPoint`]          | plain variants, exhaustive `match`             |
//! | [`Beverage`]              | iterating every case, counting cases           |
//! | [`Barcode`]               | associated values                              |
//! | [`AsciiControlCharacter`] | explicit `char` raw values                     |
//! | [`Planet`]                | implicit integer raw values                    |
//! | [`CompassHeading`]        | implicit string raw values                     |
//! | [`ArithmeticExpression`]  | recursive variants                             |

// Lets `#[derive(RawValue)]` expand to `::tour_domain::...` paths inside this crate too.
extern crate self as tour_domain;

pub mod barcode;
pub mod beverage;
pub mod control;
pub mod direction;
pub mod expression;
pub mod planet;
pub mod raw;

pub use crate::barcode::Barcode;
pub use crate::beverage::Beverage;
pub use crate::control::AsciiControlCharacter;
pub use crate::direction::{CompassHeading, CompassPoint};
pub use crate::expression::ArithmeticExpression;
pub use crate::planet::Planet;
pub use crate::raw::{RawValue, UnknownRawValue};
pub use strum::{EnumCount, IntoEnumIterator, ParseError};
pub use tour_derive::RawValue;
