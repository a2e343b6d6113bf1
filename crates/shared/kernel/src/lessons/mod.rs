//! The tour script: one lesson per enumeration feature, run top to bottom.
//!
//! Lessons share no state. Each one writes its lines to the sink it is handed and
//! returns; the order of a run is the declaration order of [`Lesson`].

mod associated_values;
mod basics;
mod iteration;
mod lookup;
mod matching;
mod raw_values;
mod recursion;

use crate::config::TourConfig;
use crate::error::{TourError, TourErrorExt};
use serde::{Deserialize, Serialize};
use std::io::Write;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};
use tracing::{debug, info, info_span};

/// Every lesson of the tour, in running order.
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
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Lesson {
    /// Declaring a variant and reassigning it.
    Basics,
    /// Exhaustive `match`, with and without a catch-all arm.
    Matching,
    /// Counting and listing every case.
    Iteration,
    /// Binding the payload of a variant.
    AssociatedValues,
    /// Explicit `char` raw values.
    RawValues,
    /// Integer and string raw values filled in implicitly.
    ImplicitRawValues,
    /// Building a variant back from a raw value that may not exist.
    RawValueLookup,
    /// A variant that holds more of its own type.
    Recursion,
}

impl Lesson {
    /// Writes this lesson's lines to `out`.
    ///
    /// # Errors
    /// Returns [`TourError::Io`] when `out` rejects a write.
    pub fn run<W: Write>(self, out: &mut W) -> Result<(), TourError> {
        match self {
            Self::Basics => basics::run(out),
            Self::Matching => matching::run(out),
            Self::Iteration => iteration::run(out),
            Self::AssociatedValues => associated_values::run(out),
            Self::RawValues => raw_values::run(out),
            Self::ImplicitRawValues => raw_values::run_implicit(out),
            Self::RawValueLookup => lookup::run(out),
            Self::Recursion => recursion::run(out),
        }
    }
}

/// Runs every lesson the config leaves enabled, in declaration order.
///
/// Returns how many lessons ran.
///
/// # Errors
/// Stops at the first failing lesson and returns its error, with the lesson name as context.
pub fn run_all<W: Write>(out: &mut W, config: &TourConfig) -> Result<usize, TourError> {
    let mut ran = 0;

    for lesson in Lesson::iter() {
        if !config.lessons.is_enabled(lesson) {
            debug!(%lesson, "Skipping lesson");
            continue;
        }

        let _span = info_span!("lesson", %lesson).entered();
        lesson.run(out).context(format!("lesson {lesson}"))?;
        debug!("Lesson finished");
        ran += 1;
    }

    out.flush().context("flushing lesson output")?;
    info!(ran, "Tour finished");
    Ok(ran)
}
