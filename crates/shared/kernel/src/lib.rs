//! Kernel of the tour: the lessons that exercise the domain enums, plus the config
//! loading and error plumbing the shell needs to run them.
//! Keep this crate free of process concerns (no logger init, no stdout); callers hand in a writer.
//!
//! ## Running the tour
//! ```rust
//! use tour_kernel::{TourConfig, run_all};
//!
//! let mut out = Vec::new();
//! let ran = run_all(&mut out, &TourConfig::default()).unwrap();
//! assert_eq!(ran, 8);
//! assert!(String::from_utf8(out).unwrap().contains("Move to east"));
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use tour_kernel::config::{TourConfig, load_config};
//! let cfg: TourConfig = load_config(Some("config/tour.toml")).unwrap();
//! ```
pub mod config;
pub mod error;
pub mod lessons;

pub use crate::config::{LessonsConfig, LoggingConfig, TourConfig, load_config};
pub use crate::error::{TourError, TourErrorExt};
pub use crate::lessons::{Lesson, run_all};
pub use tour_domain as domain;
