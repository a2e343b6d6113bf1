pub mod error;
pub mod raw_value;
