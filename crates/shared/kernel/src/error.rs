use std::borrow::Cow;

/// Errors raised while loading settings or writing lesson output.
#[tour_derive::tour_error]
pub enum TourError {
    /// The output sink refused a write.
    #[error("Output error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Layered configuration could not be built or deserialized.
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// Internal fallback for logic errors.
    #[error("Internal tour error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
