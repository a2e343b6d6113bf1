use tour_derive::tour_error;

#[tour_error]
pub enum DemoError {
    #[error("Lookup failed{}: {message}", format_context(.context))]
    Lookup { message: String, context: Option<std::borrow::Cow<'static, str>> },
}

fn main() {
    let result: Result<(), DemoError> = Err(DemoError::Lookup { message: "7".to_owned(), context: None });
    let _ = result.context("planet lookup");
}
