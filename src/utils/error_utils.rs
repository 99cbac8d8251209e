use std::error::Error;

/// Convert any error type into a boxed dynamic Error with additional context
pub fn into_boxed_error<E: Error + 'static>(e: E, context: &str) -> Box<dyn Error> {
    Box::<dyn Error>::from(format!("{context}: {e}"))
}
