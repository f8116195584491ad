//! Application errors and user-facing error messages

mod app_error;
mod transformer;

pub use app_error::{AppError, AppResult};
pub use transformer::{DefaultErrorTransformer, ErrorMessage, ErrorTransformer};
