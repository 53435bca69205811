mod app;
mod http;
mod ui;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use http::HttpError;
pub use ui::UiError;
pub use validation::ValidationError;
