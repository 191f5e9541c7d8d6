pub mod multipart;
pub mod parameter_error_handler;
pub mod response;
pub mod validate;

pub use multipart::{is_multipart, read_text_fields};
pub use parameter_error_handler::{form_error_handler, multipart_error_handler, path_error_handler};
pub use response::error_response;
pub use validate::{RawScores, validate_scores};
