mod error;
mod form;
mod health;
mod transcribe;
mod translate;

pub use error::{ErrorResponse, panic_response};
pub use form::{FormFields, FormRejection, UploadedFile};
pub use health::health_handler;
pub use transcribe::{NO_FILE_MESSAGE, NO_SPEECH_MESSAGE, transcribe_handler};
pub use translate::{NO_TEXT_MESSAGE, TRANSLATION_FAILED_MESSAGE, translate_handler};
