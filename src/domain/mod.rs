//! Domain layer: strong types with validation and invariants (no I/O).

mod account;
pub mod catalog;
mod response;
mod validation;
mod value;

pub use account::{Account, DEFAULT_SERVER, ResponseFlags, SENDER_MAX_CHARS};
pub use catalog::{resolve_error_code, resolve_status_code};
pub use response::{Dlr, DlrDirection, SmsOutcome, SuccessFields, VendorFailure};
pub use validation::{ConfigurationError, RequestError, RequiredField};
pub use value::PhoneNumber;
