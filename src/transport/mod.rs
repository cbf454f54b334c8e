//! Transport layer: wire-format details of the BudgetSMS plain-text API.

mod dlr;
mod response;

pub use dlr::{decode_pull_dlr, parse_push_dlr};
pub use response::decode_sms_response;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Response text did not match any recognized shape.
///
/// Distinct from a [`crate::SmsOutcome::Failure`], which is a syntactically
/// valid `ERR <code>` response and therefore a business outcome.
pub enum DecodeError {
    /// The token list ended before the field implied by the request flags.
    #[error("truncated response: missing {field} field")]
    Truncated { field: &'static str },

    /// A pull-DLR body that is not of the form `OK <status>`.
    #[error("unrecognized DLR response: {body:?}")]
    UnrecognizedDlr { body: String },
}
