//! Typed Rust client for the BudgetSMS HTTP API.
//!
//! BudgetSMS answers every call with ad-hoc, position-dependent plain text;
//! the layout of a send response even depends on which optional flags the
//! request carried. This crate keeps that quirkiness behind three layers: a
//! domain layer of strong types, a transport layer for the wire-format
//! parsing, and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use budgetsms::{Account, BudgetSmsClient, SmsOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), budgetsms::BudgetSmsError> {
//!     let mut account = Account::new("user1", "21547", "1e753da74");
//!     account.set_sender("BudgetSMS");
//!     account.set_recipient("+31612345678");
//!     account.set_message("The quick brown fox jumps over the lazy dog");
//!
//!     let client = BudgetSmsClient::new()?;
//!     match client.send_sms(&account).await? {
//!         SmsOutcome::Success(fields) => println!("sent: {:?}", fields.transaction),
//!         SmsOutcome::Failure(failure) => println!("rejected: {}", failure.message),
//!         SmsOutcome::Unknown => println!("unrecognized response"),
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BudgetSmsClient, BudgetSmsClientBuilder, BudgetSmsError, DEFAULT_TIMEOUT, RawTransportResult,
};
pub use domain::{
    Account, ConfigurationError, DEFAULT_SERVER, Dlr, DlrDirection, PhoneNumber, RequestError,
    RequiredField, ResponseFlags, SENDER_MAX_CHARS, SmsOutcome, SuccessFields, VendorFailure,
    resolve_error_code, resolve_status_code,
};
pub use transport::{DecodeError, decode_pull_dlr, decode_sms_response, parse_push_dlr};
