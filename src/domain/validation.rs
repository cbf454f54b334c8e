use std::fmt;

/// Account/message fields checked by [`crate::Account::validate`], in the
/// fixed order the gateway documentation lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Server,
    Username,
    UserId,
    Handle,
    Recipient,
}

impl RequiredField {
    /// Stable numeric code carried by a [`ConfigurationError`] for this field.
    pub fn code(self) -> u16 {
        match self {
            Self::Server => 1001,
            Self::Username => 1002,
            Self::UserId => 1003,
            Self::Handle => 1004,
            Self::Recipient => 1005,
        }
    }

    /// Field name as it appears in the query-parameter set.
    pub fn name(self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Username => "username",
            Self::UserId => "userid",
            Self::Handle => "handle",
            Self::Recipient => "to",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A required account/message field is missing before a call was attempted.
///
/// Raised synchronously, before any network side effect. The numeric code is
/// stable per field (server=1001 .. recipient=1005) so callers can branch.
pub struct ConfigurationError {
    pub field: RequiredField,
}

impl ConfigurationError {
    pub fn code(&self) -> u16 {
        self.field.code()
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is not set (code {})",
            self.field.name(),
            self.field.code()
        )
    }
}

impl std::error::Error for ConfigurationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Malformed caller-supplied input for a single call, not account-level.
pub enum RequestError {
    /// Push-DLR parameter map is missing a required key (`id` or `status`).
    MissingDlrKey { key: &'static str },
    /// Pull-DLR was invoked with an empty sms id.
    EmptySmsId,
    /// A supplied phone number could not be parsed.
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDlrKey { key } => write!(f, "push DLR parameter {key} is missing"),
            Self::EmptySmsId => write!(f, "smsid must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for RequestError {}
