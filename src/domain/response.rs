use crate::domain::catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of a send/balance/operator call, decoded from the gateway's
/// plain-text response.
///
/// A [`SmsOutcome::Failure`] is a legitimate business outcome ("the gateway
/// said no"), not a library error; undecodable responses surface as
/// `DecodeError` instead.
pub enum SmsOutcome {
    Success(SuccessFields),
    Failure(VendorFailure),
    /// The response line started with neither `OK` nor `ERR`.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Positional fields of a successful response.
///
/// Space-mode responses always carry `transaction`; the other fields are
/// present only when the corresponding request flag asked for them. Colon-mode
/// responses carry exactly `mccmnc`, `operator`, and `price`.
pub struct SuccessFields {
    pub transaction: Option<String>,
    pub mccmnc: Option<String>,
    pub operator: Option<String>,
    pub price: Option<String>,
    pub time: Option<String>,
    pub credit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A syntactically valid `ERR <code>` response from the gateway.
pub struct VendorFailure {
    pub code: String,
    pub message: String,
}

impl VendorFailure {
    /// Build a failure, resolving the message through the error catalog.
    pub fn from_code(code: impl Into<String>) -> Self {
        let code = code.into();
        let message = catalog::resolve_error_code(&code).to_owned();
        Self { code, message }
    }

    /// Whether this is one of the vendor's temporary system errors
    /// (4002–4004), the only codes documented as safe to resubmit.
    pub fn is_temporary(&self) -> bool {
        matches!(self.code.as_str(), "4002" | "4003" | "4004")
    }

    /// Whether this code indicates a credentials/account problem.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.code.as_str(), "1002" | "1003" | "1004")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How a delivery receipt reached us.
pub enum DlrDirection {
    /// Fetched from the gateway via `/checksms/`.
    Pulled,
    /// Delivered by the gateway to the integrator's callback endpoint.
    Pushed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A delivery receipt, pulled or pushed.
pub struct Dlr {
    pub sms_id: String,
    pub to: Option<String>,
    pub date: Option<String>,
    pub status_code: String,
    /// Resolved through the delivery-status table; unknown codes are echoed.
    pub status_message: String,
    pub direction: DlrDirection,
}
