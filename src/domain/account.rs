use std::collections::BTreeMap;

use crate::domain::validation::{ConfigurationError, RequiredField};
use crate::domain::value::PhoneNumber;

/// Default BudgetSMS API host.
pub const DEFAULT_SERVER: &str = "api.budgetsms.net";

/// Sender ids longer than this are silently truncated (vendor limit).
pub const SENDER_MAX_CHARS: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Which optional response fields were requested on a send-class call.
///
/// The gateway omits separators for absent fields instead of emitting empty
/// placeholders, so the response parser cannot infer this from the text and
/// has to be told.
pub struct ResponseFlags {
    pub price: bool,
    pub mccmnc: bool,
    pub credit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// BudgetSMS account credentials plus the message-to-send fields.
///
/// One instance per logical sender configuration. The model is read-only from
/// the parser's perspective for the lifetime of one request/response cycle;
/// it is never persisted. Fields needing vendor normalization (`from`, `to`,
/// `message`) go through dedicated setters; everything else is plain field
/// access.
pub struct Account {
    /// API hostname, defaults to [`DEFAULT_SERVER`].
    pub server: String,
    pub username: String,
    pub userid: String,
    /// Per-account API secret, required on every call.
    pub handle: String,
    from: String,
    to: String,
    message: String,
    /// Optional correlation id echoed back by the gateway.
    pub custom_id: String,
    /// Ask the gateway to append price information to the response.
    pub request_price: bool,
    /// Ask the gateway to append country/operator (mccmnc) information.
    pub request_operator_info: bool,
    /// Ask the gateway to append the remaining account credit.
    pub request_credit_info: bool,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_owned(),
            username: String::new(),
            userid: String::new(),
            handle: String::new(),
            from: String::new(),
            to: String::new(),
            message: String::new(),
            custom_id: String::new(),
            request_price: false,
            request_operator_info: false,
            request_credit_info: false,
        }
    }
}

impl Account {
    /// Create an account with the credential triple and the default server.
    pub fn new(
        username: impl Into<String>,
        userid: impl Into<String>,
        handle: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            userid: userid.into(),
            handle: handle.into(),
            ..Self::default()
        }
    }

    /// Build an account from a string configuration map.
    ///
    /// Unknown keys are ignored. Flag values are truthy for `"1"` and
    /// `"true"`. `from` and `to` go through the normalizing setters.
    pub fn from_config(config: &BTreeMap<String, String>) -> Self {
        let mut account = Self::default();
        for (key, value) in config {
            match key.as_str() {
                "server" => account.server = value.clone(),
                "username" => account.username = value.clone(),
                "userid" => account.userid = value.clone(),
                "handle" => account.handle = value.clone(),
                "from" => account.set_sender(value),
                "to" => account.set_recipient(value),
                "message" | "msg" => account.set_message(value),
                "customid" => account.custom_id = value.clone(),
                "price" => account.request_price = is_truthy(value),
                "mccmnc" => account.request_operator_info = is_truthy(value),
                "credit" => account.request_credit_info = is_truthy(value),
                _ => {}
            }
        }
        account
    }

    /// Set the sender id, silently truncating to 11 characters (vendor limit).
    pub fn set_sender(&mut self, sender: impl AsRef<str>) {
        self.from = sender.as_ref().chars().take(SENDER_MAX_CHARS).collect();
    }

    /// Set the recipient number, applying the gateway's normalization:
    /// surrounding whitespace, a leading `00` international prefix, and a
    /// leading `+` are stripped.
    pub fn set_recipient(&mut self, number: impl AsRef<str>) {
        let number = number.as_ref().trim();
        let number = number.strip_prefix("00").unwrap_or(number);
        let number = number.strip_prefix('+').unwrap_or(number);
        self.to = number.to_owned();
    }

    /// Set the recipient from a parsed [`PhoneNumber`], feeding its E.164
    /// form through the same normalization as [`Account::set_recipient`].
    pub fn set_recipient_number(&mut self, number: &PhoneNumber) {
        self.set_recipient(number.e164());
    }

    /// Set the message body as-is. URL encoding is the HTTP layer's job.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn sender(&self) -> &str {
        &self.from
    }

    pub fn recipient(&self) -> &str {
        &self.to
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check that the account is complete enough for a call.
    ///
    /// The credential fields are checked first, in fixed order (server,
    /// username, userid, handle), then each field in `also_required`. The
    /// first missing field is reported with its stable code.
    pub fn validate(&self, also_required: &[RequiredField]) -> Result<(), ConfigurationError> {
        const CREDENTIALS: [RequiredField; 4] = [
            RequiredField::Server,
            RequiredField::Username,
            RequiredField::UserId,
            RequiredField::Handle,
        ];

        for field in CREDENTIALS.iter().chain(also_required) {
            if self.field_value(*field).is_empty() {
                return Err(ConfigurationError { field: *field });
            }
        }
        Ok(())
    }

    fn field_value(&self, field: RequiredField) -> &str {
        match field {
            RequiredField::Server => &self.server,
            RequiredField::Username => &self.username,
            RequiredField::UserId => &self.userid,
            RequiredField::Handle => &self.handle,
            RequiredField::Recipient => &self.to,
        }
    }

    /// Query-parameter set the gateway expects: credentials first, then every
    /// non-empty message field (`message` is sent as `msg`), then the feature
    /// flags, emitted as `"1"` only when set.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("username".to_owned(), self.username.clone()),
            ("userid".to_owned(), self.userid.clone()),
            ("handle".to_owned(), self.handle.clone()),
        ];

        if !self.message.is_empty() {
            params.push(("msg".to_owned(), self.message.clone()));
        }
        if !self.from.is_empty() {
            params.push(("from".to_owned(), self.from.clone()));
        }
        if !self.to.is_empty() {
            params.push(("to".to_owned(), self.to.clone()));
        }
        if !self.custom_id.is_empty() {
            params.push(("customid".to_owned(), self.custom_id.clone()));
        }
        if self.request_price {
            params.push(("price".to_owned(), "1".to_owned()));
        }
        if self.request_operator_info {
            params.push(("mccmnc".to_owned(), "1".to_owned()));
        }
        if self.request_credit_info {
            params.push(("credit".to_owned(), "1".to_owned()));
        }

        params
    }

    /// The flag triple the response parser needs to decode a send response.
    pub fn response_flags(&self) -> ResponseFlags {
        ResponseFlags {
            price: self.request_price,
            mccmnc: self.request_operator_info,
            credit: self.request_credit_info,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim(), "1" | "true")
}
