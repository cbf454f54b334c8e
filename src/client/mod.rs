//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::{Duration, Instant};

use url::Url;

use crate::domain::{
    Account, ConfigurationError, Dlr, RequestError, RequiredField, ResponseFlags, SmsOutcome,
};
use crate::transport::DecodeError;

const SEND_PATH: &str = "sendsms";
const CREDIT_PATH: &str = "checkcredit";
const OPERATOR_PATH: &str = "checkoperator";
const DLR_PATH: &str = "checksms";

/// Per-call timeout applied when the builder does not override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
/// Raw result of one HTTP round trip, before any response parsing.
pub struct RawTransportResult {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
    pub elapsed: Duration,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<RawTransportResult, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<RawTransportResult, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let started = Instant::now();
            let response = self.client.get(url).query(&params).send().await?;
            let status = response.status().as_u16();
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let body = response.text().await?;
            Ok(RawTransportResult {
                status,
                content_type,
                body,
                elapsed: started.elapsed(),
            })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`BudgetSmsClient`].
///
/// The categories are distinct and stable so a caller can tell "I made a
/// mistake" ([`Configuration`](Self::Configuration)/[`Request`](Self::Request))
/// from "the network failed" ([`Transport`](Self::Transport)/
/// [`HttpStatus`](Self::HttpStatus)) from "the gateway sent garbage"
/// ([`Decode`](Self::Decode)). "The gateway said no" is not an error at all:
/// it is an [`SmsOutcome::Failure`] return value.
pub enum BudgetSmsError {
    /// A required account field is missing; raised before any network call.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Malformed per-call input; raised before any network call.
    #[error("request error: {0}")]
    Request(#[from] RequestError),

    /// The configured server does not form a valid endpoint URL.
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body did not match any recognized shape.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

#[derive(Debug, Clone)]
/// Builder for [`BudgetSmsClient`].
///
/// Use this when you need to customize the timeout or user-agent.
pub struct BudgetSmsClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for BudgetSmsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetSmsClientBuilder {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the HTTP timeout applied to each entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`BudgetSmsClient`].
    pub fn build(self) -> Result<BudgetSmsClient, BudgetSmsError> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| BudgetSmsError::Transport(Box::new(err)))?;

        Ok(BudgetSmsClient {
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level BudgetSMS client.
///
/// Every operation validates the [`Account`] first, performs exactly one
/// round trip against the account's server, and decodes the plain-text body.
/// There is no shared mutable state: callers needing concurrent sends use
/// independent [`Account`] instances.
pub struct BudgetSmsClient {
    http: Arc<dyn HttpTransport>,
}

impl BudgetSmsClient {
    /// Create a client with the default timeout.
    ///
    /// For more customization, use [`BudgetSmsClient::builder`].
    pub fn new() -> Result<Self, BudgetSmsError> {
        Self::builder().build()
    }

    /// Start building a client with custom settings.
    pub fn builder() -> BudgetSmsClientBuilder {
        BudgetSmsClientBuilder::new()
    }

    /// Send the account's message to its recipient via `/sendsms/`.
    ///
    /// Requires the credential triple and a recipient. A gateway rejection
    /// comes back as [`SmsOutcome::Failure`], not as an error.
    pub async fn send_sms(&self, account: &Account) -> Result<SmsOutcome, BudgetSmsError> {
        account.validate(&[RequiredField::Recipient])?;
        let response = self.call(account, SEND_PATH, Vec::new()).await?;
        Ok(crate::transport::decode_sms_response(
            account.response_flags(),
            &response.body,
        )?)
    }

    /// Check the account's remaining credit via `/checkcredit/`.
    ///
    /// The credit response never carries the flag-dependent send fields, so
    /// it is decoded without consulting the account's feature flags.
    pub async fn check_credit(&self, account: &Account) -> Result<SmsOutcome, BudgetSmsError> {
        account.validate(&[])?;
        let response = self.call(account, CREDIT_PATH, Vec::new()).await?;
        Ok(crate::transport::decode_sms_response(
            ResponseFlags::default(),
            &response.body,
        )?)
    }

    /// Look up the operator of the account's recipient via `/checkoperator/`.
    pub async fn check_operator(&self, account: &Account) -> Result<SmsOutcome, BudgetSmsError> {
        account.validate(&[RequiredField::Recipient])?;
        let extra = vec![("check".to_owned(), account.recipient().to_owned())];
        let response = self.call(account, OPERATOR_PATH, extra).await?;
        Ok(crate::transport::decode_sms_response(
            account.response_flags(),
            &response.body,
        )?)
    }

    /// Fetch the delivery receipt for a sent message via `/checksms/`.
    ///
    /// Push DLR is the vendor's preferred channel; see
    /// [`crate::parse_push_dlr`] for that direction.
    pub async fn pull_dlr(
        &self,
        account: &Account,
        sms_id: &str,
    ) -> Result<Dlr, BudgetSmsError> {
        let sms_id = sms_id.trim();
        if sms_id.is_empty() {
            return Err(RequestError::EmptySmsId.into());
        }
        account.validate(&[])?;

        let extra = vec![("smsid".to_owned(), sms_id.to_owned())];
        let response = self.call(account, DLR_PATH, extra).await?;
        Ok(crate::transport::decode_pull_dlr(sms_id, &response.body)?)
    }

    /// One validated round trip: endpoint URL from the account's server, the
    /// call-specific parameters first, then the account parameter set.
    async fn call(
        &self,
        account: &Account,
        path: &str,
        mut params: Vec<(String, String)>,
    ) -> Result<RawTransportResult, BudgetSmsError> {
        let url = Url::parse(&format!("https://{}/{}/", account.server, path))?;
        params.extend(account.to_params());

        let response = self
            .http
            .get(url.as_str(), params)
            .await
            .map_err(BudgetSmsError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(BudgetSmsError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response)
    }
}
