use crate::domain::{ResponseFlags, SmsOutcome, SuccessFields, VendorFailure};

use super::DecodeError;

/// Optional positional fields of a space-mode success line, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SendField {
    Price,
    Time,
    Mccmnc,
    Credit,
}

impl SendField {
    fn name(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Time => "time",
            Self::Mccmnc => "mccmnc",
            Self::Credit => "credit",
        }
    }
}

/// Positional schema of a space-mode success line, indexed by the request
/// flag triple. The gateway omits fields (and their separators) that were not
/// requested, so the layout shifts with the flags.
///
/// `time` has no flag of its own and always trails `price`. This is pinned
/// vendor behavior, not derived.
const fn expected_fields(flags: ResponseFlags) -> &'static [SendField] {
    use SendField::{Credit, Mccmnc, Price, Time};

    match (flags.price, flags.mccmnc, flags.credit) {
        (false, false, false) => &[],
        (true, false, false) => &[Price, Time],
        (false, true, false) => &[Mccmnc],
        (false, false, true) => &[Credit],
        (true, true, false) => &[Price, Time, Mccmnc],
        (true, false, true) => &[Price, Time, Credit],
        (false, true, true) => &[Mccmnc, Credit],
        (true, true, true) => &[Price, Time, Mccmnc, Credit],
    }
}

/// Decode a send/balance/operator response body into an [`SmsOutcome`].
///
/// The gateway has two ad-hoc formats and no content-type declaration, so the
/// mode is sniffed from the text: a colon right after the leading status
/// token (`OK:`/`ERR:`) selects colon mode, anything else is space mode.
///
/// A well-formed `OK`/`ERR` line never errors; [`DecodeError`] is returned
/// only when the token list is shorter than the schema implied by `flags`.
pub fn decode_sms_response(
    flags: ResponseFlags,
    body: &str,
) -> Result<SmsOutcome, DecodeError> {
    let body = body.trim();
    if is_colon_mode(body) {
        decode_colon(body)
    } else {
        decode_space(flags, body)
    }
}

fn is_colon_mode(body: &str) -> bool {
    body.split_whitespace()
        .next()
        .is_some_and(|token| token.contains(':'))
}

/// Colon mode, used by operator/balance-style responses. A success carries
/// exactly three positional fields with no flag dependency; trailing extras
/// are ignored.
fn decode_colon(body: &str) -> Result<SmsOutcome, DecodeError> {
    let mut tokens = body.split(':');
    let status = tokens.next().unwrap_or_default().trim().to_uppercase();

    match status.as_str() {
        "OK" => {
            let mut next = |field| {
                tokens
                    .next()
                    .map(|token| token.trim().to_owned())
                    .ok_or(DecodeError::Truncated { field })
            };
            Ok(SmsOutcome::Success(SuccessFields {
                mccmnc: Some(next("mccmnc")?),
                operator: Some(next("operator")?),
                price: Some(next("price")?),
                ..SuccessFields::default()
            }))
        }
        "ERR" => {
            let code = tokens.next().ok_or(DecodeError::Truncated {
                field: "error code",
            })?;
            Ok(SmsOutcome::Failure(VendorFailure::from_code(code.trim())))
        }
        _ => Ok(SmsOutcome::Unknown),
    }
}

/// Space mode, used by send-style responses. The first field is always the
/// transaction id; the rest follow the flag-dependent schema.
fn decode_space(flags: ResponseFlags, body: &str) -> Result<SmsOutcome, DecodeError> {
    let mut tokens = body.split_whitespace();
    let status = tokens.next().unwrap_or_default().to_uppercase();

    match status.as_str() {
        "OK" => {
            let transaction = tokens.next().ok_or(DecodeError::Truncated {
                field: "transaction",
            })?;
            let mut fields = SuccessFields {
                transaction: Some(transaction.to_owned()),
                ..SuccessFields::default()
            };

            for field in expected_fields(flags) {
                let value = tokens.next().map(str::to_owned);
                let missing = DecodeError::Truncated {
                    field: field.name(),
                };
                match field {
                    SendField::Price => fields.price = Some(value.ok_or(missing)?),
                    // `time` piggybacks on the price flag and is sometimes
                    // absent from the wire; it is the one optional position.
                    SendField::Time => fields.time = value,
                    SendField::Mccmnc => fields.mccmnc = Some(value.ok_or(missing)?),
                    SendField::Credit => fields.credit = Some(value.ok_or(missing)?),
                }
            }

            Ok(SmsOutcome::Success(fields))
        }
        "ERR" => {
            let code = tokens.next().ok_or(DecodeError::Truncated {
                field: "error code",
            })?;
            Ok(SmsOutcome::Failure(VendorFailure::from_code(code)))
        }
        _ => Ok(SmsOutcome::Unknown),
    }
}
