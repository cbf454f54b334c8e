use std::collections::BTreeMap;

use crate::domain::{Dlr, DlrDirection, RequestError, catalog};

use super::DecodeError;

/// Decode a `/checksms/` (pull-DLR) response body.
///
/// The only documented shape is `OK <numeric-status>`, two space-separated
/// tokens with a case-insensitive `OK`; this endpoint has no `ERR` form, so
/// anything else is a [`DecodeError`].
pub fn decode_pull_dlr(sms_id: &str, body: &str) -> Result<Dlr, DecodeError> {
    let body = body.trim();
    let mut tokens = body.split_whitespace();

    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(ok), Some(code), None) if ok.eq_ignore_ascii_case("OK") => Ok(Dlr {
            sms_id: sms_id.to_owned(),
            to: None,
            date: None,
            status_code: code.to_owned(),
            status_message: catalog::resolve_status_code(code).to_owned(),
            direction: DlrDirection::Pulled,
        }),
        _ => Err(DecodeError::UnrecognizedDlr {
            body: body.to_owned(),
        }),
    }
}

/// Convert a push-DLR callback parameter map into a [`Dlr`].
///
/// The map comes from the vendor's request to the integrator's own endpoint
/// and is untrusted: every value is sanitized (backslash escapes collapsed,
/// markup-like tags stripped, whitespace trimmed) before use. `id` and
/// `status` are required; `to` and `date` are optional.
pub fn parse_push_dlr(params: &BTreeMap<String, String>) -> Result<Dlr, RequestError> {
    let sms_id = params
        .get("id")
        .ok_or(RequestError::MissingDlrKey { key: "id" })?;
    let status = params
        .get("status")
        .ok_or(RequestError::MissingDlrKey { key: "status" })?;

    let status_code = sanitize(status);
    let status_message = catalog::resolve_status_code(&status_code).to_owned();

    Ok(Dlr {
        sms_id: sanitize(sms_id),
        to: params.get("to").map(|value| sanitize(value)),
        date: params.get("date").map(|value| sanitize(value)),
        status_code,
        status_message,
        direction: DlrDirection::Pushed,
    })
}

/// Injection hardening for callback values: collapse backslash escapes, drop
/// `<...>` tag spans, trim whitespace.
fn sanitize(value: &str) -> String {
    let unescaped = collapse_backslashes(value);
    strip_tags(unescaped.trim())
}

fn collapse_backslashes(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn strip_tags(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_tag = false;
    for c in value.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn pull_dlr_decodes_the_two_token_shape() {
        let dlr = decode_pull_dlr("555", "OK 1").unwrap();
        assert_eq!(dlr.sms_id, "555");
        assert_eq!(dlr.status_code, "1");
        assert_eq!(dlr.status_message, "Message is delivered");
        assert_eq!(dlr.direction, DlrDirection::Pulled);
        assert_eq!(dlr.to, None);
        assert_eq!(dlr.date, None);
    }

    #[test]
    fn pull_dlr_is_case_insensitive_and_trims() {
        let dlr = decode_pull_dlr("555", "  ok 3  ").unwrap();
        assert_eq!(dlr.status_code, "3");
        assert_eq!(dlr.status_message, "Message delivery failed");
    }

    #[test]
    fn pull_dlr_echoes_unknown_status_codes() {
        let dlr = decode_pull_dlr("555", "OK 42").unwrap();
        assert_eq!(dlr.status_message, "42");
    }

    #[test]
    fn pull_dlr_rejects_any_other_shape() {
        for body in ["", "OK", "OK 1 extra", "ERR 2017", "NOPE 1"] {
            let err = decode_pull_dlr("555", body).unwrap_err();
            assert!(
                matches!(err, DecodeError::UnrecognizedDlr { .. }),
                "body {body:?} should not decode"
            );
        }
    }

    #[test]
    fn push_dlr_maps_and_resolves_all_fields() {
        let params = push_params(&[
            ("id", "555"),
            ("status", "3"),
            ("to", "38971789062"),
            ("date", "2024-01-01"),
        ]);

        let dlr = parse_push_dlr(&params).unwrap();
        assert_eq!(dlr.sms_id, "555");
        assert_eq!(dlr.status_code, "3");
        assert_eq!(dlr.status_message, "Message delivery failed");
        assert_eq!(dlr.to.as_deref(), Some("38971789062"));
        assert_eq!(dlr.date.as_deref(), Some("2024-01-01"));
        assert_eq!(dlr.direction, DlrDirection::Pushed);
    }

    #[test]
    fn push_dlr_optional_keys_may_be_absent() {
        let params = push_params(&[("id", "555"), ("status", "0")]);
        let dlr = parse_push_dlr(&params).unwrap();
        assert_eq!(dlr.to, None);
        assert_eq!(dlr.date, None);
        assert_eq!(dlr.status_message, "Message is sent, no status yet (default)");
    }

    #[test]
    fn push_dlr_missing_required_keys_is_a_request_error() {
        let err = parse_push_dlr(&push_params(&[("status", "3")])).unwrap_err();
        assert_eq!(err, RequestError::MissingDlrKey { key: "id" });

        let err = parse_push_dlr(&push_params(&[("id", "555")])).unwrap_err();
        assert_eq!(err, RequestError::MissingDlrKey { key: "status" });
    }

    #[test]
    fn push_dlr_sanitizes_untrusted_values() {
        let params = push_params(&[
            ("id", " <b>555</b> "),
            ("status", "\\3"),
            ("to", "<script>alert(1)</script>38971789062"),
            ("date", "2024-01-01\\"),
        ]);

        let dlr = parse_push_dlr(&params).unwrap();
        assert_eq!(dlr.sms_id, "555");
        assert_eq!(dlr.status_code, "3");
        assert_eq!(dlr.status_message, "Message delivery failed");
        assert_eq!(dlr.to.as_deref(), Some("alert(1)38971789062"));
        assert_eq!(dlr.date.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn sanitize_handles_escapes_tags_and_whitespace() {
        assert_eq!(sanitize("\\'quoted\\'"), "'quoted'");
        assert_eq!(sanitize("  plain  "), "plain");
        assert_eq!(sanitize("<tag attr=\"x\">inner</tag>"), "inner");
        assert_eq!(sanitize("trailing\\"), "trailing");
    }
}
