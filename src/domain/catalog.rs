//! Static BudgetSMS code tables: request errors and DLR status codes.

/// Human-readable description for a BudgetSMS request/validation error code.
///
/// Total function: an unknown code is echoed back unchanged, matching the
/// gateway documentation ("unknown codes are passed through").
pub fn resolve_error_code(code: &str) -> &str {
    request_error(code).unwrap_or(code)
}

/// Human-readable description for a BudgetSMS delivery-status (DLR) code.
///
/// Total function: an unknown code is echoed back unchanged.
pub fn resolve_status_code(code: &str) -> &str {
    dlr_status(code).unwrap_or(code)
}

fn request_error(code: &str) -> Option<&'static str> {
    Some(match code {
        "1001" => "Not enough credits to send messages",
        "1002" => "Identification failed. Wrong credentials",
        "1003" => "Account not active, contact BudgetSMS",
        "1004" => "This IP address is not added to this account. No access to the API",
        "1005" => "No handle provided",
        "1006" => "No UserID provided",
        "1007" => "No Username provided",
        "2001" => "SMS message text is empty",
        "2002" => "SMS numeric senderid can be max. 16 numbers",
        "2003" => "SMS alphanumeric sender can be max. 11 characters",
        "2004" => "SMS senderid is empty or invalid",
        "2005" => "Destination number is too short",
        "2006" => "Destination is not numeric",
        "2007" => "Destination is empty",
        "2008" => "SMS text is not OK (check encoding?)",
        "2009" => "Parameter issue (check all mandatory parameters, encoding, etc.)",
        "2010" => "Destination number is invalidly formatted",
        "2011" => "Destination is invalid",
        "2012" => "SMS message text is too long",
        "2013" => "SMS message is invalid",
        "2014" => "SMS CustomID is used before",
        "2015" => "Charset problem",
        "2016" => "Invalid UTF-8 encoding",
        "2017" => "Invalid SMSid",
        "3001" => "No route to destination. Contact BudgetSMS for possible solutions",
        "3002" => "No routes are setup. Contact BudgetSMS for a route setup",
        "3003" => "Invalid destination. Check international mobile number formatting",
        "4001" => "System error, related to customID",
        "4002" => "System error, temporary issue. Try resubmitting in 2 to 3 minutes",
        "4003" => "System error, temporary issue.",
        "4004" => "System error, temporary issue. Contact BudgetSMS",
        "4005" => "System error, permanent",
        "4006" => "Gateway not reachable",
        "4007" => "System error, contact BudgetSMS",
        "5001" => "Send error, Contact BudgetSMS with the send details",
        "5002" => "Wrong SMS type",
        "5003" => "Wrong operator",
        "6001" => "Unknown error",
        "7001" => "No HLR provider present, Contact BudgetSMS.",
        "7002" => "Unexpected results from HLR provider",
        "7003" => "Bad number format",
        "7901" => "Unexpected error. Contact BudgetSMS",
        "7902" => "HLR provider error. Contact BudgetSMS",
        "7903" => "HLR provider error. Contact BudgetSMS",
        _ => return None,
    })
}

fn dlr_status(code: &str) -> Option<&'static str> {
    Some(match code {
        "0" => "Message is sent, no status yet (default)",
        "1" => "Message is delivered",
        "2" => "Message is not sent",
        "3" => "Message delivery failed",
        "4" => "Message is sent",
        "5" => "Message expired",
        "6" => "Message has an invalid destination address",
        "7" => "SMSC error, message could not be processed",
        "8" => "Message not allowed",
        "11" => "Message status unknown, usually after 24 hours without update SMSC",
        "12" => "Message status unknown, SMSC received unknown status code",
        "13" => "Message status unknown, no status update received from SMSC after 72 hours",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ERROR_CODES: &[&str] = &[
        "1001", "1002", "1003", "1004", "1005", "1006", "1007", "2001", "2002", "2003", "2004",
        "2005", "2006", "2007", "2008", "2009", "2010", "2011", "2012", "2013", "2014", "2015",
        "2016", "2017", "3001", "3002", "3003", "4001", "4002", "4003", "4004", "4005", "4006",
        "4007", "5001", "5002", "5003", "6001", "7001", "7002", "7003", "7901", "7902", "7903",
    ];

    const DLR_CODES: &[&str] = &[
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "11", "12", "13",
    ];

    #[test]
    fn every_documented_error_code_resolves_to_a_description() {
        for code in ERROR_CODES {
            let text = resolve_error_code(code);
            assert_ne!(text, *code, "code {code} fell through to the echo path");
        }
    }

    #[test]
    fn every_documented_dlr_code_resolves_to_a_description() {
        for code in DLR_CODES {
            let text = resolve_status_code(code);
            assert_ne!(text, *code, "code {code} fell through to the echo path");
        }
    }

    #[test]
    fn known_codes_return_exact_documented_strings() {
        assert_eq!(
            resolve_error_code("1002"),
            "Identification failed. Wrong credentials"
        );
        assert_eq!(resolve_error_code("2007"), "Destination is empty");
        assert_eq!(resolve_status_code("1"), "Message is delivered");
        assert_eq!(resolve_status_code("3"), "Message delivery failed");
    }

    #[test]
    fn unknown_codes_are_echoed_back() {
        assert_eq!(resolve_error_code("9999"), "9999");
        assert_eq!(resolve_status_code("42"), "42");
        assert_eq!(resolve_error_code(""), "");
    }
}
