use crate::domain::validation::RequestError;

use phonenumber::country;

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// BudgetSMS expects recipients without `+` or `00`; [`crate::Account::set_recipient_number`]
/// applies that normalization on top of the E.164 form. Equality, ordering,
/// and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, RequestError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(RequestError::InvalidPhoneNumber { input: raw });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| RequestError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_number_parsing_and_equality_use_e164() {
        let p1 = PhoneNumber::parse(None, "+38971789062").unwrap();
        let p2 = PhoneNumber::parse(None, "+389 71 789 062").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+38971789062");
        assert_eq!(p1.raw(), "+38971789062");
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::MK), " 071789062 ").unwrap();
        assert_eq!(pn.raw(), "071789062");
        assert_eq!(pn.e164(), "+38971789062");
    }

    #[test]
    fn phone_number_rejects_garbage() {
        assert!(matches!(
            PhoneNumber::parse(None, "not-a-number"),
            Err(RequestError::InvalidPhoneNumber { .. })
        ));
        assert!(PhoneNumber::parse(None, "   ").is_err());
    }
}
