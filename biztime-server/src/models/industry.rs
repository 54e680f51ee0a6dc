//! Industry input validation

use super::ValidationError;

/// Maximum length for industry codes
const MAX_INDUSTRY_CODE_LEN: usize = 64;

/// Industry to insert. Codes are caller-chosen, not derived.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIndustry {
    pub code: String,
    pub industry: String,
}

impl NewIndustry {
    pub fn new(code: &str, industry: &str) -> Result<Self, ValidationError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ValidationError::Empty { field: "code" });
        }
        if code.len() > MAX_INDUSTRY_CODE_LEN {
            return Err(ValidationError::TooLong {
                field: "code",
                max: MAX_INDUSTRY_CODE_LEN,
            });
        }
        if code.contains('/') {
            return Err(ValidationError::InvalidFormat {
                field: "code",
                reason: "must not contain '/'",
            });
        }

        let industry = industry.trim();
        if industry.is_empty() {
            return Err(ValidationError::Empty { field: "industry" });
        }

        Ok(Self {
            code: code.to_owned(),
            industry: industry.to_owned(),
        })
    }
}
