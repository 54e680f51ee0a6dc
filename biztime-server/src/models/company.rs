//! Company input validation and code derivation
//!
//! Company codes are URL-safe slugs derived from the display name:
//! lowercase ASCII alphanumerics separated by single hyphens.

use deunicode::deunicode;

use super::ValidationError;

/// Maximum length for company codes
pub const MAX_CODE_LEN: usize = 64;

/// Lowercase a display name into a hyphen-separated slug.
///
/// Non-ASCII letters are transliterated first ("Café" becomes "cafe"), then
/// ASCII punctuation and whitespace collapse into a single `-`. Leading and
/// trailing hyphens are trimmed and the result is capped at [`MAX_CODE_LEN`].
pub fn slugify(input: &str) -> String {
    let mut slug = String::new();
    let mut last_was_dash = false;

    for ch in deunicode(input).chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if !slug.is_empty() && !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.len() > MAX_CODE_LEN {
        slug.truncate(MAX_CODE_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    slug
}

/// Company code derived from a display name (slug format)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyCode(String);

impl CompanyCode {
    /// Derive the code for a company from its display name.
    ///
    /// # Example
    /// ```
    /// use biztime_server::models::CompanyCode;
    ///
    /// let code = CompanyCode::from_name("New Co").unwrap();
    /// assert_eq!(code.as_str(), "new-co");
    /// assert!(CompanyCode::from_name("!!!").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        let slug = slugify(name);
        if slug.is_empty() {
            return Err(ValidationError::InvalidFormat {
                field: "name",
                reason: "must contain at least one letter or digit",
            });
        }
        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A company ready to insert: code already derived from the name
#[derive(Debug, Clone, PartialEq)]
pub struct NewCompany {
    pub code: CompanyCode,
    pub name: String,
    pub description: Option<String>,
}

impl NewCompany {
    pub fn new(name: &str, description: Option<String>) -> Result<Self, ValidationError> {
        let name = validate_name(name)?;
        let code = CompanyCode::from_name(&name)?;
        Ok(Self {
            code,
            name,
            description,
        })
    }
}

/// Replacement name/description for an existing company
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyUpdate {
    pub name: String,
    pub description: Option<String>,
}

impl CompanyUpdate {
    pub fn new(name: &str, description: Option<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(name)?,
            description,
        })
    }
}

fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field: "name" });
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic_cases() {
        assert_eq!(slugify("New Co"), "new-co");
        assert_eq!(slugify("Apple Computer"), "apple-computer");
        assert_eq!(slugify("AT&T, Inc."), "at-t-inc");
        assert_eq!(slugify("  padded  "), "padded");
    }

    #[test]
    fn slugify_transliterates_accents() {
        assert_eq!(slugify("Café Noir"), "cafe-noir");
        assert_eq!(slugify("Ölwerk GmbH"), "olwerk-gmbh");
        assert_eq!(slugify("Straße"), "strasse");
    }

    #[test]
    fn slugify_truncates_and_cleans() {
        let long = format!("{} tail", "a".repeat(63));
        let slug = slugify(&long);
        assert_eq!(slug.len(), 63);
        assert!(!slug.ends_with('-'));

        let longer = "b".repeat(100);
        assert_eq!(slugify(&longer).len(), MAX_CODE_LEN);
    }

    #[test]
    fn code_from_name_matches_slug() {
        let code = CompanyCode::from_name("International Business Machines").unwrap();
        assert_eq!(code.as_str(), "international-business-machines");
    }

    #[test]
    fn code_from_punctuation_only_name_is_rejected() {
        let err = CompanyCode::from_name("?!").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "name", .. }));
    }

    #[test]
    fn new_company_trims_and_derives_code() {
        let company = NewCompany::new("  New Co ", Some("A new company.".into())).unwrap();
        assert_eq!(company.name, "New Co");
        assert_eq!(company.code.as_str(), "new-co");
        assert_eq!(company.description.as_deref(), Some("A new company."));
    }

    #[test]
    fn blank_name_rejected() {
        assert!(matches!(
            NewCompany::new("   ", None).unwrap_err(),
            ValidationError::Empty { field: "name" }
        ));
        assert!(matches!(
            CompanyUpdate::new("", None).unwrap_err(),
            ValidationError::Empty { field: "name" }
        ));
    }
}
