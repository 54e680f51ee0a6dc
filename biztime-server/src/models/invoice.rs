//! Invoice input validation

use super::ValidationError;

/// Invoice amount: finite and strictly positive (matches the `amt > 0` check)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::OutOfRange {
                field: "amt",
                reason: "must be a finite number",
            });
        }
        if value <= 0.0 {
            return Err(ValidationError::OutOfRange {
                field: "amt",
                reason: "must be greater than zero",
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Invoice to insert; `paid` and `add_date` take their defaults
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub comp_code: String,
    pub amt: Amount,
}

impl NewInvoice {
    pub fn new(comp_code: &str, amt: f64) -> Result<Self, ValidationError> {
        if comp_code.is_empty() {
            return Err(ValidationError::Empty { field: "comp_code" });
        }
        Ok(Self {
            comp_code: comp_code.to_owned(),
            amt: Amount::new(amt)?,
        })
    }
}

/// New amount and paid flag for an existing invoice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoiceUpdate {
    pub amt: Amount,
    pub paid: bool,
}

impl InvoiceUpdate {
    pub fn new(amt: f64, paid: bool) -> Result<Self, ValidationError> {
        Ok(Self {
            amt: Amount::new(amt)?,
            paid,
        })
    }
}
