//! Lead capture: the contact details that gate entry into the quiz.

use serde::{Deserialize, Serialize};

use crate::error::{DiagnosticError, LeadField};

/// Contact details captured before the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadInfo {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub business: Option<String>,
}

/// Rules applied when a lead is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadPolicy {
    /// Reject emails that are not shaped like `local@domain.tld`.
    #[serde(default)]
    pub validate_email: bool,
    /// Treat the business name as required.
    #[serde(default)]
    pub require_business: bool,
}

impl LeadInfo {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        business: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            business,
        }
    }

    /// Check required fields and return a trimmed copy.
    ///
    /// A blank business name becomes `None`.
    pub fn validate(&self, policy: &LeadPolicy) -> Result<LeadInfo, DiagnosticError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let business = self
            .business
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty());

        if name.is_empty() {
            return Err(DiagnosticError::MissingField(LeadField::Name));
        }
        if email.is_empty() {
            return Err(DiagnosticError::MissingField(LeadField::Email));
        }
        if policy.require_business && business.is_none() {
            return Err(DiagnosticError::MissingField(LeadField::Business));
        }
        if policy.validate_email && !is_email_shaped(email) {
            return Err(DiagnosticError::InvalidEmail(email.to_string()));
        }

        Ok(LeadInfo {
            name: name.to_string(),
            email: email.to_string(),
            business: business.map(str::to_string),
        })
    }
}

/// Loose structural check: one `@`, non-empty local part, dotted domain.
pub fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}
