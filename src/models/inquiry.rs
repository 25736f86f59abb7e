use serde::{Deserialize, Serialize};

/// A contact-form inquiry. Exists for the duration of a single relay
/// request; never stored, never referenced afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub project_type: String,
    pub budget: String,
    pub timeline: String,
    pub description: String,
}

impl Inquiry {
    /// Required fields that are empty. The selector values are not checked
    /// against the option lists; the rendered form constrains those, and the
    /// relay forwards them as opaque text.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.email.is_empty() {
            missing.push("email");
        }
        if self.project_type.is_empty() {
            missing.push("projectType");
        }
        if self.budget.is_empty() {
            missing.push("budget");
        }
        if self.timeline.is_empty() {
            missing.push("timeline");
        }
        if self.description.is_empty() {
            missing.push("description");
        }
        missing
    }

    /// True when every required field is populated. Company is optional.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Company name for display, with the fixed fallback for an absent or
    /// empty value.
    pub fn company_display(&self) -> &str {
        match self.company.as_deref() {
            Some(company) if !company.is_empty() => company,
            _ => "Not specified",
        }
    }
}
