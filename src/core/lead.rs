//! Lead capture: submission payload, outcome and form state
//!
//! Shared by the browser form (`ui::lead_form`) and the server route that
//! forwards submissions to the email endpoint (`core::lead_api`).

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Same-origin route the lead form posts to
pub const LEAD_API_PATH: &str = "/api/leads";

/// External endpoint used when `LEAD_ENDPOINT_URL` is not set
pub const DEFAULT_LEAD_ENDPOINT: &str = "https://api.replydesk.io/v1/send-email";

/// Status line shown after a successful submission
pub const SUCCESS_STATUS: &str = "Thanks! We'll be in touch within one business day.";

/// Status line shown after a failed submission
pub const FAILURE_STATUS: &str = "Something went wrong. Please try again later.";

/// Plans offered in the pricing section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum PricingPlan {
    #[display("starter")]
    Starter,
    #[display("growth")]
    Growth,
    #[display("enterprise")]
    Enterprise,
}

impl PricingPlan {
    pub const ALL: [PricingPlan; 3] = [
        PricingPlan::Starter,
        PricingPlan::Growth,
        PricingPlan::Enterprise,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PricingPlan::Starter => "Starter",
            PricingPlan::Growth => "Growth",
            PricingPlan::Enterprise => "Enterprise",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|plan| plan.to_string() == s)
    }
}

/// JSON body of a lead submission
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub user_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

impl LeadSubmission {
    pub fn new(user_email: impl Into<String>) -> Self {
        Self {
            user_email: user_email.into().trim().to_string(),
            name: None,
            mobile: None,
            plan: None,
        }
    }

    pub fn name(mut self, name: impl AsRef<str>) -> Self {
        self.name = non_blank(name.as_ref());
        self
    }

    pub fn mobile(mut self, mobile: impl AsRef<str>) -> Self {
        self.mobile = non_blank(mobile.as_ref());
        self
    }

    pub fn plan(mut self, plan: Option<PricingPlan>) -> Self {
        self.plan = plan.map(|p| p.to_string());
        self
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Result of one submission attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

impl From<Result<(), LeadError>> for SubmissionOutcome {
    fn from(result: Result<(), LeadError>) -> Self {
        match result {
            Ok(()) => SubmissionOutcome::Success,
            Err(e) => SubmissionOutcome::Failure(e.to_string()),
        }
    }
}

/// Errors while delivering a lead to the email endpoint
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Endpoint rejected submission ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Error body returned by the lead route
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    pub code: u16,
}

/// Status line displayed under the form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    Sent,
    Failed,
}

impl SubmissionStatus {
    pub fn message(&self) -> &'static str {
        match self {
            SubmissionStatus::Sent => SUCCESS_STATUS,
            SubmissionStatus::Failed => FAILURE_STATUS,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SubmissionStatus::Failed)
    }
}

/// Submission bookkeeping for one form instance
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFormState {
    is_submitting: bool,
    status: Option<SubmissionStatus>,
}

impl LeadFormState {
    /// Mark a submission as started.
    ///
    /// Returns `false` while another submission is still in flight; the
    /// caller must not send anything then.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        self.is_submitting = true;
        self.status = None;
        true
    }

    /// Record the outcome of the in-flight submission
    pub fn finish(&mut self, outcome: &SubmissionOutcome) {
        self.is_submitting = false;
        self.status = Some(match outcome {
            SubmissionOutcome::Success => SubmissionStatus::Sent,
            SubmissionOutcome::Failure(_) => SubmissionStatus::Failed,
        });
    }

    /// Clear the status line, e.g. when the modal is reopened
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn status(&self) -> Option<SubmissionStatus> {
        self.status
    }
}
