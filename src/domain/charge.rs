use {
    super::money::MoneyAmount,
    super::notification::NotificationKind,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// A single donation attempt, scoped to one HTTP request.
///
/// `amount` stays a raw string: the submitted value is passed through to the
/// processor uninterpreted, and parsing happens only at the gateway boundary
/// and for display text.
#[derive(Debug, Clone, Deserialize)]
pub struct DonationRequest {
    pub amount: String,
    pub token: String,
    pub email: String,
}

impl DonationRequest {
    /// Dollar rendering of the submitted amount, for logs and notification
    /// text. Falls back to the raw string when the amount is not a valid
    /// non-negative integer.
    pub fn display_amount(&self) -> String {
        self.amount
            .parse::<i64>()
            .ok()
            .and_then(|cents| MoneyAmount::new(cents).ok())
            .map(|m| m.to_string())
            .unwrap_or_else(|| self.amount.clone())
    }
}

/// Structured error payload reported by the processor, rendered verbatim in
/// the `/charge` error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorErrorBody {
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decline_code: Option<String>,
}

impl ProcessorErrorBody {
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            message: Some(message.into()),
            decline_code: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new("invalid_request_error", message)
    }

    pub fn connectivity(message: impl Into<String>) -> Self {
        Self::new("api_connection_error", message)
    }
}

impl fmt::Display for ProcessorErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{msg}")?,
            None => write!(f, "{}", self.error_type)?,
        }
        if let Some(code) = &self.decline_code {
            write!(f, " ({code})")?;
        }
        Ok(())
    }
}

/// Classified result of a charge attempt. Replaces exception control flow:
/// the gateway returns one of these for every call, never an unhandled fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChargeOutcome {
    Succeeded {
        charge_id: String,
    },
    /// The card issuer refused the transaction. A normal user-facing
    /// outcome, not a system fault.
    CardDeclined {
        status: u16,
        error: ProcessorErrorBody,
    },
    /// The processor's own service or logic failure. Operator-actionable.
    ProcessorError {
        status: u16,
        error: ProcessorErrorBody,
    },
    /// Connectivity, timeout, or authentication failure reaching the
    /// processor. Handled exactly like `ProcessorError`.
    TransientError {
        status: u16,
        error: ProcessorErrorBody,
    },
}

impl ChargeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    pub fn error(&self) -> Option<&ProcessorErrorBody> {
        match self {
            Self::Succeeded { .. } => None,
            Self::CardDeclined { error, .. }
            | Self::ProcessorError { error, .. }
            | Self::TransientError { error, .. } => Some(error),
        }
    }

    /// Which notification class this outcome fires, if any. Declines fire
    /// none: they are not operator-actionable.
    pub fn notification_kind(&self) -> Option<NotificationKind> {
        match self {
            Self::Succeeded { .. } => Some(NotificationKind::Success),
            Self::CardDeclined { .. } => None,
            Self::ProcessorError { .. } | Self::TransientError { .. } => {
                Some(NotificationKind::Failure)
            }
        }
    }
}
