use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The final status of a payment, derived from a callback or a browser redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentOutcome {
    Completed,
    Failed,
    /// The payment belongs to a different order than the one the merchant expected.
    Mismatch,
}

impl PaymentOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Failed => "Failed",
            Self::Mismatch => "Mismatch",
        }
    }
}

impl Display for PaymentOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
