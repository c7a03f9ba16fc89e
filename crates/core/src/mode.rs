//! The operating mode of a conversation.

use serde::{Deserialize, Serialize};

/// Which persona governs the replies of a conversation.
///
/// Resolved once (by classification or by the visitor picking an agent) and
/// then pinned by the client for the rest of the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Products, technology and company questions
    Customer,
    /// Jobs, careers and culture questions
    Recruitment,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Customer, Mode::Recruitment];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Customer => "customer",
            Mode::Recruitment => "recruitment",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "customer" => Ok(Mode::Customer),
            "recruitment" => Ok(Mode::Recruitment),
            other => Err(format!(
                "unknown agent '{other}' (expected 'customer' or 'recruitment')"
            )),
        }
    }
}
