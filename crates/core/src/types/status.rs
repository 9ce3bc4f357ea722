//! Order status workflow and staff roles.

use serde::{Deserialize, Serialize};

/// Fulfilment status of an order.
///
/// The usual flow is `pending → progress → ready → collected`, driven from
/// the barista board. The store itself does not enforce forward-only
/// transitions: [`OrderStatus::next`] is advisory and a status update may
/// overwrite any prior value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Progress,
    Ready,
    Collected,
}

impl OrderStatus {
    /// All statuses in workflow order.
    pub const ALL: [Self; 4] = [Self::Pending, Self::Progress, Self::Ready, Self::Collected];

    /// The persisted string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Progress => "progress",
            Self::Ready => "ready",
            Self::Collected => "collected",
        }
    }

    /// The next stage in the workflow, or `None` once collected.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Progress),
            Self::Progress => Some(Self::Ready),
            Self::Ready => Some(Self::Collected),
            Self::Collected => None,
        }
    }

    /// Whether the order has reached the terminal stage.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Collected)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "progress" => Ok(Self::Progress),
            "ready" => Ok(Self::Ready),
            "collected" => Ok(Self::Collected),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Staff role gating the two consoles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    /// Menu management, theme, analytics.
    Admin,
    /// Order board and status workflow.
    Barista,
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => f.write_str("admin"),
            Self::Barista => f.write_str("barista"),
        }
    }
}

impl std::str::FromStr for StaffRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "barista" => Ok(Self::Barista),
            _ => Err(format!("invalid staff role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn status_string_roundtrip() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("cancelled".parse::<OrderStatus>().is_err());
        assert!("PENDING".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn workflow_walks_forward_to_terminal() {
        let mut status = OrderStatus::Pending;
        let mut seen = vec![status];
        while let Some(next) = status.next() {
            status = next;
            seen.push(status);
        }
        assert_eq!(seen, OrderStatus::ALL);
        assert!(status.is_terminal());
    }

    #[test]
    fn role_parse() {
        assert_eq!("barista".parse::<StaffRole>().unwrap(), StaffRole::Barista);
        assert!("customer".parse::<StaffRole>().is_err());
    }
}
