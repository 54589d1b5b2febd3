//! Privileges granted by a membership tier.

use serde::{Deserialize, Serialize};

/// Category of a tier privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivilegeKind {
    /// Percentage off the order total.
    Discount,
    /// Multiplier applied to earned points.
    Points,
    /// Bonus points on the customer's birthday.
    Birthday,
    /// Priority seating and reservations.
    Priority,
    /// Delivery fee waived.
    FreeDelivery,
    /// Access to members-only dishes and events.
    Exclusive,
}

impl PrivilegeKind {
    /// Returns the wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrivilegeKind::Discount => "discount",
            PrivilegeKind::Points => "points",
            PrivilegeKind::Birthday => "birthday",
            PrivilegeKind::Priority => "priority",
            PrivilegeKind::FreeDelivery => "free_delivery",
            PrivilegeKind::Exclusive => "exclusive",
        }
    }
}

impl std::fmt::Display for PrivilegeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single benefit attached to a tier. Read-only once the tier table is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Privilege {
    #[serde(rename = "type")]
    pub kind: PrivilegeKind,
    pub name: String,
    pub description: String,
    /// Display string, e.g. "85%" or "2x".
    pub value: String,
    pub icon: String,
}

impl Privilege {
    pub fn new(
        kind: PrivilegeKind,
        name: impl Into<String>,
        description: impl Into<String>,
        value: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            value: value.into(),
            icon: icon.into(),
        }
    }
}
