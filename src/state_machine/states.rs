use serde::{Deserialize, Serialize};
use std::fmt;

/// Purchase order status enumeration.
///
/// The Display/FromStr strings are the literal values persisted in the
/// database and shown in the UI; there are no numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoStatus {
    /// Being edited, not yet submitted for approval
    Draft,
    /// Submitted and awaiting approval
    Open,
    /// Approved and released to the vendor
    Active,
    /// All work complete
    Closed,
    /// Terminated before completion
    Cancelled,
}

impl PoStatus {
    /// Every status, in lifecycle order. Handy for dropdowns and tests.
    pub const ALL: [PoStatus; 5] = [
        Self::Draft,
        Self::Open,
        Self::Active,
        Self::Closed,
        Self::Cancelled,
    ];

    /// Check if this is a terminal status (no further transitions allowed)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed | Self::Cancelled)
    }

    /// Check if the PO is released to a vendor and accruing work
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for PoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "Draft"),
            Self::Open => write!(f, "Open"),
            Self::Active => write!(f, "Active"),
            Self::Closed => write!(f, "Closed"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::str::FromStr for PoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" => Ok(Self::Draft),
            "Open" => Ok(Self::Open),
            "Active" => Ok(Self::Active),
            "Closed" => Ok(Self::Closed),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("Invalid purchase order status: {s}")),
        }
    }
}

/// Default status for new purchase orders
impl Default for PoStatus {
    fn default() -> Self {
        Self::Draft
    }
}

/// Rental request status enumeration.
///
/// Rentals have their own lifecycle, tracked outside this engine; the
/// workflow engine only cares which statuses block PO closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RentalStatus {
    /// Submitted by a requester, not yet reviewed
    Submitted,
    /// Approved and awaiting equipment
    Pending,
    /// Equipment in use
    Active,
    /// Equipment delivered, awaiting pickup/return processing
    Delivered,
    /// Request denied
    Denied,
}

impl RentalStatus {
    pub const ALL: [RentalStatus; 5] = [
        Self::Submitted,
        Self::Pending,
        Self::Active,
        Self::Delivered,
        Self::Denied,
    ];

    /// Check if a rental in this status blocks closure of a linked PO
    pub fn blocks_po_closure(&self) -> bool {
        matches!(self, Self::Active | Self::Delivered | Self::Pending)
    }
}

impl fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submitted => write!(f, "Submitted"),
            Self::Pending => write!(f, "Pending"),
            Self::Active => write!(f, "Active"),
            Self::Delivered => write!(f, "Delivered"),
            Self::Denied => write!(f, "Denied"),
        }
    }
}

impl std::str::FromStr for RentalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Submitted" => Ok(Self::Submitted),
            "Pending" => Ok(Self::Pending),
            "Active" => Ok(Self::Active),
            "Delivered" => Ok(Self::Delivered),
            "Denied" => Ok(Self::Denied),
            _ => Err(format!("Invalid rental status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_po_status_terminal_check() {
        assert!(PoStatus::Closed.is_terminal());
        assert!(PoStatus::Cancelled.is_terminal());
        assert!(!PoStatus::Draft.is_terminal());
        assert!(!PoStatus::Open.is_terminal());
        assert!(!PoStatus::Active.is_terminal());
    }

    #[test]
    fn test_rental_status_closure_blocking() {
        assert!(RentalStatus::Active.blocks_po_closure());
        assert!(RentalStatus::Delivered.blocks_po_closure());
        assert!(RentalStatus::Pending.blocks_po_closure());
        assert!(!RentalStatus::Submitted.blocks_po_closure());
        assert!(!RentalStatus::Denied.blocks_po_closure());
    }

    #[test]
    fn test_status_string_conversion() {
        assert_eq!(PoStatus::Cancelled.to_string(), "Cancelled");
        assert_eq!("Open".parse::<PoStatus>().unwrap(), PoStatus::Open);
        assert!("open".parse::<PoStatus>().is_err());

        assert_eq!(RentalStatus::Delivered.to_string(), "Delivered");
        assert_eq!(
            "Submitted".parse::<RentalStatus>().unwrap(),
            RentalStatus::Submitted
        );
    }

    #[test]
    fn test_status_serde_uses_wire_strings() {
        let status = PoStatus::Active;
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, "\"Active\"");

        let parsed: PoStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, status);
    }

    #[test]
    fn test_display_round_trips_for_all_statuses() {
        for status in PoStatus::ALL {
            assert_eq!(status.to_string().parse::<PoStatus>().unwrap(), status);
        }
        for status in RentalStatus::ALL {
            assert_eq!(status.to_string().parse::<RentalStatus>().unwrap(), status);
        }
    }
}
