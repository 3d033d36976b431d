//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `UserId` where a `UnitId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(UserId, "Unique identifier for a user (issued by the identity provider).");
typed_id!(UnitId, "Unique identifier for a housing unit.");
typed_id!(MemberId, "Unique identifier for a unit membership.");
typed_id!(ExpenseId, "Unique identifier for an expense.");
typed_id!(
    ExpectedExpenseId,
    "Unique identifier for an expected-expense template row."
);
typed_id!(
    ExpectedEntryId,
    "Unique identifier for a materialized expected-expense entry."
);
typed_id!(BalancePaymentId, "Unique identifier for a balance payment.");
typed_id!(ContributionId, "Unique identifier for an ad-hoc contribution request.");
typed_id!(
    ContributionPaymentId,
    "Unique identifier for a payment against a contribution request."
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = UnitId::from_uuid(uuid);
        assert_eq!(id.into_inner(), uuid);
        assert_eq!(UnitId::from(uuid), id);
    }

    #[test]
    fn test_typed_id_display_and_parse() {
        let uuid = Uuid::new_v4();
        let id = UserId::from_uuid(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
        assert_eq!(UserId::from_str(&uuid.to_string()).unwrap(), id);
    }

    #[test]
    fn test_typed_id_from_str_error() {
        assert!(MemberId::from_str("invalid").is_err());
    }

    #[test]
    fn test_typed_ids_are_unique() {
        assert_ne!(ExpenseId::new(), ExpenseId::new());
    }
}
