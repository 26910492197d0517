//! Shared traits and identifier types for catalog and booking entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Exposes a stable catalog identifier.
pub trait Identifiable {
    type Id;

    fn id(&self) -> &Self::Id;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Supplies a common contract for retrieving a listed price.
pub trait Priced {
    fn price(&self) -> f64;
}

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

catalog_id!(
    /// Identifier of a venue in the catalog.
    VenueId
);
catalog_id!(
    /// Identifier of an add-on service in the catalog.
    ServiceId
);
catalog_id!(
    /// Identifier of a payment method in the catalog.
    PaymentMethodId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_serialize_as_plain_strings() {
        let id = VenueId::new("3");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"3\"");
        let back: VenueId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn catalog_ids_order_lexically() {
        let mut ids = vec![ServiceId::from("photography"), ServiceId::from("av")];
        ids.sort();
        assert_eq!(ids[0].as_str(), "av");
    }
}
