use serde::{Deserialize, Serialize};

use crate::common::*;

/// A payment option offered at checkout. No payment is ever processed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    pub name: String,
    pub description: String,
}

impl PaymentMethod {
    pub fn new(
        id: impl Into<PaymentMethodId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Identifiable for PaymentMethod {
    type Id = PaymentMethodId;

    fn id(&self) -> &PaymentMethodId {
        &self.id
    }
}

impl NamedEntity for PaymentMethod {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for PaymentMethod {
    fn display_label(&self) -> String {
        format!("{} - {}", self.name, self.description)
    }
}
