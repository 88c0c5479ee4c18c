//! External order and payment collaborator seams.
//!
//! The checkout state machine only distinguishes "succeeded" from
//! "failed"; retries and timeouts are the collaborators' business.

use crate::checkout::OrderDraft;
use crate::error::CheckoutError;
use crate::ids::OrderId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// What the order backend returns for a created order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderReceipt {
    /// Identifier of the created order.
    pub order_id: OrderId,
    /// Payment session secret for pending orders; absent for free orders.
    pub client_secret: Option<String>,
}

/// Tokenized payment details handed to the processor.
///
/// Raw card data never passes through this crate; the token comes from
/// the processor's client-side tokenization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentDetails {
    /// Processor-issued card token.
    pub card_token: String,
}

impl PaymentDetails {
    /// Wrap a processor-issued card token.
    pub fn new(card_token: impl Into<String>) -> Self {
        Self {
            card_token: card_token.into(),
        }
    }
}

/// Order persistence backend.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Create an order from the draft.
    ///
    /// Implementations report rejection as
    /// [`CheckoutError::OrderCreation`] with a human-readable message.
    async fn create_order(&self, draft: &OrderDraft) -> Result<OrderReceipt, CheckoutError>;
}

/// Payment processor.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Confirm the payment for the given session.
    ///
    /// Implementations report any non-success as
    /// [`CheckoutError::Payment`] carrying the processor's message.
    async fn confirm_payment(
        &self,
        client_secret: &str,
        details: &PaymentDetails,
    ) -> Result<(), CheckoutError>;
}
