//! Checkout step state machine.
//!
//! A linear flow of CartReview -> UserDetails -> Payment -> Confirmation.
//! Payment is the only step with a conditional bypass: a zero-total cart
//! goes straight from UserDetails to Confirmation.

use crate::cart::CartManager;
use crate::checkout::{CustomerDetails, OrderDraft, OrderGateway, PaymentDetails, PaymentGateway};
use crate::error::CheckoutError;
use crate::ids::OrderId;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Steps in the checkout flow.
///
/// Each variant carries exactly the data relevant to that step: only
/// `Payment` holds the payment session secret, and only the last two
/// know the created order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Cart review.
    CartReview,
    /// Customer details collection.
    UserDetails,
    /// Awaiting payment confirmation for a created order.
    Payment {
        /// The pending order.
        order_id: OrderId,
        /// Payment session secret from the order backend.
        client_secret: String,
    },
    /// Terminal step: order completed.
    Confirmation {
        /// The completed order.
        order_id: OrderId,
    },
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::CartReview => "cart-review",
            CheckoutStep::UserDetails => "user-details",
            CheckoutStep::Payment { .. } => "payment",
            CheckoutStep::Confirmation { .. } => "confirmation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::CartReview => "Review Cart",
            CheckoutStep::UserDetails => "Your Details",
            CheckoutStep::Payment { .. } => "Payment",
            CheckoutStep::Confirmation { .. } => "Confirmation",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::CartReview => 1,
            CheckoutStep::UserDetails => 2,
            CheckoutStep::Payment { .. } => 3,
            CheckoutStep::Confirmation { .. } => 4,
        }
    }

    /// Check if this is the terminal step.
    pub fn is_confirmation(&self) -> bool {
        matches!(self, CheckoutStep::Confirmation { .. })
    }
}

/// State for one pass through checkout.
///
/// Owned by the UI's root composition and threaded through explicitly.
/// Holds a single error message; it is cleared on every field edit and
/// on every successful transition, and set whenever a create-order or
/// payment call fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    step: CheckoutStep,
    details: CustomerDetails,
    requirements: String,
    error: Option<String>,
    processing: bool,
}

impl CheckoutSession {
    /// Create a fresh session at the cart-review step.
    pub fn new() -> Self {
        Self {
            step: CheckoutStep::CartReview,
            details: CustomerDetails::default(),
            requirements: String::new(),
            error: None,
            processing: false,
        }
    }

    /// (Re)enter checkout.
    ///
    /// Refused with [`CheckoutError::EmptyCart`] when the cart has no
    /// lines, except when already at Confirmation: a just-completed
    /// order's confirmation stays visible over the cleared cart. Once
    /// new items exist, entry returns to the initial step as usual.
    pub fn enter(&mut self, cart: &CartManager) -> Result<(), CheckoutError> {
        if cart.cart().is_empty() {
            if self.step.is_confirmation() {
                return Ok(());
            }
            return Err(CheckoutError::EmptyCart);
        }
        self.step = CheckoutStep::CartReview;
        self.error = None;
        self.processing = false;
        Ok(())
    }

    /// Advance from cart review to details collection.
    ///
    /// Unconditional: the customer-details form is required whether the
    /// order is free or paid.
    pub fn begin_details(&mut self) -> Result<(), CheckoutError> {
        if self.step != CheckoutStep::CartReview {
            return Err(self.invalid_transition("user-details"));
        }
        self.step = CheckoutStep::UserDetails;
        self.error = None;
        Ok(())
    }

    /// Submit customer details and create the order.
    ///
    /// Branches on the cart total at the moment of transition: a free
    /// order is created already paid, the cart is cleared, and the flow
    /// skips straight to Confirmation; a paid order is created pending
    /// and the flow advances to Payment. On failure the flow stays at
    /// UserDetails with the error surfaced on the session.
    pub async fn submit_details(
        &mut self,
        cart: &mut CartManager,
        orders: &dyn OrderGateway,
    ) -> Result<(), CheckoutError> {
        if self.step != CheckoutStep::UserDetails {
            return Err(self.invalid_transition("payment"));
        }
        if self.processing {
            return Ok(());
        }
        // The cart is owned independently of the session and may have
        // been emptied since entry; never draft a zero-line order.
        if cart.cart().is_empty() {
            let e = CheckoutError::EmptyCart;
            self.error = Some(surface_message(&e));
            return Err(e);
        }
        if let Err(e) = self.details.validate() {
            self.error = Some(surface_message(&e));
            return Err(e);
        }

        let draft =
            OrderDraft::from_cart(cart.cart(), &self.details, Some(self.requirements.as_str()));
        let free = draft.is_free();

        self.processing = true;
        let result = orders.create_order(&draft).await;
        self.processing = false;

        let receipt = match result {
            Ok(receipt) => receipt,
            Err(e) => {
                warn!(error = %e, "order creation failed");
                self.error = Some(surface_message(&e));
                return Err(e);
            }
        };

        if free {
            cart.clear()?;
            info!(order = %receipt.order_id, "free order completed");
            self.error = None;
            self.step = CheckoutStep::Confirmation {
                order_id: receipt.order_id,
            };
            return Ok(());
        }

        let Some(client_secret) = receipt.client_secret else {
            let e = CheckoutError::OrderCreation(
                "order backend returned no payment session".to_string(),
            );
            self.error = Some(surface_message(&e));
            return Err(e);
        };

        info!(order = %receipt.order_id, "order created, awaiting payment");
        self.error = None;
        self.step = CheckoutStep::Payment {
            order_id: receipt.order_id,
            client_secret,
        };
        Ok(())
    }

    /// Confirm the payment for the pending order.
    ///
    /// On success the cart is cleared and the flow reaches Confirmation.
    /// On failure the flow stays at Payment with the processor's message
    /// surfaced verbatim; the user may retry.
    pub async fn confirm_payment(
        &mut self,
        cart: &mut CartManager,
        payments: &dyn PaymentGateway,
        payment_details: &PaymentDetails,
    ) -> Result<(), CheckoutError> {
        let (order_id, client_secret) = match &self.step {
            CheckoutStep::Payment {
                order_id,
                client_secret,
            } => (order_id.clone(), client_secret.clone()),
            _ => return Err(self.invalid_transition("confirmation")),
        };
        if self.processing {
            return Ok(());
        }

        self.processing = true;
        let result = payments.confirm_payment(&client_secret, payment_details).await;
        self.processing = false;

        match result {
            Ok(()) => {
                cart.clear()?;
                info!(order = %order_id, "payment confirmed");
                self.error = None;
                self.step = CheckoutStep::Confirmation { order_id };
                Ok(())
            }
            Err(e) => {
                warn!(order = %order_id, error = %e, "payment failed");
                self.error = Some(surface_message(&e));
                Err(e)
            }
        }
    }

    /// Navigate one step back.
    ///
    /// Permitted from UserDetails and Payment only; Confirmation has no
    /// backward transition.
    pub fn back(&mut self) -> Result<(), CheckoutError> {
        let prev = match self.step {
            CheckoutStep::UserDetails => CheckoutStep::CartReview,
            CheckoutStep::Payment { .. } => CheckoutStep::UserDetails,
            _ => return Err(self.invalid_transition("back")),
        };
        self.step = prev;
        self.error = None;
        Ok(())
    }

    /// Reset the whole session for a new order.
    pub fn start_new_order(&mut self) {
        *self = Self::new();
    }

    /// Current step.
    pub fn step(&self) -> &CheckoutStep {
        &self.step
    }

    /// Current error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Check if a create-order or payment call is in flight. Blocks
    /// re-submission.
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// The created order's identifier, once one exists.
    pub fn order_id(&self) -> Option<&OrderId> {
        match &self.step {
            CheckoutStep::Payment { order_id, .. }
            | CheckoutStep::Confirmation { order_id } => Some(order_id),
            _ => None,
        }
    }

    /// Customer details as entered so far.
    pub fn details(&self) -> &CustomerDetails {
        &self.details
    }

    /// Service-requirements notes as entered so far.
    pub fn requirements(&self) -> &str {
        &self.requirements
    }

    /// Set the customer email. Clears any error.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.details.email = email.into();
        self.error = None;
    }

    /// Set the customer first name. Clears any error.
    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.details.first_name = first_name.into();
        self.error = None;
    }

    /// Set the customer last name. Clears any error.
    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.details.last_name = last_name.into();
        self.error = None;
    }

    /// Set the customer phone number. Clears any error.
    pub fn set_phone(&mut self, phone: Option<String>) {
        self.details.phone = phone;
        self.error = None;
    }

    /// Set the service-requirements notes. Clears any error.
    pub fn set_requirements(&mut self, requirements: impl Into<String>) {
        self.requirements = requirements.into();
        self.error = None;
    }

    fn invalid_transition(&self, to: &str) -> CheckoutError {
        CheckoutError::InvalidTransition {
            from: self.step.as_str().to_string(),
            to: to.to_string(),
        }
    }
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Message stored on the session for a failed call.
///
/// Collaborator failures surface the backend's or processor's message
/// verbatim; everything else uses the error's display form.
fn surface_message(e: &CheckoutError) -> String {
    match e {
        CheckoutError::OrderCreation(msg) | CheckoutError::Payment(msg) => msg.clone(),
        other => other.to_string(),
    }
}
