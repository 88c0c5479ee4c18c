//! Checkout module.
//!
//! Contains the checkout step state machine, customer details, order
//! drafts, and the external order/payment collaborator seams.

mod customer;
mod flow;
mod gateway;
mod order;

pub use customer::CustomerDetails;
pub use flow::{CheckoutSession, CheckoutStep};
pub use gateway::{OrderGateway, OrderReceipt, PaymentDetails, PaymentGateway};
pub use order::{Order, OrderDraft, OrderStatus, PaymentMethod};
