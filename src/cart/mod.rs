pub mod cart;
pub mod checkout;
pub mod store;

pub use cart::{Cart, CartChange, CartError, CartItem};
pub use checkout::CheckoutSummary;
pub use store::CartStore;
