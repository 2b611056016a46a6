pub mod interaction;
pub mod log;
pub mod store;

pub use interaction::{Interaction, InteractionKind};
pub use log::InteractionLog;
pub use store::InteractionStore;
