mod auth_flow;
mod auth_guard;
mod debounce;
mod library;
mod prediction;
mod router;
mod token_store;
mod validation;

pub use auth_flow::*;
pub use auth_guard::*;
pub use debounce::*;
pub use library::*;
pub use prediction::*;
pub use router::*;
pub use token_store::*;
pub use validation::*;
