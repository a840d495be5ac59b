//! Domain types.

mod bundle;
mod env;
pub mod identity;

pub use bundle::{Scalar, SecretBundle};
pub use env::ConfigSet;
pub use identity::Identity;
