//! Domain models for the med-advisor engine.

mod advisory;
mod dosage;
mod interaction;
mod request;

pub use advisory::*;
pub use dosage::*;
pub use interaction::*;
pub use request::*;
