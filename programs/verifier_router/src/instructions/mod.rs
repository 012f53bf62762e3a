// Instruction handlers for the verifier router

pub mod add_verifier;
pub mod emergency_stop;
pub mod initialize;
pub mod manage_ownership;
pub mod verify;

pub use add_verifier::*;
pub use emergency_stop::*;
pub use initialize::*;
pub use manage_ownership::*;
pub use verify::*;
