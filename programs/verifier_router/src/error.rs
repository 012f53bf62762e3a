//! Router errors
//!
//! Address mismatches surface as Anchor's `ErrorCode::ConstraintSeeds`; a
//! rejected proof surfaces as whatever error the verifier program returned.

use anchor_lang::prelude::*;

#[error_code]
pub enum RouterError {
    // ===== Authorization =====
    #[msg("Caller is not the router owner")]
    NotOwner,

    #[msg("Caller is not the pending owner")]
    NotPendingOwner,

    #[msg("Authority used for initialization does not match the value expected by the program")]
    InvalidInitializationAuthority,

    // ===== Registry =====
    #[msg("Attempted to add a verifier program whose upgrade authority is not the router")]
    VerifierInvalidAuthority,

    #[msg("Selector counter exhausted")]
    SelectorCounterOverflow,

    // ===== Dispatch =====
    #[msg("Selector has been deactivated")]
    SelectorDeactivated,

    #[msg("Invalid verifier program")]
    InvalidVerifier,
}

/// Name of the error as it appears in program logs
///
/// Anchor compares errors by numeric code only, and every program's custom
/// codes start at the same offset.
#[cfg(test)]
pub(crate) fn error_name(err: &anchor_lang::error::Error) -> String {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_name.clone(),
        anchor_lang::error::Error::ProgramError(e) => e.program_error.to_string(),
    }
}
