//! Build-time configuration
//!
//! `INITIAL_OWNER` is captured by `build.rs`. The all-zero key leaves
//! initialization open to the first caller; any other key pins it.

use anchor_lang::prelude::*;
use std::str::FromStr;

use crate::error::RouterError;

/// Raw `INITIAL_OWNER` value baked in at build time
pub const INITIAL_OWNER: &str = env!("INITIAL_OWNER");

/// Authority expected to call `initialize`, if one was configured
pub fn initial_owner() -> Result<Option<Pubkey>> {
    parse_initial_owner(INITIAL_OWNER)
}

pub(crate) fn parse_initial_owner(raw: &str) -> Result<Option<Pubkey>> {
    let key = Pubkey::from_str(raw.trim()).map_err(|_| {
        msg!("INITIAL_OWNER is not a valid public key: {}", raw);
        error!(RouterError::InvalidInitializationAuthority)
    })?;

    if key == Pubkey::default() {
        Ok(None)
    } else {
        Ok(Some(key))
    }
}
