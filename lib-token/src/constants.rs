//! Token Constants

use lib_types::Amount;

/// Token display name
pub const TOKEN_NAME: &str = "SporeToken";

/// Token symbol
pub const TOKEN_SYMBOL: &str = "SPORE";

/// Number of decimal places
pub const DECIMALS: u8 = 18;

/// One whole token in base units (10^18)
pub const ONE_TOKEN: Amount = 1_000_000_000_000_000_000;

/// Fixed total supply: 1,000,000 whole tokens (10^24 base units).
/// Minted once at construction; only burning reduces it.
pub const TOTAL_SUPPLY: Amount = 1_000_000 * ONE_TOKEN;

/// Each emission releases treasury / EMISSION_DIVISOR (10% of whatever
/// remains, a geometric-decay schedule)
pub const EMISSION_DIVISOR: Amount = 10;

/// Presale allocation moves treasury / PRESALE_DIVISOR per call
pub const PRESALE_DIVISOR: Amount = 2;

// Supply must be exactly 10^24 base units; the divisors must never be
// zero. Compilation fails if any of these drift.
const _: () = assert!(TOTAL_SUPPLY == 1_000_000_000_000_000_000_000_000);
const _: () = assert!(EMISSION_DIVISOR > 0 && PRESALE_DIVISOR > 0);
