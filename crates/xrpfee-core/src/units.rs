//! Conversion between drops and whole XRP for display.
//!
//! Two flavours are provided. [`drops_to_xrp`] never fails: anything that is
//! not a base-10 integer is reported as zero, which keeps the report printable
//! when the node sends garbage but also hides that garbage. Callers that must
//! not silently zero a value use [`drops_to_xrp_strict`].

use tracing::debug;

use crate::error::CoreError;

/// Number of drops in one XRP.
pub const DROPS_PER_XRP: u64 = 1_000_000;

/// Parse a drops string as a signed base-10 integer, falling back to `0` on
/// empty input, non-digit characters, or overflow.
pub fn parse_drops_lenient(drops: &str) -> i64 {
    match drops.parse::<i64>() {
        Ok(n) => n,
        Err(e) => {
            debug!(drops, error = %e, "unparseable drops amount, using 0");
            0
        }
    }
}

/// Convert a drops string to XRP with exactly six fractional digits.
///
/// Unparseable input yields `"0.000000"`. Formatting uses the standard float
/// formatter, which rounds ties to even; integral drops never hit a tie at six
/// places.
pub fn drops_to_xrp(drops: &str) -> String {
    format_xrp(parse_drops_lenient(drops) as f64)
}

/// Like [`drops_to_xrp`], but rejects anything other than a non-negative
/// decimal integer instead of reporting it as zero.
pub fn drops_to_xrp_strict(drops: &str) -> Result<String, CoreError> {
    let n: u64 = drops.parse().map_err(|_| CoreError::InvalidDrops {
        value: drops.to_owned(),
    })?;
    Ok(format_xrp(n as f64))
}

fn format_xrp(drops: f64) -> String {
    format!("{:.6}", drops / DROPS_PER_XRP as f64)
}
