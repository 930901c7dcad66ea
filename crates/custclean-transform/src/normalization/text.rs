//! Text rules: blank names and loyalty tiers.

/// Placeholder tier found in raw exports.
pub const UNKNOWN_TIER: &str = "UNKNOWN";
/// Tier assigned in place of [`UNKNOWN_TIER`].
pub const BRONZE_TIER: &str = "BRONZE";

/// Placeholder the raw exports use for a missing name.
pub const BLANK_NAME: &str = " ";

/// A name that is empty or only whitespace.
pub fn is_blank_name(value: &str) -> bool {
    value.trim().is_empty()
}

/// Swap `UNKNOWN` for `BRONZE`. The flag reports a replacement.
pub fn replace_unknown_tier(tier: String) -> (String, bool) {
    if tier == UNKNOWN_TIER {
        (BRONZE_TIER.to_string(), true)
    } else {
        (tier, false)
    }
}
