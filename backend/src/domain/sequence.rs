//! Sequential human-readable identifier derivation.
//!
//! Identifiers take the form of a three-letter prefix (`BKG`, `SLT`) followed
//! by a zero-padded numeric suffix. The next identifier is derived from the
//! most-recently-created record of the same entity type; allocation is
//! read-only, so the caller persists the new identifier together with the new
//! record. Because the read is unlocked, concurrent creations can race to the
//! same identifier; that gap is accepted and documented rather than papered
//! over here.

/// Prefix for booking identifiers.
pub const BOOKING_ID_PREFIX: &str = "BKG";
/// Prefix for slot identifiers.
pub const SLOT_ID_PREFIX: &str = "SLT";

/// Width the numeric suffix is padded to.
const SUFFIX_WIDTH: usize = 4;

/// Derive the next identifier in a prefixed sequence.
///
/// Starts at `0001` when there is no latest record, when the latest
/// identifier does not carry the expected prefix, or when its suffix is not
/// numeric. Suffixes past `9999` keep incrementing and simply grow wider;
/// that overflow is allowed, not an error.
///
/// # Examples
/// ```
/// use backend::domain::sequence::next_in_sequence;
///
/// assert_eq!(next_in_sequence("BKG", None), "BKG0001");
/// assert_eq!(next_in_sequence("BKG", Some("BKG0041")), "BKG0042");
/// assert_eq!(next_in_sequence("SLT", Some("SLT9999")), "SLT10000");
/// ```
pub fn next_in_sequence(prefix: &str, latest: Option<&str>) -> String {
    let next = latest
        .and_then(|id| id.strip_prefix(prefix))
        .and_then(|suffix| suffix.parse::<u64>().ok())
        .map_or(1, |current| current + 1);
    format!("{prefix}{next:0width$}", width = SUFFIX_WIDTH)
}
