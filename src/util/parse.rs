/// Parses a Discord snowflake ID from a string.
///
/// Snowflakes are non-zero `u64` values; Serenity's ID constructors panic on zero, so
/// zero is rejected here.
///
/// # Arguments
/// - `value` - The string to attempt to parse, surrounding whitespace is ignored
///
/// # Returns
/// - `Some(u64)` - Successfully parsed a non-zero ID
/// - `None` - Not a number, or zero
pub fn parse_snowflake(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|id| *id != 0)
}
