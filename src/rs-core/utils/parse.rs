/// Read the integer found at the start of `value`, ignoring leading whitespace
/// and everything after the last digit, the same way JavaScript's `parseInt`
/// does with a radix of 10.
///
/// Returns `None` if no digit is found right after the optional sign. Integers
/// not fitting in an `i64` saturate to `i64::MAX` or `i64::MIN`, keeping their
/// sign.
pub(crate) fn read_leading_integer(value: &str) -> Option<i64> {
    let value = value.trim_start().as_bytes();
    let mut i = 0;
    if i < value.len() && (value[i] == b'-' || value[i] == b'+') {
        i += 1;
    }
    let digits_start = i;
    while i < value.len() && value[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    // UNSAFE: We already checked that this slice only contains ASCII
    let val_str = unsafe { std::str::from_utf8_unchecked(&value[..i]) };
    match val_str.parse::<i64>() {
        Ok(val) => Some(val),
        // Only an overflow can fail here
        Err(_) if value[0] == b'-' => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}
