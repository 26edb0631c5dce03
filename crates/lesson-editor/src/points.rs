/// Coerce raw points-field input to a non-negative integer.
///
/// Reads optional leading whitespace, an optional sign and the leading run of
/// ASCII digits; anything after the digits is ignored (`"12abc"` is 12).
/// No digits, or a negative value, yields 0. Values past `u32::MAX` saturate.
pub fn coerce_points(input: &str) -> u32 {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 || negative {
        return 0;
    }
    rest.as_bytes()[..len].iter().fold(0u32, |acc, d| {
        acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
    })
}
