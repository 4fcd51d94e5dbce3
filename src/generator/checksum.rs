// GB 11643 weighted checksum over the 17-digit body.
// Weights and check mapping as constants, index 0 aligned with body position 0.
const WEIGHTS: [u8; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];
const CHECK_MAPPING: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

// Assumes exactly 17 ASCII digits; callers validate the shape first.
pub(crate) fn weighted_check(body: &[u8]) -> char {
    let mut sum = 0usize;
    for i in 0..17 {
        let digit = (body[i] - b'0') as usize;
        sum += digit * WEIGHTS[i] as usize;
    }
    CHECK_MAPPING[sum % 11]
}

/// Check character for a 17-digit body, or `None` if the body is not exactly
/// 17 decimal digits. Pure: identical input always yields identical output.
pub fn check_char(body: &str) -> Option<char> {
    let bytes = body.as_bytes();
    if bytes.len() != 17 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(weighted_check(bytes))
}

/// Whether `number` is 17 digits plus a matching check character. The check
/// character must be a digit or uppercase `X`; anything else (wrong length,
/// inner non-digits, lowercase `x`) is simply invalid, never an error.
pub fn validate(number: &str) -> bool {
    let bytes = number.as_bytes();
    if bytes.len() != 18 {
        return false;
    }
    let (body, check) = bytes.split_at(17);
    if !body.iter().all(u8::is_ascii_digit) {
        return false;
    }
    if !(check[0].is_ascii_digit() || check[0] == b'X') {
        return false;
    }
    weighted_check(body) == check[0] as char
}
