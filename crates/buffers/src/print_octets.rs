//! Hex rendering of opaque bytes.

/// Formats a byte slice as space-separated lowercase hex.
///
/// At most `max` bytes are rendered; the remainder is summarised.
///
/// # Example
///
/// ```
/// use sbe_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0x01, 0x02, 0x0a, 0xff], 16), "01 02 0a ff");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    let mut result = String::with_capacity(octets.len().min(max) * 3);
    for (i, byte) in octets.iter().take(max).enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push_str(&format!("{:02x}", byte));
    }

    if octets.len() > max {
        result.push_str(&format!("... ({} more)", octets.len() - max));
    }

    result
}
