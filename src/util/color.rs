//! Hex color strings ↔ linear RGB triples.
//!
//! Light colors travel through the scene state as `#rrggbb` strings (the
//! form a color picker produces); the renderer wants `[f32; 3]` in `[0, 1]`.

/// Parse `#rrggbb` (or `#rgb`) into an RGB triple in `[0, 1]`.
///
/// Returns `None` for anything else, including missing `#`.
#[must_use]
pub fn parse_hex(hex: &str) -> Option<[f32; 3]> {
    let digits = hex.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channels = match digits.len() {
        6 => [
            u8::from_str_radix(&digits[0..2], 16).ok()?,
            u8::from_str_radix(&digits[2..4], 16).ok()?,
            u8::from_str_radix(&digits[4..6], 16).ok()?,
        ],
        3 => {
            let mut out = [0u8; 3];
            for (slot, i) in out.iter_mut().zip(0..3) {
                let nibble = u8::from_str_radix(&digits[i..=i], 16).ok()?;
                *slot = nibble * 17;
            }
            out
        }
        _ => return None,
    };
    Some(channels.map(|c| f32::from(c) / 255.0))
}
