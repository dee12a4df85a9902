//! Color and identifier generation

use rand::Rng;
use uuid::Uuid;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Random `#RRGGBB` color using the thread-local RNG
///
/// ```
/// use awesome_common::helpers::generate_random_color;
///
/// let color = generate_random_color();
/// assert_eq!(color.len(), 7);
/// assert!(color.starts_with('#'));
/// ```
#[must_use]
pub fn generate_random_color() -> String {
    generate_random_color_with(&mut rand::thread_rng())
}

/// Random `#RRGGBB` color drawn from `rng`, uppercase hex digits
pub fn generate_random_color_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut color = String::with_capacity(7);
    color.push('#');
    for _ in 0..6 {
        color.push(char::from(HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())]));
    }
    color
}

/// `#RRGGBB` for the given channels, uppercase
///
/// ```
/// use awesome_common::helpers::rgb_to_hex;
///
/// assert_eq!(rgb_to_hex(255, 87, 51), "#FF5733");
/// ```
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Random version 4 UUID in hyphenated form
#[must_use]
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}
