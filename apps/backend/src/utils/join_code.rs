//! Room join-code generation.
//!
//! Codes are 6-character strings over Crockford's Base32 alphabet, short
//! enough to read out loud and free of the easily-confused letters.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U
const CODE_LEN: usize = 6;

pub fn generate_room_code() -> String {
    let mut rng = StdRng::from_os_rng();
    (0..CODE_LEN)
        .map(|_| CROCKFORD[rng.random_range(0..CROCKFORD.len())] as char)
        .collect()
}
