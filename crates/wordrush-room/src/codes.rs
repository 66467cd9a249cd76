//! Room-code generation.
//!
//! Codes are short enough to read out loud and typed by hand, so the
//! alphabet drops the visually confusable `0/O/1/I`. Generation does not
//! enforce uniqueness — the registry checks the candidate against its
//! live table and regenerates on collision.

use rand::Rng;
use wordrush_protocol::RoomCode;

/// 32 symbols: A-Z and 2-9 minus `O`, `I`, `0`, `1`.
pub const CODE_ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of every room code.
pub const CODE_LEN: usize = 6;

/// Draws a code uniformly from the alphabet.
pub fn generate_code(rng: &mut impl Rng) -> RoomCode {
    let code: String = (0..CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect();
    RoomCode::new(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_codes_are_six_chars_from_the_alphabet() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let code = generate_code(&mut rng);
            assert_eq!(code.as_str().len(), CODE_LEN);
            for b in code.as_str().bytes() {
                assert!(
                    CODE_ALPHABET.contains(&b),
                    "{:?} contains {:?}",
                    code,
                    b as char
                );
            }
        }
    }

    #[test]
    fn test_alphabet_excludes_confusable_symbols() {
        for forbidden in [b'0', b'O', b'1', b'I'] {
            assert!(!CODE_ALPHABET.contains(&forbidden));
        }
        // 32 distinct symbols — uniform draw needs no rejection step.
        let mut sorted = *CODE_ALPHABET;
        sorted.sort_unstable();
        sorted.windows(2).for_each(|w| assert_ne!(w[0], w[1]));
    }

    #[test]
    fn test_same_seed_same_code() {
        let a = generate_code(&mut StdRng::seed_from_u64(5));
        let b = generate_code(&mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_codes_vary_across_draws() {
        let mut rng = StdRng::seed_from_u64(5);
        let first = generate_code(&mut rng);
        let second = generate_code(&mut rng);
        assert_ne!(first, second);
    }
}
