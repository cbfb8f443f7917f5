//! Port for invite-code generation.
//!
//! The process-wide random generator of the naive approach is replaced by
//! an injected source so tests can script deterministic sequences.

use rand::Rng;

use crate::domain::book::InviteCode;

/// Source of candidate invite codes.
///
/// A generated code is uniformly drawn from the code charset but carries no
/// uniqueness guarantee; callers check the store and regenerate on
/// collision.
#[cfg_attr(test, mockall::automock)]
pub trait InviteCodeSource: Send + Sync {
    /// Produce one candidate code.
    fn generate(&self) -> InviteCode;
}

/// Production source sampling `[A-Z0-9]` uniformly.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomInviteCodeSource;

impl InviteCodeSource for RandomInviteCodeSource {
    fn generate(&self) -> InviteCode {
        let mut rng = rand::thread_rng();
        let raw: String = (0..InviteCode::LENGTH)
            .map(|_| {
                let index = rng.gen_range(0..InviteCode::CHARSET.len());
                char::from(InviteCode::CHARSET[index])
            })
            .collect();
        InviteCode::from_charset_draw(raw)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generated_codes_match_the_format() {
        let source = RandomInviteCodeSource;
        for _ in 0..64 {
            let code = source.generate();
            assert_eq!(code.as_str().len(), InviteCode::LENGTH);
            assert!(
                code.as_str()
                    .bytes()
                    .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
            );
        }
    }

    #[test]
    fn generated_codes_vary() {
        let source = RandomInviteCodeSource;
        let distinct: HashSet<String> = (0..32)
            .map(|_| source.generate().as_str().to_owned())
            .collect();
        // 36^6 candidates; 32 draws colliding into one bucket would mean a
        // broken generator rather than bad luck.
        assert!(distinct.len() > 1);
    }
}
