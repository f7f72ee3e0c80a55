// Tests for the random session token generator.
use std::collections::HashSet;

use tower_session_cookie_policy::{SecurityProfile, TokenGenerator, build};

#[test]
fn tokens_do_not_collide() {
    // 10,000 samples from the default generator must be pairwise distinct.
    let generator = TokenGenerator::new();
    let mut seen = HashSet::new();

    for _ in 0..10_000 {
        let token = generator.generate();
        assert!(seen.insert(token), "token generator produced a duplicate");
    }
}

#[test]
fn generated_tokens_build_under_every_profile() {
    let generator = TokenGenerator::new();

    for _ in 0..100 {
        let token = generator.generate();
        for profile in [SecurityProfile::Minimal, SecurityProfile::Hardened] {
            build(token.clone(), profile).expect("generated token builds cookie");
        }
    }
}

#[test]
fn custom_byte_count() {
    // 24 bytes -> 32 base64 characters without padding.
    let generator = TokenGenerator::new().with_bytes(24);
    assert_eq!(generator.generate().len(), 32);
}
