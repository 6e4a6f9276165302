//! Canned snippets for exercising the classifier without typing anything.

use rand::seq::IndexedRandom;

pub const REAL_SAMPLES: &[&str] = &[
    "The Federal Reserve announced today a 0.25% interest rate cut...",
    "The World Health Organization released new guidelines today...",
    "Apple Inc. reported quarterly earnings that exceeded expectations...",
];

pub const FAKE_SAMPLES: &[&str] = &[
    "BREAKING: Scientists discover that vaccines contain microchips...",
    "Local doctors hate this one weird trick! This miracle cure...",
    "Celebrity doctors reveal shocking truth about kitchen ingredient...",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Real,
    Fake,
}

/// Picks a random sample of the requested kind.
pub fn pick(kind: SampleKind) -> &'static str {
    let pool = match kind {
        SampleKind::Real => REAL_SAMPLES,
        SampleKind::Fake => FAKE_SAMPLES,
    };

    let mut rng = rand::rng();
    pool.choose(&mut rng).copied().unwrap_or("")
}
