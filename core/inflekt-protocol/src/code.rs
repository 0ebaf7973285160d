use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::tag::Prime;

/// Fingerprint of a tag set: the product of its tags' primes.
///
/// Membership of a tag is a divisibility test against the tag's prime. The
/// product is kept as a big integer, so large tag vocabularies cannot overflow it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagCode(BigUint);

impl TagCode {
    /// Code of the empty tag set.
    pub fn empty() -> Self {
        Self(BigUint::one())
    }

    /// Extends the set with one more tag.
    pub fn with(mut self, prime: Prime) -> Self {
        self.0 *= prime.get();
        self
    }

    /// Whether the tag that owns `prime` is part of this set.
    pub fn contains(&self, prime: Prime) -> bool {
        match prime.get() {
            0 => false,
            p => (&self.0 % p).is_zero(),
        }
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl Default for TagCode {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<Prime> for TagCode {
    fn from_iter<I: IntoIterator<Item = Prime>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), TagCode::with)
    }
}

impl fmt::Display for TagCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TagCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}
