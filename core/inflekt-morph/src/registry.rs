use std::collections::HashMap;

use inflekt_protocol::{Prime, Tag, TagCode};

use crate::primes::next_prime;

/// Case-insensitive mapping from tags to the primes that encode them.
///
/// Append-only: a tag keeps its prime for the registry's lifetime and every
/// newly seen tag gets the next prime above the current maximum.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    primes: HashMap<Tag, Prime>,
    order: Vec<Tag>,
    frontier: Prime,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the prime for `tag`, assigning a fresh one if the tag is new.
    pub fn get_or_assign(&mut self, tag: &str) -> Prime {
        let tag = Tag::new(tag);
        if let Some(prime) = self.primes.get(&tag) {
            return *prime;
        }

        let prime = next_prime(self.frontier);
        self.frontier = prime;
        self.order.push(tag.clone());
        self.primes.insert(tag, prime);
        prime
    }

    pub fn lookup(&self, tag: &str) -> Option<Prime> {
        self.primes.get(tag.to_lowercase().as_str()).copied()
    }

    /// Encodes a tag list, registering any tag seen for the first time.
    pub fn encode<'t, I>(&mut self, tags: I) -> TagCode
    where
        I: IntoIterator<Item = &'t str>,
    {
        tags.into_iter().map(|tag| self.get_or_assign(tag)).collect()
    }

    /// Primes for every requested tag, or `None` if any of them is unknown.
    pub fn lookup_all<S: AsRef<str>>(&self, tags: &[S]) -> Option<Vec<Prime>> {
        tags.iter().map(|tag| self.lookup(tag.as_ref())).collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Tags with their primes, in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&Tag, Prime)> + '_ {
        self.order.iter().map(move |tag| (tag, self.primes[tag]))
    }
}
