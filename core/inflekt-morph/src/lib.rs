//! Tag encoding, form tables and closest-form resolution.

pub mod primes;
pub mod registry;
pub mod resolver;
pub mod table;

pub use primes::next_prime;
pub use registry::TagRegistry;
pub use resolver::{FormResolver, MIN_REQUESTED_TAGS};
pub use table::{DictionaryEntry, FormTable, Insertion};
