use inflekt_protocol::{Candidate, FormEntry, Outcome, Prime, Resolution, Tag};

use crate::registry::TagRegistry;
use crate::table::{DictionaryEntry, FormTable};

/// A request naming fewer tags than this never selects an inflected form.
pub const MIN_REQUESTED_TAGS: usize = 2;

/// Picks the recorded form whose tag set overlaps a request the most.
#[derive(Debug, Clone, Copy)]
pub struct FormResolver<'d> {
    registry: &'d TagRegistry,
    table: &'d FormTable,
}

impl<'d> FormResolver<'d> {
    pub fn new(registry: &'d TagRegistry, table: &'d FormTable) -> Self {
        Self { registry, table }
    }

    /// Closest recorded form of `normal_form` for `tags`, or `normal_form` itself.
    pub fn resolve<'a, S: AsRef<str>>(&'a self, normal_form: &'a str, tags: &[S]) -> &'a str {
        self.select(normal_form, tags).0
    }

    /// Same answer as [`resolve`](Self::resolve), with every candidate and its score.
    pub fn explain<S: AsRef<str>>(&self, normal_form: &str, tags: &[S]) -> Resolution {
        let requested: Vec<Tag> = tags.iter().map(|t| Tag::new(t.as_ref())).collect();

        let (entry, primes) = match self.prepare(normal_form, tags) {
            Ok(found) => found,
            Err(outcome) => return Resolution::fallback(normal_form, requested, outcome),
        };

        let candidates: Vec<Candidate> = entry
            .forms()
            .iter()
            .map(|f| Candidate {
                form: f.form.clone(),
                code: f.code.clone(),
                score: score(&primes, f),
            })
            .collect();

        // First candidate holding the top score, as in `select`.
        let best = candidates
            .iter()
            .fold(None::<&Candidate>, |best, c| match best {
                Some(b) if b.score >= c.score => Some(b),
                _ if c.score > 0 => Some(c),
                _ => best,
            });

        let (chosen, outcome) = match best {
            Some(c) => (c.form.clone(), Outcome::Matched),
            None => (normal_form.to_string(), Outcome::NoOverlap),
        };
        Resolution {
            normal_form: normal_form.to_string(),
            requested,
            outcome,
            candidates,
            chosen,
        }
    }

    fn select<'a, S: AsRef<str>>(&'a self, normal_form: &'a str, tags: &[S]) -> (&'a str, Outcome) {
        let (entry, primes) = match self.prepare(normal_form, tags) {
            Ok(found) => found,
            Err(outcome) => return (normal_form, outcome),
        };

        // Strictly greater only: ties keep the earlier form.
        let mut best_score = 0;
        let mut best = normal_form;
        for form in entry.forms() {
            let s = score(&primes, form);
            if s > best_score {
                best_score = s;
                best = &form.form;
            }
        }

        if best_score == 0 {
            tracing::trace!(word = normal_form, "no recorded form overlaps the request");
            return (normal_form, Outcome::NoOverlap);
        }
        (best, Outcome::Matched)
    }

    fn prepare<S: AsRef<str>>(
        &self,
        normal_form: &str,
        tags: &[S],
    ) -> Result<(&'d DictionaryEntry, Vec<Prime>), Outcome> {
        if tags.len() < MIN_REQUESTED_TAGS {
            return Err(Outcome::TooFewTags);
        }

        let Some(primes) = self.registry.lookup_all(tags) else {
            tracing::trace!(word = normal_form, "request names an unknown tag");
            return Err(Outcome::UnknownTag);
        };

        let Some(entry) = self.table.get(normal_form) else {
            tracing::trace!(word = normal_form, "word is not a declared normal form");
            return Err(Outcome::UnknownWord);
        };

        Ok((entry, primes))
    }
}

fn score(primes: &[Prime], form: &FormEntry) -> usize {
    primes.iter().filter(|p| form.code.contains(**p)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// {a,b,c} -> X1, {a,b} -> X2, registered in that order.
    fn fixture() -> (TagRegistry, FormTable) {
        let mut registry = TagRegistry::new();
        let mut table = FormTable::new();
        // Burn the first code so that no tag under test is encoded as 1.
        registry.get_or_assign("pos");
        table.declare("X");
        let abc = registry.encode(["a", "b", "c"]);
        table.insert("X", abc, "X1");
        let ab = registry.encode(["a", "b"]);
        table.insert("X", ab, "X2");
        registry.get_or_assign("d");
        registry.get_or_assign("e");
        (registry, table)
    }

    #[test]
    fn test_exact_superset_wins() {
        let (reg, table) = fixture();
        let r = FormResolver::new(&reg, &table);
        assert_eq!(r.resolve("X", &["a", "b", "c"]), "X1");
    }

    #[test]
    fn test_tie_keeps_earlier_form() {
        let (reg, table) = fixture();
        let r = FormResolver::new(&reg, &table);
        // X1 and X2 both contain a and b: score 2 each.
        assert_eq!(r.resolve("X", &["a", "b"]), "X1");
    }

    #[test]
    fn test_unknown_tag_rejects_whole_request() {
        let (reg, table) = fixture();
        let r = FormResolver::new(&reg, &table);
        assert_eq!(r.resolve("X", &["a", "b", "c", "zzz"]), "X");
        assert_eq!(r.explain("X", &["a", "zzz"]).outcome, Outcome::UnknownTag);
    }

    #[test]
    fn test_too_few_tags() {
        let (reg, table) = fixture();
        let r = FormResolver::new(&reg, &table);
        assert_eq!(r.resolve::<&str>("X", &[]), "X");
        assert_eq!(r.resolve("X", &["a"]), "X");
        assert_eq!(r.explain("X", &["a"]).outcome, Outcome::TooFewTags);
    }

    #[test]
    fn test_unknown_word_falls_back() {
        let (reg, table) = fixture();
        let r = FormResolver::new(&reg, &table);
        assert_eq!(r.resolve("Y", &["a", "b"]), "Y");
        assert_eq!(r.explain("Y", &["a", "b"]).outcome, Outcome::UnknownWord);
    }

    #[test]
    fn test_no_overlap_returns_normal_form() {
        let (reg, table) = fixture();
        let r = FormResolver::new(&reg, &table);
        assert_eq!(r.resolve("X", &["d", "e"]), "X");
        assert_eq!(r.explain("X", &["d", "e"]).outcome, Outcome::NoOverlap);
    }

    #[test]
    fn test_explain_agrees_with_resolve() {
        let (reg, table) = fixture();
        let r = FormResolver::new(&reg, &table);
        let requests: [&[&str]; 5] = [
            &["a", "b"],
            &["a", "b", "c"],
            &["b", "c"],
            &["d", "e"],
            &["pos", "d"],
        ];
        for tags in requests {
            let res = r.explain("X", tags);
            assert_eq!(res.chosen, r.resolve("X", tags), "request {:?}", tags);
        }
        // tie between X1 and X2 still names the earlier form
        assert_eq!(r.explain("X", &["a", "b"]).chosen, "X1");
        // "pos" has code 1 and divides every code: the first form wins
        assert_eq!(r.explain("X", &["pos", "d"]).chosen, "X1");
    }

    #[test]
    fn test_lookup_ignores_case() {
        let (reg, table) = fixture();
        let r = FormResolver::new(&reg, &table);
        assert_eq!(r.resolve("x", &["A", "B", "C"]), "X1");
    }

    #[test]
    fn test_explain_lists_scores_in_dictionary_order() {
        let (reg, table) = fixture();
        let r = FormResolver::new(&reg, &table);
        let res = r.explain("X", &["a", "c"]);

        assert!(res.is_match());
        assert_eq!(res.chosen, "X1");
        let scores: Vec<_> = res.candidates.iter().map(|c| (c.form.as_str(), c.score)).collect();
        assert_eq!(scores, vec![("X1", 2), ("X2", 1)]);
    }
}
