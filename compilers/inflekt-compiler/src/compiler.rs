use inflekt_morph::{FormResolver, FormTable, Insertion, TagRegistry};

use crate::line::{classify, Line};

/// Counters gathered during one compilation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileStats {
    pub lines: usize,
    pub blocks: usize,
    pub headers: usize,
    pub forms: usize,
    /// Data lines outside any declared normal form.
    pub orphaned: usize,
    /// Forms whose tag set was already recorded for their normal form.
    pub duplicates: usize,
}

/// A tag registry and form table built together from one dictionary source.
#[derive(Debug, Clone, Default)]
pub struct CompiledDictionary {
    registry: TagRegistry,
    table: FormTable,
    stats: CompileStats,
}

impl CompiledDictionary {
    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    pub fn table(&self) -> &FormTable {
        &self.table
    }

    pub fn stats(&self) -> CompileStats {
        self.stats
    }

    pub fn resolver(&self) -> FormResolver<'_> {
        FormResolver::new(&self.registry, &self.table)
    }
}

/// Line-at-a-time dictionary compiler.
///
/// A block marker arms the compiler; the next data line names the normal form
/// and every following data line adds an inflected form to it.
#[derive(Debug, Default)]
pub struct DictionaryCompiler {
    registry: TagRegistry,
    table: FormTable,
    stats: CompileStats,
    awaiting_header: bool,
    normal_form: String,
}

impl DictionaryCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, line: &str) {
        self.stats.lines += 1;

        let (word, tags) = match classify(line) {
            Line::Blank => return,
            Line::BlockMarker => {
                self.stats.blocks += 1;
                self.awaiting_header = true;
                return;
            }
            Line::Data { word, tags } => (word, tags),
        };

        // Tags are registered even if the line is discarded below.
        let code = self.registry.encode(tags);

        if self.awaiting_header {
            self.awaiting_header = false;
            self.normal_form = word.to_string();
            self.table.declare(word);
            self.stats.headers += 1;
            return;
        }

        match self.table.insert(&self.normal_form, code, word) {
            Insertion::Added => self.stats.forms += 1,
            Insertion::DuplicateCode => {
                self.stats.duplicates += 1;
                tracing::trace!(
                    line = self.stats.lines,
                    word,
                    "duplicate tag set, keeping first form"
                );
            }
            Insertion::UndeclaredNormalForm => {
                self.stats.orphaned += 1;
                tracing::trace!(
                    line = self.stats.lines,
                    word,
                    "form outside any block, discarded"
                );
            }
        }
    }

    pub fn finish(self) -> CompiledDictionary {
        tracing::debug!(
            lines = self.stats.lines,
            normal_forms = self.table.len(),
            forms = self.stats.forms,
            tags = self.registry.len(),
            orphaned = self.stats.orphaned,
            duplicates = self.stats.duplicates,
            "dictionary compiled"
        );

        CompiledDictionary {
            registry: self.registry,
            table: self.table,
            stats: self.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inflekt_protocol::Prime;

    fn compile(lines: &[&str]) -> CompiledDictionary {
        let mut compiler = DictionaryCompiler::new();
        for line in lines {
            compiler.feed(line);
        }
        compiler.finish()
    }

    #[test]
    fn test_empty_sources() {
        let dict = compile(&[]);
        assert!(dict.table().is_empty());
        assert!(dict.registry().is_empty());

        let dict = compile(&["", "", "", ""]);
        assert!(dict.table().is_empty());
        assert_eq!(dict.stats().lines, 4);
    }

    #[test]
    fn test_header_contributes_no_form() {
        let dict = compile(&["1", "СЛОВО sp1,tag1,tag2,tag3,tag4"]);
        let entry = dict.table().get("слово").unwrap();
        assert!(entry.is_empty());
        // header tags are still registered
        assert_eq!(dict.registry().len(), 5);
        assert_eq!(dict.registry().lookup("tag4"), Some(Prime(7)));
    }

    #[test]
    fn test_lines_before_first_block_are_discarded() {
        let dict = compile(&["ЛИШНЕЕ sp1,tag1", "1", "СЛОВО sp1", "СЛОВО1 sp1,tag1"]);
        assert!(!dict.table().contains("ЛИШНЕЕ"));
        assert_eq!(dict.table().form_count(), 1);
        assert_eq!(dict.stats().orphaned, 1);
        // registered before it was discarded
        assert_eq!(dict.registry().lookup("sp1"), Some(Prime(1)));
    }

    #[test]
    fn test_duplicate_codes_keep_first() {
        let dict = compile(&["1", "W a,b", "W1 a,b", "W2 b,a", "W3 A B"]);
        let forms = dict.table().get("W").unwrap().forms();
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].form, "W1");
        assert_eq!(dict.stats().duplicates, 2);
    }

    #[test]
    fn test_repeated_normal_form_accumulates() {
        let dict = compile(&[
            "1",
            "СЛОВО tag1,tag2,tag3,tag4",
            "",
            "2",
            "СЛОВО tag1,tag2,tag3,tag4",
            "ДРУГОЕСЛОВО1 tag2,tag3,tag5.1 tag5.2",
        ]);
        assert_eq!(dict.table().len(), 1);
        let forms = dict.table().get("СЛОВО").unwrap().forms();
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].form, "ДРУГОЕСЛОВО1");
        assert_eq!(dict.stats().blocks, 2);
        assert_eq!(dict.stats().headers, 2);
    }

    #[test]
    fn test_arabic_indic_block_marker() {
        let dict = compile(&["١", "W a,b", "W1 a,b,c"]);
        assert_eq!(dict.stats().blocks, 1);
        assert_eq!(dict.resolver().resolve("W", &["b", "c"]), "W1");
    }

    #[test]
    fn test_blank_lines_do_not_end_a_block() {
        let dict = compile(&["1", "W a,b", "", "W1 a,c", "", "W2 b,c"]);
        assert_eq!(dict.table().get("W").unwrap().len(), 2);
    }
}
