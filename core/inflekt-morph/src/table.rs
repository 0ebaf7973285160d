use std::collections::{HashMap, HashSet};

use inflekt_protocol::{FormEntry, TagCode};

/// All forms recorded for one normal form, in dictionary order.
#[derive(Debug, Clone, Default)]
pub struct DictionaryEntry {
    forms: Vec<FormEntry>,
    codes: HashSet<TagCode>,
}

impl DictionaryEntry {
    /// Records a form unless one with the same code is already present.
    pub fn insert(&mut self, code: TagCode, form: &str) -> bool {
        if self.codes.contains(&code) {
            return false;
        }
        self.codes.insert(code.clone());
        self.forms.push(FormEntry {
            code,
            form: form.to_string(),
        });
        true
    }

    pub fn forms(&self) -> &[FormEntry] {
        &self.forms
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

/// Result of offering a form to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Added,
    DuplicateCode,
    UndeclaredNormalForm,
}

/// Normal form (case-insensitive) -> recorded forms.
#[derive(Debug, Clone, Default)]
pub struct FormTable {
    entries: HashMap<String, DictionaryEntry>,
}

impl FormTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes sure an entry exists for `normal_form`. Returns `true` if it was created.
    pub fn declare(&mut self, normal_form: &str) -> bool {
        let key = normal_form.to_lowercase();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, DictionaryEntry::default());
        true
    }

    pub fn insert(&mut self, normal_form: &str, code: TagCode, form: &str) -> Insertion {
        match self.entries.get_mut(&normal_form.to_lowercase()) {
            None => Insertion::UndeclaredNormalForm,
            Some(entry) => {
                if entry.insert(code, form) {
                    Insertion::Added
                } else {
                    Insertion::DuplicateCode
                }
            }
        }
    }

    pub fn get(&self, normal_form: &str) -> Option<&DictionaryEntry> {
        self.entries.get(&normal_form.to_lowercase())
    }

    pub fn contains(&self, normal_form: &str) -> bool {
        self.get(normal_form).is_some()
    }

    /// Number of declared normal forms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of recorded forms across all normal forms.
    pub fn form_count(&self) -> usize {
        self.entries.values().map(DictionaryEntry::len).sum()
    }
}
