//! Per-language text state
//!
//! All text data for the active language lives in one explicit context
//! object passed to every entry point; there is no ambient global state.
//! The context owns the string arena, the shared component list, and the
//! sequence registry. It is mutated only while a language's data is bulk
//! loaded and is read-only for layout afterwards; switching languages is a
//! full reload: build a new context, drop the old one.

use hashbrown::HashMap;
use slotmap::SlotMap;

use crate::arena::{TextArena, TextKey};
use crate::locale::LocaleConfig;
use crate::sequence::{TextComponent, TextSequence, TextSequenceId};
use crate::substitution::Date;

/// Text state for one loaded language.
pub struct TextContext {
    /// Interned string storage.
    pub(crate) arena: TextArena,

    /// Shared component stream backing every sequence.
    pub(crate) components: Vec<TextComponent>,

    /// Registered sequences, write-once.
    pub(crate) sequences: SlotMap<TextSequenceId, TextSequence>,

    /// Template name (interned) to sequence.
    pub(crate) by_name: HashMap<TextKey, TextSequenceId>,

    /// Formatting conventions of the language.
    pub(crate) locale: LocaleConfig,
}

impl TextContext {
    /// Create an empty context for a language with the given formatting
    /// conventions.
    pub fn new(locale: LocaleConfig) -> Self {
        Self {
            arena: TextArena::new(),
            components: Vec::new(),
            sequences: SlotMap::with_key(),
            by_name: HashMap::new(),
            locale,
        }
    }

    /// Intern a string, reusing the existing key for identical content.
    pub fn intern(&mut self, content: &str) -> TextKey {
        self.arena.intern(content)
    }

    /// Resolve a key to its stored content.
    ///
    /// # Panics
    ///
    /// Panics on the sentinel key or an out-of-bounds offset (caller bug).
    pub fn resolve(&self, key: TextKey) -> &str {
        self.arena.resolve(key)
    }

    /// Look up a string without inserting it.
    pub fn find_key(&self, content: &str) -> Option<TextKey> {
        self.arena.find(content)
    }

    /// Formatting conventions of the loaded language.
    pub fn locale(&self) -> &LocaleConfig {
        &self.locale
    }

    /// Sequence registered under a template name, if any.
    pub fn sequence_by_name(&self, name: &str) -> Option<TextSequenceId> {
        let key = self.arena.find(name)?;
        self.by_name.get(&key).copied()
    }

    /// Find the sequence registered under `name`, or intern the string and
    /// register a single-component sequence containing it.
    ///
    /// This is the entry point for dynamically generated names (player
    /// armies, save files): text produced at runtime gets a sequence like
    /// any loaded template, so the rest of the interface needs no special
    /// case.
    pub fn find_or_add_key(&mut self, name: &str) -> TextSequenceId {
        if let Some(id) = self.sequence_by_name(name) {
            return id;
        }

        let key = self.arena.intern(name);
        let starting_component =
            u32::try_from(self.components.len()).expect("component stream exceeds u32 indices");
        self.components.push(TextComponent::Text(key));
        let id = self.sequences.insert(TextSequence {
            starting_component,
            component_count: 1,
        });
        self.by_name.insert(key, id);
        id
    }

    /// The components a sequence delimits.
    ///
    /// # Panics
    ///
    /// Panics on a stale id or a range outside the shared list; both
    /// indicate a loader or caller bug.
    pub fn components_of(&self, id: TextSequenceId) -> &[TextComponent] {
        let sequence = self
            .sequences
            .get(id)
            .unwrap_or_else(|| panic!("invalid text sequence id {id:?}"));
        let start = sequence.starting_component as usize;
        let end = start + sequence.component_count as usize;
        assert!(
            end <= self.components.len(),
            "text sequence range {start}..{end} outside component list of {}",
            self.components.len()
        );
        &self.components[start..end]
    }

    /// Number of registered sequences.
    pub fn sequence_count(&self) -> usize {
        self.sequences.len()
    }

    /// Plain display string for a sequence: literal runs only, no layout,
    /// no wrapping. For contexts needing raw text such as window titles.
    /// Line breaks flatten to a space; color directives and variables
    /// contribute nothing.
    pub fn produce_simple_string(&self, id: TextSequenceId) -> String {
        let mut out = String::new();
        for component in self.components_of(id) {
            match component {
                TextComponent::Text(key) => out.push_str(self.arena.resolve(*key)),
                TextComponent::LineBreak => out.push(' '),
                TextComponent::Color(_) | TextComponent::Variable(_) => {}
            }
        }
        out
    }

    /// [`produce_simple_string`](Self::produce_simple_string) by template
    /// name. An unregistered name comes back as the name itself, which
    /// keeps missing localization visible instead of silently blank.
    pub fn simple_string_by_name(&self, name: &str) -> String {
        match self.sequence_by_name(name) {
            Some(id) => self.produce_simple_string(id),
            None => name.to_string(),
        }
    }

    /// Locale-appropriate date string.
    pub fn date_to_string(&self, date: Date) -> String {
        self.locale.format_date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_or_add_key_is_stable() {
        let mut ctx = TextContext::new(LocaleConfig::default());
        let first = ctx.find_or_add_key("1st Army");
        let second = ctx.find_or_add_key("1st Army");
        let other = ctx.find_or_add_key("2nd Army");

        assert_eq!(first, second);
        assert_ne!(first, other);
        assert_eq!(ctx.produce_simple_string(first), "1st Army");
    }

    #[test]
    fn test_simple_string_by_name_falls_back_to_name() {
        let ctx = TextContext::new(LocaleConfig::default());
        assert_eq!(ctx.simple_string_by_name("unloaded_key"), "unloaded_key");
    }

    #[test]
    fn test_interning_through_context() {
        let mut ctx = TextContext::new(LocaleConfig::default());
        let key = ctx.intern("Thorvald");
        assert_eq!(ctx.find_key("Thorvald"), Some(key));
        assert_eq!(ctx.resolve(key), "Thorvald");
    }

    #[test]
    #[should_panic(expected = "invalid text sequence id")]
    fn test_stale_sequence_id_fails_fast() {
        let mut other = TextContext::new(LocaleConfig::default());
        let id = other.find_or_add_key("foreign");

        let ctx = TextContext::new(LocaleConfig::default());
        let _ = ctx.components_of(id);
    }
}
