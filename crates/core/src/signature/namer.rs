//! Short parameter names for parameters the interface left unnamed.
//!
//! `http.ResponseWriter` becomes `rw`, `*http.Request` becomes `r`, and a
//! second `Request` in the same method becomes `re`.

use std::collections::HashSet;

/// Receiver name of the generated wrapper method
pub const RECEIVER: &str = "f";

const KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Used when a type has no letters or digits at all
const FALLBACK: &str = "arg";

/// Parameter names already taken in one method signature
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    taken: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that keeps generated names clear of the wrapper's receiver
    pub fn for_adapter() -> Self {
        let mut registry = Self::new();
        registry.insert(RECEIVER);
        registry
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.taken.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.taken.contains(name)
    }

    pub fn is_available(&self, name: &str) -> bool {
        !self.contains(name) && !KEYWORDS.iter().any(|keyword| *keyword == name)
    }

    /// Derives, registers and returns a name for a parameter of type `ty`
    pub fn name_for(&mut self, ty: &str) -> String {
        let ty = ty.strip_prefix("...").unwrap_or(ty);
        let base = ty.rsplit('.').next().unwrap_or(ty);
        let words = split_words(base);

        let name = generate_name(&words, self, 1);
        tracing::trace!("Named parameter of type {} as {}", ty, name);
        self.insert(name.clone());
        name
    }

    /// `base`, or `base2`, `base3`, ... when it is taken
    fn unique(&self, base: &str) -> String {
        if self.is_available(base) {
            return base.to_string();
        }
        (2..)
            .map(|i| format!("{base}{i}"))
            .find(|candidate| self.is_available(candidate))
            .unwrap_or_else(|| base.to_string())
    }
}

/// Builds a name from the first `n` letters of every word, growing `n` on collisions.
///
/// Once `n` passes the length of a word, that whole word lower-cased is the answer.
pub fn generate_name(words: &[String], registry: &NameRegistry, n: usize) -> String {
    if words.is_empty() {
        return registry.unique(FALLBACK);
    }

    let mut n = n.max(1);
    loop {
        let mut candidate = String::new();
        for word in words {
            if word.chars().count() < n {
                return registry.unique(&word.to_lowercase());
            }
            candidate.extend(word.chars().take(n).flat_map(char::to_lowercase));
        }

        if registry.is_available(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_lowercase() {
            CharClass::Lower
        } else if c.is_uppercase() {
            CharClass::Upper
        } else if c.is_numeric() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }
}

/// Splits an identifier into words at case and character class changes.
///
/// An upper-case run directly followed by lower-case letters hands its last
/// letter to the next word, so `HTTPServer` splits into `HTTP` and `Server`.
/// Punctuation only separates words. Digits belong to the preceding word and
/// are dropped when nothing precedes them, so `[16]byte` gives just `byte`.
pub fn split_words(name: &str) -> Vec<String> {
    let mut runs: Vec<(CharClass, Vec<char>)> = Vec::new();
    for c in name.chars() {
        let class = CharClass::of(c);
        if let Some((last, chars)) = runs.last_mut() {
            if *last == class {
                chars.push(c);
                continue;
            }
        }
        runs.push((class, vec![c]));
    }

    for i in 0..runs.len().saturating_sub(1) {
        if runs[i].0 == CharClass::Upper && runs[i + 1].0 == CharClass::Lower {
            if let Some(moved) = runs[i].1.pop() {
                runs[i + 1].1.insert(0, moved);
            }
        }
    }

    // Digits stay on the word they follow so no word starts with one
    let mut words: Vec<String> = Vec::new();
    let mut after_word = false;
    for (class, chars) in runs {
        match class {
            _ if chars.is_empty() => {}
            CharClass::Other => after_word = false,
            CharClass::Digit => {
                if let Some(word) = words.last_mut().filter(|_| after_word) {
                    word.extend(chars);
                }
            }
            CharClass::Lower | CharClass::Upper => {
                words.push(chars.into_iter().collect());
                after_word = true;
            }
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn registry(taken: &[&str]) -> NameRegistry {
        let mut registry = NameRegistry::new();
        for name in taken {
            registry.insert(*name);
        }
        registry
    }

    #[test]
    fn test_generate_name_one_word() {
        assert_eq!(generate_name(&words(&["reader"]), &registry(&[]), 1), "r");
    }

    #[test]
    fn test_generate_name_same_letter() {
        assert_eq!(generate_name(&words(&["request"]), &registry(&["r"]), 1), "re");
    }

    #[test]
    fn test_generate_name_whole_word() {
        assert_eq!(
            generate_name(&words(&["request"]), &registry(&["r"]), 10),
            "request"
        );
    }

    #[test]
    fn test_generate_name_two_words() {
        assert_eq!(
            generate_name(&words(&["response", "writer"]), &registry(&[]), 1),
            "rw"
        );
    }

    #[test]
    fn test_generate_name_exhausted_word_gets_suffix() {
        let taken = registry(&["a"]);
        assert_eq!(generate_name(&words(&["A"]), &taken, 1), "a2");

        let taken = registry(&["a", "a2"]);
        assert_eq!(generate_name(&words(&["A"]), &taken, 1), "a3");
    }

    #[test]
    fn test_generate_name_skips_keywords() {
        // "t", "ty", "typ" are taken, "type" is a keyword
        let taken = registry(&["t", "ty", "typ"]);
        assert_eq!(generate_name(&words(&["Type"]), &taken, 1), "type2");

        let taken = registry(&[]);
        assert_eq!(generate_name(&words(&["Go"]), &taken, 2), "go2");
    }

    #[test]
    fn test_generate_name_without_words() {
        assert_eq!(generate_name(&[], &registry(&[]), 1), "arg");
        assert_eq!(generate_name(&[], &registry(&["arg"]), 1), "arg2");
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("ResponseWriter"), words(&["Response", "Writer"]));
        assert_eq!(split_words("Request"), words(&["Request"]));
        assert_eq!(split_words("HTTPServer"), words(&["HTTP", "Server"]));
        assert_eq!(split_words("Int64"), words(&["Int64"]));
        assert_eq!(split_words("int64"), words(&["int64"]));
        assert_eq!(split_words("byte"), words(&["byte"]));
        assert_eq!(split_words("[]byte"), words(&["byte"]));
        assert_eq!(split_words("*Request"), words(&["Request"]));
        assert_eq!(split_words("URL"), words(&["URL"]));
        assert_eq!(split_words("my_type"), words(&["my", "type"]));
        assert!(split_words("{}").is_empty());
    }

    #[test]
    fn test_split_words_never_starts_with_digit() {
        assert_eq!(split_words("[16]byte"), words(&["byte"]));
        assert_eq!(split_words("Vec3D"), words(&["Vec3", "D"]));
        assert_eq!(split_words("UTF8Reader"), words(&["UTF8", "Reader"]));
        assert!(split_words("[4]").is_empty());
    }

    #[test]
    fn test_name_for_numeric_types() {
        let mut registry = NameRegistry::for_adapter();
        let names: Vec<String> = (0..6).map(|_| registry.name_for("int64")).collect();
        assert_eq!(names, words(&["i", "in", "int", "int6", "int64", "int642"]));
        assert_eq!(registry.name_for("[16]byte"), "b");
        assert_eq!(registry.name_for("[8]"), "arg");
    }

    #[test]
    fn test_name_for_uses_last_segment() {
        let mut registry = NameRegistry::new();
        assert_eq!(registry.name_for("http.ResponseWriter"), "rw");
        assert_eq!(registry.name_for("*http.Request"), "r");
        assert_eq!(registry.name_for("*http.Request"), "re");
        assert_eq!(registry.name_for("...io.Reader"), "rea");
        assert!(registry.contains("rea"));
    }

    #[test]
    fn test_name_for_avoids_receiver() {
        let mut registry = NameRegistry::for_adapter();
        assert_eq!(registry.name_for("os.File"), "fi");
    }

    #[test]
    fn test_name_for_never_repeats() {
        let mut registry = NameRegistry::for_adapter();
        let names: Vec<String> = (0..6).map(|_| registry.name_for("X")).collect();
        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), names.len(), "duplicates in {names:?}");
        assert_eq!(names, words(&["x", "x2", "x3", "x4", "x5", "x6"]));
    }

    #[test]
    fn test_name_for_is_deterministic() {
        let run = || {
            let mut registry = NameRegistry::for_adapter();
            ["http.Request", "http.Request", "[]byte", "context.Context"]
                .iter()
                .map(|ty| registry.name_for(ty))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
        assert_eq!(run(), words(&["r", "re", "b", "c"]));
    }
}
