//! Answer normalization and example-sentence decoration.

/// Leading particles dropped from a reference word before highlighting.
const LEADING_PARTICLES: [&str; 4] = ["a ", "an ", "the ", "to "];

/// Normalize text for answer comparison.
///
/// Lower-cases the whole string, turns every whitespace run (including a
/// single tab or no-break space) into one ASCII space, then trims both ends.
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove a leading article or infinitive marker ("a", "an", "the", "to").
///
/// Only one particle is stripped; words without one are returned trimmed.
pub fn strip_leading_particle(word: &str) -> String {
    let trimmed = word.trim_start();

    for particle in LEADING_PARTICLES {
        if let Some(head) = trimmed.get(..particle.len()) {
            if head.eq_ignore_ascii_case(particle) {
                return trimmed[particle.len()..].trim().to_string();
            }
        }
    }

    trimmed.trim_end().to_string()
}

/// Wrap every case-insensitive occurrence of `word` in `sentence` with `**`.
///
/// The word has its leading particle stripped first, so "to run" highlights
/// "run" in "She likes to run".
pub fn highlight_sentence(sentence: &str, word: &str) -> String {
    let needle = strip_leading_particle(word);
    if needle.is_empty() {
        return sentence.to_string();
    }

    let mut out = String::with_capacity(sentence.len() + 8);
    let mut rest = sentence;

    while !rest.is_empty() {
        if let Some(len) = match_len_ignore_case(rest, &needle) {
            out.push_str("**");
            out.push_str(&rest[..len]);
            out.push_str("**");
            rest = &rest[len..];
        } else {
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                out.push(c);
            }
            rest = chars.as_str();
        }
    }

    out
}

/// Byte length of the prefix of `haystack` matching `needle` ignoring case.
fn match_len_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let mut hay = haystack.char_indices();
    for n in needle.chars() {
        let (_, h) = hay.next()?;
        if !h.to_lowercase().eq(n.to_lowercase()) {
            return None;
        }
    }
    Some(hay.next().map(|(i, _)| i).unwrap_or(haystack.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_case_and_whitespace() {
        assert_eq!(normalize("  Cat   SAT "), normalize("cat sat"));
        assert_eq!(normalize("  Cat   SAT "), "cat sat");
        assert_eq!(normalize("  A   Cat"), "a cat");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for text in ["", "   ", "Table ", "a\t\tcat", "  Мама  МЫЛА раму ", "x\ny"] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once, "input: {text:?}");
        }
    }

    #[test]
    fn test_normalize_unicode_lowercase() {
        assert_eq!(normalize("СТОЛ"), "стол");
        assert_eq!(normalize("Straße"), "straße");
    }

    #[test]
    fn test_normalize_collapses_mixed_whitespace_runs() {
        assert_eq!(normalize("to \t run"), "to run");
        assert_eq!(normalize("ice\n\ncream"), "ice cream");
    }

    #[test]
    fn test_normalize_single_non_space_whitespace() {
        assert_eq!(normalize("a\tcat"), "a cat");
        assert_eq!(normalize("a\u{a0}cat"), "a cat");
        assert_eq!(normalize("ice\ncream"), normalize("ice cream"));
    }

    #[test]
    fn test_strip_leading_particle() {
        assert_eq!(strip_leading_particle("the cat"), "cat");
        assert_eq!(strip_leading_particle("cat"), "cat");
        assert_eq!(strip_leading_particle("a dog"), "dog");
        assert_eq!(strip_leading_particle("an apple"), "apple");
        assert_eq!(strip_leading_particle("to run"), "run");
        assert_eq!(strip_leading_particle("The House"), "House");
    }

    #[test]
    fn test_strip_leading_particle_needs_a_separator() {
        assert_eq!(strip_leading_particle("theatre"), "theatre");
        assert_eq!(strip_leading_particle("apple"), "apple");
        assert_eq!(strip_leading_particle("a"), "a");
        assert_eq!(strip_leading_particle("tomato"), "tomato");
    }

    #[test]
    fn test_highlight_sentence() {
        assert_eq!(
            highlight_sentence("The cat sat on the mat.", "the cat"),
            "The **cat** sat on the mat."
        );
        assert_eq!(
            highlight_sentence("She likes to Run; running is fun.", "to run"),
            "She likes to **Run**; **run**ning is fun."
        );
    }

    #[test]
    fn test_highlight_sentence_without_match() {
        assert_eq!(highlight_sentence("Nothing here.", "table"), "Nothing here.");
        assert_eq!(highlight_sentence("Nothing here.", "   "), "Nothing here.");
    }

    #[test]
    fn test_highlight_sentence_non_ascii() {
        assert_eq!(highlight_sentence("Это мой Стол.", "стол"), "Это мой **Стол**.");
    }
}
