//! Answer checking with ae/oe/ue/ss spelling variants.

/// Expanded digraph form and the short form it may stand for.
const SUBSTITUTIONS: [(&str, &str); 4] = [("ae", "ä"), ("oe", "ö"), ("ue", "ü"), ("ss", "ß")];

/// All spellings equivalent to `word` under the substitution table, the
/// word itself first, deduplicated in first-seen order.
///
/// Each table entry substitutes its first occurrence only; the prefix in
/// front of it is left untouched and the rest of the word is expanded
/// recursively, so every combination of kept/substituted occurrences to
/// the right gets generated.
pub fn alternate_spellings(word: &str) -> Vec<String> {
    let mut alternates = vec![word.to_string()];

    for (expanded, short) in SUBSTITUTIONS {
        let Some(idx) = word.find(expanded) else {
            continue;
        };
        let prefix = &word[..idx];
        let suffix = &word[idx + expanded.len()..];

        for sub in alternate_spellings(suffix) {
            for candidate in [
                format!("{prefix}{expanded}{sub}"),
                format!("{prefix}{short}{sub}"),
            ] {
                if !alternates.contains(&candidate) {
                    alternates.push(candidate);
                }
            }
        }
    }

    if alternates.len() > 1 {
        log::debug!("alternate spellings of {word}: {alternates:?}");
    }

    alternates
}

/// Does the raw answer, in any accepted spelling, match the target word?
/// The target is expected to be lowercase already.
pub fn accepts(raw: &str, target: &str) -> bool {
    let answer = raw.trim().to_lowercase();
    alternate_spellings(&answer).iter().any(|v| v == target)
}
