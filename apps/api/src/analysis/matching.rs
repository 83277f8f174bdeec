//! Matching primitives for the keyword analyzer.
//!
//! Every check is a plain substring search against resume text that the caller
//! has already lower-cased. No regex engine, no tokenizer.

/// Vocabulary whose presence anywhere in the resume counts as an education signal.
pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "degree",
    "university",
    "college",
    "phd",
];

/// Experience words this short are never used as match signals.
const MIN_SIGNAL_WORD_LEN: usize = 3;

/// Returns the normalized forms a skill is searched under:
/// as written, without dots ("node.js" → "nodejs"), without whitespace,
/// and without hyphens. Duplicates are harmless and kept.
pub fn skill_variants(skill: &str) -> [String; 4] {
    let lower = skill.to_lowercase();
    [
        lower.replace('.', ""),
        lower.chars().filter(|c| !c.is_whitespace()).collect(),
        lower.replace('-', ""),
        lower,
    ]
}

/// True when any variant of `skill` occurs in `resume_lower`.
pub fn skill_matches(skill: &str, resume_lower: &str) -> bool {
    skill_variants(skill)
        .iter()
        .any(|variant| resume_lower.contains(variant.as_str()))
}

/// True when any word of `phrase` longer than three characters occurs in `resume_lower`.
///
/// Length is counted in UTF-16 code units, so an emoji counts as two.
pub fn experience_matches(phrase: &str, resume_lower: &str) -> bool {
    phrase
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.encode_utf16().count() > MIN_SIGNAL_WORD_LEN)
        .any(|word| resume_lower.contains(word))
}

/// True when the resume mentions any generic education vocabulary.
pub fn has_education(resume_lower: &str) -> bool {
    EDUCATION_KEYWORDS
        .iter()
        .any(|keyword| resume_lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_variants_strip_dots_spaces_hyphens() {
        let variants = skill_variants("Node.js");
        assert!(variants.contains(&"node.js".to_string()));
        assert!(variants.contains(&"nodejs".to_string()));

        let variants = skill_variants("Problem Solving");
        assert!(variants.contains(&"problemsolving".to_string()));

        let variants = skill_variants("CI-CD");
        assert!(variants.contains(&"cicd".to_string()));
    }

    #[test]
    fn test_skill_matches_dotless_variant() {
        assert!(skill_matches("Node.js", "i used nodejs for backend"));
        assert!(skill_matches("Node.js", "node.js expert"));
    }

    #[test]
    fn test_skill_matches_collapsed_whitespace() {
        assert!(skill_matches("Problem Solving", "strong problemsolving skills"));
        assert!(skill_matches("Problem Solving", "strong problem solving skills"));
    }

    #[test]
    fn test_skill_does_not_match_absent_text() {
        assert!(!skill_matches("Docker", "kubernetes and helm"));
    }

    #[test]
    fn test_skill_substring_false_positive_is_kept() {
        // "aws" occurs inside "laws"
        assert!(skill_matches("AWS", "studied tax laws"));
    }

    #[test]
    fn test_experience_matches_on_long_word() {
        assert!(experience_matches(
            "Web application development",
            "built an application for clients"
        ));
    }

    #[test]
    fn test_experience_ignores_short_words() {
        assert!(!experience_matches("Web application development", "web stuff"));
        assert!(!experience_matches("API on web", "api on web"));
    }

    #[test]
    fn test_experience_word_of_exactly_four_chars_counts() {
        assert!(experience_matches("Data work", "data pipelines"));
    }

    #[test]
    fn test_experience_word_length_counts_utf16_units() {
        // two astral-plane chars = four UTF-16 units
        assert!(experience_matches("\u{1F680}\u{1F680} launches", "shipped \u{1F680}\u{1F680}"));
        // three BMP chars stay below the threshold
        assert!(!experience_matches("équ", "équ"));
    }

    #[test]
    fn test_has_education() {
        assert!(has_education("b.tech, xyz university"));
        assert!(has_education("phd in physics"));
        assert!(!has_education("self-taught engineer"));
    }
}
