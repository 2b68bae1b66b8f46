//! Adjective to adverb morphology
//!
//! A flat, ordered table of suffix rules derives the adverb for an
//! adjective. Candidates that are not real adverbs are rejected by the
//! lexicon. The rule order and exceptions are fixed; changing them changes
//! which examples get extracted.

use crate::lexicon::Lexicon;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Derive the adverb for `adjective`
///
/// Returns the adjective itself when the same form is also an adverb
/// (e.g. "hard"), and `None` when no valid adverb exists.
pub fn adjective_to_adverb(adjective: &str, lexicon: &Lexicon) -> Option<String> {
    // "friendly", "lovely": already adverb-shaped
    if adjective.ends_with("ly") {
        return None;
    }

    if lexicon.is_adverb(adjective) {
        return Some(adjective.to_string());
    }

    match adjective {
        "good" => return Some("well".to_string()),
        "whole" | "true" => return Some(format!("{}ly", drop_last(adjective))),
        _ => {}
    }

    let candidate = if adjective.ends_with("le") && adjective != "sole" {
        format!("{}y", drop_last(adjective))
    } else if adjective.ends_with('y') && adjective != "shy" {
        format!("{}ily", drop_last(adjective))
    } else if adjective.ends_with("ic") {
        format!("{adjective}ally")
    } else if adjective.ends_with("ll") {
        format!("{adjective}y")
    } else {
        format!("{adjective}ly")
    };

    lexicon.is_adverb(&candidate).then_some(candidate)
}

fn drop_last(word: &str) -> &str {
    let mut chars = word.chars();
    chars.next_back();
    chars.as_str()
}

/// Bidirectional adjective/adverb mapping
///
/// Every adjective with a valid, distinct adverb has a forward entry. Each
/// adverb maps back to the first adjective (in lexicographic order) that
/// derived it, so the reverse map can be smaller. No word maps to itself.
#[derive(Debug, Clone, Default)]
pub struct MorphologyMap {
    adj_to_adv: HashMap<String, String>,
    adv_to_adj: HashMap<String, String>,
}

impl MorphologyMap {
    /// Apply the rules to every adjective of the lexicon
    ///
    /// Adjectives are visited in lexicographic order so the result does
    /// not depend on hash iteration. If an adverb is derived twice, both
    /// adjectives keep their forward entry and the first one owns the
    /// reverse entry.
    pub fn build(lexicon: &Lexicon) -> Self {
        let mut adjectives: Vec<&str> = lexicon.adjectives().collect();
        adjectives.sort_unstable();

        let mut map = Self::default();

        for adjective in adjectives {
            let Some(adverb) = adjective_to_adverb(adjective, lexicon) else {
                continue;
            };
            if adverb == adjective {
                continue;
            }

            match map.adv_to_adj.entry(adverb.clone()) {
                Entry::Occupied(existing) => {
                    log::debug!(
                        "Adverb '{}' already derived from '{}', keeping it for '{}'",
                        existing.key(),
                        existing.get(),
                        adjective
                    );
                }
                Entry::Vacant(slot) => {
                    slot.insert(adjective.to_string());
                }
            }
            map.adj_to_adv.insert(adjective.to_string(), adverb);
        }

        log::debug!("Built {} adjective/adverb pairs", map.len());
        map
    }

    /// The adverb paired with `adjective`
    pub fn adverb_for(&self, adjective: &str) -> Option<&str> {
        self.adj_to_adv.get(adjective).map(String::as_str)
    }

    /// The adjective paired with `adverb`
    pub fn adjective_for(&self, adverb: &str) -> Option<&str> {
        self.adv_to_adj.get(adverb).map(String::as_str)
    }

    /// Iterate (adjective, adverb) pairs
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.adj_to_adv
            .iter()
            .map(|(adj, adv)| (adj.as_str(), adv.as_str()))
    }

    /// Number of adjectives with an adverb
    pub fn len(&self) -> usize {
        self.adj_to_adv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adj_to_adv.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::from_words(
            [
                "friendly", "hard", "good", "whole", "true", "responsible", "sole", "angry",
                "shy", "idiotic", "full", "free", "red", "economic", "economical",
            ],
            [
                "hard",
                "well",
                "responsibly",
                "solely",
                "angrily",
                "shyly",
                "idiotically",
                "fully",
                "freely",
                "economically",
            ],
        )
    }

    #[test]
    fn test_ly_adjectives_have_no_adverb() {
        let lexicon = lexicon();
        assert_eq!(adjective_to_adverb("friendly", &lexicon), None);
        assert_eq!(adjective_to_adverb("ly", &lexicon), None);
    }

    #[test]
    fn test_same_form_pair() {
        assert_eq!(
            adjective_to_adverb("hard", &lexicon()),
            Some("hard".to_string())
        );
    }

    #[test]
    fn test_exceptions() {
        let lexicon = lexicon();
        assert_eq!(adjective_to_adverb("good", &lexicon), Some("well".into()));
        assert_eq!(adjective_to_adverb("whole", &lexicon), Some("wholly".into()));
        assert_eq!(adjective_to_adverb("true", &lexicon), Some("truly".into()));
    }

    #[test]
    fn test_suffix_rules() {
        let lexicon = lexicon();
        assert_eq!(
            adjective_to_adverb("responsible", &lexicon),
            Some("responsibly".into())
        );
        assert_eq!(adjective_to_adverb("angry", &lexicon), Some("angrily".into()));
        assert_eq!(
            adjective_to_adverb("idiotic", &lexicon),
            Some("idiotically".into())
        );
        assert_eq!(adjective_to_adverb("full", &lexicon), Some("fully".into()));
        assert_eq!(adjective_to_adverb("free", &lexicon), Some("freely".into()));
    }

    #[test]
    fn test_excluded_words_use_default_rule() {
        let lexicon = lexicon();
        // "sole" skips the -le rule, "shy" skips the -y rule
        assert_eq!(adjective_to_adverb("sole", &lexicon), Some("solely".into()));
        assert_eq!(adjective_to_adverb("shy", &lexicon), Some("shyly".into()));
    }

    #[test]
    fn test_candidate_gated_by_lexicon() {
        let lexicon = lexicon();
        assert_eq!(adjective_to_adverb("red", &lexicon), None);

        let without = Lexicon::from_words(["responsible"], Vec::<String>::new());
        assert_eq!(adjective_to_adverb("responsible", &without), None);
    }

    #[test]
    fn test_build_skips_identity_and_missing() {
        let map = MorphologyMap::build(&lexicon());
        assert_eq!(map.adverb_for("hard"), None);
        assert_eq!(map.adverb_for("friendly"), None);
        assert_eq!(map.adverb_for("red"), None);
        assert_eq!(map.adverb_for("good"), Some("well"));
        assert_eq!(map.adjective_for("well"), Some("good"));
        // exceptions are not gated, so the pair exists even though the
        // adverb list lacks "wholly"
        assert_eq!(map.adverb_for("whole"), Some("wholly"));
    }

    #[test]
    fn test_build_collision_keeps_both_forward_entries() {
        let map = MorphologyMap::build(&lexicon());
        assert_eq!(map.adverb_for("economic"), Some("economically"));
        assert_eq!(map.adverb_for("economical"), Some("economically"));
        // reverse entry goes to the lexicographically first adjective
        assert_eq!(map.adjective_for("economically"), Some("economic"));
    }

    #[test]
    fn test_build_reverse_consistency() {
        let map = MorphologyMap::build(&lexicon());
        assert!(!map.is_empty());
        for (adj, adv) in map.pairs() {
            assert_ne!(adj, adv);
            let owner = map.adjective_for(adv).unwrap();
            assert_eq!(map.adverb_for(owner), Some(adv));
            assert!(owner <= adj);
        }
    }
}
