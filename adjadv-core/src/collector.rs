//! Adjective/adverb-modifying-verb example collection

use crate::annotation::Sentence;
use crate::morphology::MorphologyMap;
use serde::{Deserialize, Serialize};

/// Example label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "ADJ")]
    Adjective,
    #[serde(rename = "ADV")]
    Adverb,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Adjective => "ADJ",
            Label::Adverb => "ADV",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labeled training example
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Token texts of the whole sentence
    pub sentence: Vec<String>,
    /// Position of the target token
    pub ind: usize,
    pub label: Label,
}

/// Everything found during a scan, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collected {
    pub adjectives: Vec<Example>,
    pub adverbs: Vec<Example>,
    /// Corpus files read
    pub files: usize,
    /// Lines submitted to the annotator
    pub lines: usize,
    /// Sentences returned by the annotator
    pub sentences: usize,
}

/// Applies the modifier-of-verb predicates to annotated sentences
#[derive(Debug)]
pub struct ExampleCollector<'a> {
    map: &'a MorphologyMap,
    collected: Collected,
}

impl<'a> ExampleCollector<'a> {
    pub fn new(map: &'a MorphologyMap) -> Self {
        Self {
            map,
            collected: Collected::default(),
        }
    }

    /// Label for the token at `index`, if it qualifies
    ///
    /// A token qualifies when it is an adjective (`JJ`) or adverb (`RB`),
    /// its head carries a verb tag, and its exact text has a counterpart
    /// in the morphology map.
    pub fn classify(&self, sentence: &Sentence, index: usize) -> Option<Label> {
        let token = sentence.tokens().get(index)?;
        let governed_by_verb = sentence.head_of(index).is_some_and(|head| head.is_verb());
        if !governed_by_verb {
            return None;
        }

        if token.is_adjective() && self.map.adverb_for(&token.text).is_some() {
            Some(Label::Adjective)
        } else if token.is_adverb() && self.map.adjective_for(&token.text).is_some() {
            Some(Label::Adverb)
        } else {
            None
        }
    }

    /// Record every qualifying token of `sentence`
    pub fn collect_sentence(&mut self, sentence: &Sentence) {
        self.collected.sentences += 1;

        for index in 0..sentence.len() {
            let Some(label) = self.classify(sentence, index) else {
                continue;
            };

            let example = Example {
                sentence: sentence.texts(),
                ind: index,
                label,
            };
            match label {
                Label::Adjective => self.collected.adjectives.push(example),
                Label::Adverb => self.collected.adverbs.push(example),
            }
        }
    }

    pub(crate) fn line_annotated(&mut self) {
        self.collected.lines += 1;
    }

    pub(crate) fn file_finished(&mut self) {
        self.collected.files += 1;
    }

    pub fn adjective_count(&self) -> usize {
        self.collected.adjectives.len()
    }

    pub fn adverb_count(&self) -> usize {
        self.collected.adverbs.len()
    }

    /// Consume the collector and return its findings
    pub fn finish(self) -> Collected {
        self.collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Token;
    use crate::lexicon::Lexicon;

    fn map() -> MorphologyMap {
        MorphologyMap::build(&Lexicon::from_words(
            ["red", "quick", "hard"],
            ["redly", "quickly", "hard"],
        ))
    }

    fn sentence(tokens: &[(&str, &str, usize)]) -> Sentence {
        Sentence::new(
            tokens
                .iter()
                .map(|(text, tag, head)| Token::new(*text, *tag, *head))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_adjective_under_verb() {
        let map = map();
        let mut collector = ExampleCollector::new(&map);
        collector.collect_sentence(&sentence(&[
            ("She", "PRP", 1),
            ("painted", "VBD", 1),
            ("it", "PRP", 1),
            ("red", "JJ", 1),
        ]));

        let collected = collector.finish();
        assert_eq!(collected.adjectives.len(), 1);
        assert!(collected.adverbs.is_empty());
        let example = &collected.adjectives[0];
        assert_eq!(example.ind, 3);
        assert_eq!(example.label, Label::Adjective);
        assert_eq!(example.sentence, vec!["She", "painted", "it", "red"]);
    }

    #[test]
    fn test_adverb_under_verb() {
        let map = map();
        let mut collector = ExampleCollector::new(&map);
        collector.collect_sentence(&sentence(&[
            ("He", "PRP", 1),
            ("left", "VBD", 1),
            ("quickly", "RB", 1),
        ]));

        let collected = collector.finish();
        assert!(collected.adjectives.is_empty());
        assert_eq!(collected.adverbs.len(), 1);
        assert_eq!(collected.adverbs[0].ind, 2);
        assert_eq!(collected.adverbs[0].label, Label::Adverb);
    }

    #[test]
    fn test_head_must_be_verb() {
        let map = map();
        let collector = ExampleCollector::new(&map);
        // "red" modifies a noun
        let s = sentence(&[("a", "DT", 2), ("red", "JJ", 2), ("car", "NN", 2)]);
        assert_eq!(collector.classify(&s, 1), None);
    }

    #[test]
    fn test_word_needs_counterpart() {
        let map = map();
        let collector = ExampleCollector::new(&map);
        // "hard" maps to itself so it has no pair; "blue" is unknown
        let s = sentence(&[
            ("worked", "VBD", 0),
            ("hard", "RB", 0),
            ("blue", "JJ", 0),
            ("Red", "JJ", 0),
        ]);
        assert_eq!(collector.classify(&s, 1), None);
        assert_eq!(collector.classify(&s, 2), None);
        // lookups are case-sensitive
        assert_eq!(collector.classify(&s, 3), None);
    }

    #[test]
    fn test_tag_must_match_exactly() {
        let map = map();
        let collector = ExampleCollector::new(&map);
        let s = sentence(&[("ran", "VBD", 0), ("quickly", "RBR", 0), ("red", "JJR", 0)]);
        assert_eq!(collector.classify(&s, 1), None);
        assert_eq!(collector.classify(&s, 2), None);
    }

    #[test]
    fn test_adjective_sharing_an_adverb_still_counts() {
        let map = MorphologyMap::build(&Lexicon::from_words(
            ["economic", "economical"],
            ["economically"],
        ));
        let mut collector = ExampleCollector::new(&map);
        collector.collect_sentence(&sentence(&[
            ("It", "PRP", 1),
            ("proved", "VBD", 1),
            ("economical", "JJ", 1),
        ]));
        collector.collect_sentence(&sentence(&[
            ("It", "PRP", 1),
            ("ran", "VBD", 1),
            ("economically", "RB", 1),
        ]));

        let collected = collector.finish();
        assert_eq!(collected.adjectives.len(), 1);
        assert_eq!(collected.adjectives[0].ind, 2);
        assert_eq!(collected.adverbs.len(), 1);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let map = map();
        let mut collector = ExampleCollector::new(&map);
        let s = sentence(&[("Go", "VB", 0), ("quickly", "RB", 0)]);
        collector.collect_sentence(&s);
        collector.collect_sentence(&s);

        assert_eq!(collector.adverb_count(), 2);
        assert_eq!(collector.finish().sentences, 2);
    }

    #[test]
    fn test_label_serialization() {
        assert_eq!(serde_json::to_string(&Label::Adjective).unwrap(), "\"ADJ\"");
        assert_eq!(serde_json::to_string(&Label::Adverb).unwrap(), "\"ADV\"");
        assert_eq!(Label::Adverb.to_string(), "ADV");
    }
}
