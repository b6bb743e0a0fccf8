//! End-to-end validation scenarios against the bundled dictionary

use kireji_core::{
    HaikuForm, HaikuValidator, HaikuVerdict, LinePolicy, LineRule, Rejection, StructureError,
    SyllableRange, TokenizerKind,
};

const BASHO: &str = "an old silent pond, a little frog jumps into, the sound of water.";

fn validator(tokenizer: TokenizerKind) -> HaikuValidator {
    HaikuValidator::builder().tokenizer(tokenizer).build()
}

fn mismatch(verdict: &HaikuVerdict) -> (usize, SyllableRange) {
    match verdict.reason() {
        Some(Rejection::SyllableMismatch { line, range, .. }) => (*line, *range),
        other => panic!("Expected syllable mismatch, got {other:?}"),
    }
}

#[test]
fn test_canonical_haiku_accepted_by_both_tokenizers() {
    for kind in TokenizerKind::ALL {
        let verdict = validator(kind).validate(BASHO);
        assert!(verdict.is_accepted(), "{kind}: {:?}", verdict.reason());

        let ranges: Vec<SyllableRange> = verdict.lines().iter().map(|l| l.range).collect();
        assert_eq!(
            ranges,
            vec![
                SyllableRange::exact(5),
                SyllableRange::exact(7),
                SyllableRange::exact(5)
            ]
        );
    }
}

#[test]
fn test_short_translation_counts_four_on_first_line() {
    // "old silent pond" is four syllables in the CMU dictionary
    let verdict =
        validator(TokenizerKind::Linguistic).validate("old silent pond, a frog jumps in, the sound of water.");
    assert_eq!(mismatch(&verdict), (1, SyllableRange::exact(4)));
}

#[test]
fn test_one_comma_is_malformed() {
    let verdict = validator(TokenizerKind::Linguistic).validate("hello world, foo");
    assert_eq!(
        verdict.reason(),
        Some(&Rejection::MalformedStructure(
            StructureError::WrongCommaCount { found: 1 }
        ))
    );
    assert!(verdict.lines().is_empty());
}

#[test]
fn test_two_commas_but_wrong_counts() {
    let verdict = validator(TokenizerKind::Linguistic).validate("hello, world, foo");
    assert_eq!(mismatch(&verdict), (1, SyllableRange::exact(2)));
}

#[test]
fn test_ambiguous_word_rejected_on_exact_line() {
    // "every" is two or three syllables, so line 1 spans 5-6
    let verdict = validator(TokenizerKind::Linguistic)
        .validate("every silent pond, a little frog jumps into, the sound of water");
    assert_eq!(mismatch(&verdict), (1, SyllableRange::new(5, 6).unwrap()));
}

#[test]
fn test_ambiguous_word_accepted_on_containment_line() {
    let verdict = validator(TokenizerKind::Linguistic)
        .validate("an old silent pond, every frog jumps in ponds, the sound of water");
    assert!(verdict.is_accepted());
    assert_eq!(verdict.lines()[1].range, SyllableRange::new(6, 7).unwrap());
}

#[test]
fn test_containment_line_with_wide_range() {
    let verdict = validator(TokenizerKind::Linguistic)
        .validate("an old silent pond, family fire jumps in ponds, the sound of water");
    assert!(verdict.is_accepted());
    assert_eq!(verdict.lines()[1].range, SyllableRange::new(6, 8).unwrap());
}

#[test]
fn test_middle_line_out_of_range() {
    let verdict =
        validator(TokenizerKind::Linguistic).validate("an old silent pond, frog, the sound of water");
    assert_eq!(mismatch(&verdict), (2, SyllableRange::exact(1)));
    assert_eq!(verdict.lines().len(), 2);
}

#[test]
fn test_ambiguity_on_last_line() {
    let verdict = validator(TokenizerKind::Linguistic)
        .validate("an old silent pond, a little frog jumps into, every sound of fire");
    assert_eq!(mismatch(&verdict), (3, SyllableRange::new(5, 7).unwrap()));
}

#[test]
fn test_unknown_words_count_as_zero() {
    let verdict = validator(TokenizerKind::Linguistic).validate("zxq blorf, quux, frobnicate");
    assert_eq!(mismatch(&verdict), (1, SyllableRange::ZERO));
    let unknown: Vec<&str> = verdict.lines()[0].unknown_words().collect();
    assert_eq!(unknown, vec!["zxq", "blorf"]);
}

#[test]
fn test_unknown_words_accepted_by_zero_targets() {
    let form = HaikuForm {
        lines: [
            LineRule::new(0, LinePolicy::Exact),
            LineRule::new(0, LinePolicy::Containment),
            LineRule::new(0, LinePolicy::Exact),
        ],
    };
    let validator = HaikuValidator::builder().form(form).build();
    assert!(validator.is_haiku("zxq blorf, quux, frobnicate"));
}

#[test]
fn test_unknown_words_do_not_block_a_haiku() {
    let verdict = validator(TokenizerKind::Linguistic)
        .validate("an old silent pond zxq, a little frog jumps into, the sound of water");
    assert!(verdict.is_accepted());
}

#[test]
fn test_punctuation_tokens_ignored_by_both_tokenizers() {
    let text = "an old silent pond !, a little frog jumps into --, the sound of water ...";
    for kind in TokenizerKind::ALL {
        assert!(validator(kind).is_haiku(text), "{kind} rejected");
    }
}

#[test]
fn test_tokenizers_diverge_on_attached_punctuation() {
    // Only the final '.' is stripped; "water!" stays glued under whitespace splitting
    let text = "an old silent pond, a little frog jumps into, the sound of water!.";

    assert!(validator(TokenizerKind::Linguistic).is_haiku(text));

    let verdict = validator(TokenizerKind::Whitespace).validate(text);
    assert_eq!(mismatch(&verdict), (3, SyllableRange::exact(3)));
}

#[test]
fn test_case_insensitive_lookup() {
    assert!(validator(TokenizerKind::Linguistic)
        .is_haiku("An Old Silent Pond, A Little Frog Jumps Into, The Sound Of Water."));
}

#[test]
fn test_repeated_validation_is_deterministic() {
    let validator = validator(TokenizerKind::Linguistic);
    let first = validator.validate(BASHO);
    let second = validator.validate(BASHO);
    assert_eq!(first, second);
}
