//! End-to-end round: pick a word, play it through, answer it.

use fingerspell::anim::Animation;
use fingerspell::answer::accepts;
use fingerspell::decompose::{BLANK, decompose};
use fingerspell::glyphs::GlyphSet;
use fingerspell::helpers::builtin_word_list;
use fingerspell::types::{DEFAULT_DELAY, INITIAL_DELAY, LengthBounds};
use fingerspell::words::{dataset_bounds, pick_word};

use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn every_builtin_word_is_spellable() {
    let glyphs = GlyphSet::builtin();
    for word in builtin_word_list() {
        assert!(
            decompose(&word.to_lowercase(), &glyphs).is_ok(),
            "built-in word {word:?} cannot be spelled"
        );
    }
}

#[test]
fn full_round_with_the_builtin_list() {
    let glyphs = GlyphSet::builtin();
    let words = builtin_word_list();
    let (lo, hi) = dataset_bounds(&words, &glyphs).unwrap();
    assert!(lo >= 1 && hi > lo);

    let mut bounds = LengthBounds::new(lo, hi);
    bounds.set_min(3);
    bounds.set_max(6);

    let mut rng = StdRng::seed_from_u64(42);
    let word = pick_word(&words, &glyphs, &bounds, &mut rng).unwrap();
    assert!(bounds.contains(word.visible_len()));

    // play the word through on a synthetic tick clock
    let mut anim = Animation::new(DEFAULT_DELAY);
    anim.start(word.tokens.clone(), 0);
    let mut now = 0;
    while anim.is_playing() {
        now += 1;
        anim.tick(now, &glyphs);
        assert!(now < 10_000, "animation never finished");
    }

    // one display per token: pre-roll for the first, a full delay each after
    let expected_end = INITIAL_DELAY + DEFAULT_DELAY as u64 * (word.tokens.len() as u64 - 1);
    assert_eq!(now, expected_end);
    assert_eq!(anim.frame().unwrap().glyph, BLANK);

    // the spelled word itself is an accepted answer
    assert!(accepts(&word.normalized, &word.normalized));
}

#[test]
fn picks_stay_inside_moving_bounds() {
    let glyphs = GlyphSet::builtin();
    let words = builtin_word_list();
    let (lo, hi) = dataset_bounds(&words, &glyphs).unwrap();
    let mut bounds = LengthBounds::new(lo, hi);
    let mut rng = StdRng::seed_from_u64(7);

    for (min, max) in [(2, 4), (5, 8), (3, 3)] {
        bounds.set_min(min);
        bounds.set_max(max);
        for _ in 0..10 {
            let word = pick_word(&words, &glyphs, &bounds, &mut rng).unwrap();
            assert!(
                bounds.contains(word.visible_len()),
                "{} has {} signs, outside {min}..={max}",
                word.normalized,
                word.visible_len()
            );
        }
    }
}
