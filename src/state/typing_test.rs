use super::*;

fn engine(phrases: &[&str]) -> TypingEngine {
    TypingEngine::new(phrases.iter().map(|p| (*p).to_owned()).collect())
        .expect("non-empty phrase list")
}

#[test]
fn empty_phrase_list_does_not_build_an_engine() {
    assert!(TypingEngine::new(Vec::new()).is_none());
}

#[test]
fn typing_grows_prefix_one_char_per_tick() {
    let mut eng = engine(&["abc"]);
    assert_eq!(eng.rendered(), "");
    assert_eq!(eng.advance(), TYPE_STEP_MS);
    assert_eq!(eng.rendered(), "a");
    assert_eq!(eng.advance(), TYPE_STEP_MS);
    assert_eq!(eng.rendered(), "ab");
}

#[test]
fn full_phrase_triggers_hold_pause() {
    let mut eng = engine(&["ab"]);
    assert_eq!(eng.advance(), TYPE_STEP_MS);
    assert_eq!(eng.advance(), HOLD_MS);
    assert_eq!(eng.rendered(), "ab");
    assert_eq!(eng.phase(), TypingPhase::Holding);
}

#[test]
fn deleting_shrinks_prefix_and_rests_at_zero() {
    let mut eng = engine(&["ab", "xy"]);
    // Type "ab" fully, hold, then the hold expiry deletes the first char.
    eng.advance();
    eng.advance();
    assert_eq!(eng.advance(), DELETE_STEP_MS);
    assert_eq!(eng.phase(), TypingPhase::Deleting);
    assert_eq!(eng.rendered(), "a");
    // Final delete advances the phrase index and rests.
    assert_eq!(eng.advance(), REST_MS);
    assert_eq!(eng.rendered(), "");
    assert_eq!(eng.phase(), TypingPhase::Resting);
    assert_eq!(eng.phrase_index(), 1);
}

#[test]
fn hold_expiry_performs_the_first_deletion() {
    let mut eng = engine(&["abc"]);
    while eng.phase() != TypingPhase::Holding {
        eng.advance();
    }
    // No extra no-op tick between the hold and the first deletion.
    assert_eq!(eng.advance(), DELETE_STEP_MS);
    assert_eq!(eng.rendered(), "ab");
    assert_eq!(eng.phase(), TypingPhase::Deleting);
}

#[test]
fn rest_tick_types_the_first_char_of_the_next_phrase() {
    let mut eng = engine(&["a", "xy"]);
    eng.advance(); // "a" fully typed -> holding
    eng.advance(); // hold expires, "a" deleted -> resting, index 1
    assert_eq!(eng.phrase_index(), 1);
    assert_eq!(eng.advance(), TYPE_STEP_MS);
    assert_eq!(eng.rendered(), "x");
    assert_eq!(eng.phase(), TypingPhase::Typing);
}

#[test]
fn single_char_phrase_holds_straight_out_of_rest() {
    let mut eng = engine(&["ab", "z"]);
    // Run through "ab" until the engine rests on phrase "z".
    while eng.phase() != TypingPhase::Resting {
        eng.advance();
    }
    assert_eq!(eng.advance(), HOLD_MS);
    assert_eq!(eng.rendered(), "z");
    assert_eq!(eng.phase(), TypingPhase::Holding);
}

#[test]
fn phrases_cycle_in_order_with_period_n() {
    let phrases = ["one", "two", "three"];
    let mut eng = engine(&phrases);
    let mut visited = vec![eng.phrase_index()];
    for _ in 0..2000 {
        eng.advance();
        if *visited.last().expect("non-empty") != eng.phrase_index() {
            visited.push(eng.phrase_index());
        }
    }
    // The index sequence is 0, 1, 2, 0, 1, 2, ...
    for (step, index) in visited.iter().enumerate() {
        assert_eq!(*index, step % phrases.len());
    }
    assert!(visited.len() > phrases.len(), "engine should loop past one period");
}

#[test]
fn cursor_stays_within_current_phrase_bounds() {
    let phrases = ["hello", "hi", "wider phrase"];
    let mut eng = engine(&phrases);
    for _ in 0..5000 {
        eng.advance();
        let len = phrases[eng.phrase_index()].chars().count();
        assert!(eng.cursor() <= len, "cursor {} beyond phrase length {len}", eng.cursor());
        assert_eq!(eng.rendered().chars().count(), eng.cursor());
    }
}

#[test]
fn unicode_phrases_advance_by_chars_not_bytes() {
    let mut eng = engine(&["héllo"]);
    eng.advance();
    assert_eq!(eng.rendered(), "h");
    eng.advance();
    assert_eq!(eng.rendered(), "hé");
}

#[test]
fn delays_match_the_documented_intervals() {
    assert_eq!(TYPE_STEP_MS, 100);
    assert_eq!(DELETE_STEP_MS, 50);
    assert_eq!(HOLD_MS, 2000);
    assert_eq!(REST_MS, 500);
}
