use super::*;

#[test]
fn empty_pattern_is_rejected() {
    assert_eq!(
        MatchState::new(&b"abc"[..], &b""[..]).unwrap_err(),
        PatternError::Empty
    );
}

#[test]
fn flags_come_from_pattern_ends() {
    let state = MatchState::new(&b"cat"[..], &b"^cat$"[..]).unwrap();
    assert!(state.has_circumflex);
    assert!(state.has_dollar);
    assert!(!state.has_plus);
    assert_eq!(state.body_start(), 1);

    let state = MatchState::new(&b"cat"[..], &b"c.t"[..]).unwrap();
    assert!(!state.is_anchored());
    assert_eq!(state.body_start(), 0);
}

#[test]
fn reversed_is_an_independent_copy() {
    let state = MatchState::new(&b"the cat"[..], &b"^cat$"[..]).unwrap();
    let reversed = state.reversed().unwrap();
    assert_eq!(&reversed.line[..], b"tac eht");
    assert_eq!(&reversed.pattern[..], b"$tac^");
    assert!(reversed.has_circumflex && reversed.has_dollar);
    assert_eq!(&state.line[..], b"the cat");
    assert_eq!(&state.pattern[..], b"^cat$");
}

#[test]
fn reversing_line_twice_is_identity() {
    let state = MatchState::new(&b"abc def"[..], &b"f$"[..]).unwrap();
    let twice: Vec<u8> = state.reversed().unwrap().line.iter().rev().copied().collect();
    assert_eq!(twice, b"abc def");
}

#[test]
fn sentinel_is_never_a_group() {
    let state = MatchState::new(&b"x"[..], &b"x"[..]).unwrap();
    assert_eq!(state.capture_count(), 0);
    assert_eq!(state.captured(0), None);
    assert_eq!(state.captured(1), None);
}

#[test]
fn captures_survive_later_attempts() {
    let mut state = MatchState::new(&b"x"[..], &b"(a)"[..]).unwrap();
    state.begin_attempt(0);
    state.capture(Bytes::from_static(b"first"));
    assert_eq!(&state.captured(1).unwrap()[..], b"first");

    state.begin_attempt(1);
    assert_eq!(&state.captured(1).unwrap()[..], b"first");
    state.capture(Bytes::from_static(b"second"));
    assert_eq!(&state.captured(1).unwrap()[..], b"first");
    assert_eq!(&state.captured(2).unwrap()[..], b"second");
    assert_eq!(state.capture_count(), 2);
}

#[test]
fn begin_attempt_skips_anchor() {
    let mut state = MatchState::new(&b"abc"[..], &b"^abc"[..]).unwrap();
    state.begin_attempt(2);
    assert_eq!(state.line_index, 2);
    assert_eq!(state.pattern_index, 1);
    assert_eq!(state.remaining(), b"c");
    assert_eq!(state.current_byte(), Some(b'c'));
}
