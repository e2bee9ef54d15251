use super::*;

#[test]
fn spinner_default_hidden() {
    let state = SpinnerState::default();
    assert!(!state.is_showing);
    assert!(!state.is_opaque);
}

#[test]
fn show_sets_visibility_and_opacity() {
    let state = SpinnerReducer::reduce(&SpinnerState::default(), SpinnerAction::Show { opaque: true });
    assert!(state.is_showing);
    assert!(state.is_opaque);
}

#[test]
fn hide_resets_overlay() {
    let shown = SpinnerReducer::reduce(&SpinnerState::default(), SpinnerAction::Show { opaque: true });
    assert_eq!(SpinnerReducer::reduce(&shown, SpinnerAction::Hide), SpinnerState::default());
}
