use super::*;

#[test]
fn ui_state_default_light_and_expanded() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.sidebar_collapsed);
}
