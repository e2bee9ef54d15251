use super::*;

fn info(version: &str) -> PlatformInfo {
    PlatformInfo { cluster_id: "c1".to_owned(), version: version.to_owned(), ..PlatformInfo::default() }
}

#[test]
fn info_state_starts_absent() {
    let state = InfoState::default();
    assert!(state.info.is_none());
    assert_eq!(state.revision, 0);
}

#[test]
fn set_replaces_payload_wholesale() {
    let first = InfoReducer::reduce(&InfoState::default(), InfoAction::Set(info("1.0.0")));
    let second = InfoReducer::reduce(&first, InfoAction::Set(info("1.1.0")));
    assert_eq!(second.info, Some(info("1.1.0")));
}

#[test]
fn identical_payload_still_bumps_revision() {
    let first = InfoReducer::reduce(&InfoState::default(), InfoAction::Set(info("1.0.0")));
    let second = InfoReducer::reduce(&first, InfoAction::Set(info("1.0.0")));
    assert_eq!(second.revision, 2);
    assert_ne!(first, second);
}
