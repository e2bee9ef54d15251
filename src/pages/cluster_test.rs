use super::*;
use crate::net::types::{Container, Slot};

#[test]
fn slot_usage_counts_enabled_occupied_slots() {
    let agent = Agent {
        id: "a1".to_owned(),
        resource_pool: "default".to_owned(),
        slots: vec![
            Slot {
                id: "s0".to_owned(),
                enabled: true,
                container: Some(Container { id: "c0".to_owned(), state: "RUNNING".to_owned() }),
            },
            Slot { id: "s1".to_owned(), enabled: true, container: None },
            Slot {
                id: "s2".to_owned(),
                enabled: false,
                container: Some(Container { id: "c2".to_owned(), state: "RUNNING".to_owned() }),
            },
        ],
    };
    assert_eq!(slot_usage(&agent), "1 / 2");
}
