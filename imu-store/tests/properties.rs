//! Property-based tests for the canonical reducer.
//!
//! Any sequence of create/delete actions keeps the state normalized, and
//! reducing never changes the input state.

use imu_store::reducer::reduce;
use imu_store::{Action, Entity, EntityState, actions};
use proptest::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Step {
    Create(u8),
    Delete(u8),
    Update(u8),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0u8..12).prop_map(Step::Create),
        (0u8..12).prop_map(Step::Delete),
        (0u8..12).prop_map(Step::Update),
    ]
}

fn to_action(step: &Step) -> Action {
    let chars = actions().characters;
    match *step {
        Step::Create(id) => chars.create(Entity::new().with_id(id).with("n", id)),
        Step::Delete(id) => chars.delete(id),
        Step::Update(id) => chars.update(Entity::new().with_id(id).with("n", u32::from(id) + 100)),
    }
}

proptest! {
    #[test]
    fn creates_and_deletes_stay_normalized(steps in prop::collection::vec(step(), 0..40)) {
        let mut state: Option<Arc<EntityState>> = None;
        for s in steps.iter().filter(|s| !matches!(s, Step::Update(_))) {
            state = Some(reduce(state, &to_action(s)));
        }
        let state = state.unwrap_or_default();
        prop_assert!(state.is_normalized());
    }

    #[test]
    fn reducing_never_mutates_input(steps in prop::collection::vec(step(), 1..20)) {
        let mut state: Arc<EntityState> = Arc::default();
        for s in &steps {
            let snapshot = (*state).clone();
            let next = reduce(Some(Arc::clone(&state)), &to_action(s));
            prop_assert_eq!(&*state, &snapshot);
            state = next;
        }
    }

    #[test]
    fn all_ids_never_duplicate(steps in prop::collection::vec(step(), 0..40)) {
        let mut state: Option<Arc<EntityState>> = None;
        for s in &steps {
            state = Some(reduce(state, &to_action(s)));
        }
        let state = state.unwrap_or_default();
        let mut sorted: Vec<String> = state.all_ids.iter().map(|v| v.to_string()).collect();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), state.all_ids.len());
    }
}
