use super::*;
use crate::entropy::{ChaChaEntropy, ScriptedEntropy};
use proptest::prelude::*;
use std::time::Duration;

fn config() -> SimConfig {
    SimConfig::default()
}

#[test]
fn start_begins_accumulating() {
    let mut entropy = ScriptedEntropy::new();
    let ballot = Ballot::new();

    let (ballot, effects) = ballot.transition(BallotEvent::Start, &config(), &mut entropy);

    assert!(ballot.active);
    assert_eq!(ballot.count, 0);
    assert!(effects.contains(&Effect::StartRepeating {
        id: TimerId::VoteTick,
        every: Duration::from_millis(300),
    }));
    assert!(effects.contains(&Effect::Emit(Event::VotingStarted)));
}

#[test]
fn start_while_active_is_a_no_op() {
    let mut entropy = ScriptedEntropy::new();
    let ballot = Ballot {
        count: 4,
        active: true,
    };

    let (after, effects) = ballot.transition(BallotEvent::Start, &config(), &mut entropy);

    assert_eq!(after.count, 4);
    assert!(after.active);
    assert!(effects.is_empty());
}

#[test]
fn start_after_carrying_is_a_no_op() {
    let mut entropy = ScriptedEntropy::new();
    let ballot = Ballot {
        count: 12,
        active: false,
    };

    let (after, effects) = ballot.transition(BallotEvent::Start, &config(), &mut entropy);

    assert!(!after.active);
    assert!(effects.is_empty());
}

#[test]
fn ticks_accumulate_scripted_increments() {
    let config = config();
    let mut entropy = ScriptedEntropy::new().with_ints([3, 1, 2]);
    let ballot = Ballot {
        count: 0,
        active: true,
    };

    let (ballot, _) = ballot.transition(BallotEvent::Tick, &config, &mut entropy);
    assert_eq!(ballot.count, 3);

    let (ballot, _) = ballot.transition(BallotEvent::Tick, &config, &mut entropy);
    assert_eq!(ballot.count, 4);

    let (ballot, effects) = ballot.transition(BallotEvent::Tick, &config, &mut entropy);
    assert_eq!(ballot.count, 6);
    assert!(ballot.active);
    assert!(effects.is_empty());
}

#[test]
fn reaching_the_threshold_stops_the_tick_and_schedules_the_advance() {
    let config = config();
    let mut entropy = ScriptedEntropy::new().with_ints([2]);
    let ballot = Ballot {
        count: 11,
        active: true,
    };

    let (ballot, effects) = ballot.transition(BallotEvent::Tick, &config, &mut entropy);

    assert_eq!(ballot.count, 13);
    assert!(!ballot.active);
    assert!(ballot.carried(&config));
    assert_eq!(
        effects,
        vec![
            Effect::CancelTimer {
                id: TimerId::VoteTick
            },
            Effect::StartAfter {
                id: TimerId::VoteAdvance,
                delay: Duration::from_secs(1),
            },
            Effect::Emit(Event::ConsensusReached { votes: 13 }),
        ]
    );
}

#[test]
fn count_is_clamped_to_the_ballot_size() {
    let config = config();
    let mut entropy = ScriptedEntropy::new().with_ints([3]);
    let ballot = Ballot {
        count: 14,
        active: true,
    };

    let (ballot, _) = ballot.transition(BallotEvent::Tick, &config, &mut entropy);

    assert_eq!(ballot.count, 15);
}

#[test]
fn no_ticks_land_after_the_threshold() {
    let mut entropy = ScriptedEntropy::new().with_ints([3, 3, 3]);
    let ballot = Ballot {
        count: 12,
        active: false,
    };

    let (after, effects) = ballot.transition(BallotEvent::Tick, &config(), &mut entropy);

    assert_eq!(after.count, 12);
    assert!(effects.is_empty());
}

#[test]
fn minimum_increments_carry_in_exactly_twelve_ticks() {
    // Worst case: one vote per tick means the threshold lands on the
    // twelfth tick
    let config = config();
    let mut entropy = ScriptedEntropy::new(); // exhausted script draws the minimum
    let mut ballot = Ballot {
        count: 0,
        active: true,
    };

    for tick in 1..=11 {
        let (next, _) = ballot.transition(BallotEvent::Tick, &config, &mut entropy);
        ballot = next;
        assert_eq!(ballot.count, tick);
        assert!(ballot.active);
    }

    let (ballot, _) = ballot.transition(BallotEvent::Tick, &config, &mut entropy);
    assert_eq!(ballot.count, 12);
    assert!(!ballot.active);
}

#[test]
fn seeded_run_terminates_within_the_tick_bound() {
    let config = config();
    let mut entropy = ChaChaEntropy::seeded(99);
    let mut ballot = Ballot::new();

    let (next, _) = ballot.transition(BallotEvent::Start, &config, &mut entropy);
    ballot = next;

    let mut ticks = 0;
    while ballot.active {
        let (next, _) = ballot.transition(BallotEvent::Tick, &config, &mut entropy);
        ballot = next;
        ticks += 1;
        assert!(ticks <= 12, "increments of at least 1 must carry by tick 12");
    }

    assert!(ballot.carried(&config));
    assert!(ballot.count <= config.vote_capacity);
}

proptest! {
    #[test]
    fn count_never_decreases_and_never_exceeds_capacity(
        draws in proptest::collection::vec(0u32..100, 0..64),
    ) {
        let config = config();
        let mut entropy = ScriptedEntropy::new().with_ints(draws);
        let mut ballot = Ballot { count: 0, active: true };

        let mut last = 0;
        for _ in 0..64 {
            let (next, _) = ballot.transition(BallotEvent::Tick, &config, &mut entropy);
            ballot = next;
            prop_assert!(ballot.count >= last);
            prop_assert!(ballot.count <= config.vote_capacity);
            last = ballot.count;
        }
    }
}
