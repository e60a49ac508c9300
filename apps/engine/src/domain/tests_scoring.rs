use crate::domain::scoring::{apply_hand_scoring, score_hand, winning_team, HandScore};
use crate::domain::state::{HandState, Phase};
use crate::domain::test_state_helpers::hand_over_state;
use crate::domain::DomainError;

#[test]
fn march_alone_scores_four() {
    assert_eq!(
        score_hand(1, 5, true),
        HandScore {
            team: 1,
            points: 4,
            euchred: false
        }
    );
}

#[test]
fn march_with_partner_scores_two() {
    assert_eq!(score_hand(0, 5, false).points, 2);
}

#[test]
fn three_or_four_tricks_score_one() {
    for tricks in [3, 4] {
        for alone in [false, true] {
            let s = score_hand(0, tricks, alone);
            assert_eq!((s.team, s.points, s.euchred), (0, 1, false));
        }
    }
}

#[test]
fn euchre_gives_defenders_two() {
    for tricks in 0..=2 {
        let s = score_hand(0, tricks, true);
        assert_eq!((s.team, s.points, s.euchred), (1, 2, true));
    }
}

#[test]
fn scoring_rotates_dealer_and_resets_hand() {
    let mut state = hand_over_state(3, 1, false, [1, 4], [6, 7]);
    let outcome = apply_hand_scoring(&mut state).unwrap();
    assert_eq!(state.scores, [6, 8]);
    assert_eq!(state.dealer, 0);
    assert_eq!(state.hand, HandState::new());
    assert_eq!(outcome.dealer, 3);
    assert_eq!(outcome.maker, 1);
    assert_eq!(outcome.scores_after, [6, 8]);
}

#[test]
fn euchred_makers_concede_points() {
    let mut state = hand_over_state(0, 2, true, [2, 3], [0, 0]);
    let outcome = apply_hand_scoring(&mut state).unwrap();
    assert!(outcome.score.euchred);
    assert_eq!(state.scores, [0, 2]);
}

#[test]
fn lone_march_can_overshoot_ten() {
    let mut state = hand_over_state(1, 0, true, [5, 0], [9, 3]);
    apply_hand_scoring(&mut state).unwrap();
    assert_eq!(state.scores, [13, 3]);
    assert_eq!(winning_team(state.scores), Some(0));
}

#[test]
fn winning_team_needs_ten() {
    assert_eq!(winning_team([9, 9]), None);
    assert_eq!(winning_team([3, 10]), Some(1));
}

#[test]
fn scoring_outside_hand_over_is_rejected() {
    let mut state = hand_over_state(0, 0, false, [3, 2], [0, 0]);
    state.hand.phase = Phase::PlayTrick;
    assert_eq!(
        apply_hand_scoring(&mut state),
        Err(DomainError::phase_mismatch(
            Phase::HandOver,
            Phase::PlayTrick
        ))
    );
    assert_eq!(state.scores, [0, 0]);
}
