use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{card, hand_of, playing_state};
use crate::domain::tricks::{complete_trick, legal_plays, play_card, play_mask, trick_winner};
use crate::domain::{ActionId, DomainError, Suit};

fn slots(tokens: [Option<&str>; 4]) -> [Option<crate::domain::Card>; 4] {
    tokens.map(|t| t.map(card))
}

#[test]
fn right_bower_beats_everything() {
    let cards = slots([Some("AH"), Some("JD"), Some("JH"), Some("KH")]);
    assert_eq!(trick_winner(Suit::Hearts, card("AH"), &cards), Some(2));
}

#[test]
fn left_bower_beats_trump_ace() {
    let cards = slots([Some("AH"), Some("JD"), Some("9C"), Some("KH")]);
    assert_eq!(trick_winner(Suit::Hearts, card("AH"), &cards), Some(1));
}

#[test]
fn led_nine_beats_off_suit_ace() {
    let cards = slots([Some("9S"), Some("AD"), Some("AC"), Some("TS")]);
    assert_eq!(trick_winner(Suit::Hearts, card("9S"), &cards), Some(3));
}

#[test]
fn left_bower_led_is_a_trump_lead() {
    // Clubs trump; JS led counts as clubs, so the clubs nine follows and the
    // spades ace does not.
    let cards = slots([Some("JS"), Some("AS"), Some("9C"), None]);
    assert_eq!(trick_winner(Suit::Clubs, card("JS"), &cards), Some(0));
    let hand = hand_of(&["AS", "9C"]);
    assert_eq!(
        legal_plays(hand, Some(card("JS")), Suit::Clubs),
        hand_of(&["9C"])
    );
}

#[test]
fn empty_slots_never_win() {
    let cards = slots([None, Some("9D"), Some("TD"), None]);
    assert_eq!(trick_winner(Suit::Clubs, card("9D"), &cards), Some(2));
    assert_eq!(trick_winner(Suit::Clubs, card("9D"), &[None; 4]), None);
}

#[test]
fn leader_may_play_anything() {
    let hand = hand_of(&["9C", "AH", "JS"]);
    assert_eq!(legal_plays(hand, None, Suit::Diamonds), hand);
    let mask = play_mask(hand, None, Suit::Diamonds);
    assert_eq!(mask.len(), 3);
    assert!(mask.contains(ActionId::play(card("AH"))));
}

#[test]
fn play_card_enforces_follow_suit() {
    let mut hs = playing_state(
        [&["AH"], &["9H", "AS"], &["KC"], &["QC"]],
        Suit::Clubs,
        0,
        false,
        0,
    );
    play_card(&mut hs, 0, card("AH")).unwrap();
    assert_eq!(hs.lead_card, Some(card("AH")));
    assert_eq!(
        play_card(&mut hs, 1, card("AS")),
        Err(DomainError::MustFollowSuit {
            seat: 1,
            card: card("AS")
        })
    );
    assert_eq!(
        play_card(&mut hs, 1, card("KC")),
        Err(DomainError::CardNotInHand {
            seat: 1,
            card: card("KC")
        })
    );
    play_card(&mut hs, 1, card("9H")).unwrap();
    assert_eq!(hs.num_played, 2);
}

#[test]
fn completing_a_trick_resets_slots_and_passes_lead() {
    let mut hs = playing_state(
        [&["AH", "9S"], &["9H", "TS"], &["KC", "QS"], &["QH", "KS"]],
        Suit::Clubs,
        1,
        false,
        0,
    );
    for (seat, tok) in [(0, "AH"), (1, "9H"), (2, "KC"), (3, "QH")] {
        play_card(&mut hs, seat, card(tok)).unwrap();
    }
    let winner = complete_trick(&mut hs).unwrap();
    assert_eq!(winner, 2);
    assert_eq!(hs.tricks_won, [1, 0]);
    assert_eq!(hs.lead_player, Some(2));
    assert_eq!(hs.lead_card, None);
    assert_eq!(hs.trick_cards, [None; 4]);
    assert_eq!(hs.num_played, 0);
    assert_eq!(hs.tricks_played, 1);
    assert_eq!(hs.tricks.len(), 1);
    assert_eq!(hs.tricks[0].leader, 0);
    assert_eq!(hs.phase, Phase::PlayTrick);
}

#[test]
fn lone_hand_tricks_have_three_cards() {
    // Seat 1 alone; seat 3 sits out.
    let mut hs = playing_state(
        [&["TD"], &["AD"], &["KD"], &["QD"]],
        Suit::Spades,
        1,
        true,
        0,
    );
    hs.tricks_played = 4;
    play_card(&mut hs, 0, card("TD")).unwrap();
    play_card(&mut hs, 1, card("AD")).unwrap();
    play_card(&mut hs, 2, card("KD")).unwrap();
    let winner = complete_trick(&mut hs).unwrap();
    assert_eq!(winner, 1);
    assert_eq!(hs.tricks_won, [0, 1]);
    assert_eq!(hs.phase, Phase::HandOver);
    assert_eq!(hs.hands[3], hand_of(&["QD"]));
}
