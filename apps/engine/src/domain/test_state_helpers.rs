use crate::domain::rules::RulesConfig;
use crate::domain::state::{GameState, HandState, Phase, Seat};
use crate::domain::{try_parse_cards, Card, Hand, Suit};

pub fn card(token: &str) -> Card {
    token.parse().expect("valid card token")
}

pub fn hand_of(tokens: &[&str]) -> Hand {
    try_parse_cards(tokens)
        .expect("valid card tokens")
        .into_iter()
        .collect()
}

/// A hand in trick play with the given cards, nothing played yet.
pub fn playing_state(
    hands: [&[&str]; 4],
    trump: Suit,
    maker: Seat,
    going_alone: bool,
    leader: Seat,
) -> HandState {
    let mut hs = HandState::new();
    for (seat, tokens) in hands.iter().enumerate() {
        let hand = hand_of(tokens);
        hs.deck = hs.deck.without(hand);
        hs.hands[seat] = hand;
    }
    hs.phase = Phase::PlayTrick;
    hs.trump = Some(trump);
    hs.maker = Some(maker);
    hs.going_alone = going_alone;
    hs.lead_player = Some(leader);
    hs
}

/// A game paused at `HandOver` with the given trick split.
pub fn hand_over_state(
    dealer: Seat,
    maker: Seat,
    going_alone: bool,
    tricks_won: [u8; 2],
    scores: [u8; 2],
) -> GameState {
    let mut state = GameState::new(0, RulesConfig::default());
    state.dealer = dealer;
    state.scores = scores;
    state.hand.phase = Phase::HandOver;
    state.hand.trump = Some(Suit::Hearts);
    state.hand.maker = Some(maker);
    state.hand.going_alone = going_alone;
    state.hand.tricks_won = tricks_won;
    state.hand.tricks_played = 5;
    state
}
