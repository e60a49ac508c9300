//! Phase handlers: one call advances the hand by one phase.

use tracing::debug;

use super::GameFlow;
use crate::domain::bidding::{self, bidding_order, go_alone_mask, round1_mask, round2_mask};
use crate::domain::scoring::apply_hand_scoring;
use crate::domain::{dealing, tricks, Action, ActionId, ActionMask, Phase};
use crate::error::EngineError;

impl GameFlow {
    fn expect_phase(&self, expected: Phase) -> Result<(), EngineError> {
        let found = self.state.hand.phase;
        if found != expected {
            return Err(EngineError::InvalidPhase { expected, found });
        }
        Ok(())
    }

    pub(super) fn deal(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::Deal)?;
        let hand_index = self.state.hands_dealt;
        for player in &self.players {
            player.on_new_hand(hand_index);
        }
        dealing::deal(&mut self.state)?;
        debug!(
            seed = self.state.seed,
            hand_index,
            dealer = self.state.dealer,
            face_up = ?self.state.hand.face_up,
            "hand dealt"
        );
        Ok(())
    }

    /// Each seat from the dealer's left may order the face-up card up.
    pub(super) fn bid_round_1(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::BidRound1)?;
        for seat in bidding_order(self.state.dealer) {
            if self.request_action(seat, round1_mask())? == Action::OrderUp {
                let trump = bidding::order_up(&mut self.state.hand, seat)?;
                debug!(seat, %trump, "ordered up");
                return Ok(());
            }
        }
        bidding::end_round1(&mut self.state.hand)?;
        debug!("round one passed out");
        Ok(())
    }

    /// Each seat may name any suit but the turned-down one. With
    /// stick-the-dealer on, the dealer may not pass; otherwise four passes
    /// throw the hand in and the same dealer deals again.
    pub(super) fn bid_round_2(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::BidRound2)?;
        let dealer = self.state.dealer;
        let turned_down = self.state.hand.require_face_up()?.suit();
        let stick = self.state.rules.stick_the_dealer;

        for seat in bidding_order(dealer) {
            let mask = round2_mask(turned_down, stick && seat == dealer);
            if let Action::CallTrump(suit) = self.request_action(seat, mask)? {
                bidding::call_trump(&mut self.state.hand, seat, suit)?;
                debug!(seat, trump = %suit, "trump called");
                return Ok(());
            }
        }

        bidding::redeal(&mut self.state.hand)?;
        debug!(dealer, "all passed, redealing");
        Ok(())
    }

    pub(super) fn go_alone_decision(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::GoAloneDecision)?;
        let maker = self.state.hand.require_maker()?;
        let alone = self.request_action(maker, go_alone_mask())? == Action::GoAloneYes;
        bidding::set_going_alone(&mut self.state.hand, alone)?;
        debug!(maker, alone, "go-alone decided");
        Ok(())
    }

    /// The dealer picks up the face-up card and discards one of six. This
    /// happens whichever round trump was made in.
    pub(super) fn dealer_pickup_discard(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::DealerPickupDiscard)?;
        let dealer = self.state.dealer;
        let six = bidding::dealer_pickup(&mut self.state.hand, dealer)?;
        let legal = ActionMask::discards_from(six);
        let action = self.request_action(dealer, legal)?;
        let Action::DiscardCard(card) = action else {
            return Err(EngineError::illegal_action(dealer, ActionId::from(action), legal));
        };
        bidding::dealer_discard(&mut self.state.hand, dealer, card)?;
        debug!(dealer, discarded = %card, "dealer discarded");
        Ok(())
    }

    /// Play one full trick: every active seat in turn from the leader, then
    /// score it.
    pub(super) fn play_trick(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::PlayTrick)?;
        let trump = self.state.hand.require_trump()?;
        let mut seat = self
            .state
            .hand
            .lead_player
            .unwrap_or_else(|| self.state.hand.next_player(self.state.dealer));

        for _ in 0..self.state.hand.active_players() {
            let hs = &self.state.hand;
            let legal = tricks::play_mask(hs.hands[seat as usize], hs.lead_card, trump);
            let action = self.request_action(seat, legal)?;
            let Action::PlayCard(card) = action else {
                return Err(EngineError::illegal_action(seat, ActionId::from(action), legal));
            };
            tricks::play_card(&mut self.state.hand, seat, card)?;
            seat = self.state.hand.next_player(seat);
        }

        let winner = tricks::complete_trick(&mut self.state.hand)?;
        debug!(
            winner,
            trick = self.state.hand.tricks_played,
            tricks_won = ?self.state.hand.tricks_won,
            "trick complete"
        );
        Ok(())
    }

    pub(super) fn hand_over(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::HandOver)?;
        let outcome = apply_hand_scoring(&mut self.state)?;
        debug!(
            seed = self.state.seed,
            maker = outcome.maker,
            trump = %outcome.trump,
            alone = outcome.going_alone,
            team = outcome.score.team,
            points = outcome.score.points,
            euchred = outcome.score.euchred,
            scores = ?outcome.scores_after,
            "hand scored"
        );
        self.last_hand = Some(outcome);
        self.hands_scored += 1;
        Ok(())
    }
}
