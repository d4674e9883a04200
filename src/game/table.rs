//! The turn-based table engine.
//!
//! [`Table`] owns a [`TableState`] and advances it one scheduled
//! [`Transition`] per [`Table::step`]. Some transitions chain into the next
//! one on the same tick (a showdown deals out the remaining board before
//! ranking hands); the chain is drained by an iterative loop, never by
//! recursion, so observers only ever see post-chain states.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::constants::{DEFAULT_SMALL_BLIND, MAX_PLAYERS, MIN_PLAYERS};
use super::entities::{Action, ActionKind, Card, Chips, Deck, DeckExhausted, Player};
use super::eval::{HandSizeError, PokerHand, Score};
use super::events::{BlindKind, DowngradeReason, EventSink, NullSink, TableEvent};
use super::state::{Round, SeatIndex, TableState};
use crate::strategy::Strategy;

/// Fatal failures. These mean the API was misused or the state is corrupt;
/// they are never produced by a strategy merely playing badly.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("a table seats {MIN_PLAYERS} to {MAX_PLAYERS} players, got {0}")]
    BadSeatCount(usize),
    #[error("one strategy per seat: {players} players, {strategies} strategies")]
    StrategyCountMismatch { players: usize, strategies: usize },
    #[error(transparent)]
    DeckExhausted(#[from] DeckExhausted),
    #[error(transparent)]
    Eval(#[from] HandSizeError),
    #[error("seat {0} was asked to act while folded, all-in, or broke")]
    UnplayableSeat(SeatIndex),
    #[error("no seat is able to act")]
    NoEligibleSeat,
    #[error("the game is still running")]
    GameNotOver,
}

/// The engine's scheduled transitions. Exactly one is pending at any time;
/// `Done` is terminal.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Transition {
    Reset,
    NewRound,
    DealPlayerCard,
    StartBettingRound,
    QueryPlayer,
    DetermineWinner,
    IncrementButtons,
    IncreaseRound,
    Showdown,
    Done,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Reset => "reset",
            Self::NewRound => "new round",
            Self::DealPlayerCard => "deal player card",
            Self::StartBettingRound => "start betting round",
            Self::QueryPlayer => "query player",
            Self::DetermineWinner => "determine winner",
            Self::IncrementButtons => "increment buttons",
            Self::IncreaseRound => "increase round",
            Self::Showdown => "showdown",
            Self::Done => "done",
        };
        write!(f, "{repr}")
    }
}

/// Whether a finished transition hands control back to the caller or runs
/// the next transition on the same tick.
enum Flow {
    Chain(Transition),
    Yield(Transition),
}

/// One seat's starting stack and its decision maker.
pub struct Seat {
    pub money: Chips,
    pub strategy: Box<dyn Strategy>,
}

impl Seat {
    #[must_use]
    pub fn new(money: Chips, strategy: impl Strategy + 'static) -> Self {
        Self {
            money,
            strategy: Box::new(strategy),
        }
    }
}

/// A poker table that plays hand after hand until a single seat holds all
/// the chips.
pub struct Table {
    init: TableState,
    state: TableState,
    strategies: Vec<Box<dyn Strategy>>,
    deck: Deck,
    rng: StdRng,
    seed: u64,
    /// Per-seat flag: has this seat been queried this betting round.
    queried: Vec<bool>,
    next: Transition,
    hands_played: u64,
    sink: Box<dyn EventSink>,
}

impl Table {
    /// Build a table with default $1/2 blinds starting at seat 0.
    pub fn new(seats: Vec<Seat>) -> Result<Self, TableError> {
        if seats.is_empty() {
            return Err(TableError::BadSeatCount(0));
        }
        let (players, strategies): (Vec<_>, Vec<_>) = seats
            .into_iter()
            .map(|seat| (Player::new(seat.money), seat.strategy))
            .unzip();
        let state = TableState::new_game(players, DEFAULT_SMALL_BLIND, 0);
        Self::from_state(state, strategies)
    }

    /// Build a table from an explicit initial state, one strategy per seat.
    pub fn from_state(
        state: TableState,
        strategies: Vec<Box<dyn Strategy>>,
    ) -> Result<Self, TableError> {
        let n = state.players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&n) {
            return Err(TableError::BadSeatCount(n));
        }
        if strategies.len() != n {
            return Err(TableError::StrategyCountMismatch {
                players: n,
                strategies: strategies.len(),
            });
        }
        let mut table = Self {
            init: state.clone(),
            state,
            strategies,
            deck: Deck::default(),
            rng: StdRng::seed_from_u64(0),
            seed: 0,
            queried: vec![false; n],
            next: Transition::Reset,
            hands_played: 0,
            sink: Box::new(NullSink),
        };
        table.reset()?;
        Ok(table)
    }

    /// Reseed the random stream and restart the hand sequence. Call this
    /// before stepping; it discards any progress.
    pub fn with_seed(mut self, seed: u64) -> Result<Self, TableError> {
        self.seed = seed;
        self.reset()?;
        Ok(self)
    }

    /// Replace the event sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Read-only view of the authoritative state.
    #[must_use]
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// True once a single seat holds every chip. Further steps are no-ops.
    #[must_use]
    pub fn done(&self) -> bool {
        self.next == Transition::Done
    }

    /// True unless the next step begins a brand-new hand (or the game is
    /// over). Callers use this to fast-forward to hand boundaries.
    #[must_use]
    pub fn round_underway(&self) -> bool {
        !matches!(self.next, Transition::NewRound | Transition::Done)
    }

    /// Hands started since the last reset.
    #[must_use]
    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }

    /// The seat holding the most chips, only available once [`Self::done`].
    pub fn winner(&self) -> Result<(SeatIndex, &Player), TableError> {
        if !self.done() {
            return Err(TableError::GameNotOver);
        }
        self.state.big_stack().ok_or(TableError::NoEligibleSeat)
    }

    /// Restore the configured initial state and start over.
    pub fn reset(&mut self) -> Result<(), TableError> {
        self.run(Transition::Reset)
    }

    /// Execute the scheduled transition, draining any chained ones.
    pub fn step(&mut self) -> Result<(), TableError> {
        if self.done() {
            return Ok(());
        }
        self.run(self.next)
    }

    fn run(&mut self, start: Transition) -> Result<(), TableError> {
        let mut current = start;
        loop {
            match self.execute(current)? {
                Flow::Chain(next) => current = next,
                Flow::Yield(next) => {
                    self.next = next;
                    return Ok(());
                }
            }
        }
    }

    fn execute(&mut self, transition: Transition) -> Result<Flow, TableError> {
        self.sink.emit(&TableEvent::Step(transition));
        match transition {
            Transition::Reset => self.on_reset(),
            Transition::NewRound => self.on_new_round(),
            Transition::DealPlayerCard => self.on_deal_player_card(),
            Transition::StartBettingRound => self.on_start_betting_round(),
            Transition::QueryPlayer => self.on_query_player(),
            Transition::DetermineWinner => self.on_determine_winner(),
            Transition::IncrementButtons => self.on_increment_buttons(),
            Transition::IncreaseRound => self.on_increase_round(),
            Transition::Showdown => self.on_showdown(),
            Transition::Done => Ok(Flow::Yield(Transition::Done)),
        }
    }

    fn on_reset(&mut self) -> Result<Flow, TableError> {
        self.state = self.init.clone();
        self.queried = vec![false; self.state.num_players()];
        self.rng = StdRng::seed_from_u64(self.seed);
        self.deck.reset();
        self.deck.shuffle(&mut self.rng);
        self.hands_played = 0;
        Ok(Flow::Chain(Transition::NewRound))
    }

    fn on_new_round(&mut self) -> Result<Flow, TableError> {
        let monied: Vec<SeatIndex> = self
            .state
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.money > 0)
            .map(|(idx, _)| idx)
            .collect();
        if let [seat] = monied[..] {
            self.sink.emit(&TableEvent::TableWinner { seat });
            return Ok(Flow::Yield(Transition::Done));
        }

        self.hands_played += 1;
        self.deck.reset();
        self.deck.shuffle(&mut self.rng);
        self.state.round = Round::Preflop;
        self.state.board.clear();
        self.sink.emit(&TableEvent::HandStarted {
            hand: self.hands_played,
        });
        Ok(Flow::Yield(Transition::DealPlayerCard))
    }

    fn on_deal_player_card(&mut self) -> Result<Flow, TableError> {
        let seat = self.state.action_idx;
        if !self.state.players[seat].cards.is_empty() {
            return Ok(Flow::Yield(Transition::StartBettingRound));
        }

        if seat == self.state.small_blind_idx {
            self.post_blind(seat, BlindKind::Small);
        }
        if seat == self.state.big_blind_idx {
            self.post_blind(seat, BlindKind::Big);
        }

        let first = self.deck.deal()?;
        let second = self.deck.deal()?;
        let player = &mut self.state.players[seat];
        player.cards.push(first);
        player.cards.push(second);
        self.sink.emit(&TableEvent::HoleCardsDealt { seat });

        self.state.action_idx = match self.next_active_seat(seat) {
            Ok(next) => next,
            // The blinds can consume every live stack before betting ever
            // starts. Nothing is left to bet; run the board out.
            Err(TableError::NoEligibleSeat) => return Ok(Flow::Yield(Transition::Showdown)),
            Err(err) => return Err(err),
        };
        Ok(Flow::Yield(Transition::DealPlayerCard))
    }

    fn post_blind(&mut self, seat: SeatIndex, kind: BlindKind) {
        let amount = match kind {
            BlindKind::Small => self.state.blinds.small,
            BlindKind::Big => self.state.blinds.big,
        };
        let player = &mut self.state.players[seat];
        let posted = amount.min(player.money);
        player.all_in = posted == player.money;
        player.money -= posted;
        player.bet += posted;
        let all_in = player.all_in;
        self.sink.emit(&TableEvent::BlindPosted {
            seat,
            kind,
            amount: posted,
            all_in,
        });
    }

    fn on_start_betting_round(&mut self) -> Result<Flow, TableError> {
        let under_the_gun = self.next_active_seat(self.state.big_blind_idx)?;
        self.state.action_idx = under_the_gun;
        // Seats that cannot act this round count as already queried.
        for (idx, player) in self.state.players.iter().enumerate() {
            self.queried[idx] = player.folded || player.money == 0;
        }
        self.sink.emit(&TableEvent::BettingRoundStarted {
            round: self.state.round,
            first_to_act: under_the_gun,
        });
        Ok(Flow::Yield(Transition::QueryPlayer))
    }

    fn on_query_player(&mut self) -> Result<Flow, TableError> {
        let seat = self.state.action_idx;
        {
            let player = &self.state.players[seat];
            if player.folded || player.all_in || player.money == 0 || player.cards.len() != 2 {
                return Err(TableError::UnplayableSeat(seat));
            }
        }

        // Down to a single contender, no decision needed.
        if self.state.num_nonfolded() == 1 {
            return Ok(Flow::Yield(Transition::DetermineWinner));
        }
        // Nobody left to bet against, run the board out.
        if self.state.num_bettable() == 1 {
            return Ok(Flow::Yield(Transition::Showdown));
        }

        let view = self.state.observed_by(seat);
        let submitted = self.strategies[seat].make_action(view, &self.state.players[seat]);
        let action = self.validate(seat, submitted);
        self.apply(seat, action);
        self.queried[seat] = true;

        let actor_bet = self.state.players[seat].bet;
        self.state.action_idx = self.next_active_seat(seat)?;

        // Betting is settled once everybody still able to bet has matched
        // the actor (all-in seats only need to be covered by it).
        let betting_equal = self.state.players.iter().enumerate().all(|(idx, other)| {
            idx == seat
                || other.folded
                || (other.all_in && actor_bet >= other.bet)
                || (!other.all_in && (other.money == 0 || other.bet == actor_bet))
        });

        if self.state.num_nonfolded() == 1 {
            return Ok(Flow::Chain(Transition::DetermineWinner));
        }
        if betting_equal && self.queried.iter().all(|&q| q) {
            Ok(Flow::Chain(Transition::IncreaseRound))
        } else {
            Ok(Flow::Yield(Transition::QueryPlayer))
        }
    }

    /// Normalize a submitted action, downgrading illegal ones to a fold.
    /// Bad strategies lose pots; they never halt the game.
    fn validate(&mut self, seat: SeatIndex, submitted: Action) -> Action {
        let money = self.state.players[seat].money;
        let required = self.state.call_amount();
        let amount = submitted.amount;

        if amount > money {
            self.downgrade(seat, submitted, DowngradeReason::OverBet);
            return Action::fold();
        }
        if submitted.kind == ActionKind::Fold && amount > 0 {
            self.downgrade(seat, submitted, DowngradeReason::FoldWithChips);
            return Action::fold();
        }
        if submitted.kind == ActionKind::AllIn && amount < money {
            self.downgrade(seat, submitted, DowngradeReason::PartialAllIn);
            return Action::fold();
        }
        // Betting the whole stack is an all-in no matter what it was called.
        if amount == money {
            return Action::all_in(amount);
        }
        if submitted.kind != ActionKind::Fold && amount < required {
            self.downgrade(seat, submitted, DowngradeReason::BelowCall);
            return Action::fold();
        }
        if submitted.kind != ActionKind::Fold && amount == 0 {
            return Action::check();
        }
        submitted
    }

    fn downgrade(&mut self, seat: SeatIndex, submitted: Action, reason: DowngradeReason) {
        self.sink.emit(&TableEvent::ActionDowngraded {
            seat,
            submitted,
            reason,
        });
    }

    fn apply(&mut self, seat: SeatIndex, action: Action) {
        let player = &mut self.state.players[seat];
        player.bet += action.amount;
        player.money -= action.amount;
        match action.kind {
            ActionKind::Fold => player.folded = true,
            ActionKind::AllIn => player.all_in = true,
            _ => {}
        }
        self.sink.emit(&TableEvent::ActionTaken { seat, action });
    }

    fn on_determine_winner(&mut self) -> Result<Flow, TableError> {
        // Anyone with chips in the middle who has not folded contests the
        // pot. There is deliberately no side-pot bookkeeping: a short
        // all-in stack contests the whole pot.
        let mut contenders: Vec<(SeatIndex, Option<PokerHand>)> = Vec::new();
        for (idx, player) in self.state.players.iter().enumerate() {
            if player.bet > 0 && !player.folded {
                let hand = if self.state.board.len() + player.cards.len() == 7 {
                    let mut cards: Vec<Card> = self.state.board.clone();
                    cards.extend(&player.cards);
                    Some(PokerHand::best(&cards)?)
                } else {
                    None
                };
                contenders.push((idx, hand));
            }
        }
        if contenders.is_empty() {
            return Ok(Flow::Chain(Transition::IncrementButtons));
        }

        let pot = self.state.pot();
        let (winners, share) = if let [(seat, _)] = contenders[..] {
            (vec![seat], pot)
        } else {
            let top: Option<Score> = contenders
                .iter()
                .map(|(_, hand)| hand.as_ref().map(PokerHand::score))
                .max()
                .unwrap_or(None);
            let winners: Vec<SeatIndex> = contenders
                .iter()
                .filter(|(_, hand)| hand.as_ref().map(PokerHand::score) == top)
                .map(|(idx, _)| *idx)
                .collect();
            // Integer split; a remainder chip is not awarded to anyone.
            let share = pot / winners.len() as Chips;
            (winners, share)
        };

        for &seat in &winners {
            self.state.players[seat].money += share;
            self.sink.emit(&TableEvent::PotAwarded { seat, amount: share });
        }
        for (seat, _) in &contenders {
            let amount = if winners.contains(seat) { share } else { 0 };
            let view = self.state.observed_by(*seat);
            self.strategies[*seat].on_round_payout(view, &self.state.players[*seat], amount);
        }

        Ok(Flow::Chain(Transition::IncrementButtons))
    }

    fn on_increment_buttons(&mut self) -> Result<Flow, TableError> {
        for player in &mut self.state.players {
            player.clear_hand();
        }
        self.state.small_blind_idx = self.next_active_seat(self.state.small_blind_idx)?;
        self.state.big_blind_idx = self.next_active_seat(self.state.small_blind_idx)?;
        self.state.action_idx = self.next_active_seat(self.state.big_blind_idx)?;
        Ok(Flow::Yield(Transition::NewRound))
    }

    fn on_increase_round(&mut self) -> Result<Flow, TableError> {
        let (dealt, next_round) = match self.state.round {
            Round::Preflop => (3, Round::Flop),
            Round::Flop => (1, Round::River),
            Round::River => (1, Round::Turn),
            Round::Turn => return Ok(Flow::Yield(Transition::Showdown)),
        };
        self.deal_board(dealt)?;
        self.state.round = next_round;
        let cards = self.state.board[self.state.board.len() - dealt..].to_vec();
        self.sink.emit(&TableEvent::BoardDealt {
            round: next_round,
            cards,
        });
        Ok(Flow::Yield(Transition::StartBettingRound))
    }

    /// Burn one card, then deal `count` to the board.
    fn deal_board(&mut self, count: usize) -> Result<(), TableError> {
        self.deck.deal()?;
        for _ in 0..count {
            let card = self.deck.deal()?;
            self.state.board.push(card);
        }
        Ok(())
    }

    fn on_showdown(&mut self) -> Result<Flow, TableError> {
        // Run out any board cards that betting never reached.
        while self.state.round != Round::Turn {
            self.execute(Transition::IncreaseRound)?;
        }
        Ok(Flow::Chain(Transition::DetermineWinner))
    }

    /// The next seat, scanning forward circularly, that is neither folded
    /// nor out of money.
    fn next_active_seat(&self, from: SeatIndex) -> Result<SeatIndex, TableError> {
        let n = self.state.num_players();
        for offset in 1..=n {
            let idx = (from + offset) % n;
            let player = &self.state.players[idx];
            if !player.folded && player.money > 0 {
                return Ok(idx);
            }
        }
        Err(TableError::NoEligibleSeat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::{ACE, JACK, KING, QUEEN, Suit, TEN};
    use crate::strategy::presets::{AlwaysCall, AlwaysFold};

    fn caller_table(stacks: &[Chips]) -> Table {
        let seats = stacks
            .iter()
            .map(|&money| Seat::new(money, AlwaysCall))
            .collect();
        Table::new(seats).unwrap()
    }

    #[test]
    fn test_construction_rejects_bad_seat_counts() {
        assert!(matches!(
            Table::new(vec![]),
            Err(TableError::BadSeatCount(0))
        ));
        let crowd: Vec<Seat> = (0..23).map(|_| Seat::new(40, AlwaysFold)).collect();
        assert!(matches!(
            Table::new(crowd),
            Err(TableError::BadSeatCount(23))
        ));
    }

    #[test]
    fn test_construction_rejects_strategy_mismatch() {
        let state = TableState::new_game(vec![Player::new(40), Player::new(40)], 1, 0);
        let strategies: Vec<Box<dyn Strategy>> = vec![Box::new(AlwaysCall)];
        assert!(matches!(
            Table::from_state(state, strategies),
            Err(TableError::StrategyCountMismatch {
                players: 2,
                strategies: 1
            })
        ));
    }

    #[test]
    fn test_lone_monied_seat_finishes_immediately() {
        let mut table = Table::new(vec![
            Seat::new(80, AlwaysCall),
            Seat::new(0, AlwaysCall),
        ])
        .unwrap();
        assert!(table.done());
        let (seat, winner) = table.winner().unwrap();
        assert_eq!(seat, 0);
        assert_eq!(winner.money, 80);
        // Terminal state is a fixed point.
        table.step().unwrap();
        assert!(table.done());
    }

    #[test]
    fn test_winner_fails_while_running() {
        let table = caller_table(&[40, 40, 40]);
        assert!(matches!(table.winner(), Err(TableError::GameNotOver)));
    }

    #[test]
    fn test_first_hand_deals_blinds_and_cards() {
        let mut table = caller_table(&[40, 40, 40]);
        assert_eq!(table.hands_played(), 1);
        // One step per seat dealt, the wrap-around that notices everyone has
        // cards, then the step that opens betting.
        for _ in 0..5 {
            table.step().unwrap();
        }
        let state = table.state();
        assert_eq!(state.players[0].bet, 1);
        assert_eq!(state.players[1].bet, 2);
        assert_eq!(state.players[2].bet, 0);
        for player in &state.players {
            assert_eq!(player.cards.len(), 2);
        }
        assert_eq!(table.next, Transition::QueryPlayer);
        assert_eq!(state.action_idx, 2);
    }

    #[test]
    fn test_blind_posting_caps_at_the_stack() {
        // Seat 1 cannot afford the $2 big blind.
        let mut table = caller_table(&[40, 1, 40]);
        for _ in 0..4 {
            table.step().unwrap();
        }
        let player = &table.state().players[1];
        assert_eq!(player.bet, 1);
        assert_eq!(player.money, 0);
        assert!(player.all_in);
    }

    #[test]
    fn test_chips_are_conserved_between_steps() {
        let mut table = caller_table(&[40, 40, 40]);
        let expected: Chips = 120;
        for _ in 0..200 {
            if table.done() {
                break;
            }
            table.step().unwrap();
            let state = table.state();
            let circulating = state.total_money() + state.pot();
            // Split-pot remainders may leak chips out of play, never in.
            assert!(circulating <= expected);
        }
    }

    #[test]
    fn test_folding_everyone_else_awards_the_blinds() {
        let mut table = Table::new(vec![
            Seat::new(40, AlwaysFold),
            Seat::new(40, AlwaysCall),
            Seat::new(40, AlwaysFold),
        ])
        .unwrap();
        while table.round_underway() {
            table.step().unwrap();
        }
        let state = table.state();
        // Seat 2 and seat 0 folded preflop; seat 1 took the $3 of blinds.
        assert_eq!(state.players[0].money, 39);
        assert_eq!(state.players[1].money, 41);
        assert_eq!(state.players[2].money, 40);
        assert_eq!(table.hands_played(), 1);
    }

    #[test]
    fn test_buttons_rotate_between_hands() {
        let mut table = Table::new(vec![
            Seat::new(40, AlwaysFold),
            Seat::new(40, AlwaysCall),
            Seat::new(40, AlwaysFold),
        ])
        .unwrap();
        while table.round_underway() {
            table.step().unwrap();
        }
        let state = table.state();
        assert_eq!(state.small_blind_idx, 1);
        assert_eq!(state.big_blind_idx, 2);
        assert_eq!(state.action_idx, 0);
        for player in &state.players {
            assert!(player.cards.is_empty());
            assert_eq!(player.bet, 0);
            assert!(!player.folded);
        }
    }

    #[test]
    fn test_full_game_reaches_a_single_winner() {
        let mut table = caller_table(&[20, 20, 20]).with_seed(7).unwrap();
        let mut steps = 0u64;
        while !table.done() {
            table.step().unwrap();
            steps += 1;
            assert!(steps < 1_000_000, "game did not terminate");
        }
        let (_, winner) = table.winner().unwrap();
        assert!(winner.money > 0);
        let losers = table
            .state()
            .players
            .iter()
            .filter(|p| p.money == 0)
            .count();
        assert_eq!(losers, table.state().num_players() - 1);
    }

    #[test]
    fn test_same_seed_replays_the_same_game() {
        let play = |seed: u64| -> (u64, Vec<Chips>) {
            let mut table = caller_table(&[20, 20, 20]).with_seed(seed).unwrap();
            while !table.done() {
                table.step().unwrap();
            }
            (
                table.hands_played(),
                table.state().players.iter().map(|p| p.money).collect(),
            )
        };
        assert_eq!(play(11), play(11));
    }

    #[test]
    fn test_reset_restores_the_initial_state() {
        let mut table = caller_table(&[40, 40, 40]);
        for _ in 0..25 {
            table.step().unwrap();
        }
        table.reset().unwrap();
        assert_eq!(table.hands_played(), 1);
        let state = table.state();
        assert_eq!(state.total_money() + state.pot(), 120);
    }

    #[test]
    fn test_blind_forced_all_ins_run_out_the_board() {
        // Both stacks are consumed by their own blind post, so the hand has
        // no betting at all: the board runs out and the pot is awarded.
        let mut table = caller_table(&[1, 2]);
        let mut steps = 0u64;
        while !table.done() {
            table.step().unwrap();
            steps += 1;
            assert!(steps < 100_000, "game did not terminate");
        }
        let (_, winner) = table.winner().unwrap();
        assert!(winner.money > 0);
        assert!(winner.money <= 3);
    }

    #[test]
    fn test_tied_showdown_splits_evenly_and_drops_the_remainder() {
        let mut table = caller_table(&[10, 10, 10]);
        // Both live seats play the board, so their best hands tie exactly.
        table.state.board = vec![
            Card(ACE, Suit::Spade),
            Card(KING, Suit::Spade),
            Card(QUEEN, Suit::Spade),
            Card(JACK, Suit::Spade),
            Card(TEN, Suit::Spade),
        ];
        table.state.players[0].cards = vec![Card(2, Suit::Club), Card(3, Suit::Club)];
        table.state.players[0].bet = 2;
        table.state.players[1].cards = vec![Card(2, Suit::Heart), Card(3, Suit::Heart)];
        table.state.players[1].bet = 3;
        table.state.players[2].folded = true;

        table.on_determine_winner().unwrap();

        // Pot of 5 splits as floor(5/2) = 2 each; the odd chip goes to nobody.
        assert_eq!(table.state.players[0].money, 12);
        assert_eq!(table.state.players[1].money, 12);
        assert_eq!(table.state.players[2].money, 10);
    }

    // === Action validation ===

    fn validation_table() -> Table {
        let mut table = caller_table(&[40, 40, 40]);
        // Play dealing forward until seat 2 is up to act.
        for _ in 0..5 {
            table.step().unwrap();
        }
        assert_eq!(table.next, Transition::QueryPlayer);
        table
    }

    #[test]
    fn test_validate_over_bet_folds() {
        let mut table = validation_table();
        assert_eq!(table.validate(2, Action::raise(41)), Action::fold());
    }

    #[test]
    fn test_validate_fold_with_chips_folds_clean() {
        let mut table = validation_table();
        assert_eq!(
            table.validate(2, Action::new(ActionKind::Fold, 5)),
            Action::fold()
        );
    }

    #[test]
    fn test_validate_partial_all_in_folds() {
        let mut table = validation_table();
        assert_eq!(table.validate(2, Action::all_in(39)), Action::fold());
    }

    #[test]
    fn test_validate_whole_stack_becomes_all_in() {
        let mut table = validation_table();
        assert_eq!(table.validate(2, Action::raise(40)), Action::all_in(40));
        assert_eq!(table.validate(2, Action::call(40)), Action::all_in(40));
    }

    #[test]
    fn test_validate_below_call_folds() {
        let mut table = validation_table();
        // The big blind is $2; a $1 call is short.
        assert_eq!(table.validate(2, Action::call(1)), Action::fold());
    }

    #[test]
    fn test_validate_zero_becomes_check_only_when_nothing_owed() {
        let mut table = validation_table();
        // Seat 2 owes the big blind, so a zero raise is short, not a check.
        assert_eq!(table.validate(2, Action::raise(0)), Action::fold());

        // Clear the bets so nothing is owed.
        for player in &mut table.state.players {
            player.bet = 0;
        }
        assert_eq!(table.validate(2, Action::raise(0)), Action::check());
        assert_eq!(table.validate(2, Action::fold()), Action::fold());
    }

    #[test]
    fn test_validate_passes_legal_raises_through() {
        let mut table = validation_table();
        assert_eq!(table.validate(2, Action::raise(10)), Action::raise(10));
        assert_eq!(table.validate(2, Action::call(2)), Action::call(2));
    }
}
