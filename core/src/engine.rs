use serde::{Deserialize, Serialize};

use crate::*;

/// Identifies the timer the controller is waiting on, a fired timer is only honored if its token is still pending.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken(u32);

/// Delays between the timed transitions, in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    /// How long colors stay visible after play is pressed.
    pub memorize_ms: u32,
    /// How long the verdict stays on screen before the next round is dealt.
    pub result_ms: u32,
}

impl Timings {
    pub const DEFAULT_MEMORIZE_MS: u32 = 3000;
    pub const DEFAULT_RESULT_MS: u32 = 3000;
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            memorize_ms: Self::DEFAULT_MEMORIZE_MS,
            result_ms: Self::DEFAULT_RESULT_MS,
        }
    }
}

/// A timer the host has to arm, delivering `token` back through [`MemoryGame::timer_elapsed`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub token: TimerToken,
    pub delay_ms: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    NoChange,
    Changed,
    /// State changed and a timer has to be armed.
    Scheduled(Schedule),
}

impl Step {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed | Self::Scheduled(_) => true,
        }
    }

    pub const fn schedule(self) -> Option<Schedule> {
        match self {
            Self::Scheduled(schedule) => Some(schedule),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Play,
    Guess(CardIndex),
    TimerElapsed(TimerToken),
}

/// Round controller: owns the deck, the target and the state machine.
#[derive(Clone, Debug)]
pub struct MemoryGame<R> {
    deck: Deck,
    target: CardIndex,
    guessed: Option<CardIndex>,
    state: GameState,
    timings: Timings,
    pending: Option<TimerToken>,
    next_token: u32,
    round: u32,
    random: R,
}

impl<R: RandomSource> MemoryGame<R> {
    /// Creates an idle game with a freshly dealt round.
    pub fn new(random: R, timings: Timings) -> Self {
        let mut game = Self {
            deck: Deck::new(),
            target: 0,
            guessed: None,
            state: GameState::Idle,
            timings,
            pending: None,
            next_token: 0,
            round: 0,
            random,
        };
        game.reset_round();
        game
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn target(&self) -> CardIndex {
        self.target
    }

    pub fn target_color(&self) -> Color {
        self.deck[self.target]
    }

    pub fn guessed(&self) -> Option<CardIndex> {
        self.guessed
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.pending
    }

    /// Number of rounds dealt so far, the initial deal counts as the first.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn random(&self) -> &R {
        &self.random
    }

    /// Shuffles the deck, draws a new target and forgets the last guess.
    pub fn reset_round(&mut self) {
        self.deck.shuffle(&mut self.random);
        self.target = self.random.index_below(DECK_SIZE) as CardIndex;
        self.guessed = None;
        self.round = self.round.wrapping_add(1);
        log::debug!(
            "round {} dealt, target {} ({})",
            self.round,
            self.target,
            self.target_color()
        );
    }

    pub fn handle(&mut self, event: GameEvent) -> Result<Step> {
        match event {
            GameEvent::Play => self.play(),
            GameEvent::Guess(index) => self.guess(index),
            GameEvent::TimerElapsed(token) => self.timer_elapsed(token),
        }
    }

    /// Starts the memorize window.
    pub fn play(&mut self) -> Result<Step> {
        let next = self.state.next(Input::Play).ok_or(GameError::NotIdle)?;
        self.enter(next);
        Ok(Step::Scheduled(self.arm(self.timings.memorize_ms)))
    }

    /// Resolves the round with the player's pick.
    pub fn guess(&mut self, index: CardIndex) -> Result<Step> {
        let index = self.deck.validate_index(index)?;
        let correct = index == self.target;
        let next = self
            .state
            .next(Input::Guess { correct })
            .ok_or(GameError::NotGuessing)?;

        self.guessed = Some(index);
        self.enter(next);
        Ok(Step::Scheduled(self.arm(self.timings.result_ms)))
    }

    /// Delivers a fired timer.
    pub fn timer_elapsed(&mut self, token: TimerToken) -> Result<Step> {
        match self.pending {
            None => return Err(GameError::NoTimerPending),
            Some(pending) if pending != token => return Err(GameError::StaleTimer),
            Some(_) => {}
        }

        let Some(next) = self.state.next(Input::Elapsed) else {
            log::warn!("timer fired in untimed state {:?}", self.state);
            self.pending = None;
            return Ok(Step::NoChange);
        };

        self.pending = None;
        if self.state.is_resolved() {
            self.reset_round();
        }
        self.enter(next);
        Ok(Step::Changed)
    }

    /// Forgets the pending timer, if any, so it can no longer move the game.
    pub fn cancel_pending(&mut self) -> Option<TimerToken> {
        let cancelled = self.pending.take();
        if let Some(token) = cancelled {
            log::debug!("cancelled timer {:?}", token);
        }
        cancelled
    }

    pub fn board(&self) -> BoardView {
        BoardView::new(&self.deck, self.state, self.target, self.guessed)
    }

    fn enter(&mut self, next: GameState) {
        log::debug!("state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn arm(&mut self, delay_ms: u32) -> Schedule {
        let token = TimerToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.pending = Some(token);
        Schedule { token, delay_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: [usize; 8] = [8, 7, 6, 5, 4, 3, 2, 1];

    fn game_with_target(target: usize) -> MemoryGame<ScriptedRandom> {
        let mut script = IDENTITY.to_vec();
        script.push(target);
        MemoryGame::new(ScriptedRandom::new(script), Timings::default())
    }

    fn to_guessing(game: &mut MemoryGame<ScriptedRandom>) {
        let schedule = game.play().unwrap().schedule().unwrap();
        game.timer_elapsed(schedule.token).unwrap();
        assert_eq!(game.state(), GameState::Guessing);
    }

    #[test]
    fn new_game_is_idle_with_a_dealt_round() {
        let game = game_with_target(4);

        assert_eq!(game.state(), GameState::Idle);
        assert_eq!(game.deck(), &Deck::new());
        assert_eq!(game.target(), 4);
        assert_eq!(game.target_color(), Color::Yellow);
        assert_eq!(game.guessed(), None);
        assert_eq!(game.pending_timer(), None);
        assert_eq!(game.round(), 1);
    }

    #[test]
    fn play_schedules_memorize_timer() {
        let mut game = game_with_target(4);

        let step = game.play().unwrap();

        assert_eq!(game.state(), GameState::Started);
        let schedule = step.schedule().unwrap();
        assert_eq!(schedule.delay_ms, Timings::DEFAULT_MEMORIZE_MS);
        assert_eq!(game.pending_timer(), Some(schedule.token));
    }

    #[test]
    fn play_twice_is_rejected() {
        let mut game = game_with_target(4);
        let first = game.play().unwrap().schedule().unwrap();

        assert_eq!(game.play(), Err(GameError::NotIdle));
        assert_eq!(game.pending_timer(), Some(first.token));
    }

    #[test]
    fn guess_during_memorize_window_is_ignored() {
        let mut game = game_with_target(4);
        game.play().unwrap();

        assert_eq!(game.guess(4), Err(GameError::NotGuessing));
        assert_eq!(game.state(), GameState::Started);
        assert_eq!(game.guessed(), None);
    }

    #[test]
    fn guess_while_idle_is_ignored() {
        let mut game = game_with_target(4);

        assert_eq!(game.guess(0), Err(GameError::NotGuessing));
        assert_eq!(game.state(), GameState::Idle);
        assert_eq!(game.guessed(), None);
    }

    #[test]
    fn out_of_range_guess_is_rejected_without_effect() {
        let mut game = game_with_target(4);
        to_guessing(&mut game);

        assert_eq!(game.guess(9), Err(GameError::InvalidCardIndex(9)));
        assert_eq!(game.state(), GameState::Guessing);
        assert_eq!(game.guessed(), None);
    }

    #[test]
    fn every_non_target_guess_is_incorrect() {
        for index in 0..DECK_SIZE as CardIndex {
            let mut game = game_with_target(4);
            to_guessing(&mut game);

            game.guess(index).unwrap();

            let expected = if index == 4 {
                GameState::Correct
            } else {
                GameState::Incorrect
            };
            assert_eq!(game.state(), expected);
            assert_eq!(game.guessed(), Some(index));
        }
    }

    #[test]
    fn repeated_clicks_after_verdict_do_not_rearm() {
        let mut game = game_with_target(4);
        to_guessing(&mut game);
        let schedule = game.guess(4).unwrap().schedule().unwrap();

        assert_eq!(game.guess(4), Err(GameError::NotGuessing));
        assert_eq!(game.guess(0), Err(GameError::NotGuessing));
        assert_eq!(game.state(), GameState::Correct);
        assert_eq!(game.guessed(), Some(4));
        assert_eq!(game.pending_timer(), Some(schedule.token));
    }

    #[test]
    fn stale_token_is_rejected() {
        let mut game = game_with_target(4);
        let memorize = game.play().unwrap().schedule().unwrap();
        game.timer_elapsed(memorize.token).unwrap();

        assert_eq!(
            game.timer_elapsed(memorize.token),
            Err(GameError::NoTimerPending)
        );

        game.guess(1).unwrap();
        assert_eq!(
            game.timer_elapsed(memorize.token),
            Err(GameError::StaleTimer)
        );
        assert_eq!(game.state(), GameState::Incorrect);
    }

    #[test]
    fn cancelled_timer_cannot_fire() {
        let mut game = game_with_target(4);
        let schedule = game.play().unwrap().schedule().unwrap();

        assert_eq!(game.cancel_pending(), Some(schedule.token));
        assert_eq!(
            game.timer_elapsed(schedule.token),
            Err(GameError::NoTimerPending)
        );
        assert_eq!(game.state(), GameState::Started);
        assert_eq!(game.cancel_pending(), None);
    }

    #[test]
    fn verdict_timer_deals_next_round() {
        let mut game = game_with_target(4);
        to_guessing(&mut game);
        let schedule = game.guess(2).unwrap().schedule().unwrap();
        assert_eq!(schedule.delay_ms, Timings::DEFAULT_RESULT_MS);
        let draws = game.random().draws();

        assert_eq!(game.timer_elapsed(schedule.token), Ok(Step::Changed));

        assert_eq!(game.state(), GameState::Idle);
        assert_eq!(game.guessed(), None);
        assert_eq!(game.round(), 2);
        assert_eq!(game.random().draws(), draws + DECK_SIZE);
        assert!(game.deck().is_complete());
    }

    #[test]
    fn handle_dispatches_events() {
        let mut game = game_with_target(4);

        let token = game.handle(GameEvent::Play).unwrap().schedule().unwrap().token;
        assert!(game.handle(GameEvent::TimerElapsed(token)).unwrap().has_update());
        game.handle(GameEvent::Guess(4)).unwrap();

        assert_eq!(game.state(), GameState::Correct);
    }

    #[test]
    fn custom_timings_are_used() {
        let timings = Timings {
            memorize_ms: 1500,
            result_ms: 500,
        };
        let mut game = MemoryGame::new(ScriptedRandom::new([0]), timings);

        let memorize = game.play().unwrap().schedule().unwrap();
        game.timer_elapsed(memorize.token).unwrap();
        let result = game.guess(0).unwrap().schedule().unwrap();

        assert_eq!(memorize.delay_ms, 1500);
        assert_eq!(result.delay_ms, 500);
        assert_ne!(memorize.token, result.token);
    }
}
