//! Chat playback sequencer
//!
//! Reveals a [`ChatScript`] one message at a time. Agent lines are preceded
//! by a typing indicator, customer lines by a short pause, and every reveal
//! is followed by a gap before the next line.
//!
//! The sequencer is a plain state machine: it never sleeps or spawns
//! anything itself. Each transition returns a [`Tick`] describing how long to
//! wait before calling [`ChatSequencer::fire`] again. A single driver loop
//! (see `ui::chat_demo`) awaits the delay and fires the tick. Every tick
//! carries the epoch it was issued in, so cancelling or resetting the
//! sequencer invalidates all outstanding ticks in one step.
//!
//! ```
//! use replydesk::core::{ChatScript, ChatSequencer, ScriptMessage};
//!
//! let script = ChatScript::from(vec![ScriptMessage::customer("Hello?")]);
//! let mut sequencer = ChatSequencer::new(script);
//!
//! let mut tick = sequencer.on_host_visibility(true);
//! while let Some(pending) = tick {
//!     tick = sequencer.fire(pending.epoch);
//! }
//!
//! assert!(sequencer.is_done());
//! assert_eq!(sequencer.revealed().len(), 1);
//! ```

use std::time::Duration;

use super::chat_script::{ChatScript, ScriptMessage, Speaker};

/// Delay between the host becoming visible and the sequence starting (1000ms)
pub const SETTLE_DELAY_MS: u64 = 1000;

/// Delay before the first message is handled (300ms)
pub const INITIAL_DELAY_MS: u64 = 300;

/// How long the typing indicator shows before an agent line (700ms)
pub const AGENT_TYPING_MS: u64 = 700;

/// Pause before a customer line appears (500ms)
pub const CUSTOMER_DELAY_MS: u64 = 500;

/// Gap after each revealed line (700ms)
pub const MESSAGE_GAP_MS: u64 = 700;

/// Delays used by the sequencer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackTimings {
    pub settle: Duration,
    pub initial: Duration,
    pub agent_typing: Duration,
    pub customer_delay: Duration,
    pub gap: Duration,
}

impl Default for PlaybackTimings {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(SETTLE_DELAY_MS),
            initial: Duration::from_millis(INITIAL_DELAY_MS),
            agent_typing: Duration::from_millis(AGENT_TYPING_MS),
            customer_delay: Duration::from_millis(CUSTOMER_DELAY_MS),
            gap: Duration::from_millis(MESSAGE_GAP_MS),
        }
    }
}

/// Where the sequencer is in its run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// Not started
    Idle,
    /// Host became visible, waiting for the settle delay
    Settling,
    /// Waiting for the initial delay before message 0
    Starting,
    /// Waiting to reveal the customer line at this index
    RevealingCustomer(usize),
    /// Typing indicator shown for the agent line at this index
    AwaitingAgentTyping(usize),
    /// Line at this index was revealed, waiting for the gap
    Revealed(usize),
    /// Every line revealed
    Done,
}

/// A scheduled transition: call `fire(epoch)` after `delay`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    pub epoch: u64,
    pub delay: Duration,
}

/// Per-instance playback state
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSequencer {
    script: ChatScript,
    timings: PlaybackTimings,
    revealed_len: usize,
    typing_index: Option<usize>,
    has_played_once: bool,
    phase: PlaybackPhase,
    epoch: u64,
    disposed: bool,
}

impl ChatSequencer {
    pub fn new(script: ChatScript) -> Self {
        Self::with_timings(script, PlaybackTimings::default())
    }

    pub fn with_timings(script: ChatScript, timings: PlaybackTimings) -> Self {
        Self {
            script,
            timings,
            revealed_len: 0,
            typing_index: None,
            has_played_once: false,
            phase: PlaybackPhase::Idle,
            epoch: 0,
            disposed: false,
        }
    }

    /// Activation path, called whenever the host's visibility is observed.
    ///
    /// Starts the sequence the first time `visible` is true. Later calls,
    /// calls while hidden and calls after [`cancel`](Self::cancel) return
    /// `None` without touching any state.
    pub fn on_host_visibility(&mut self, visible: bool) -> Option<Tick> {
        if self.disposed || !visible || self.has_played_once {
            return None;
        }
        self.has_played_once = true;
        self.revealed_len = 0;
        self.typing_index = None;
        self.epoch += 1;
        self.phase = PlaybackPhase::Settling;
        Some(self.tick(self.timings.settle))
    }

    /// Apply the transition scheduled by the tick issued in `epoch`.
    ///
    /// Stale epochs and disposed sequencers are ignored. Returns the next
    /// tick, or `None` once nothing further is scheduled.
    pub fn fire(&mut self, epoch: u64) -> Option<Tick> {
        if self.disposed || epoch != self.epoch {
            return None;
        }
        match self.phase {
            PlaybackPhase::Idle | PlaybackPhase::Done => None,
            PlaybackPhase::Settling => {
                self.phase = PlaybackPhase::Starting;
                Some(self.tick(self.timings.initial))
            }
            PlaybackPhase::Starting => self.enter(0),
            PlaybackPhase::RevealingCustomer(index) => self.reveal(index),
            PlaybackPhase::AwaitingAgentTyping(index) => {
                self.typing_index = None;
                self.reveal(index)
            }
            PlaybackPhase::Revealed(index) => self.enter(index + 1),
        }
    }

    /// Stop for good: invalidates every outstanding tick and turns all later
    /// calls into no-ops. Used when the host unmounts.
    pub fn cancel(&mut self) {
        self.epoch += 1;
        self.disposed = true;
    }

    /// Return to `Idle` so that the next visible host starts over.
    pub fn reset(&mut self) {
        if self.disposed {
            return;
        }
        self.epoch += 1;
        self.revealed_len = 0;
        self.typing_index = None;
        self.has_played_once = false;
        self.phase = PlaybackPhase::Idle;
    }

    fn enter(&mut self, index: usize) -> Option<Tick> {
        let Some(message) = self.script.get(index) else {
            self.phase = PlaybackPhase::Done;
            return None;
        };
        match message.speaker {
            Speaker::Agent => {
                self.typing_index = Some(index);
                self.phase = PlaybackPhase::AwaitingAgentTyping(index);
                Some(self.tick(self.timings.agent_typing))
            }
            Speaker::Customer => {
                self.phase = PlaybackPhase::RevealingCustomer(index);
                Some(self.tick(self.timings.customer_delay))
            }
        }
    }

    fn reveal(&mut self, index: usize) -> Option<Tick> {
        debug_assert_eq!(index, self.revealed_len);
        self.revealed_len = index + 1;
        if self.revealed_len >= self.script.len() {
            self.phase = PlaybackPhase::Done;
            return None;
        }
        self.phase = PlaybackPhase::Revealed(index);
        Some(self.tick(self.timings.gap))
    }

    fn tick(&self, delay: Duration) -> Tick {
        Tick {
            epoch: self.epoch,
            delay,
        }
    }

    /// Messages revealed so far, always a prefix of the script
    pub fn revealed(&self) -> &[ScriptMessage] {
        &self.script[..self.revealed_len]
    }

    /// Index of the agent line currently being "typed"
    pub fn typing_index(&self) -> Option<usize> {
        self.typing_index
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn has_played_once(&self) -> bool {
        self.has_played_once
    }

    pub fn is_running(&self) -> bool {
        !self.disposed && !matches!(self.phase, PlaybackPhase::Idle | PlaybackPhase::Done)
    }

    pub fn is_done(&self) -> bool {
        self.phase == PlaybackPhase::Done
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn script(&self) -> &ChatScript {
        &self.script
    }

    pub fn timings(&self) -> PlaybackTimings {
        self.timings
    }
}

impl Default for ChatSequencer {
    fn default() -> Self {
        Self::new(ChatScript::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script() -> ChatScript {
        ChatScript::from(vec![
            ScriptMessage::agent("Hi"),
            ScriptMessage::customer("Q1"),
            ScriptMessage::agent("A1"),
        ])
    }

    #[test]
    fn test_default_timings() {
        let timings = PlaybackTimings::default();

        assert_eq!(timings.settle, Duration::from_millis(1000));
        assert_eq!(timings.initial, Duration::from_millis(300));
        assert_eq!(timings.agent_typing, Duration::from_millis(700));
        assert_eq!(timings.customer_delay, Duration::from_millis(500));
        assert_eq!(timings.gap, Duration::from_millis(700));
    }

    #[test]
    fn test_new_sequencer_is_idle() {
        let sequencer = ChatSequencer::new(script());

        assert_eq!(sequencer.phase(), PlaybackPhase::Idle);
        assert!(sequencer.revealed().is_empty());
        assert!(sequencer.typing_index().is_none());
        assert!(!sequencer.has_played_once());
        assert!(!sequencer.is_running());
    }

    #[test]
    fn test_hidden_host_does_not_start() {
        let mut sequencer = ChatSequencer::new(script());

        assert!(sequencer.on_host_visibility(false).is_none());
        assert_eq!(sequencer.phase(), PlaybackPhase::Idle);
        assert!(!sequencer.has_played_once());
    }

    #[test]
    fn test_activation_schedules_settle_delay() {
        let mut sequencer = ChatSequencer::new(script());

        let tick = sequencer.on_host_visibility(true).unwrap();

        assert_eq!(tick.delay, Duration::from_millis(SETTLE_DELAY_MS));
        assert_eq!(sequencer.phase(), PlaybackPhase::Settling);
        assert!(sequencer.has_played_once());
        assert!(sequencer.is_running());
    }

    #[test]
    fn test_step_by_step_transitions() {
        let mut sequencer = ChatSequencer::new(script());
        let tick = sequencer.on_host_visibility(true).unwrap();

        let tick = sequencer.fire(tick.epoch).unwrap();
        assert_eq!(sequencer.phase(), PlaybackPhase::Starting);
        assert_eq!(tick.delay, Duration::from_millis(INITIAL_DELAY_MS));

        let tick = sequencer.fire(tick.epoch).unwrap();
        assert_eq!(sequencer.phase(), PlaybackPhase::AwaitingAgentTyping(0));
        assert_eq!(sequencer.typing_index(), Some(0));
        assert!(sequencer.revealed().is_empty());
        assert_eq!(tick.delay, Duration::from_millis(AGENT_TYPING_MS));

        let tick = sequencer.fire(tick.epoch).unwrap();
        assert_eq!(sequencer.phase(), PlaybackPhase::Revealed(0));
        assert_eq!(sequencer.revealed().len(), 1);
        assert!(sequencer.typing_index().is_none());
        assert_eq!(tick.delay, Duration::from_millis(MESSAGE_GAP_MS));

        let tick = sequencer.fire(tick.epoch).unwrap();
        assert_eq!(sequencer.phase(), PlaybackPhase::RevealingCustomer(1));
        assert!(sequencer.typing_index().is_none());
        assert_eq!(tick.delay, Duration::from_millis(CUSTOMER_DELAY_MS));

        let tick = sequencer.fire(tick.epoch).unwrap();
        assert_eq!(sequencer.phase(), PlaybackPhase::Revealed(1));
        assert_eq!(sequencer.revealed()[1].text, "Q1");

        let tick = sequencer.fire(tick.epoch).unwrap();
        assert_eq!(sequencer.phase(), PlaybackPhase::AwaitingAgentTyping(2));
        assert_eq!(sequencer.typing_index(), Some(2));

        assert!(sequencer.fire(tick.epoch).is_none());
        assert!(sequencer.is_done());
        assert_eq!(sequencer.revealed(), sequencer.script().messages());
        assert!(sequencer.typing_index().is_none());
    }

    #[test]
    fn test_second_activation_is_ignored() {
        let mut sequencer = ChatSequencer::new(script());
        let tick = sequencer.on_host_visibility(true).unwrap();
        sequencer.fire(tick.epoch);
        let before = sequencer.clone();

        assert!(sequencer.on_host_visibility(false).is_none());
        assert!(sequencer.on_host_visibility(true).is_none());
        assert_eq!(sequencer, before);
    }

    #[test]
    fn test_stale_tick_is_ignored() {
        let mut sequencer = ChatSequencer::new(script());
        let tick = sequencer.on_host_visibility(true).unwrap();
        let next = sequencer.fire(tick.epoch).unwrap();

        // Ticks issued before a reset belong to the old run
        sequencer.reset();
        assert!(sequencer.fire(next.epoch).is_none());
        assert_eq!(sequencer.phase(), PlaybackPhase::Idle);
    }

    #[test]
    fn test_cancel_stops_all_writes() {
        let mut sequencer = ChatSequencer::new(script());
        let tick = sequencer.on_host_visibility(true).unwrap();
        let tick = sequencer.fire(tick.epoch).unwrap();

        sequencer.cancel();
        let snapshot = sequencer.clone();

        assert!(sequencer.fire(tick.epoch).is_none());
        assert!(sequencer.fire(snapshot.epoch).is_none());
        assert!(sequencer.on_host_visibility(true).is_none());
        sequencer.reset();
        assert_eq!(sequencer, snapshot);
        assert!(sequencer.is_disposed());
        assert!(!sequencer.is_running());
    }

    #[test]
    fn test_reset_allows_replay() {
        let mut sequencer = ChatSequencer::new(script());
        let mut tick = sequencer.on_host_visibility(true);
        while let Some(pending) = tick {
            tick = sequencer.fire(pending.epoch);
        }
        assert!(sequencer.is_done());

        sequencer.reset();
        assert_eq!(sequencer.phase(), PlaybackPhase::Idle);
        assert!(sequencer.revealed().is_empty());
        assert!(sequencer.on_host_visibility(true).is_some());
    }

    #[test]
    fn test_empty_script_finishes_immediately() {
        let mut sequencer = ChatSequencer::new(ChatScript::from(Vec::new()));
        let tick = sequencer.on_host_visibility(true).unwrap();
        let tick = sequencer.fire(tick.epoch).unwrap();

        assert!(sequencer.fire(tick.epoch).is_none());
        assert!(sequencer.is_done());
        assert!(sequencer.revealed().is_empty());
    }

    #[test]
    fn test_done_ignores_further_fires() {
        let mut sequencer = ChatSequencer::new(ChatScript::from(vec![ScriptMessage::agent("Hi")]));
        let mut tick = sequencer.on_host_visibility(true);
        let mut last_epoch = 0;
        while let Some(pending) = tick {
            last_epoch = pending.epoch;
            tick = sequencer.fire(pending.epoch);
        }

        assert!(sequencer.fire(last_epoch).is_none());
        assert_eq!(sequencer.revealed().len(), 1);
    }
}
