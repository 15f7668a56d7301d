//! Main dispatch loop
//!
//! The single consumer of everything the interrupt handlers produce. Each
//! [`Dispatcher::poll`] drains at most one event of each kind in a fixed
//! order:
//!
//! 1. Tick overflow: advance the clock one second unless editing
//! 2. Multiplexed keypad edges: drive the edit controller
//! 3. Matrix keypad edges: browse the history and redraw the LCD
//! 4. Frame ready: interpret the command, log it and redraw the LCD
//! 5. Reply: send at most one pending `GET` reply byte
//!
//! Polling never blocks except inside the LCD busy-wait. What happened is
//! returned as [`Activity`] records so the caller decides how to log it.

use heapless::Vec;
use segclock_hal::{CharacterLcd, SerialTx};
use segclock_protocol::{Command, CommandFrame, TimeReply};

use crate::clock::{ClockState, ClockTime};
use crate::config::TickConfig;
use crate::edit::{EditAction, EditModeController};
use crate::history::{init_lcd, CommandHistory};
use crate::interpreter::{execute, status_of, CommandError, CommandOutcome};
use crate::keypad::{MatrixKey, MuxKey};
use crate::shared::SharedState;
use crate::state::EditState;

/// Upper bound on activities produced by one poll
pub const MAX_ACTIVITIES: usize = 16;

/// Activities from one poll
pub type Activities = Vec<Activity, MAX_ACTIVITIES>;

/// Something the dispatch loop did
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activity {
    /// Clock advanced one second
    SecondElapsed(ClockTime),
    /// A second passed while editing; the clock was not advanced
    TickSuspended,
    /// Keypad edge changed edit state or time
    Edit { key: MuxKey, action: EditAction },
    /// History browse cursor moved
    HistoryBrowsed { key: MatrixKey, index: usize },
    /// Serial command handled
    Command {
        command: Command,
        result: Result<CommandOutcome, CommandError>,
    },
    /// One reply byte handed to the transmitter
    ReplyByteSent(u8),
    /// Transmitter rejected a reply byte; the byte is dropped
    TransmitFailed,
}

impl Activity {
    /// Check if the board's activity indicator should toggle
    ///
    /// Every handled frame flips it, whether or not the command succeeded.
    pub fn toggles_indicator(&self) -> bool {
        matches!(self, Activity::Command { .. })
    }
}

/// Owner of clock, edit and history state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatcher {
    config: TickConfig,
    clock: ClockState,
    editor: EditModeController,
    history: CommandHistory,
    reply: Option<TimeReply>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(TickConfig::default())
    }
}

impl Dispatcher {
    /// Power-on state: 00:00:00, not editing, blank history
    pub fn new(config: TickConfig) -> Self {
        Self {
            config,
            clock: ClockState::default(),
            editor: EditModeController::new(),
            history: CommandHistory::new(),
            reply: None,
        }
    }

    pub fn clock(&self) -> &ClockState {
        &self.clock
    }

    pub fn edit_state(&self) -> EditState {
        self.editor.state()
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Reply still being transmitted, if any
    pub fn pending_reply(&self) -> Option<&TimeReply> {
        self.reply.as_ref()
    }

    /// Initialize the LCD and publish the initial display state
    pub fn start<L: CharacterLcd>(&mut self, shared: &SharedState, lcd: &mut L) {
        init_lcd(lcd);
        self.publish(shared);
        self.history.render(lcd);
    }

    /// Run one dispatch iteration
    pub fn poll<L, T>(&mut self, shared: &SharedState, lcd: &mut L, tx: &mut T) -> Activities
    where
        L: CharacterLcd,
        T: SerialTx,
    {
        let mut activities = Activities::new();

        if let Some(activity) = self.handle_overflow(shared) {
            record(&mut activities, activity);
        }
        self.handle_mux_keys(shared, &mut activities);
        self.handle_matrix_keys(shared, lcd, &mut activities);

        if shared.line().is_frame_ready() {
            if let Some(frame) = shared.line().take_frame() {
                let activity = self.handle_frame(&frame, lcd);
                shared.line().reset();
                self.publish(shared);
                record(&mut activities, activity);
            }
        }

        if let Some(activity) = self.send_reply_byte(tx) {
            record(&mut activities, activity);
        }

        activities
    }

    fn publish(&self, shared: &SharedState) {
        shared.publish(self.clock.digits(), self.editor.state());
    }

    fn handle_overflow(&mut self, shared: &SharedState) -> Option<Activity> {
        if !shared.take_overflow(self.config.ticks_per_second) {
            return None;
        }
        if !self.editor.state().ticking_allowed() {
            return Some(Activity::TickSuspended);
        }
        self.clock.tick();
        self.publish(shared);
        Some(Activity::SecondElapsed(self.clock.time()))
    }

    fn handle_mux_keys(&mut self, shared: &SharedState, activities: &mut Activities) {
        let edges = shared.take_mux_edges();
        if edges.is_empty() {
            return;
        }

        for key in edges.mux_keys() {
            let action = self.editor.handle(key.into(), &mut self.clock);
            if action != EditAction::Ignored {
                record(activities, Activity::Edit { key, action });
            }
        }
        self.publish(shared);
    }

    fn handle_matrix_keys<L: CharacterLcd>(
        &mut self,
        shared: &SharedState,
        lcd: &mut L,
        activities: &mut Activities,
    ) {
        for key in shared.take_matrix_edges().matrix_keys() {
            let index = match key {
                MatrixKey::HistoryNext => self.history.browse_next(),
                MatrixKey::HistoryPrev => self.history.browse_prev(),
            };
            self.history.render(lcd);
            record(activities, Activity::HistoryBrowsed { key, index });
        }
    }

    fn handle_frame<L: CharacterLcd>(&mut self, frame: &CommandFrame, lcd: &mut L) -> Activity {
        let body = frame.body();
        let command = Command::parse(body);
        let result = execute(command, &mut self.clock, &mut self.editor);

        if let Ok(CommandOutcome::TimeQueried(reply)) = &result {
            // Replaces any reply still in flight
            self.reply = Some(reply.clone());
        }

        self.history.record(body, status_of(&result));
        self.history.render(lcd);

        Activity::Command { command, result }
    }

    fn send_reply_byte<T: SerialTx>(&mut self, tx: &mut T) -> Option<Activity> {
        let reply = self.reply.as_mut()?;
        if !tx.is_ready() {
            return None;
        }

        let byte = reply.next_byte()?;
        if reply.is_drained() {
            self.reply = None;
        }
        match tx.write_byte(byte) {
            Ok(()) => Some(Activity::ReplyByteSent(byte)),
            Err(_) => Some(Activity::TransmitFailed),
        }
    }
}

fn record(activities: &mut Activities, activity: Activity) {
    // Cannot fail: one poll produces fewer than MAX_ACTIVITIES records
    let _ = activities.push(activity);
}
