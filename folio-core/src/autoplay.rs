//! Autoplay state machine.
//!
//! ```text
//! Idle ──start──▶ Running ──interaction──▶ Paused ──quiet──▶ Running
//!                    │  ▲                     │
//!               hold │  │ release        hold │
//!                    ▼  │                     ▼
//!                    Held ◀───────────────────┘
//! ```
//!
//! Minimizing moves any active phase to `Suspended`. Expanding returns to
//! `Held` if the pointer is still over the carousel, otherwise to `Running`.
//!
//! The scheduler never touches a clock. Every transition returns the timer
//! commands the owning engine must apply, cancellations first.

use std::time::Duration;

use crate::timers::TimerKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayPhase {
    /// Autoplay is off in the config or there is nothing to advance.
    Disabled,
    /// Enabled but not started.
    Idle,
    Running,
    /// Waiting out the quiet period after a user interaction.
    Paused,
    /// Pointer is over the carousel or a finger is down.
    Held,
    /// Minimized; restored on expand.
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Cancel(TimerKind),
    Once(TimerKind, Duration),
    Repeating(TimerKind, Duration),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayScheduler {
    phase: AutoplayPhase,
    interval: Duration,
    resume_delay: Duration,
    /// A hold is outstanding while suspended.
    held_while_suspended: bool,
}

impl AutoplayScheduler {
    pub fn new(
        enabled: bool,
        interval: Duration,
        resume_delay: Duration,
    ) -> Self {
        Self {
            phase: if enabled {
                AutoplayPhase::Idle
            } else {
                AutoplayPhase::Disabled
            },
            interval,
            resume_delay,
            held_while_suspended: false,
        }
    }

    pub fn disabled() -> Self {
        Self::new(false, Duration::ZERO, Duration::ZERO)
    }

    pub fn phase(&self) -> AutoplayPhase {
        self.phase
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True while the repeating tick is armed.
    pub fn is_running(&self) -> bool {
        self.phase == AutoplayPhase::Running
    }

    fn run(&mut self) -> Vec<TimerCommand> {
        self.phase = AutoplayPhase::Running;
        vec![
            TimerCommand::Cancel(TimerKind::AutoplayResume),
            TimerCommand::Repeating(TimerKind::AutoplayTick, self.interval),
        ]
    }

    fn cancel_all() -> Vec<TimerCommand> {
        vec![
            TimerCommand::Cancel(TimerKind::AutoplayTick),
            TimerCommand::Cancel(TimerKind::AutoplayResume),
        ]
    }

    pub fn start(&mut self) -> Vec<TimerCommand> {
        match self.phase {
            AutoplayPhase::Idle => self.run(),
            _ => Vec::new(),
        }
    }

    pub fn stop(&mut self) -> Vec<TimerCommand> {
        match self.phase {
            AutoplayPhase::Disabled | AutoplayPhase::Idle => Vec::new(),
            _ => {
                self.phase = AutoplayPhase::Idle;
                Self::cancel_all()
            }
        }
    }

    /// A swipe, button, dot or key navigation. Pauses and (re)arms the quiet
    /// period; a held carousel stays held.
    pub fn user_interaction(&mut self) -> Vec<TimerCommand> {
        match self.phase {
            AutoplayPhase::Running | AutoplayPhase::Paused => {
                self.phase = AutoplayPhase::Paused;
                vec![
                    TimerCommand::Cancel(TimerKind::AutoplayTick),
                    TimerCommand::Cancel(TimerKind::AutoplayResume),
                    TimerCommand::Once(
                        TimerKind::AutoplayResume,
                        self.resume_delay,
                    ),
                ]
            }
            _ => Vec::new(),
        }
    }

    /// Pointer entered or a touch began.
    pub fn hold(&mut self) -> Vec<TimerCommand> {
        match self.phase {
            AutoplayPhase::Running | AutoplayPhase::Paused => {
                self.phase = AutoplayPhase::Held;
                Self::cancel_all()
            }
            AutoplayPhase::Suspended => {
                self.held_while_suspended = true;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Pointer left: resume immediately.
    pub fn release(&mut self) -> Vec<TimerCommand> {
        match self.phase {
            AutoplayPhase::Held => self.run(),
            AutoplayPhase::Suspended => {
                self.held_while_suspended = false;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Touch ended: resume after the quiet period.
    pub fn release_debounced(&mut self) -> Vec<TimerCommand> {
        match self.phase {
            AutoplayPhase::Suspended => {
                self.held_while_suspended = false;
                Vec::new()
            }
            AutoplayPhase::Held => {
                self.phase = AutoplayPhase::Paused;
                vec![
                    TimerCommand::Cancel(TimerKind::AutoplayResume),
                    TimerCommand::Once(
                        TimerKind::AutoplayResume,
                        self.resume_delay,
                    ),
                ]
            }
            _ => Vec::new(),
        }
    }

    /// The quiet period elapsed.
    pub fn resume_elapsed(&mut self) -> Vec<TimerCommand> {
        match self.phase {
            AutoplayPhase::Paused => self.run(),
            _ => Vec::new(),
        }
    }

    /// Minimize: drop every timer until [`Self::restore`].
    pub fn suspend(&mut self) -> Vec<TimerCommand> {
        match self.phase {
            AutoplayPhase::Disabled | AutoplayPhase::Suspended => Vec::new(),
            _ => {
                self.held_while_suspended = self.phase == AutoplayPhase::Held;
                self.phase = AutoplayPhase::Suspended;
                Self::cancel_all()
            }
        }
    }

    /// Expand: back to `Held` if a hold is still outstanding, otherwise
    /// running again.
    pub fn restore(&mut self) -> Vec<TimerCommand> {
        if self.phase != AutoplayPhase::Suspended {
            return Vec::new();
        }
        if std::mem::take(&mut self.held_while_suspended) {
            self.phase = AutoplayPhase::Held;
            return Vec::new();
        }
        self.run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler() -> AutoplayScheduler {
        AutoplayScheduler::new(
            true,
            Duration::from_millis(5000),
            Duration::from_millis(2000),
        )
    }

    #[test]
    fn start_arms_repeating_tick() {
        let mut s = scheduler();
        let cmds = s.start();
        assert!(cmds.contains(&TimerCommand::Repeating(
            TimerKind::AutoplayTick,
            Duration::from_millis(5000)
        )));
        assert!(s.is_running());
        assert!(s.start().is_empty());
    }

    #[test]
    fn interaction_pauses_then_resumes() {
        let mut s = scheduler();
        s.start();
        let cmds = s.user_interaction();
        assert_eq!(cmds[0], TimerCommand::Cancel(TimerKind::AutoplayTick));
        assert_eq!(
            cmds.last(),
            Some(&TimerCommand::Once(
                TimerKind::AutoplayResume,
                Duration::from_millis(2000)
            ))
        );
        assert_eq!(s.phase(), AutoplayPhase::Paused);

        // Debounce: a second interaction re-arms the quiet period.
        assert!(!s.user_interaction().is_empty());
        assert_eq!(s.phase(), AutoplayPhase::Paused);

        s.resume_elapsed();
        assert!(s.is_running());
    }

    #[test]
    fn hold_blocks_interaction_resume() {
        let mut s = scheduler();
        s.start();
        s.hold();
        assert!(s.user_interaction().is_empty());
        assert!(s.resume_elapsed().is_empty());
        assert_eq!(s.phase(), AutoplayPhase::Held);
        s.release();
        assert!(s.is_running());
    }

    #[test]
    fn touch_release_waits_for_quiet_period() {
        let mut s = scheduler();
        s.start();
        s.hold();
        s.release_debounced();
        assert_eq!(s.phase(), AutoplayPhase::Paused);
    }

    #[test]
    fn disabled_scheduler_ignores_everything() {
        let mut s = AutoplayScheduler::disabled();
        assert!(s.start().is_empty());
        assert!(s.user_interaction().is_empty());
        assert!(s.suspend().is_empty());
        assert_eq!(s.phase(), AutoplayPhase::Disabled);
    }

    #[test]
    fn suspend_and_restore() {
        let mut s = scheduler();
        s.start();
        s.user_interaction();
        let cmds = s.suspend();
        assert_eq!(cmds.len(), 2);
        assert_eq!(s.phase(), AutoplayPhase::Suspended);
        assert!(s.user_interaction().is_empty());
        s.restore();
        assert!(s.is_running());
    }

    #[test]
    fn hold_survives_suspend() {
        let mut s = scheduler();
        s.start();
        s.hold();
        s.suspend();
        assert!(s.restore().is_empty());
        assert_eq!(s.phase(), AutoplayPhase::Held);
        assert!(!s.release().is_empty());
        assert!(s.is_running());
    }

    #[test]
    fn pointer_moves_while_suspended_decide_the_restored_phase() {
        let mut s = scheduler();
        s.start();
        s.suspend();
        assert!(s.hold().is_empty());
        s.restore();
        assert_eq!(s.phase(), AutoplayPhase::Held);

        s.suspend();
        assert!(s.release().is_empty());
        assert_eq!(s.phase(), AutoplayPhase::Suspended);
        s.restore();
        assert!(s.is_running());
    }
}
