/*!
Progress and cancellation of an analysis.

An analysis notes the total steps it expects to take, adds a step as each is taken, and checks for cancellation between steps.
Progress is only informative, and so none of these methods fail.

```rust
# use otter_anomalies::analysis::monitor::{CancelableMonitor, Monitor};
let mut monitor = CancelableMonitor::default();
let flag = monitor.cancel_flag();

monitor.set_total_steps(4);
monitor.add_step();
assert_eq!(monitor.progress(), (1, 4));

// For example, from some other thread.
flag.store(true, std::sync::atomic::Ordering::Relaxed);
assert!(monitor.is_canceled());
```
*/

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Progress reporting and cancellation.
pub trait Monitor {
    /// Notes the count of steps the analysis expects to take.
    fn set_total_steps(&mut self, steps: usize);

    /// Notes a step was taken.
    fn add_step(&mut self);

    /// Whether the analysis should stop before its next step.
    fn is_canceled(&self) -> bool;
}

/// A monitor which notes nothing and is never canceled.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullMonitor;

impl Monitor for NullMonitor {
    fn set_total_steps(&mut self, _steps: usize) {}

    fn add_step(&mut self) {}

    fn is_canceled(&self) -> bool {
        false
    }
}

/// A monitor which counts steps, and may be canceled through a shared flag.
#[derive(Clone, Debug, Default)]
pub struct CancelableMonitor {
    total: usize,
    taken: usize,
    canceled: Arc<AtomicBool>,
}

impl CancelableMonitor {
    /// The flag which cancels the monitor when set, for use elsewhere.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        self.canceled.clone()
    }

    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Relaxed);
    }

    /// The steps taken, and the total steps expected.
    pub fn progress(&self) -> (usize, usize) {
        (self.taken, self.total)
    }
}

impl Monitor for CancelableMonitor {
    fn set_total_steps(&mut self, steps: usize) {
        self.total = steps;
        self.taken = 0;
    }

    fn add_step(&mut self) {
        self.taken += 1;
    }

    fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Relaxed)
    }
}
