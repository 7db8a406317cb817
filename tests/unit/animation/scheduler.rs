use super::*;
use crate::foundation::error::CardError;

struct Countdown {
    left: u32,
    ticks: Vec<f64>,
}

impl FrameTask for Countdown {
    fn tick(&mut self, now: FrameTime) -> CardResult<LoopControl> {
        self.ticks.push(now.as_millis());
        if self.left == 0 {
            return Ok(LoopControl::Stop);
        }
        self.left -= 1;
        Ok(LoopControl::Continue)
    }
}

struct Failing;

impl FrameTask for Failing {
    fn tick(&mut self, _now: FrameTime) -> CardResult<LoopControl> {
        Err(CardError::animation("boom"))
    }
}

#[test]
fn handles_are_unique_and_tracked() {
    let mut sched = FrameScheduler::new();
    let a = sched.request("a");
    let b = sched.request("b");
    assert_ne!(a, b);
    assert_eq!(sched.active_count(), 2);
    assert!(sched.cancel(a));
    assert!(!sched.cancel(a));
    assert!(!sched.is_active(a));
    assert!(sched.is_active(b));
    sched.cancel_all();
    assert_eq!(sched.active_count(), 0);
}

#[test]
fn stop_cancels_the_loop() {
    let mut sched = FrameScheduler::new();
    let h = sched.request("countdown");
    let mut task = Countdown {
        left: 2,
        ticks: Vec::new(),
    };
    let mut frames = 0;
    for i in 0..10 {
        if !sched.drive(h, &mut task, FrameTime(i as f64 * 16.0)) {
            break;
        }
        frames += 1;
    }
    assert_eq!(frames, 2);
    assert_eq!(task.ticks, vec![0.0, 16.0, 32.0]);
    assert_eq!(sched.active_count(), 0);
}

#[test]
fn error_halts_only_that_loop() {
    let mut sched = FrameScheduler::new();
    let bad = sched.request("bad");
    let good = sched.request("good");
    let mut ok = Countdown {
        left: 100,
        ticks: Vec::new(),
    };
    assert!(!sched.drive(bad, &mut Failing, FrameTime(0.0)));
    assert!(sched.drive(good, &mut ok, FrameTime(0.0)));
    assert!(!sched.is_active(bad));
    assert!(sched.is_active(good));
}

#[test]
fn cancelled_handles_are_not_ticked() {
    let mut sched = FrameScheduler::new();
    let h = sched.request("x");
    sched.cancel(h);
    let mut task = Countdown {
        left: 5,
        ticks: Vec::new(),
    };
    assert!(!sched.drive(h, &mut task, FrameTime(0.0)));
    assert!(task.ticks.is_empty());
}

#[test]
fn drive_slot_clears_finished_loops() {
    let mut sched = FrameScheduler::new();
    let mut slot = Some(sched.request("once"));
    let mut task = Countdown {
        left: 0,
        ticks: Vec::new(),
    };
    drive_slot(&mut sched, &mut slot, &mut task, FrameTime(0.0));
    assert!(slot.is_none());
    drive_slot(&mut sched, &mut slot, &mut task, FrameTime(16.0));
    assert_eq!(task.ticks.len(), 1);
}
