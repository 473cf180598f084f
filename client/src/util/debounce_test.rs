use super::*;
use std::cell::Cell;
use std::rc::Rc;

use futures::executor::block_on;

#[test]
fn newest_ticket_is_current() {
    let mut gate = DebounceGate::default();
    let ticket = gate.schedule();
    assert!(gate.is_current(ticket));
}

#[test]
fn rapid_reschedule_leaves_only_last_ticket_live() {
    let mut gate = DebounceGate::default();
    let tickets: Vec<u64> = (0..5).map(|_| gate.schedule()).collect();
    let live: Vec<_> = tickets.iter().filter(|t| gate.is_current(**t)).collect();
    assert_eq!(live, vec![&tickets[4]]);
}

#[test]
fn cancel_invalidates_pending_ticket() {
    let mut gate = DebounceGate::default();
    let ticket = gate.schedule();
    gate.cancel();
    assert!(!gate.is_current(ticket));
}

#[test]
fn schedule_after_cancel_is_live_again() {
    let mut gate = DebounceGate::default();
    gate.schedule();
    gate.cancel();
    let ticket = gate.schedule();
    assert!(gate.is_current(ticket));
}

// =============================================================
// Debouncer: schedule then run
// =============================================================

fn counting_task(runs: &Rc<Cell<u32>>) -> impl FnOnce() -> std::future::Ready<()> + 'static {
    let runs = Rc::clone(runs);
    move || {
        runs.set(runs.get() + 1);
        std::future::ready(())
    }
}

#[test]
fn lone_schedule_runs_after_wait() {
    let debouncer = Debouncer::new(300);
    let runs = Rc::new(Cell::new(0));
    let pending = debouncer.schedule_after(std::future::ready(()), counting_task(&runs)).unwrap();
    assert_eq!(runs.get(), 0);
    assert!(block_on(pending));
    assert_eq!(runs.get(), 1);
}

#[test]
fn rapid_schedules_run_only_the_last_task() {
    let debouncer = Debouncer::new(300);
    let runs = Rc::new(Cell::new(0));
    let pending: Vec<_> = (0..3)
        .map(|_| debouncer.schedule_after(std::future::ready(()), counting_task(&runs)).unwrap())
        .collect();
    let ran: Vec<bool> = pending.into_iter().map(block_on).collect();
    assert_eq!(ran, vec![false, false, true]);
    assert_eq!(runs.get(), 1);
}

#[test]
fn cancel_before_wait_ends_skips_task() {
    let debouncer = Debouncer::new(300);
    let runs = Rc::new(Cell::new(0));
    let pending = debouncer.schedule_after(std::future::ready(()), counting_task(&runs)).unwrap();
    debouncer.cancel();
    assert!(!block_on(pending));
    assert_eq!(runs.get(), 0);
}

/// Without a browser timer `schedule` only supersedes.
#[cfg(not(feature = "hydrate"))]
#[test]
fn plain_schedule_supersedes_pending_task() {
    let debouncer = Debouncer::new(300);
    let runs = Rc::new(Cell::new(0));
    let pending = debouncer.schedule_after(std::future::ready(()), counting_task(&runs)).unwrap();
    debouncer.schedule(counting_task(&runs));
    assert!(!block_on(pending));
    assert_eq!(runs.get(), 0);
}
