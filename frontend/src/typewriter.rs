use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Done,
}

/// Reveals `text` one character per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    text: String,
    // Byte offset just past each character.
    ends: Vec<usize>,
    typed: usize,
    ticks: u32,
    interval: Duration,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, interval: Duration) -> Self {
        let text = text.into();
        let ends = text.char_indices().map(|(i, c)| i + c.len_utf8()).collect();
        Self {
            text,
            ends,
            typed: 0,
            ticks: 0,
            interval,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.typed < self.ends.len() {
            Phase::Typing
        } else {
            Phase::Done
        }
    }

    /// Appends the next character. Ticking a finished typewriter does nothing.
    pub fn tick(&mut self) -> Phase {
        if self.phase() == Phase::Typing {
            self.typed += 1;
            self.ticks += 1;
        }
        self.phase()
    }

    pub fn reset(&mut self) {
        self.typed = 0;
        self.ticks = 0;
    }

    pub fn displayed(&self) -> &str {
        match self.typed {
            0 => "",
            n => &self.text[..self.ends[n - 1]],
        }
    }

    pub fn typed(&self) -> usize {
        self.typed
    }

    /// Length of the full text, in characters.
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn elapsed(&self) -> Duration {
        self.interval * self.ticks
    }
}

/// Runs a callback once after a delay. Dropping the returned handle cancels
/// the callback if it has not fired yet.
pub trait TickScheduler {
    type Handle;

    fn schedule(&self, after: Duration, tick: Box<dyn FnOnce()>) -> Self::Handle;
}

pub struct GlooScheduler;

impl TickScheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, after: Duration, tick: Box<dyn FnOnce()>) -> Timeout {
        let millis = after.as_millis().min(u32::MAX as u128) as u32;
        Timeout::new(millis, tick)
    }
}

struct TaskInner<S: TickScheduler> {
    scheduler: S,
    machine: RefCell<Typewriter>,
    alive: Cell<bool>,
    pending: RefCell<Option<S::Handle>>,
    on_tick: Box<dyn Fn(&Typewriter)>,
}

/// A typewriter driven by the scheduler, one scheduled unit per character.
///
/// Cancelling (or dropping) the task removes the pending unit and stops any
/// unit that already fired from touching the typewriter or the callback.
pub struct TypingTask<S: TickScheduler + 'static> {
    inner: Rc<TaskInner<S>>,
}

impl<S: TickScheduler + 'static> TypingTask<S> {
    /// Starts from an empty display, whatever state `machine` was in.
    pub fn start<F>(scheduler: S, mut machine: Typewriter, on_tick: F) -> Self
    where
        F: Fn(&Typewriter) + 'static,
    {
        machine.reset();
        let inner = Rc::new(TaskInner {
            scheduler,
            machine: RefCell::new(machine),
            alive: Cell::new(true),
            pending: RefCell::new(None),
            on_tick: Box::new(on_tick),
        });

        (inner.on_tick)(&inner.machine.borrow());
        if inner.machine.borrow().phase() == Phase::Typing {
            schedule_next(&inner);
        }

        Self { inner }
    }

    pub fn cancel(&self) {
        if self.inner.alive.replace(false) {
            debug!(
                "Typewriter cancelled after {} of {} characters",
                self.inner.machine.borrow().typed(),
                self.inner.machine.borrow().len()
            );
        }
        self.inner.pending.borrow_mut().take();
    }

}

#[cfg(test)]
impl<S: TickScheduler + 'static> TypingTask<S> {
    pub fn is_running(&self) -> bool {
        self.inner.alive.get() && self.inner.machine.borrow().phase() == Phase::Typing
    }

    pub fn snapshot(&self) -> Typewriter {
        self.inner.machine.borrow().clone()
    }
}

impl<S: TickScheduler + 'static> Drop for TypingTask<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule_next<S: TickScheduler + 'static>(inner: &Rc<TaskInner<S>>) {
    let weak: Weak<TaskInner<S>> = Rc::downgrade(inner);
    let interval = inner.machine.borrow().interval();
    let handle = inner.scheduler.schedule(
        interval,
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                run_tick(&inner);
            }
        }),
    );
    *inner.pending.borrow_mut() = Some(handle);
}

fn run_tick<S: TickScheduler + 'static>(inner: &Rc<TaskInner<S>>) {
    if !inner.alive.get() {
        return;
    }
    // This unit has fired.
    inner.pending.borrow_mut().take();

    let phase = inner.machine.borrow_mut().tick();
    (inner.on_tick)(&inner.machine.borrow());

    // The callback may have torn the host view down.
    match phase {
        Phase::Typing if inner.alive.get() => schedule_next(inner),
        Phase::Typing => {}
        Phase::Done => {
            let machine = inner.machine.borrow();
            debug!("Typed {} characters in {:?}", machine.len(), machine.elapsed());
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypedText {
    pub text: String,
    pub phase: Phase,
}

/// Types `text` whenever `active` turns true; going inactive or unmounting
/// cancels the run. Re-activation starts over from the first character.
#[hook]
pub fn use_typewriter(text: AttrValue, interval_ms: u32, active: bool) -> TypedText {
    let typed = use_state(|| TypedText {
        text: String::new(),
        phase: Phase::Typing,
    });

    {
        let typed = typed.clone();
        use_effect_with_deps(
            move |(text, interval_ms, active)| {
                let task = if *active {
                    let machine =
                        Typewriter::new(text.to_string(), Duration::from_millis(u64::from(*interval_ms)));
                    let typed = typed.clone();
                    Some(TypingTask::start(GlooScheduler, machine, move |m| {
                        typed.set(TypedText {
                            text: m.displayed().to_string(),
                            phase: m.phase(),
                        });
                    }))
                } else {
                    None
                };

                move || {
                    if let Some(task) = task {
                        task.cancel();
                    }
                }
            },
            (text, interval_ms, active),
        );
    }

    (*typed).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    type Queue = Rc<RefCell<VecDeque<(u64, Box<dyn FnOnce()>)>>>;

    /// Runs scheduled units only when told to.
    #[derive(Clone, Default)]
    struct ManualScheduler {
        queue: Queue,
        next_id: Rc<Cell<u64>>,
        // Simulates a unit that already left the timer queue when cancelled.
        ignore_cancel: bool,
    }

    struct ManualHandle {
        id: u64,
        queue: Queue,
        ignore_cancel: bool,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if !self.ignore_cancel {
                self.queue.borrow_mut().retain(|(id, _)| *id != self.id);
            }
        }
    }

    impl TickScheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, _after: Duration, tick: Box<dyn FnOnce()>) -> ManualHandle {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().push_back((id, tick));
            ManualHandle {
                id,
                queue: self.queue.clone(),
                ignore_cancel: self.ignore_cancel,
            }
        }
    }

    impl ManualScheduler {
        fn advance(&self) -> bool {
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some((_, tick)) => {
                    tick();
                    true
                }
                None => false,
            }
        }

        fn pending(&self) -> usize {
            self.queue.borrow().len()
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&Typewriter)) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        (log, move |m: &Typewriter| sink.borrow_mut().push(m.displayed().to_string()))
    }

    #[test]
    fn heading_is_typed_in_six_ticks() {
        let mut tw = Typewriter::new("O nama", Duration::from_millis(50));
        for _ in 0..5 {
            assert_eq!(tw.tick(), Phase::Typing);
        }
        assert_eq!(tw.displayed(), "O nam");

        assert_eq!(tw.tick(), Phase::Done);
        assert_eq!(tw.displayed(), "O nama");
        assert_eq!(tw.elapsed(), Duration::from_millis(300));
    }

    #[test]
    fn ticking_when_done_changes_nothing() {
        let mut tw = Typewriter::new("ab", Duration::from_millis(50));
        tw.tick();
        tw.tick();
        let done = tw.clone();
        assert_eq!(tw.tick(), Phase::Done);
        assert_eq!(tw, done);
    }

    #[test]
    fn multibyte_characters_are_typed_whole() {
        let mut tw = Typewriter::new("između", Duration::from_millis(50));
        assert_eq!(tw.len(), 6);
        for _ in 0..3 {
            tw.tick();
        }
        assert_eq!(tw.displayed(), "izm");
        tw.tick();
        assert_eq!(tw.displayed(), "izme");
        tw.tick();
        assert_eq!(tw.displayed(), "izmeđ");
        assert_eq!(tw.phase(), Phase::Typing);
        assert_eq!(tw.tick(), Phase::Done);
        assert_eq!(tw.displayed(), "između");
    }

    #[test]
    fn empty_text_starts_done() {
        let tw = Typewriter::new("", Duration::from_millis(50));
        assert_eq!(tw.len(), 0);
        assert_eq!(tw.phase(), Phase::Done);
        assert_eq!(tw.displayed(), "");
    }

    #[test]
    fn reset_starts_over() {
        let mut tw = Typewriter::new("O nama", Duration::from_millis(50));
        tw.tick();
        tw.tick();
        tw.reset();
        assert_eq!(tw.phase(), Phase::Typing);
        assert_eq!(tw.displayed(), "");
        assert_eq!(tw.elapsed(), Duration::ZERO);
    }

    #[test]
    fn task_types_the_full_text_then_stops_scheduling() {
        let scheduler = ManualScheduler::default();
        let (log, on_tick) = recorder();
        let task = TypingTask::start(
            scheduler.clone(),
            Typewriter::new("O nama", Duration::from_millis(50)),
            on_tick,
        );

        let mut ran = 0;
        while scheduler.advance() {
            ran += 1;
        }

        assert_eq!(ran, 6);
        assert!(!task.is_running());
        assert_eq!(task.snapshot().displayed(), "O nama");
        assert_eq!(task.snapshot().elapsed(), Duration::from_millis(300));
        assert_eq!(log.borrow().first().map(String::as_str), Some(""));
        assert_eq!(log.borrow().last().map(String::as_str), Some("O nama"));
        assert_eq!(log.borrow().len(), 7);
    }

    #[test]
    fn cancelling_midway_drops_the_pending_unit() {
        let scheduler = ManualScheduler::default();
        let (log, on_tick) = recorder();
        let task = TypingTask::start(
            scheduler.clone(),
            Typewriter::new("O nama", Duration::from_millis(50)),
            on_tick,
        );

        scheduler.advance();
        scheduler.advance();
        assert_eq!(scheduler.pending(), 1);
        task.cancel();

        assert_eq!(scheduler.pending(), 0);
        assert_eq!(task.snapshot().typed(), 2);
        assert_eq!(task.snapshot().displayed(), "O ");
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn a_unit_that_fires_after_cancel_does_not_mutate() {
        let scheduler = ManualScheduler {
            ignore_cancel: true,
            ..ManualScheduler::default()
        };
        let (log, on_tick) = recorder();
        let task = TypingTask::start(
            scheduler.clone(),
            Typewriter::new("O nama", Duration::from_millis(50)),
            on_tick,
        );

        scheduler.advance();
        task.cancel();
        let entries = log.borrow().len();
        while scheduler.advance() {}

        assert_eq!(task.snapshot().typed(), 1);
        assert_eq!(log.borrow().len(), entries);
    }

    #[test]
    fn dropping_the_task_cancels_it() {
        let scheduler = ManualScheduler::default();
        let (log, on_tick) = recorder();
        let task = TypingTask::start(
            scheduler.clone(),
            Typewriter::new("Kontakt", Duration::from_millis(50)),
            on_tick,
        );
        scheduler.advance();
        drop(task);

        assert_eq!(scheduler.pending(), 0);
        assert!(!scheduler.advance());
        assert_eq!(log.borrow().last().map(String::as_str), Some("K"));
    }

    #[test]
    fn restarting_resets_a_finished_typewriter() {
        let scheduler = ManualScheduler::default();
        let mut finished = Typewriter::new("O nama", Duration::from_millis(50));
        while finished.tick() == Phase::Typing {}

        let (log, on_tick) = recorder();
        let task = TypingTask::start(scheduler.clone(), finished, on_tick);
        assert!(task.is_running());
        assert_eq!(*log.borrow(), vec![String::new()]);
    }
}
