//! Frame driver
//!
//! Runs step then render once per scheduling opportunity, for as long as the
//! host keeps granting frames. The host decides what a frame opportunity is
//! through [`Scheduler`]; tests use [`FixedTick`] to step deterministically.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::render::{render, Canvas, Palette};
use crate::simulation::Simulation;

/// Something that can invoke a callback at the next frame opportunity
pub trait Scheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>);
}

/// Scheduler that only runs frames when told to
#[derive(Default)]
pub struct FixedTick {
    queue: RefCell<VecDeque<Box<dyn FnOnce()>>>,
}

impl FixedTick {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callbacks waiting for the next tick
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run up to `ticks` queued callbacks, returning how many ran
    pub fn advance(&self, ticks: usize) -> usize {
        let mut ran = 0;
        for _ in 0..ticks {
            // Release the queue before running; the callback may re-arm itself
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some(callback) => {
                    callback();
                    ran += 1;
                }
                None => break,
            }
        }
        ran
    }
}

impl Scheduler for FixedTick {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back(callback);
    }
}

/// Frame counters kept by the driver
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frames: u64,
    pub dropped: u64, // frames whose render failed
    pub last_error: Option<String>,
}

type FrameHook = Box<dyn FnMut(&Simulation, &FrameStats)>;

pub struct FrameDriver<C: Canvas> {
    simulation: Simulation,
    canvas: C,
    palette: Palette,
    stats: FrameStats,
    hook: Option<FrameHook>,
}

impl<C: Canvas> FrameDriver<C> {
    pub fn new(simulation: Simulation, canvas: C) -> Self {
        Self {
            simulation,
            canvas,
            palette: Palette::default(),
            stats: FrameStats::default(),
            hook: None,
        }
    }

    /// Called after every frame with the updated state
    pub fn on_frame(mut self, hook: impl FnMut(&Simulation, &FrameStats) + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Step the simulation, then draw it. A failed draw skips the frame.
    pub fn frame(&mut self) {
        self.simulation.step();

        let snapshot = self.simulation.snapshot();
        match render(&snapshot, &self.palette, &mut self.canvas) {
            Ok(()) => self.stats.last_error = None,
            Err(err) => {
                self.stats.dropped += 1;
                self.stats.last_error = Some(err);
            }
        }
        self.stats.frames += 1;

        if let Some(hook) = self.hook.as_mut() {
            hook(&self.simulation, &self.stats);
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }
}

/// Drive `driver` on `scheduler`, one frame per granted opportunity.
///
/// Queued frames only hold a weak reference to the scheduler: the loop runs
/// for as long as the caller keeps the scheduler alive.
pub fn run<C, S>(driver: Rc<RefCell<FrameDriver<C>>>, scheduler: Rc<S>)
where
    C: Canvas + 'static,
    S: Scheduler + 'static,
{
    let next: Weak<S> = Rc::downgrade(&scheduler);
    scheduler.request_frame(Box::new(move || {
        driver.borrow_mut().frame();
        if let Some(scheduler) = next.upgrade() {
            run(driver, scheduler);
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::{DrawCall, RecordingCanvas};
    use crate::Config;
    use std::cell::Cell;

    fn driver() -> Rc<RefCell<FrameDriver<RecordingCanvas>>> {
        let sim = Simulation::with_seed(Config::new(), 5);
        Rc::new(RefCell::new(FrameDriver::new(sim, RecordingCanvas::default())))
    }

    #[test]
    fn test_frame_steps_before_rendering() {
        let driver = driver();
        driver.borrow_mut().frame();

        let d = driver.borrow();
        assert_eq!(d.simulation().frame(), 1);
        // Ball drawn where the first step left it
        let ball = d.simulation().ball();
        assert_eq!(
            d.canvas().calls.last(),
            Some(&DrawCall::Circle(ball.pos, 8.0, "#fff".to_string()))
        );
        assert_eq!(ball.pos, glam::Vec2::new(405.0, 203.0));
    }

    #[test]
    fn test_run_advances_one_frame_per_tick() {
        let driver = driver();
        let ticker = Rc::new(FixedTick::new());

        run(driver.clone(), ticker.clone());
        assert_eq!(ticker.pending(), 1);
        assert_eq!(driver.borrow().stats().frames, 0, "Nothing runs until a tick");

        assert_eq!(ticker.advance(10), 10);
        assert_eq!(driver.borrow().stats().frames, 10);
        assert_eq!(driver.borrow().simulation().frame(), 10);
        assert_eq!(ticker.pending(), 1, "Loop re-arms itself");
    }

    #[test]
    fn test_render_failure_drops_frame_but_keeps_running() {
        let sim = Simulation::with_seed(Config::new(), 5);
        let canvas = RecordingCanvas {
            fail: true,
            ..Default::default()
        };
        let driver = Rc::new(RefCell::new(FrameDriver::new(sim, canvas)));
        let ticker = Rc::new(FixedTick::new());

        run(driver.clone(), ticker.clone());
        ticker.advance(3);

        let d = driver.borrow();
        assert_eq!(d.stats().frames, 3);
        assert_eq!(d.stats().dropped, 3);
        assert_eq!(d.stats().last_error.as_deref(), Some("surface lost"));
        assert_eq!(d.simulation().frame(), 3, "Simulation still advances");
    }

    #[test]
    fn test_frame_hook_sees_each_frame() {
        let seen = Rc::new(Cell::new(0u64));
        let seen_in_hook = seen.clone();
        let sim = Simulation::with_seed(Config::new(), 5);
        let driver = Rc::new(RefCell::new(
            FrameDriver::new(sim, RecordingCanvas::default()).on_frame(move |sim, stats| {
                assert_eq!(sim.frame(), stats.frames);
                seen_in_hook.set(stats.frames);
            }),
        ));
        let ticker = Rc::new(FixedTick::new());

        run(driver, ticker.clone());
        ticker.advance(4);

        assert_eq!(seen.get(), 4);
    }

    #[test]
    fn test_dropping_scheduler_releases_driver() {
        let driver = driver();
        let ticker = Rc::new(FixedTick::new());

        run(driver.clone(), ticker.clone());
        ticker.advance(3);
        assert_eq!(Rc::strong_count(&driver), 2, "Queued frame holds the driver");

        drop(ticker);
        assert_eq!(Rc::strong_count(&driver), 1);
    }

    #[test]
    fn test_advance_on_empty_queue() {
        let ticker = FixedTick::new();
        assert_eq!(ticker.advance(5), 0);
    }
}
