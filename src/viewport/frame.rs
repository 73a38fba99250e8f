//! One-pending-frame scheduling.
//!
//! Scroll handlers never touch layout directly: they hand a job to their
//! [`FrameSlot`], which cancels whatever the owner had queued before and
//! requests a fresh animation frame. Within a burst of scroll events only the
//! most recent job runs.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Receives the frame timestamp in milliseconds.
pub type FrameJob = Box<dyn FnOnce(f64)>;

pub trait FrameHost {
    type Handle;

    /// Queues `job` for the next frame. `None` when the host cannot schedule.
    fn request(&self, job: FrameJob) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

pub struct FrameSlot<H: FrameHost> {
    host: H,
    pending: Option<H::Handle>,
}

impl<H: FrameHost> FrameSlot<H> {
    pub fn new(host: H) -> Self {
        FrameSlot { host, pending: None }
    }

    /// Replaces any pending job with `job`. Returns whether a frame was requested.
    pub fn schedule(&mut self, job: FrameJob) -> bool {
        self.cancel();
        self.pending = self.host.request(job);
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.host.cancel(handle);
        }
    }
}

impl<H: FrameHost> Drop for FrameSlot<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// `requestAnimationFrame` on the browser window.
pub struct BrowserFrames {
    window: Window,
}

impl BrowserFrames {
    pub fn new(window: Window) -> Self {
        BrowserFrames { window }
    }
}

pub struct BrowserFrame {
    id: i32,
    // Must outlive the request; dropped once the frame ran or was cancelled.
    _callback: Closure<dyn FnMut(f64)>,
}

impl FrameHost for BrowserFrames {
    type Handle = BrowserFrame;

    fn request(&self, job: FrameJob) -> Option<BrowserFrame> {
        let mut job = Some(job);
        let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            if let Some(job) = job.take() {
                job(timestamp);
            }
        });
        match self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => Some(BrowserFrame { id, _callback: callback }),
            Err(err) => {
                log::warn!("requestAnimationFrame failed: {:?}", err);
                None
            }
        }
    }

    fn cancel(&self, handle: BrowserFrame) {
        // Cancelling a frame that already ran is a no-op in the browser.
        let _ = self.window.cancel_animation_frame(handle.id);
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use super::{FrameHost, FrameJob};
    use std::cell::{Cell, RefCell};

    /// Frames that only run when the test says so.
    #[derive(Default)]
    pub struct ManualFrames {
        queue: RefCell<Vec<(u32, FrameJob)>>,
        next_id: Cell<u32>,
        cancelled: Cell<usize>,
    }

    impl ManualFrames {
        pub fn run_frame(&self, timestamp: f64) -> usize {
            let jobs: Vec<_> = self.queue.borrow_mut().drain(..).collect();
            let ran = jobs.len();
            for (_, job) in jobs {
                job(timestamp);
            }
            ran
        }

        pub fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        pub fn cancelled(&self) -> usize {
            self.cancelled.get()
        }
    }

    impl FrameHost for &ManualFrames {
        type Handle = u32;

        fn request(&self, job: FrameJob) -> Option<u32> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().push((id, job));
            Some(id)
        }

        fn cancel(&self, handle: u32) {
            let mut queue = self.queue.borrow_mut();
            let before = queue.len();
            queue.retain(|(id, _)| *id != handle);
            if queue.len() != before {
                self.cancelled.set(self.cancelled.get() + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualFrames;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl Fn(u32) -> FrameJob) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let make = move |tag: u32| -> FrameJob {
            let sink = sink.clone();
            Box::new(move |_| sink.borrow_mut().push(tag))
        };
        (log, make)
    }

    #[test]
    fn only_the_last_job_of_a_burst_runs() {
        let frames = ManualFrames::default();
        let (log, job) = recorder();
        let mut slot = FrameSlot::new(&frames);

        for tag in 1..=5 {
            assert!(slot.schedule(job(tag)));
        }
        assert_eq!(frames.pending(), 1);
        assert_eq!(frames.cancelled(), 4);

        assert_eq!(frames.run_frame(16.0), 1);
        assert_eq!(*log.borrow(), vec![5]);
    }

    #[test]
    fn later_bursts_run_again() {
        let frames = ManualFrames::default();
        let (log, job) = recorder();
        let mut slot = FrameSlot::new(&frames);

        slot.schedule(job(1));
        frames.run_frame(16.0);
        slot.schedule(job(2));
        slot.schedule(job(3));
        frames.run_frame(32.0);

        assert_eq!(*log.borrow(), vec![1, 3]);
    }

    #[test]
    fn window_events_and_resize_callbacks_share_one_frame() {
        let frames = ManualFrames::default();
        let (log, job) = recorder();
        let mut slot = FrameSlot::new(&frames);

        // A scroll event and a content resize land before the same frame.
        slot.schedule(job(1));
        slot.schedule(job(1));
        assert_eq!(frames.pending(), 1);

        frames.run_frame(16.0);
        assert_eq!(*log.borrow(), vec![1]);
    }

    #[test]
    fn teardown_cancels_pending_work() {
        let frames = ManualFrames::default();
        let (log, job) = recorder();
        {
            let mut slot = FrameSlot::new(&frames);
            slot.schedule(job(1));
        }
        assert_eq!(frames.run_frame(16.0), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn separate_owners_do_not_cancel_each_other() {
        let frames = ManualFrames::default();
        let (log, job) = recorder();
        let mut nav = FrameSlot::new(&frames);
        let mut hero = FrameSlot::new(&frames);

        nav.schedule(job(1));
        hero.schedule(job(2));
        frames.run_frame(16.0);

        let mut ran = log.borrow().clone();
        ran.sort();
        assert_eq!(ran, vec![1, 2]);
    }
}
