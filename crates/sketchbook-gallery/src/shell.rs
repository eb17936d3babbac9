use std::sync::Arc;

use anyhow::Result;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use sketchbook_engine::core::{App, AppControl, FrameCtx};
use sketchbook_engine::time::FrameTime;

use crate::registry::{self, SampleEntry};
use crate::sample::Sample;

/// Shell: sample navigation plus the lifecycle of the active sample.
///
/// Owns the single mutable slot of the whole application: at most one sample
/// is active, and replacing it always runs the old sample's `cleanup` first,
/// exactly once, before the new sample's setup begins. A failed setup is
/// surfaced as an error and leaves no sample active; the previous sample is
/// already torn down at that point and is not restored.
pub struct Shell {
    /// Switch requested by the startup argument or a key press; consumed at
    /// the top of the next frame.
    pending_switch: Option<&'static SampleEntry>,

    active: Option<ActiveSample>,
}

struct ActiveSample {
    name: &'static str,
    sample: Box<dyn Sample>,
}

impl Shell {
    /// Creates the shell, optionally preselecting a sample by name.
    ///
    /// An unknown name is ignored, matching navigation: the gallery starts
    /// with nothing active.
    pub fn new(initial: Option<&str>) -> Self {
        let pending_switch = initial.and_then(|name| {
            let entry = registry::find(name);
            if entry.is_none() {
                log::warn!("ignoring unknown sample '{name}'");
            }
            entry
        });

        Self {
            pending_switch,
            active: None,
        }
    }

    /// Name of the active sample, if any.
    pub fn active_name(&self) -> Option<&'static str> {
        self.active.as_ref().map(|a| a.name)
    }

    /// Requests a switch by name; unknown names are a no-op.
    pub fn request(&mut self, name: &str) {
        match registry::find(name) {
            Some(entry) => self.pending_switch = Some(entry),
            None => log::debug!("ignoring unknown sample '{name}'"),
        }
    }

    /// Tears down the active sample, if any. `cleanup` runs exactly once per
    /// activation because the slot is taken before it is called.
    fn teardown(&mut self) {
        if let Some(active) = self.active.take() {
            active.sample.cleanup();
            log::info!("stopped sample '{}'", active.name);
        }
    }

    /// Cleanup-before-setup switch. The old sample is gone before `setup`
    /// runs, so the two never hold GPU devices at the same time.
    fn switch_with<F>(&mut self, name: &'static str, setup: F)
    where
        F: FnOnce() -> Result<Box<dyn Sample>>,
    {
        self.teardown();

        match setup() {
            Ok(sample) => {
                log::info!("loaded sample '{name}'");
                self.active = Some(ActiveSample { name, sample });
            }
            Err(e) => {
                log::error!("failed to load sample '{name}': {e:#}");
            }
        }
    }

    fn apply_pending_switch(&mut self, window: &Arc<Window>) {
        let Some(entry) = self.pending_switch.take() else {
            return;
        };

        self.switch_with(entry.name, || (entry.setup)(window.clone()));
        window.set_title(&title_for(self.active_name()));
    }

    /// Runs the active sample's frame, if any. A failing sample is torn down
    /// on the spot; returns `true` when that happened so the caller can
    /// refresh anything naming the active sample.
    fn run_active_frame(&mut self, time: FrameTime) -> bool {
        let Some(active) = &mut self.active else {
            return false;
        };

        match active.sample.frame(time) {
            Ok(()) => false,
            Err(e) => {
                log::error!("sample '{}' failed: {e:#}", active.name);
                self.teardown();
                true
            }
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) -> AppControl {
        if event.state != ElementState::Pressed || event.repeat {
            return AppControl::Continue;
        }

        let PhysicalKey::Code(code) = event.physical_key else {
            return AppControl::Continue;
        };

        match code {
            KeyCode::Escape => return AppControl::Exit,
            _ => {
                if let Some(index) = digit_index(code)
                    && let Some(entry) = registry::SAMPLES.get(index)
                {
                    self.request(entry.name);
                }
            }
        }

        AppControl::Continue
    }
}

impl App for Shell {
    fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. } => return self.handle_key(event),

            WindowEvent::Resized(new_size) => {
                if let Some(active) = &mut self.active {
                    active.sample.resize(*new_size);
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(active) = &mut self.active {
                    active.sample.resize(window.inner_size());
                }
            }

            _ => {}
        }

        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        self.apply_pending_switch(ctx.window);

        if self.run_active_frame(ctx.time) {
            ctx.window.set_title(&title_for(self.active_name()));
        }

        AppControl::Continue
    }
}

/// Window title for the current selection; falls back to the bare
/// application name when nothing is active.
fn title_for(active: Option<&str>) -> String {
    match active {
        Some(name) => format!("sketchbook :: {name}"),
        None => "sketchbook".to_string(),
    }
}

/// Maps the 1..9 digit row to a registry index.
fn digit_index(code: KeyCode) -> Option<usize> {
    let index = match code {
        KeyCode::Digit1 => 0,
        KeyCode::Digit2 => 1,
        KeyCode::Digit3 => 2,
        KeyCode::Digit4 => 3,
        KeyCode::Digit5 => 4,
        KeyCode::Digit6 => 5,
        KeyCode::Digit7 => 6,
        KeyCode::Digit8 => 7,
        KeyCode::Digit9 => 8,
        _ => return None,
    };
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Instant;

    fn frame_time() -> FrameTime {
        FrameTime {
            dt: 0.016,
            elapsed: 0.5,
            now: Instant::now(),
            frame_index: 0,
        }
    }

    /// Records lifecycle events into a shared journal.
    struct MockSample {
        tag: &'static str,
        /// When set, every `frame` call fails.
        fail_frames: bool,
        journal: Rc<RefCell<Vec<String>>>,
    }

    impl Sample for MockSample {
        fn frame(&mut self, _time: FrameTime) -> Result<()> {
            self.journal.borrow_mut().push(format!("frame:{}", self.tag));
            if self.fail_frames {
                anyhow::bail!("device lost");
            }
            Ok(())
        }

        fn cleanup(self: Box<Self>) {
            self.journal.borrow_mut().push(format!("cleanup:{}", self.tag));
        }
    }

    fn mock(tag: &'static str, journal: &Rc<RefCell<Vec<String>>>) -> Box<dyn Sample> {
        Box::new(MockSample {
            tag,
            fail_frames: false,
            journal: journal.clone(),
        })
    }

    fn failing_mock(tag: &'static str, journal: &Rc<RefCell<Vec<String>>>) -> Box<dyn Sample> {
        Box::new(MockSample {
            tag,
            fail_frames: true,
            journal: journal.clone(),
        })
    }

    #[test]
    fn switching_tears_down_old_before_new_setup() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut shell = Shell::new(None);

        let j = journal.clone();
        shell.switch_with("a", move || Ok(mock("a", &j)));

        let j = journal.clone();
        shell.switch_with("b", move || {
            j.borrow_mut().push("setup:b".to_string());
            Ok(mock("b", &j))
        });

        assert_eq!(
            *journal.borrow(),
            vec!["cleanup:a".to_string(), "setup:b".to_string()]
        );
        assert_eq!(shell.active_name(), Some("b"));
    }

    #[test]
    fn selecting_same_sample_twice_cleans_up_once_per_activation() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut shell = Shell::new(None);

        let j = journal.clone();
        shell.switch_with("a", move || Ok(mock("a", &j)));
        let j = journal.clone();
        shell.switch_with("a", move || Ok(mock("a", &j)));

        // Exactly one cleanup so far (the first activation's), and exactly
        // one sample left to clean up.
        assert_eq!(*journal.borrow(), vec!["cleanup:a".to_string()]);
        assert_eq!(shell.active_name(), Some("a"));
    }

    #[test]
    fn failed_setup_leaves_nothing_active() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut shell = Shell::new(None);

        let j = journal.clone();
        shell.switch_with("a", move || Ok(mock("a", &j)));
        shell.switch_with("broken", || anyhow::bail!("no adapter"));

        // The previous sample is torn down and not restored.
        assert_eq!(*journal.borrow(), vec!["cleanup:a".to_string()]);
        assert_eq!(shell.active_name(), None);
    }

    #[test]
    fn unknown_request_is_a_no_op() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut shell = Shell::new(None);

        let j = journal.clone();
        shell.switch_with("a", move || Ok(mock("a", &j)));
        shell.request("no-such-sample");

        assert!(shell.pending_switch.is_none());
        assert_eq!(shell.active_name(), Some("a"));
        assert!(journal.borrow().is_empty());
    }

    #[test]
    fn unknown_initial_name_starts_with_nothing_pending() {
        let shell = Shell::new(Some("no-such-sample"));
        assert!(shell.pending_switch.is_none());
        assert_eq!(shell.active_name(), None);
    }

    #[test]
    fn known_initial_name_is_pending() {
        let shell = Shell::new(Some("hello-triangle"));
        assert_eq!(shell.pending_switch.map(|e| e.name), Some("hello-triangle"));
    }

    #[test]
    fn teardown_without_active_sample_is_a_no_op() {
        let mut shell = Shell::new(None);
        shell.teardown();
        assert_eq!(shell.active_name(), None);
    }

    #[test]
    fn healthy_frame_keeps_sample_active() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut shell = Shell::new(None);

        let j = journal.clone();
        shell.switch_with("a", move || Ok(mock("a", &j)));

        assert!(!shell.run_active_frame(frame_time()));
        assert_eq!(shell.active_name(), Some("a"));
        assert_eq!(*journal.borrow(), vec!["frame:a".to_string()]);
    }

    #[test]
    fn failing_frame_tears_down_and_reports_the_change() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut shell = Shell::new(None);

        let j = journal.clone();
        shell.switch_with("bad", move || Ok(failing_mock("bad", &j)));

        // The failure tears the sample down once, and the caller is told so
        // it can stop naming it.
        assert!(shell.run_active_frame(frame_time()));
        assert_eq!(shell.active_name(), None);
        assert_eq!(
            *journal.borrow(),
            vec!["frame:bad".to_string(), "cleanup:bad".to_string()]
        );

        // Nothing left to run or clean up afterwards.
        assert!(!shell.run_active_frame(frame_time()));
        assert_eq!(
            *journal.borrow(),
            vec!["frame:bad".to_string(), "cleanup:bad".to_string()]
        );
    }

    #[test]
    fn frame_without_active_sample_is_a_no_op() {
        let mut shell = Shell::new(None);
        assert!(!shell.run_active_frame(frame_time()));
    }

    #[test]
    fn title_names_the_active_sample_or_falls_back() {
        assert_eq!(title_for(Some("rotating-cube")), "sketchbook :: rotating-cube");
        assert_eq!(title_for(None), "sketchbook");
    }

    #[test]
    fn digit_row_maps_to_registry_order() {
        assert_eq!(digit_index(KeyCode::Digit1), Some(0));
        assert_eq!(digit_index(KeyCode::Digit9), Some(8));
        assert_eq!(digit_index(KeyCode::Digit0), None);
        assert_eq!(digit_index(KeyCode::KeyA), None);
    }
}
