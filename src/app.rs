use std::time::{Duration, Instant};

use crate::{
    editor::{TextEdit, Workspace, reference::update_image_size},
    render::{RenderHost, markers::StyleMarkers},
    settings::schema::Settings,
    window::{
        input::{InputEvent, PointerEvent},
        throttle::CoalescingThrottle,
        tracker::ResizeTracker,
    },
};

/// Corner-drag image resizing wired to a host.
///
/// The host forwards pointer events, arms a timer for `next_deadline` and
/// calls `poll_deferred` when it fires. Dropping the resizer releases every
/// marker it installed, even mid-drag.
pub struct ImageResizer<H>
where
    H: RenderHost + Workspace,
{
    host: H,
    settings: Settings,
    tracker: ResizeTracker<H::Image>,
    throttle: CoalescingThrottle<PointerEvent<H::Image>>,
    markers: StyleMarkers,
}

impl<H> ImageResizer<H>
where
    H: RenderHost + Workspace,
{
    pub fn new(host: H, settings: Settings) -> Self {
        Self {
            host,
            tracker: ResizeTracker::new(&settings.resize),
            throttle: CoalescingThrottle::new(Duration::from_millis(settings.resize.throttle_interval_ms)),
            markers: StyleMarkers::default(),
            settings,
        }
    }

    pub fn load(&mut self) {
        if self.markers.is_installed() {
            return;
        }
        self.markers = StyleMarkers::install(&mut self.host, &self.settings.appearance);
        log::info!("image resizer loaded");
    }

    /// Removes all style markers and forgets any drag or hover in progress.
    pub fn unload(&mut self) {
        let was_loaded = self.markers.is_installed();
        self.throttle.cancel();
        self.tracker.release(&mut self.host);
        self.markers.release(&mut self.host);
        if was_loaded {
            log::info!("image resizer unloaded");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.markers.is_installed()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn apply_settings(&mut self, settings: Settings) {
        self.tracker.configure(&settings.resize);
        self.throttle
            .set_interval(Duration::from_millis(settings.resize.throttle_interval_ms));
        let appearance_changed = settings.appearance != self.settings.appearance;
        self.settings = settings;

        if appearance_changed && self.markers.is_installed() {
            self.markers = StyleMarkers::install(&mut self.host, &self.settings.appearance);
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn tracker(&self) -> &ResizeTracker<H::Image> {
        &self.tracker
    }

    /// Returns `true` when the host should suppress the event's default.
    pub fn handle_input(&mut self, event: InputEvent<H::Image>, now: Instant) -> bool {
        match event {
            InputEvent::MouseMove(ev) => self.on_pointer_move(ev, now),
            InputEvent::MouseDown(ev) => self.on_pointer_down(&ev),
            InputEvent::MouseUp(ev) => {
                let dragging = self.tracker.is_dragging();
                let _ = self.on_pointer_up(&ev);
                dragging
            }
        }
    }

    pub fn on_pointer_move(&mut self, event: PointerEvent<H::Image>, now: Instant) -> bool {
        if !self.is_loaded() {
            return false;
        }
        match self.throttle.trigger(event, now) {
            Some(ev) => self.tracker.on_pointer_move(&mut self.host, &ev),
            None => self.tracker.is_dragging(),
        }
    }

    /// Runs the parked pointer move once its deadline has passed.
    pub fn poll_deferred(&mut self, now: Instant) {
        if let Some(ev) = self.throttle.poll(now) {
            self.tracker.on_pointer_move(&mut self.host, &ev);
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.throttle.next_deadline()
    }

    pub fn on_pointer_down(&mut self, event: &PointerEvent<H::Image>) -> bool {
        if !self.is_loaded() {
            return false;
        }
        self.tracker.on_pointer_down(&mut self.host, event)
    }

    /// Ends a drag and writes the new width into the active document.
    /// Returns the edit that was applied, if any.
    pub fn on_pointer_up(&mut self, event: &PointerEvent<H::Image>) -> Option<TextEdit> {
        crate::profile_scope!("app.pointer_up");

        let parked = self.throttle.take_pending();
        if let Some(ev) = parked.filter(|_| self.tracker.is_dragging()) {
            self.tracker.on_pointer_move(&mut self.host, &ev);
        }
        let outcome = self.tracker.on_pointer_up(&mut self.host, event)?;
        let source = self.host.source(&outcome.image);

        match update_image_size(self.host.active_editor(), source.as_deref(), outcome.width) {
            Ok(edit) => Some(edit),
            Err(err) => {
                log::debug!("image width {} not persisted: {err}", outcome.width);
                None
            }
        }
    }
}

impl<H> Drop for ImageResizer<H>
where
    H: RenderHost + Workspace,
{
    fn drop(&mut self) {
        self.unload();
    }
}
