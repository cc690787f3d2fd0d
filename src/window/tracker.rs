use crate::{
    render::{
        Rect,
        RenderHost,
        markers::{ACTIVE_CLASS, RESIZE_CURSOR, RESIZING_CLASS},
    },
    settings::schema::ResizeSettings,
    window::input::PointerEvent,
};

/// Drag baseline, alive only between pointer down and pointer up.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState<I> {
    pub image: I,
    pub anchor_x: f32,
    pub start_width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeOutcome<I> {
    pub image: I,
    pub width: u32,
}

pub fn is_in_corner_zone(rect: Rect, x: f32, y: f32, corner_size: f32) -> bool {
    let dx = x - rect.right();
    let dy = y - rect.bottom();
    (-corner_size..=0.0).contains(&dx) && (-corner_size..=0.0).contains(&dy)
}

pub fn live_width(start_width: f32, delta: f32, min_width: f32) -> f32 {
    (start_width + delta).max(min_width)
}

/// Hover and drag state machine for corner resizing.
///
/// Handlers return `true` when the host should suppress the event's default
/// behavior.
#[derive(Debug)]
pub struct ResizeTracker<I> {
    corner_size: f32,
    min_width: f32,
    drag: Option<DragState<I>>,
    hovered: Option<I>,
}

impl<I: Clone + PartialEq> ResizeTracker<I> {
    pub fn new(settings: &ResizeSettings) -> Self {
        Self {
            corner_size: settings.corner_size,
            min_width: settings.width_floor(),
            drag: None,
            hovered: None,
        }
    }

    /// Takes effect on the next event; an ongoing drag keeps its baseline.
    pub fn configure(&mut self, settings: &ResizeSettings) {
        self.corner_size = settings.corner_size;
        self.min_width = settings.width_floor();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag(&self) -> Option<&DragState<I>> {
        self.drag.as_ref()
    }

    pub fn hovered(&self) -> Option<&I> {
        self.hovered.as_ref()
    }

    pub fn is_in_corner_zone<H>(&self, host: &H, image: &I, x: f32, y: f32) -> bool
    where
        H: RenderHost<Image = I>,
    {
        is_in_corner_zone(host.bounding_rect(image), x, y, self.corner_size)
    }

    pub fn on_pointer_move<H>(&mut self, host: &mut H, event: &PointerEvent<I>) -> bool
    where
        H: RenderHost<Image = I>,
    {
        if let Some(drag) = &self.drag {
            let width = live_width(drag.start_width, event.position.x - drag.anchor_x, self.min_width);
            host.set_live_width(&drag.image, width);
            return true;
        }

        let target = event.target.image();
        if let Some(prev) = self.hovered.take_if(|prev| Some(&*prev) != target) {
            host.set_cursor(&prev, None);
        }

        let Some(image) = target else {
            return false;
        };

        let in_corner = self.is_in_corner_zone(host, image, event.position.x, event.position.y);
        let shown = self.hovered.is_some();
        if in_corner && !shown {
            host.set_cursor(image, Some(RESIZE_CURSOR));
            self.hovered = Some(image.clone());
        } else if !in_corner && shown {
            host.set_cursor(image, None);
            self.hovered = None;
        }
        false
    }

    pub fn on_pointer_down<H>(&mut self, host: &mut H, event: &PointerEvent<I>) -> bool
    where
        H: RenderHost<Image = I>,
    {
        let Some(image) = event.target.image() else {
            return false;
        };
        if !self.is_in_corner_zone(host, image, event.position.x, event.position.y) {
            return false;
        }

        if let Some(stale) = self.drag.take() {
            host.set_image_class(&stale.image, ACTIVE_CLASS, false);
        }

        let start_width = host.rendered_width(image);
        host.set_image_class(image, ACTIVE_CLASS, true);
        host.set_body_class(RESIZING_CLASS, true);
        log::debug!("resize drag started at x={} width={start_width}", event.position.x);

        self.drag = Some(DragState {
            image: image.clone(),
            anchor_x: event.position.x,
            start_width,
        });
        true
    }

    /// Ends the drag and reports the settled width. Drag state is gone by the
    /// time this returns, whatever the caller does with the outcome.
    pub fn on_pointer_up<H>(&mut self, host: &mut H, _event: &PointerEvent<I>) -> Option<ResizeOutcome<I>>
    where
        H: RenderHost<Image = I>,
    {
        let drag = self.drag.take()?;
        let width = host.rendered_width(&drag.image).round().max(0.0) as u32;

        host.set_image_class(&drag.image, ACTIVE_CLASS, false);
        host.set_body_class(RESIZING_CLASS, false);
        log::debug!("resize drag finished at width={width}");

        Some(ResizeOutcome {
            image: drag.image,
            width,
        })
    }

    /// Clears every marker this tracker may have set, in any state.
    pub fn release<H>(&mut self, host: &mut H)
    where
        H: RenderHost<Image = I>,
    {
        if let Some(drag) = self.drag.take() {
            host.set_image_class(&drag.image, ACTIVE_CLASS, false);
        }
        if let Some(prev) = self.hovered.take() {
            host.set_cursor(&prev, None);
        }
        host.set_body_class(RESIZING_CLASS, false);
    }
}
