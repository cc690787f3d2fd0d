use serde::{Deserialize, Serialize};

#[cfg(test)]
pub(crate) mod fake;
pub mod markers;
pub mod perf;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Bounding box in pointer coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn to_css(self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", channel(self.r), channel(self.g), channel(self.b))
        } else {
            format!(
                "rgba({}, {}, {}, {:.2})",
                channel(self.r),
                channel(self.g),
                channel(self.b),
                self.a.clamp(0.0, 1.0)
            )
        }
    }
}

/// What the host rendering layer exposes for its inline image elements.
pub trait RenderHost {
    /// Handle for a rendered image. Handles are compared with `==` to decide
    /// whether two events concern the same element.
    type Image: Clone + PartialEq + std::fmt::Debug;

    /// Post-layout bounding rectangle, in the same space as pointer events.
    fn bounding_rect(&self, image: &Self::Image) -> Rect;

    /// Current rendered width, not the natural width of the file.
    fn rendered_width(&self, image: &Self::Image) -> f32;

    /// Raw `src` of the element, if it has one.
    fn source(&self, image: &Self::Image) -> Option<String>;

    /// Sets an inline width and leaves height automatic.
    fn set_live_width(&mut self, image: &Self::Image, width: f32);

    /// `None` restores the element's default cursor.
    fn set_cursor(&mut self, image: &Self::Image, cursor: Option<&str>);

    fn set_image_class(&mut self, image: &Self::Image, class: &str, enabled: bool);

    fn set_body_class(&mut self, class: &str, enabled: bool);

    fn install_stylesheet(&mut self, id: &str, css: &str);

    fn remove_stylesheet(&mut self, id: &str);
}
