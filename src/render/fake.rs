use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::Rc,
};

use crate::{
    editor::{HostEditor, RopeEditor, Workspace},
    render::{Rect, RenderHost},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

#[derive(Debug, Clone, Default)]
pub struct FakeImage {
    pub rect: Rect,
    pub src: Option<String>,
    pub live_width: Option<f32>,
    pub cursor: Option<String>,
    pub classes: HashSet<String>,
    pub cursor_writes: usize,
}

/// In-memory stand-in for a rendering layer. Setting a live width also moves
/// the bounding box, as a browser layout would.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub images: HashMap<ImageId, FakeImage>,
    pub body_classes: HashSet<String>,
    pub stylesheets: HashMap<String, String>,
    pub editor: Option<RopeEditor>,
}

impl FakeHost {
    pub fn with_image(mut self, id: ImageId, rect: Rect, src: &str) -> Self {
        self.images.insert(
            id,
            FakeImage {
                rect,
                src: Some(src.to_string()),
                ..FakeImage::default()
            },
        );
        self
    }

    pub fn with_document(mut self, text: &str) -> Self {
        self.editor = Some(RopeEditor::new(text));
        self
    }

    pub fn document(&self) -> Option<String> {
        self.editor.as_ref().map(|e| e.text())
    }

    pub fn image(&self, id: ImageId) -> &FakeImage {
        &self.images[&id]
    }
}

impl RenderHost for FakeHost {
    type Image = ImageId;

    fn bounding_rect(&self, image: &ImageId) -> Rect {
        self.images.get(image).map(|i| i.rect).unwrap_or_default()
    }

    fn rendered_width(&self, image: &ImageId) -> f32 {
        self.images.get(image).map(|i| i.rect.width).unwrap_or_default()
    }

    fn source(&self, image: &ImageId) -> Option<String> {
        self.images.get(image).and_then(|i| i.src.clone())
    }

    fn set_live_width(&mut self, image: &ImageId, width: f32) {
        if let Some(img) = self.images.get_mut(image) {
            img.live_width = Some(width);
            img.rect.width = width;
        }
    }

    fn set_cursor(&mut self, image: &ImageId, cursor: Option<&str>) {
        if let Some(img) = self.images.get_mut(image) {
            img.cursor = cursor.map(str::to_string);
            img.cursor_writes += 1;
        }
    }

    fn set_image_class(&mut self, image: &ImageId, class: &str, enabled: bool) {
        if let Some(img) = self.images.get_mut(image) {
            if enabled {
                img.classes.insert(class.to_string());
            } else {
                img.classes.remove(class);
            }
        }
    }

    fn set_body_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.body_classes.insert(class.to_string());
        } else {
            self.body_classes.remove(class);
        }
    }

    fn install_stylesheet(&mut self, id: &str, css: &str) {
        self.stylesheets.insert(id.to_string(), css.to_string());
    }

    fn remove_stylesheet(&mut self, id: &str) {
        self.stylesheets.remove(id);
    }
}

impl Workspace for FakeHost {
    fn active_editor(&mut self) -> Option<&mut dyn HostEditor> {
        self.editor.as_mut().map(|e| e as &mut dyn HostEditor)
    }
}

/// Host whose state outlives the component that borrows it, so tests can
/// inspect what remains after the component is dropped.
#[derive(Debug, Clone)]
pub struct SharedHost(pub Rc<RefCell<FakeHost>>);

impl RenderHost for SharedHost {
    type Image = ImageId;

    fn bounding_rect(&self, image: &ImageId) -> Rect {
        self.0.borrow().bounding_rect(image)
    }

    fn rendered_width(&self, image: &ImageId) -> f32 {
        self.0.borrow().rendered_width(image)
    }

    fn source(&self, image: &ImageId) -> Option<String> {
        self.0.borrow().source(image)
    }

    fn set_live_width(&mut self, image: &ImageId, width: f32) {
        self.0.borrow_mut().set_live_width(image, width);
    }

    fn set_cursor(&mut self, image: &ImageId, cursor: Option<&str>) {
        self.0.borrow_mut().set_cursor(image, cursor);
    }

    fn set_image_class(&mut self, image: &ImageId, class: &str, enabled: bool) {
        self.0.borrow_mut().set_image_class(image, class, enabled);
    }

    fn set_body_class(&mut self, class: &str, enabled: bool) {
        self.0.borrow_mut().set_body_class(class, enabled);
    }

    fn install_stylesheet(&mut self, id: &str, css: &str) {
        self.0.borrow_mut().install_stylesheet(id, css);
    }

    fn remove_stylesheet(&mut self, id: &str) {
        self.0.borrow_mut().remove_stylesheet(id);
    }
}

impl Workspace for SharedHost {
    fn active_editor(&mut self) -> Option<&mut dyn HostEditor> {
        None
    }
}
