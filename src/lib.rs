//! Corner-drag resizing for inline images in a markdown editor.
//!
//! The host reports pointer events and exposes its rendered images through
//! [`render::RenderHost`] and its active document through
//! [`editor::Workspace`]. When a drag ends, the first `![[...]]` or `![...](...)`
//! reference to the image is rewritten with the new width.

pub mod app;
pub mod editor;
pub mod error;
pub mod render;
pub mod settings;
pub mod window;

pub use app::ImageResizer;
pub use editor::{HostEditor, Position, RopeEditor, TextEdit, Workspace};
pub use error::{RewriteError, SettingsError};
pub use render::{Rect, RenderHost};
pub use settings::schema::Settings;
pub use window::input::{HitTarget, InputEvent, PointerEvent};
