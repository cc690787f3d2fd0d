use crate::{render::RenderHost, settings::schema::AppearanceSettings};

pub const STYLESHEET_ID: &str = "image-resizer-styles";
pub const ACTIVE_CLASS: &str = "image-resizer-active";
pub const RESIZING_CLASS: &str = "image-resizing";
pub const RESIZE_CURSOR: &str = "nwse-resize";

pub fn stylesheet(appearance: &AppearanceSettings) -> String {
    format!(
        r#".{ACTIVE_CLASS} {{
    outline: {width}px solid {color} !important;
    outline-offset: {offset}px;
}}
body.{RESIZING_CLASS} {{
    cursor: {RESIZE_CURSOR} !important;
    user-select: none !important;
}}
body.{RESIZING_CLASS} * {{
    cursor: {RESIZE_CURSOR} !important;
}}
"#,
        width = appearance.outline_width,
        color = appearance.outline_color.to_css(),
        offset = appearance.outline_offset,
    )
}

/// Process-wide style state: the injected stylesheet and the body-level
/// resizing class.
///
/// `release` is idempotent and clears the body class whether or not a drag is
/// in progress, so it is safe on every teardown path.
#[derive(Debug, Default)]
pub struct StyleMarkers {
    installed: bool,
}

impl StyleMarkers {
    pub fn install<H: RenderHost>(host: &mut H, appearance: &AppearanceSettings) -> Self {
        host.install_stylesheet(STYLESHEET_ID, stylesheet(appearance).as_str());
        log::debug!("installed stylesheet {STYLESHEET_ID}");
        Self { installed: true }
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    pub fn release<H: RenderHost>(&mut self, host: &mut H) {
        host.set_body_class(RESIZING_CLASS, false);
        if self.installed {
            host.remove_stylesheet(STYLESHEET_ID);
            self.installed = false;
            log::debug!("removed stylesheet {STYLESHEET_ID}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fake::FakeHost;

    #[test]
    fn stylesheet_carries_outline_and_cursor_rules() {
        let css = stylesheet(&AppearanceSettings::default());
        assert!(css.contains(".image-resizer-active"));
        assert!(css.contains("outline: 2px solid #4285f4 !important;"));
        assert!(css.contains("body.image-resizing *"));
        assert!(css.contains("user-select: none"));
    }

    #[test]
    fn release_is_idempotent_and_clears_body_marker() {
        let mut host = FakeHost::default();
        let mut markers = StyleMarkers::install(&mut host, &AppearanceSettings::default());
        assert!(host.stylesheets.contains_key(STYLESHEET_ID));

        host.set_body_class(RESIZING_CLASS, true);
        markers.release(&mut host);
        markers.release(&mut host);

        assert!(!markers.is_installed());
        assert!(host.stylesheets.is_empty());
        assert!(!host.body_classes.contains(RESIZING_CLASS));
    }
}
