use ropey::Rope;

pub mod reference;

/// Line/column pair; `ch` counts chars from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

/// One contiguous replacement. Offsets are byte offsets into the text the
/// edit was planned against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

/// The slice of the host's text editor the resize flow needs. Undo history
/// is the host's business.
pub trait HostEditor {
    fn text(&self) -> String;

    fn offset_to_position(&self, offset: usize) -> Position;

    fn replace_range(&mut self, text: &str, from: Position, to: Position);
}

pub trait Workspace {
    /// Editor of the focused markdown document, if any.
    fn active_editor(&mut self) -> Option<&mut dyn HostEditor>;
}

/// Applies `edit` through the editor's position-based API.
pub fn apply_edit(editor: &mut dyn HostEditor, edit: &TextEdit) {
    let from = editor.offset_to_position(edit.start);
    let to = editor.offset_to_position(edit.end);
    editor.replace_range(edit.replacement.as_str(), from, to);
}

/// Rope-backed editor for hosts without their own buffer, and for tests.
#[derive(Debug, Clone, Default)]
pub struct RopeEditor {
    rope: Rope,
}

impl RopeEditor {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    fn position_to_char(&self, pos: Position) -> usize {
        let lines = self.rope.len_lines();
        let line = pos.line.min(lines.saturating_sub(1));
        let start = self.rope.line_to_char(line);
        let line_len = self.rope.line(line).len_chars();
        start + pos.ch.min(line_len)
    }
}

impl HostEditor for RopeEditor {
    fn text(&self) -> String {
        self.rope.to_string()
    }

    fn offset_to_position(&self, offset: usize) -> Position {
        let byte = offset.min(self.rope.len_bytes());
        let char_idx = self.rope.byte_to_char(byte);
        let line = self.rope.char_to_line(char_idx);
        Position {
            line,
            ch: char_idx - self.rope.line_to_char(line),
        }
    }

    fn replace_range(&mut self, text: &str, from: Position, to: Position) {
        let (from, to) = if from <= to { (from, to) } else { (to, from) };
        let start = self.position_to_char(from);
        let end = self.position_to_char(to).max(start);
        self.rope.remove(start..end);
        self.rope.insert(start, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_map_to_line_and_char_column() {
        let editor = RopeEditor::new("first\nsécond line\n![[a.png]]");
        assert_eq!(editor.offset_to_position(0), Position { line: 0, ch: 0 });
        assert_eq!(editor.offset_to_position(6), Position { line: 1, ch: 0 });
        // "sé" is three bytes but two chars
        assert_eq!(editor.offset_to_position(9), Position { line: 1, ch: 2 });
        assert_eq!(editor.offset_to_position(19), Position { line: 2, ch: 0 });
    }

    #[test]
    fn apply_edit_touches_only_the_span() {
        let mut editor = RopeEditor::new("héllo\n![[a.png]] tail");
        let text = editor.text();
        let start = text.find("![[").expect("start");
        let end = start + "![[a.png]]".len();

        apply_edit(
            &mut editor,
            &TextEdit {
                start,
                end,
                replacement: "![[a.png|120]]".to_string(),
            },
        );

        assert_eq!(editor.text(), "héllo\n![[a.png|120]] tail");
    }
}
