//! Editor session
//!
//! `CodeEditor` owns the buffer and wires the pieces together: every edit
//! re-tags tabs in the changed range, user edits then rehighlight the
//! buffer (now, or after the update delay) and notify the listener, and a
//! typed newline is first expanded by the auto-indent engine.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::buffer::Buffer;
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::indent;
use crate::syntax::{builtin, highlight, LanguageDefinition, Theme};
use crate::tabs;

/// Callback receiving the ASCII-filtered text after a change
///
/// It cannot reach back into the editor.
pub type TextChangedListener = Box<dyn FnMut(&str)>;

/// What the session is doing when a change reaches the edit pipeline
///
/// The listener only ever sees a `&str` and holds no handle to the
/// editor, so it cannot start an edit while it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A user edit: auto-indent, mark dirty, rehighlight, notify
    Idle,
    /// Text replaced by the session itself: bookkeeping only
    ApplyingProgrammaticEdit,
}

/// When highlighting and notification follow a user edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Inline with the edit
    Immediate,
    /// Once the update delay has passed without further edits
    Debounced,
}

/// Keep `\t`, `\n` and printable ASCII, drop everything else
pub fn remove_non_ascii(text: &str) -> String {
    text.chars()
        .filter(|&c| matches!(c, '\t' | '\n' | '\x20'..='\x7E'))
        .collect()
}

/// Strip spaces and tabs from the end of every line
pub fn strip_trailing_whitespace(text: &str) -> String {
    text.split('\n')
        .map(|line| line.trim_end_matches([' ', '\t']))
        .collect::<Vec<_>>()
        .join("\n")
}

/// An editing session over one buffer with one active language
pub struct CodeEditor {
    buffer: Buffer,
    language: Arc<LanguageDefinition>,
    theme: Theme,
    /// Selection as (anchor, cursor)
    selection: (usize, usize),
    /// 1-based error line, 0 for none
    error_line: usize,
    /// Text changed since the last load
    dirty: bool,
    update_mode: UpdateMode,
    update_delay: Duration,
    debouncer: Debouncer,
    /// Tab width as configured, in characters
    tab_width_chars: usize,
    /// Tab width in cells, 0 for native tabs
    tab_width: usize,
    listener: Option<TextChangedListener>,
}

impl CodeEditor {
    /// Create an empty editor
    pub fn new(language: Arc<LanguageDefinition>, theme: Theme) -> Self {
        Self {
            buffer: Buffer::new(),
            language,
            theme,
            selection: (0, 0),
            error_line: 0,
            dirty: false,
            update_mode: UpdateMode::Immediate,
            update_delay: Duration::from_millis(1000),
            debouncer: Debouncer::new(),
            tab_width_chars: 0,
            tab_width: 0,
            listener: None,
        }
    }

    /// Create an empty Lua editor with the One Dark theme
    pub fn lua() -> Result<Self> {
        Ok(Self::new(Arc::new(builtin::lua_language()?), Theme::one_dark()))
    }

    pub fn set_on_text_changed(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Delay used by [`UpdateMode::Debounced`]
    pub fn set_update_delay(&mut self, ms: u64) {
        self.update_delay = Duration::from_millis(ms);
    }

    pub fn set_update_mode(&mut self, mode: UpdateMode) {
        self.update_mode = mode;
        if mode == UpdateMode::Immediate {
            self.debouncer.cancel();
        }
    }

    pub fn update_mode(&self) -> UpdateMode {
        self.update_mode
    }

    /// Set the tab width in characters; 0 restores native tabs
    ///
    /// Every tab in the buffer is re-tagged with the new width.
    pub fn set_tab_width(&mut self, characters: usize) {
        if self.tab_width_chars == characters {
            return;
        }
        self.tab_width_chars = characters;
        self.tab_width = tabs::tab_cell_width(characters);

        self.buffer.clear_fixed_width_spans();
        let markers = tabs::tag_tabs(self.buffer.text(), 0, self.buffer.len(), self.tab_width);
        self.buffer.add_fixed_width_spans(markers);
    }

    /// Tab width in cells
    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn language(&self) -> &Arc<LanguageDefinition> {
        &self.language
    }

    /// Switch language and rehighlight
    pub fn set_language(&mut self, language: Arc<LanguageDefinition>) {
        self.language = language;
        self.update_highlighting();
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Switch theme and rehighlight
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.update_highlighting();
    }

    pub fn has_error_line(&self) -> bool {
        self.error_line > 0
    }

    /// Mark a 1-based line as erroneous from the next highlight pass on
    pub fn set_error_line(&mut self, line: usize) {
        self.error_line = line;
    }

    pub fn error_line(&self) -> usize {
        self.error_line
    }

    pub fn is_modified(&self) -> bool {
        self.dirty
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Selection as (start, end) with start <= end
    pub fn selection(&self) -> (usize, usize) {
        let (anchor, cursor) = self.selection;
        (anchor.min(cursor), anchor.max(cursor))
    }

    pub fn cursor(&self) -> usize {
        self.selection.1
    }

    pub fn set_selection(&mut self, anchor: usize, cursor: usize) {
        let len = self.buffer.len();
        self.selection = (anchor.min(len), cursor.min(len));
    }

    pub fn set_cursor(&mut self, pos: usize) {
        self.set_selection(pos, pos);
    }

    /// Load new text, dropping anything outside printable ASCII
    ///
    /// Resets the error line and the modified flag, highlights, and
    /// notifies the listener once.
    pub fn set_text(&mut self, raw: &str) {
        self.debouncer.cancel();
        self.error_line = 0;
        self.dirty = false;

        let src = remove_non_ascii(raw);
        let len = self.buffer.len();
        self.apply_edit(0, len, &src, Phase::ApplyingProgrammaticEdit);
        self.set_cursor(0);
        self.highlight_now();

        self.notify_listener(&src);
    }

    /// Buffer text with trailing whitespace removed from every line
    pub fn get_clean_text(&self) -> String {
        strip_trailing_whitespace(self.buffer.text())
    }

    /// Replace the selection with a tab
    pub fn insert_tab(&mut self) {
        self.insert("\t");
    }

    /// Type `text` over the selection
    pub fn insert(&mut self, text: &str) {
        let (start, end) = self.selection();
        self.replace(start, end, text);
    }

    /// Delete the selection, or the character before the cursor
    pub fn delete_backward(&mut self) {
        let (start, end) = self.selection();
        if start != end {
            self.replace(start, end, "");
            return;
        }
        let before = self.buffer.text().get(..start).unwrap_or("");
        if let Some(c) = before.chars().next_back() {
            self.replace(start - c.len_utf8(), start, "");
        }
    }

    /// A user edit replacing `start..end` with `text`
    ///
    /// The range may be given in either order. The cursor ends up after
    /// the inserted text.
    pub fn replace(&mut self, start: usize, end: usize, text: &str) {
        let (start, end) = (start.min(end), start.max(end));
        let (_, inserted_end) = self.apply_edit(start, end, text, Phase::Idle);
        self.set_cursor(inserted_end);
    }

    /// Re-run highlighting without touching the modified flag
    pub fn update_highlighting(&mut self) {
        self.highlight_now();
    }

    /// Drive the deferred update; call from the host's event loop
    ///
    /// Returns true when a pending update ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.debouncer.poll(now) {
            return false;
        }
        self.run_update();
        true
    }

    /// When the pending deferred update is due, if one is pending
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    fn apply_edit(&mut self, start: usize, end: usize, text: &str, phase: Phase) -> (usize, usize) {
        let insertion = match phase {
            Phase::Idle if text == "\n" => indent::compute_insertion(self.buffer.text(), start, end),
            _ => text.to_string(),
        };

        self.debouncer.cancel();
        let (changed_start, changed_end) = self.buffer.replace(start, end, &insertion);
        let markers = tabs::tag_tabs(self.buffer.text(), changed_start, changed_end, self.tab_width);
        self.buffer.add_fixed_width_spans(markers);

        match phase {
            Phase::ApplyingProgrammaticEdit => {
                trace!("{:?}: edit at {}..{} not forwarded", phase, changed_start, changed_end);
            }
            Phase::Idle => {
                self.dirty = true;
                match self.update_mode {
                    UpdateMode::Immediate => self.run_update(),
                    UpdateMode::Debounced => {
                        self.debouncer.schedule(Instant::now(), self.update_delay);
                    }
                }
            }
        }

        (changed_start, changed_end)
    }

    fn run_update(&mut self) {
        let cleaned = remove_non_ascii(self.buffer.text());
        self.notify_listener(&cleaned);
        self.highlight_now();
    }

    fn notify_listener(&mut self, text: &str) {
        if let Some(listener) = self.listener.as_mut() {
            trace!("notifying listener: {} bytes", text.len());
            listener(text);
        }
    }

    fn highlight_now(&mut self) {
        let spans = highlight(self.buffer.text(), &self.language, &self.theme, self.error_line);
        debug!("applying {} spans", spans.len());
        self.buffer.set_color_spans(spans);
    }
}

impl fmt::Debug for CodeEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeEditor")
            .field("language", &self.language.name)
            .field("theme", &self.theme.name)
            .field("len", &self.buffer.len())
            .field("selection", &self.selection)
            .field("error_line", &self.error_line)
            .field("dirty", &self.dirty)
            .field("update_mode", &self.update_mode)
            .finish()
    }
}
