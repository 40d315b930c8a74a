use reedline::{
    DefaultPrompt, DefaultPromptSegment, Emacs, FileBackedHistory, Reedline,
    default_emacs_keybindings,
};
use tracing::warn;

use crate::highlighter::Highlighter;

const HISTORY_FILE: &str = ".tally_history";
const HISTORY_CAPACITY: usize = 1000;

pub fn setup_reedline(allow_whitespace: bool) -> (Reedline, DefaultPrompt) {
    let edit_mode = Box::new(Emacs::new(default_emacs_keybindings()));

    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter::new(allow_whitespace)))
        .with_edit_mode(edit_mode);

    // History is best-effort; the REPL works without a home directory.
    if let Some(path) = dirs::home_dir().map(|home| home.join(HISTORY_FILE)) {
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
            Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
            Err(e) => warn!("History disabled: {}", e),
        }
    }

    let prompt = DefaultPrompt::new(DefaultPromptSegment::Empty, DefaultPromptSegment::Empty);

    (line_editor, prompt)
}
