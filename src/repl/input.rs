//! Line input for the chat loop using rustyline
//!
//! Line editing and in-memory input history. Conversation turns are
//! kept elsewhere; nothing here persists across restarts.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Input handler managing the readline interface
pub struct InputHandler {
    editor: DefaultEditor,
    prompt: String,
}

impl InputHandler {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(InputHandler {
            editor,
            prompt: "you> ".to_string(),
        })
    }

    /// Set a custom prompt
    pub fn set_prompt(&mut self, prompt: String) {
        self.prompt = prompt;
    }

    /// Read one line of input.
    ///
    /// Returns:
    /// - `Ok(Some(line))` for input (trimmed)
    /// - `Ok(None)` on EOF (Ctrl-D) or interrupt (Ctrl-C); both end
    ///   the session
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }

                Ok(Some(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("readline error: {}", err)),
        }
    }
}
