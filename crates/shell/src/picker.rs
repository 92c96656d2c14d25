use dialoguer::Input;

use tars_app::ports::{DirectoryPicker, PortError};

/// Terminal stand-in for the native directory dialog: a free-form prompt.
/// An empty answer maps to cancellation, never to an error.
pub struct PromptPicker;

impl DirectoryPicker for PromptPicker {
    fn pick_directory(&self) -> Result<Option<String>, PortError> {
        let answer: String = Input::new()
            .with_prompt("Project directory")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PortError::Picker(e.to_string()))?;

        let answer = answer.trim().to_string();
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(answer))
        }
    }
}
