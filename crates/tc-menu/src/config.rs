//! Configuration for the menu loop.

/// Presentation settings for [`crate::Menu`] and [`crate::run_cycle`].
#[derive(Debug, Clone)]
pub struct MenuConfig {
    /// Wait for Enter between cycles.
    pub pause: bool,
    /// Clear the screen around each selector read.
    pub clear_screen: bool,
    /// Printed before reading the selector.
    pub prompt: String,
    /// Printed when the loop ends.
    pub farewell: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            pause: true,
            clear_screen: true,
            prompt: "Enter choice number: ".to_string(),
            farewell: "Thank you for reviewing...".to_string(),
        }
    }
}

impl MenuConfig {
    /// Enable or disable the between-cycle pause.
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    /// Enable or disable screen clearing.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Set the selector prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the farewell message.
    pub fn with_farewell(mut self, farewell: impl Into<String>) -> Self {
        self.farewell = farewell.into();
        self
    }

    /// A configuration that never pauses or clears, for scripted input.
    pub fn plain() -> Self {
        Self::default().with_pause(false).with_clear_screen(false)
    }
}
