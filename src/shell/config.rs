/// Settings for an interactive or scripted [`Shell`](super::Shell) session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Prompt written before each interactive line.
    pub prompt: String,

    /// Suppress the banner, prompts and farewell (for scripting).
    pub quiet: bool,
}

pub const DEFAULT_PROMPT: &str = "IMS> ";

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            quiet: false,
        }
    }
}
