#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt_suffix: String,
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt_suffix: "> ".to_string(),
            history_file: Some(".versus_history".to_string()),
        }
    }
}
