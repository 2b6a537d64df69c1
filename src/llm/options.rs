/// Per-call generation settings.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub stop_words: Option<Vec<String>>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_stop_words(mut self, stop_words: Vec<String>) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    /// Overlays `incoming` onto `self`; fields set in `incoming` win,
    /// stop words are concatenated.
    pub fn merge_options(&mut self, incoming: CallOptions) {
        self.temperature = incoming.temperature.or(self.temperature);
        self.max_tokens = incoming.max_tokens.or(self.max_tokens);
        self.stop_words = match (self.stop_words.take(), incoming.stop_words) {
            (Some(mut current), Some(incoming)) => {
                for word in incoming {
                    if !current.contains(&word) {
                        current.push(word);
                    }
                }
                Some(current)
            }
            (current, incoming) => incoming.or(current),
        };
    }
}
