use std::time::Duration;

pub struct ExecutorOptions {
    pub max_iterations: Option<usize>,
    pub max_execution_time: Option<Duration>,
    pub max_consecutive_fails: Option<usize>,
    pub break_if_tool_error: bool,
}

impl ExecutorOptions {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    pub fn with_max_execution_time(mut self, max_execution_time: Duration) -> Self {
        self.max_execution_time = Some(max_execution_time);
        self
    }

    pub fn with_break_if_tool_error(mut self, break_if_tool_error: bool) -> Self {
        self.break_if_tool_error = break_if_tool_error;
        self
    }
}

impl Default for ExecutorOptions {
    fn default() -> Self {
        Self {
            max_iterations: Some(15),
            max_execution_time: None,
            max_consecutive_fails: Some(3),
            break_if_tool_error: true,
        }
    }
}
