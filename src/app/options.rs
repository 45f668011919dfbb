use std::{path::PathBuf, time::Duration};

use crate::submit::DEFAULT_ENDPOINT;

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub title: String,
    pub tick_rate: Duration,
    pub endpoint: String,
    pub output_dir: PathBuf,
    pub confirm_exit: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            title: "Line Protection Calculation Sheet".to_string(),
            tick_rate: Duration::from_millis(250),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            output_dir: PathBuf::from("."),
            confirm_exit: true,
        }
    }
}

impl UiOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }
}
