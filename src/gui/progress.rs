// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

/// Progress sink for the GUI: status line + collected error notifications.
/// Errors are gathered here and rendered by the app after the batch returns.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    errors: Vec<String>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, errors: Vec::new(), done: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        *self.status.lock().unwrap() = text;
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Processing {} URL(s)…", total));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg.to_string());
    }
    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
    fn item_done(&mut self, url: &str) {
        self.done += 1;
        self.set_status(format!("Generated schema for {} ({}/{})", url, self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status("Generation complete");
        } else {
            self.set_status(format!("Generation complete ({}/{})", self.done, self.total));
        }
    }
}
