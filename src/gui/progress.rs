// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn item_failed(&mut self, _source: &str, _msg: &str) {
        self.failed += 1;
    }
    fn item_done(&mut self, source: &str) {
        self.done += 1;
        self.set_status(format!("Read {} ({}/{})", source, self.done, self.total));
    }
    fn finish(&mut self) {
        match (self.total, self.failed) {
            (0, _) => self.set_status("Nothing to load"),
            (_, 0) => self.set_status(format!("Load complete ({}/{})", self.done, self.total)),
            (_, f) => self.set_status(format!(
                "Load complete ({}/{}), {f} warning(s)",
                self.done, self.total
            )),
        }
    }
}
