use crate::domain::ports::Console;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn log(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Collects output in memory. Clones share the same buffer, so a handle kept
/// by the caller sees everything the runner wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    buffer: Arc<Mutex<String>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> String {
        self.buffer
            .lock()
            .map(|buffer| buffer.clone())
            .unwrap_or_default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.output().lines().map(str::to_string).collect()
    }

    pub fn contains_line(&self, expected: &str) -> bool {
        self.output().lines().any(|line| line == expected)
    }

    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }
}

impl Console for MemoryConsole {
    fn log(&mut self, line: &str) {
        // 多執行緒共用同一緩衝區時確保整行寫入
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push_str(line);
            buffer.push('\n');
        }
    }
}
