//! Console API
//!
//! Forwards console.log and friends to the matching `tracing` level
//! and keeps the lines in a history buffer the host can inspect, the
//! way a devtools pane would.

/// Console severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Log,
    Info,
    Warn,
    Error,
    Debug,
}

/// Console shim
#[derive(Debug, Default)]
pub struct Console {
    entries: Vec<(ConsoleLevel, String)>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, args: &[&str]) {
        self.write(ConsoleLevel::Log, args);
    }

    pub fn info(&mut self, args: &[&str]) {
        self.write(ConsoleLevel::Info, args);
    }

    pub fn warn(&mut self, args: &[&str]) {
        self.write(ConsoleLevel::Warn, args);
    }

    pub fn error(&mut self, args: &[&str]) {
        self.write(ConsoleLevel::Error, args);
    }

    pub fn debug(&mut self, args: &[&str]) {
        self.write(ConsoleLevel::Debug, args);
    }

    /// Recorded lines, oldest first
    pub fn entries(&self) -> &[(ConsoleLevel, String)] {
        &self.entries
    }

    /// Drop the recorded history
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn write(&mut self, level: ConsoleLevel, args: &[&str]) {
        let line = args.join(" ");
        match level {
            ConsoleLevel::Error => tracing::error!("[console] {line}"),
            ConsoleLevel::Warn => tracing::warn!("[console] {line}"),
            ConsoleLevel::Debug => tracing::debug!("[console] {line}"),
            ConsoleLevel::Log | ConsoleLevel::Info => tracing::info!("[console] {line}"),
        }
        self.entries.push((level, line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_records_history() {
        let mut console = Console::new();
        console.log(&["hello", "world"]);
        console.error(&["boom"]);

        assert_eq!(
            console.entries(),
            &[
                (ConsoleLevel::Log, "hello world".to_string()),
                (ConsoleLevel::Error, "boom".to_string()),
            ]
        );

        console.clear();
        assert!(console.entries().is_empty());
    }

    #[test]
    fn test_empty_args() {
        let mut console = Console::new();
        console.info(&[]);
        assert_eq!(console.entries(), &[(ConsoleLevel::Info, String::new())]);
    }
}
