//! Mode-aware terminal output.
//!
//! All check output goes through [`Output`]:
//! - Human: diagnostics, warnings and the final success line
//! - Verbose: Human plus a `→` line per step and indented details
//! - Quiet: only the failing diagnostic
//!
//! Messages are written verbatim. Color is only added when writing to a
//! terminal, so captured output is plain text. A custom writer can be
//! injected for test capture.

use colored::Colorize;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Human,
    Verbose,
    /// Only errors are emitted
    Quiet,
}

impl OutputMode {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (_, true) => Self::Quiet,
            (true, false) => Self::Verbose,
            (false, false) => Self::Human,
        }
    }
}

#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    is_tty: bool,
}

impl Output {
    /// Create a new Output writing to stdout
    pub fn new(mode: OutputMode) -> Self {
        let is_tty = atty::is(atty::Stream::Stdout);
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            is_tty,
        }
    }

    /// Create an Output with a custom writer (for testing)
    pub fn with_writer(mode: OutputMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(writer)),
            is_tty: false,
        }
    }

    /// "→ {msg}", verbose only
    pub fn step(&self, msg: &str) {
        if self.mode != OutputMode::Verbose {
            return;
        }
        let prefix = if self.is_tty {
            "→".cyan().to_string()
        } else {
            "→".to_string()
        };
        self.write_line(&format!("{} {}", prefix, msg));
    }

    /// Indented subordinate info, verbose only
    pub fn detail(&self, msg: &str) {
        if self.mode != OutputMode::Verbose {
            return;
        }
        for line in msg.lines() {
            self.write_line(&format!("  {}", line));
        }
    }

    /// Non-fatal problem
    pub fn warn(&self, msg: &str) {
        if self.mode == OutputMode::Quiet {
            return;
        }
        if self.is_tty {
            self.write_line(&msg.yellow().to_string());
        } else {
            self.write_line(msg);
        }
    }

    /// The failing check's diagnostic. Printed in every mode.
    pub fn error(&self, msg: &str) {
        if self.is_tty {
            self.write_line(&msg.red().to_string());
        } else {
            self.write_line(msg);
        }
    }

    pub fn success(&self, msg: &str) {
        if self.mode == OutputMode::Quiet {
            return;
        }
        if self.is_tty {
            self.write_line(&msg.green().to_string());
        } else {
            self.write_line(msg);
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }

    /// Get the current output mode
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn is_tty(&self) -> bool {
        self.is_tty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.buffer.lock().unwrap().flush()
        }
    }

    fn emit_all(mode: OutputMode) -> String {
        let (writer, buffer) = TestWriter::new();
        let output = Output::with_writer(mode, Box::new(writer));

        output.step("Starting");
        output.detail("Detail");
        output.warn("Warning");
        output.error("Error");
        output.success("Done");

        let data = buffer.lock().unwrap();
        String::from_utf8(data.clone()).unwrap()
    }

    #[test]
    fn test_human_mode_output() {
        assert_eq!(emit_all(OutputMode::Human), "Warning\nError\nDone\n");
    }

    #[test]
    fn test_verbose_mode_output() {
        assert_eq!(
            emit_all(OutputMode::Verbose),
            "→ Starting\n  Detail\nWarning\nError\nDone\n"
        );
    }

    #[test]
    fn test_quiet_mode_only_errors() {
        assert_eq!(emit_all(OutputMode::Quiet), "Error\n");
    }

    #[test]
    fn test_detail_indents_every_line() {
        let (writer, buffer) = TestWriter::new();
        let output = Output::with_writer(OutputMode::Verbose, Box::new(writer));

        output.detail("cc -c client.c\ncc -o client client.o\n");

        let data = buffer.lock().unwrap();
        let result = String::from_utf8(data.clone()).unwrap();
        assert_eq!(result, "  cc -c client.c\n  cc -o client client.o\n");
    }

    #[test]
    fn test_mode_from_flags() {
        assert_eq!(OutputMode::from_flags(false, false), OutputMode::Human);
        assert_eq!(OutputMode::from_flags(true, false), OutputMode::Verbose);
        assert_eq!(OutputMode::from_flags(false, true), OutputMode::Quiet);
    }

    #[test]
    fn test_custom_writer_is_not_tty() {
        let (writer, _buffer) = TestWriter::new();
        let output = Output::with_writer(OutputMode::Quiet, Box::new(writer));
        assert!(!output.is_tty());
        assert_eq!(output.mode(), OutputMode::Quiet);
    }
}
