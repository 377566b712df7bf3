//! Output abstraction
//!
//! Ship notifications are written through `OutputWriter` so tests can
//! capture them instead of reading stdout.

use std::io::{self, Write};

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal implementation writing to stdout
///
/// A failed write (closed pipe, full disk) is kept rather than panicking;
/// later writes are skipped and `finish` hands the error back.
#[derive(Debug, Default)]
pub struct TerminalIO {
    error: Option<io::Error>,
}

impl TerminalIO {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flush stdout, or return the first write error seen
    pub fn finish(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => io::stdout().flush(),
        }
    }
}

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(io::stdout().lock(), "{}", message) {
            self.error = Some(err);
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils {
    use super::*;

    /// Mock output writer for testing
    #[derive(Default)]
    pub struct MockOutput {
        pub messages: Vec<String>,
    }

    impl MockOutput {
        pub fn new() -> Self {
            Self::default()
        }

        /// Everything written so far, concatenated
        pub fn text(&self) -> String {
            self.messages.concat()
        }
    }

    impl OutputWriter for MockOutput {
        fn writeln(&mut self, message: &str) {
            self.messages.push(format!("{}\n", message));
        }
    }
}
