use cliclack::ProgressBar;
use std::fmt::Display;
use tracing::debug;

/// Spinner shown while the project is generated.
///
/// Dropping the guard without calling [`finish`](Self::finish) or
/// [`fail`](Self::fail) stops the spinner with an error marker and shows
/// the cursor again, so an early return or a panic never leaves the
/// terminal with a hidden cursor.
pub struct ProgressGuard {
    spinner: ProgressBar,
    settled: bool,
}

impl ProgressGuard {
    pub fn start(message: impl Display) -> Self {
        let spinner = cliclack::spinner();
        spinner.start(message);
        Self {
            spinner,
            settled: false,
        }
    }

    pub fn finish(mut self, message: impl Display) {
        self.spinner.stop(message);
        self.settled = true;
    }

    pub fn fail(mut self, message: impl Display) {
        self.spinner.error(message);
        self.settled = true;
    }
}

impl Drop for ProgressGuard {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        self.spinner.error("Interrupted");
        if let Err(e) = console::Term::stderr().show_cursor() {
            debug!(error = %e, "could not restore cursor");
        }
    }
}
