use std::io::stderr;
use std::io::stdout;
use std::io::Stderr;
use std::io::Stdout;
use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

#[derive(Clone)]
pub struct Logger {
  output_lock: Arc<Mutex<LoggerState>>,
}

struct LoggerState {
  std_out: Stdout,
  std_err: Stderr,
}

impl Logger {
  pub fn new() -> Self {
    Logger {
      output_lock: Arc::new(Mutex::new(LoggerState {
        std_out: stdout(),
        std_err: stderr(),
      })),
    }
  }

  pub fn log(&self, text: &str) {
    let mut state = self.output_lock.lock();
    writeln!(state.std_out, "{}", text).unwrap();
    state.std_out.flush().unwrap();
  }

  pub fn log_stderr(&self, text: &str) {
    let mut state = self.output_lock.lock();
    writeln!(state.std_err, "{}", text).unwrap();
    state.std_err.flush().unwrap();
  }
}
