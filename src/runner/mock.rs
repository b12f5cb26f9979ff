//! Test-double runner that records commands and returns preset responses

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;

use super::{CapturedOutput, CommandRunner};

/// A command seen by [`MockRunner`], with the working directory at the time
#[derive(Debug, Clone)]
pub struct Recorded {
    pub argv: Vec<String>,
    pub cwd: Option<PathBuf>,
}

/// Runner that never spawns anything
///
/// Responses are consumed in call order. When none are left a call succeeds
/// with exit code 0 and empty output.
pub struct MockRunner {
    responses: RefCell<VecDeque<Result<CapturedOutput, String>>>,
    calls: RefCell<Vec<Recorded>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(VecDeque::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Responds with these exit codes and empty output
    pub fn with_codes(codes: &[i32]) -> Self {
        Self::with_responses(
            codes
                .iter()
                .map(|&code| Ok(CapturedOutput::empty(code)))
                .collect(),
        )
    }

    pub fn with_responses(responses: Vec<Result<CapturedOutput, String>>) -> Self {
        let runner = Self::new();
        runner.responses.borrow_mut().extend(responses);
        runner
    }

    /// Fails every call as if the binary could not be launched
    pub fn failing(message: &str) -> Self {
        Self::with_responses(vec![Err(message.to_string()); 8])
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.borrow().clone()
    }

    pub fn commands(&self) -> Vec<Vec<String>> {
        self.calls.borrow().iter().map(|c| c.argv.clone()).collect()
    }

    fn next(&self, argv: &[String]) -> io::Result<CapturedOutput> {
        self.calls.borrow_mut().push(Recorded {
            argv: argv.to_vec(),
            cwd: std::env::current_dir().ok(),
        });
        match self.responses.borrow_mut().pop_front() {
            Some(Ok(out)) => Ok(out),
            Some(Err(message)) => Err(io::Error::new(io::ErrorKind::NotFound, message)),
            None => Ok(CapturedOutput::empty(0)),
        }
    }
}

impl CommandRunner for MockRunner {
    fn capture(&self, argv: &[String]) -> io::Result<CapturedOutput> {
        self.next(argv)
    }

    fn stream(&self, argv: &[String]) -> io::Result<i32> {
        self.next(argv).map(|out| out.code)
    }
}
