//! Annotation through an external process
//!
//! The child process is started once and kept alive for the whole run.
//! Each line is sent as one JSON object per request line:
//!
//! ```text
//! {"text": "She painted it red."}
//! ```
//!
//! and answered with one JSON line holding the sentences, each a list of
//! tokens:
//!
//! ```text
//! [[{"text": "She", "tag": "PRP", "head": 1}, {"text": "painted", "tag": "VBD", "head": 1}, ...]]
//! ```

use super::{Annotator, Sentence, Token};
use crate::error::{ExtractError, Result};
use serde::Serialize;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

#[derive(Serialize)]
struct Request<'a> {
    text: &'a str,
}

/// Annotator backed by a long-lived child process
pub struct CommandAnnotator {
    program: String,
    child: Child,
    stdin: BufWriter<ChildStdin>,
    stdout: BufReader<ChildStdout>,
    response: String,
}

impl std::fmt::Debug for CommandAnnotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandAnnotator")
            .field("program", &self.program)
            .field("pid", &self.child.id())
            .finish()
    }
}

impl CommandAnnotator {
    /// Start `program` with `args`
    pub fn spawn<S: AsRef<str>>(program: &str, args: &[S]) -> Result<Self> {
        let mut child = Command::new(program)
            .args(args.iter().map(AsRef::as_ref))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| ExtractError::Annotator(format!("failed to start '{program}': {e}")))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| ExtractError::Annotator("child stdin unavailable".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| ExtractError::Annotator("child stdout unavailable".to_string()))?;

        log::debug!("Started annotator '{}' (pid {})", program, child.id());

        Ok(Self {
            program: program.to_string(),
            child,
            stdin: BufWriter::new(stdin),
            stdout: BufReader::new(stdout),
            response: String::new(),
        })
    }

    fn send(&mut self, line: &str) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.stdin, &Request { text: line })?;
        self.stdin.write_all(b"\n")?;
        self.stdin.flush()
    }
}

impl Annotator for CommandAnnotator {
    fn annotate(&mut self, line: &str) -> Result<Vec<Sentence>> {
        self.send(line).map_err(|e| {
            ExtractError::Annotator(format!("failed to write to '{}': {e}", self.program))
        })?;

        self.response.clear();
        let read = self.stdout.read_line(&mut self.response).map_err(|e| {
            ExtractError::Annotator(format!("failed to read from '{}': {e}", self.program))
        })?;
        if read == 0 {
            return Err(ExtractError::Annotator(format!(
                "'{}' closed its output",
                self.program
            )));
        }

        parse_response(&self.response)
    }
}

impl Drop for CommandAnnotator {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Decode one response line into validated sentences
pub(crate) fn parse_response(response: &str) -> Result<Vec<Sentence>> {
    let raw: Vec<Vec<Token>> = serde_json::from_str(response.trim_end())
        .map_err(|e| ExtractError::protocol(format!("malformed response: {e}")))?;

    raw.into_iter().map(Sentence::new).collect()
}
