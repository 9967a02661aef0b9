// idcheck-core/src/infrastructure/adapters/command.rs
//
// External OCR / language-model services reached through a local program.
// Failures never escape: they are logged and degrade to "no text" or
// "no fields", which the verification rules treat as absent data.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, error, instrument, warn};

use crate::domain::extraction::build_prompt;
use crate::domain::project::CommandSpec;
use crate::domain::record::FieldMapping;
use crate::infrastructure::adapters::llm_response::parse_llm_response;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::{EntityExtractor, TextExtractor};

/// Runs `spec` with `extra_args` appended, optionally feeding `stdin`, and
/// returns its stdout.
pub async fn run_command(
    spec: &CommandSpec,
    extra_args: &[&Path],
    stdin: Option<&str>,
    working_dir: &Path,
) -> Result<String, InfrastructureError> {
    let failed = |reason: String| InfrastructureError::CommandFailed {
        program: spec.program.clone(),
        reason,
    };

    let mut command = Command::new(&spec.program);
    command
        .args(&spec.args)
        .args(extra_args)
        .current_dir(working_dir)
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = command.spawn().map_err(|e| failed(e.to_string()))?;

    // Feed stdin while draining stdout so a streaming child never blocks on
    // a full pipe. Dropping the pipe at the end of the block closes stdin.
    let pipe = child.stdin.take();
    let feed = async move {
        if let (Some(input), Some(mut pipe)) = (stdin, pipe) {
            // A program that answers without reading its input closes the pipe early.
            match pipe.write_all(input.as_bytes()).await {
                Err(e) if e.kind() != ErrorKind::BrokenPipe => return Err(e),
                _ => {}
            }
        }
        Ok(())
    };

    let (fed, output) = tokio::join!(feed, child.wait_with_output());
    let output = output.map_err(|e| failed(e.to_string()))?;
    fed.map_err(|e| failed(e.to_string()))?;

    if !output.status.success() {
        return Err(failed(format!(
            "{}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// OCR through `program args.. <absolute image path>`.
#[derive(Debug, Clone)]
pub struct CommandTextExtractor {
    spec: CommandSpec,
    working_dir: PathBuf,
}

impl CommandTextExtractor {
    pub fn new(spec: CommandSpec, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            spec,
            working_dir: working_dir.into(),
        }
    }
}

#[async_trait]
impl TextExtractor for CommandTextExtractor {
    #[instrument(skip(self), fields(program = %self.spec.program))]
    async fn extract_text(&self, image: &Path) -> Option<String> {
        // The command runs in `working_dir`; hand it a path that survives the chdir.
        let image = std::path::absolute(image).unwrap_or_else(|_| image.to_path_buf());

        match run_command(&self.spec, &[image.as_path()], None, &self.working_dir).await {
            Ok(stdout) => {
                let text = stdout.trim().to_string();
                if text.is_empty() {
                    warn!(image = ?image, "No text extracted");
                }
                Some(text)
            }
            Err(e) => {
                error!(image = ?image, error = %e, "OCR error");
                None
            }
        }
    }
}

/// Entity extraction through a program that reads the prompt on stdin and
/// prints a JSON object.
#[derive(Debug, Clone)]
pub struct CommandEntityExtractor {
    spec: CommandSpec,
    working_dir: PathBuf,
}

impl CommandEntityExtractor {
    pub fn new(spec: CommandSpec, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            spec,
            working_dir: working_dir.into(),
        }
    }
}

#[async_trait]
impl EntityExtractor for CommandEntityExtractor {
    #[instrument(skip(self, text), fields(program = %self.spec.program, text.len = text.len()))]
    async fn extract_entities(&self, text: &str, doc_type: &str) -> FieldMapping {
        let prompt = build_prompt(text, doc_type);

        let raw = match run_command(&self.spec, &[], Some(&prompt), &self.working_dir).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(doc_type, error = %e, "LLM extraction error");
                return FieldMapping::new();
            }
        };
        debug!(doc_type, raw = %raw, "Raw LLM response");

        match parse_llm_response(&raw) {
            Ok(fields) => {
                if fields.is_empty() {
                    warn!(doc_type, "No fields in LLM response");
                }
                fields
            }
            Err(e) => {
                error!(doc_type, error = %e, raw = %raw, "Failed to parse LLM response");
                FieldMapping::new()
            }
        }
    }
}
