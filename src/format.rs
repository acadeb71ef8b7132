//! Pipes generated Go source through an external formatter (`gofmt` by default).

use crate::config::FormatConfig;
use crate::error::FormatError;
use std::io::{self, ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoFormatter {
    command: Option<(String, Vec<String>)>,
}

impl Default for GoFormatter {
    fn default() -> Self {
        Self::new(&FormatConfig::default())
    }
}

impl GoFormatter {
    pub fn new(config: &FormatConfig) -> Self {
        if config.enabled {
            Self::command(&config.command, config.args.clone())
        } else {
            Self::disabled()
        }
    }

    pub fn command(program: &str, args: Vec<String>) -> Self {
        Self {
            command: Some((program.to_string(), args)),
        }
    }

    pub fn disabled() -> Self {
        Self { command: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.command.is_some()
    }

    /// Feed `source` on stdin and return what the formatter prints on stdout.
    pub fn format(&self, source: &str) -> Result<String, FormatError> {
        let Some((program, args)) = &self.command else {
            return Err(FormatError::Disabled);
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| FormatError::Spawn {
                command: program.clone(),
                source,
            })?;

        // stdin is fed from its own thread; a formatter that streams its output
        // blocks on a full stdout pipe until we start reading
        let writer = child.stdin.take().map(|mut stdin| {
            let source = source.to_owned();
            thread::spawn(move || match stdin.write_all(source.as_bytes()) {
                // the exit status says more than the closed pipe does
                Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
                other => other,
            })
        });

        let output = child.wait_with_output().map_err(|source| FormatError::Io {
            command: program.clone(),
            source,
        })?;

        if let Some(writer) = writer {
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            written.map_err(|source| FormatError::Io {
                command: program.clone(),
                source,
            })?;
        }

        if !output.status.success() {
            return Err(FormatError::Rejected {
                command: program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_formatter() {
        let formatter = GoFormatter::new(&FormatConfig {
            enabled: false,
            ..Default::default()
        });
        assert!(!formatter.is_enabled());
        assert!(matches!(formatter.format("package main"), Err(FormatError::Disabled)));
    }

    #[test]
    fn test_missing_command() {
        let formatter = GoFormatter::command("definitely-not-a-go-formatter-binary", vec![]);
        let err = formatter.format("package main").unwrap_err();
        assert!(matches!(err, FormatError::Spawn { .. }), "{err}");
    }

    #[cfg(unix)]
    #[test]
    fn test_identity_command() {
        let formatter = GoFormatter::command("cat", vec![]);
        let out = formatter.format("package main\n\nfunc main() {}\n").unwrap();
        assert_eq!(out, "package main\n\nfunc main() {}\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_streaming_command_large_input() {
        // larger than a pipe buffer, so `cat` writes before it has read everything
        let source = "x".repeat(1 << 20);
        let out = GoFormatter::command("cat", vec![]).format(&source).unwrap();
        assert_eq!(out.len(), source.len());
        assert_eq!(out, source);
    }

    #[cfg(unix)]
    #[test]
    fn test_command_ignoring_stdin() {
        let formatter = GoFormatter::command("sh", vec!["-c".into(), "echo formatted".into()]);
        let out = formatter.format(&"y".repeat(1 << 20)).unwrap();
        assert_eq!(out, "formatted\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_rejecting_command() {
        let formatter = GoFormatter::command(
            "sh",
            vec![
                "-c".into(),
                "cat > /dev/null; echo 'expected declaration' >&2; exit 2".into(),
            ],
        );
        match formatter.format("not go") {
            Err(FormatError::Rejected { stderr, status, .. }) => {
                assert_eq!(stderr, "expected declaration");
                assert_eq!(status.code(), Some(2));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
