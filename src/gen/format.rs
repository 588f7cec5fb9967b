use crate::error::GenError;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

/// Run `source` through an external formatter such as `gofmt`, which reads
/// the code on stdin and prints it reformatted on stdout.
///
/// A formatter that exits non-zero rejected the code; its stderr becomes the
/// error message. `Ok(None)` means the formatter could not be found, and the
/// caller decides what to do with the unformatted code.
pub fn format_source(command: &[String], source: &str, path: &Path) -> Result<Option<String>, GenError> {
    let Some((program, args)) = command.split_first() else {
        return Ok(None);
    };

    let format_err = |message: String| GenError::Format {
        path: path.to_path_buf(),
        message,
    };

    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(format_err(format!("failed to run {}: {}", program, e))),
    };

    if let Some(mut stdin) = child.stdin.take() {
        // gofmt reads all input before printing, so writing first cannot block on stdout
        stdin
            .write_all(source.as_bytes())
            .map_err(|e| format_err(format!("failed to pipe code into {}: {}", program, e)))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| format_err(format!("failed to wait for {}: {}", program, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = match stderr.trim() {
            "" => format!("{} exited with {}", program, output.status),
            text => text.to_string(),
        };
        return Err(format_err(message));
    }

    String::from_utf8(output.stdout)
        .map(Some)
        .map_err(|e| format_err(format!("{} printed invalid UTF-8: {}", program, e)))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["sh".to_string(), "-c".to_string(), script.to_string()]
    }

    #[test]
    fn test_formatter_output_is_returned() {
        let formatted = format_source(&sh("tr 'a' 'b'"), "package a\n", Path::new("a_gen.go")).unwrap();
        assert_eq!(formatted.as_deref(), Some("pbckbge b\n"));
    }

    #[test]
    fn test_rejected_code_is_an_error() {
        let err = format_source(
            &sh("cat >/dev/null; echo 'unknown escape sequence' >&2; exit 2"),
            "\tV_P_validate= \"regexp=^\\d+$\"\n",
            Path::new("v_gen.go"),
        )
        .unwrap_err();

        match err {
            GenError::Format { path, message } => {
                assert_eq!(path, Path::new("v_gen.go"));
                assert_eq!(message, "unknown escape sequence");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_silent_failure_reports_status() {
        let err = format_source(&sh("cat >/dev/null; exit 3"), "x", Path::new("x_gen.go")).unwrap_err();
        assert!(err.to_string().contains("exited with"));
    }

    #[test]
    fn test_missing_formatter() {
        let command = vec!["tgconst-formatter-that-does-not-exist".to_string()];
        assert_eq!(format_source(&command, "x", Path::new("x_gen.go")).unwrap(), None);
        assert_eq!(format_source(&[], "x", Path::new("x_gen.go")).unwrap(), None);
    }
}
