//! Speech output through an external text-to-speech program.
//!
//! The default is macOS `say -v Victoria <text>`; any program taking the text
//! as its last argument works (`espeak`, `spd-say`, ...). The call blocks
//! until the program exits. Its exit status and output are ignored; only a
//! failure to start it, a timeout or a cancellation is reported.

use hal_application::{SpeechError, SpeechOutputPort};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How to invoke the speech program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechCommand {
    pub program: String,
    pub voice_flag: String,
    pub voice: Option<String>,
}

impl SpeechCommand {
    /// macOS `say` with the Victoria voice.
    pub fn say() -> Self {
        Self {
            program: "say".to_string(),
            voice_flag: "-v".to_string(),
            voice: Some("Victoria".to_string()),
        }
    }

    /// Full argument list for speaking `text`.
    pub fn args(&self, text: &str) -> Vec<String> {
        let mut args = Vec::with_capacity(3);
        if let Some(voice) = &self.voice {
            if !self.voice_flag.is_empty() {
                args.push(self.voice_flag.clone());
            }
            args.push(voice.clone());
        }
        args.push(text.to_string());
        args
    }

    fn build(&self, text: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args(text))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // Linux: stop talking if the agent dies mid-sentence.
        #[cfg(target_os = "linux")]
        {
            use std::os::unix::process::CommandExt;
            unsafe {
                cmd.pre_exec(|| {
                    libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM);
                    Ok(())
                });
            }
        }

        cmd
    }
}

/// [`SpeechOutputPort`] backed by an external program.
pub struct ProcessSpeechOutput {
    command: SpeechCommand,
    timeout: Duration,
    cancel: CancellationToken,
}

impl ProcessSpeechOutput {
    pub fn new(command: SpeechCommand, timeout: Duration) -> Self {
        if which::which(&command.program).is_err() {
            warn!(
                "Speech program `{}` not found in PATH; replies will not be spoken",
                command.program
            );
        }
        Self {
            command,
            timeout,
            cancel: CancellationToken::new(),
        }
    }

    /// Abort in-flight speech when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn command(&self) -> &SpeechCommand {
        &self.command
    }
}

impl SpeechOutputPort for ProcessSpeechOutput {
    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        if self.cancel.is_cancelled() {
            return Err(SpeechError::Cancelled);
        }

        debug!("Speaking via {}: {}", self.command.program, text);
        let child = self
            .command
            .build(text)
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                program: self.command.program.clone(),
                source,
            })?;

        let status = wait_with_timeout(child, self.timeout, &self.cancel)?;
        trace!("Speech program exited with {}", status);
        Ok(())
    }
}

/// Wait for a child process, killing it on timeout or cancellation.
fn wait_with_timeout(
    mut child: Child,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Result<ExitStatus, SpeechError> {
    let start = Instant::now();

    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) => {
                let error = if cancel.is_cancelled() {
                    Some(SpeechError::Cancelled)
                } else if start.elapsed() > timeout {
                    Some(SpeechError::Timeout(timeout))
                } else {
                    None
                };

                if let Some(error) = error {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(error);
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(e) => return Err(SpeechError::Wait(e)),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> SpeechCommand {
        // `sh -c <script> <text>`: the spoken text becomes $0
        SpeechCommand {
            program: "sh".to_string(),
            voice_flag: "-c".to_string(),
            voice: Some(script.to_string()),
        }
    }

    #[test]
    fn test_args_with_voice() {
        assert_eq!(
            SpeechCommand::say().args("Hello! This is hal."),
            vec!["-v", "Victoria", "Hello! This is hal."]
        );
    }

    #[test]
    fn test_args_without_voice() {
        let command = SpeechCommand {
            program: "espeak".to_string(),
            voice_flag: "-v".to_string(),
            voice: None,
        };
        assert_eq!(command.args("hi"), vec!["hi"]);
    }

    #[test]
    fn test_nonzero_exit_is_ignored() {
        let output = ProcessSpeechOutput::new(sh("exit 3"), Duration::from_secs(5));
        assert!(output.speak("hello").is_ok());
    }

    #[test]
    fn test_text_is_passed_to_program() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("spoken.txt");
        let script = format!("printf '%s' \"$0\" > '{}'", out.display());
        let output = ProcessSpeechOutput::new(sh(&script), Duration::from_secs(5));

        output.speak("I'm afraid I can't do that.").unwrap();
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "I'm afraid I can't do that."
        );
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let command = SpeechCommand {
            program: "/nonexistent/speech-program".to_string(),
            voice_flag: String::new(),
            voice: None,
        };
        let output = ProcessSpeechOutput::new(command, Duration::from_secs(1));
        assert!(matches!(
            output.speak("hello"),
            Err(SpeechError::Spawn { .. })
        ));
    }

    #[test]
    fn test_slow_program_times_out() {
        let output = ProcessSpeechOutput::new(sh("sleep 5"), Duration::from_millis(200));
        let start = Instant::now();
        assert!(matches!(output.speak("x"), Err(SpeechError::Timeout(_))));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();
        let output = ProcessSpeechOutput::new(sh("exit 0"), Duration::from_secs(5))
            .with_cancellation(token);
        assert!(matches!(output.speak("x"), Err(SpeechError::Cancelled)));
    }

    #[test]
    fn test_cancelled_while_speaking() {
        let token = CancellationToken::new();
        let output = ProcessSpeechOutput::new(sh("sleep 5"), Duration::from_secs(10))
            .with_cancellation(token.clone());

        let canceller = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(100));
            token.cancel();
        });
        assert!(matches!(output.speak("x"), Err(SpeechError::Cancelled)));
        canceller.join().unwrap();
    }
}
