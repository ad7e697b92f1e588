use crate::utils::error::{FileTransformError, Result};
use crate::utils::validation::validate_path;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

const INPUT_PROMPT: &str = "\nEnter the name of the input file (e.g., 'my_story.txt'): ";
const OUTPUT_PROMPT: &str = "Enter the name for the output file (e.g., 'modified_story.txt'): ";

/// Asks for file paths on an interactive terminal.
///
/// Each question is repeated until a usable answer arrives, at most
/// `max_attempts` times. End of input stops the loop immediately.
pub struct PathPrompter<R: BufRead, W: Write> {
    input: R,
    output: W,
    max_attempts: usize,
}

impl<R: BufRead, W: Write> PathPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn prompt_input_path(&mut self) -> Result<PathBuf> {
        for attempt in 1..=self.max_attempts {
            let answer = self.ask(INPUT_PROMPT)?;
            if !answer.is_empty() && Path::new(&answer).exists() {
                return Ok(PathBuf::from(answer));
            }

            tracing::debug!("Input path '{}' rejected (attempt {})", answer, attempt);
            self.say(&format!(
                "Warning: '{}' does not exist. Please make sure the file is in the same directory.",
                answer
            ))?;
        }

        Err(FileTransformError::PromptAttemptsExhausted {
            attempts: self.max_attempts,
        })
    }

    pub fn prompt_output_path(&mut self) -> Result<PathBuf> {
        for attempt in 1..=self.max_attempts {
            let answer = self.ask(OUTPUT_PROMPT)?;
            match validate_path("output_path", &answer) {
                Ok(()) => return Ok(PathBuf::from(answer)),
                Err(e) => {
                    tracing::debug!("Output path rejected (attempt {}): {}", attempt, e);
                    self.say(&format!("Warning: {}", e))?;
                }
            }
        }

        Err(FileTransformError::PromptAttemptsExhausted {
            attempts: self.max_attempts,
        })
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question).map_err(terminal_error)?;
        self.output.flush().map_err(terminal_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(terminal_error)?;
        if read == 0 {
            return Err(FileTransformError::PromptInputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message).map_err(terminal_error)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

fn terminal_error(source: std::io::Error) -> FileTransformError {
    FileTransformError::IoError {
        path: PathBuf::from("<terminal>"),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn prompter(answers: &str) -> PathPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        PathPrompter::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_existing_input_path_accepted_first_time() {
        let file = NamedTempFile::new().unwrap();
        let answers = format!("{}\n", file.path().display());
        let mut prompter = prompter(&answers);

        let path = prompter.prompt_input_path().unwrap();

        assert_eq!(path, file.path());
        let transcript = String::from_utf8(prompter.into_output()).unwrap();
        assert!(!transcript.contains("Warning"));
    }

    #[test]
    fn test_missing_input_path_reprompts() {
        let file = NamedTempFile::new().unwrap();
        let answers = format!("does-not-exist.txt\n\n{}\n", file.path().display());
        let mut prompter = prompter(&answers);

        let path = prompter.prompt_input_path().unwrap();

        assert_eq!(path, file.path());
        let transcript = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(transcript.matches("Enter the name of the input file").count(), 3);
        assert!(transcript.contains("Warning: 'does-not-exist.txt' does not exist."));
    }

    #[test]
    fn test_attempts_are_bounded() {
        let mut prompter = prompter("a.txt\nb.txt\nc.txt\n").with_max_attempts(2);

        let err = prompter.prompt_input_path().unwrap_err();

        assert!(matches!(
            err,
            FileTransformError::PromptAttemptsExhausted { attempts: 2 }
        ));
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let mut prompter = prompter("missing.txt\n");

        let err = prompter.prompt_input_path().unwrap_err();

        assert!(matches!(err, FileTransformError::PromptInputClosed));
    }

    #[test]
    fn test_output_path_trims_and_rejects_blank() {
        let mut prompter = prompter("   \n  result.txt  \n");

        let path = prompter.prompt_output_path().unwrap();

        assert_eq!(path, PathBuf::from("result.txt"));
        let transcript = String::from_utf8(prompter.into_output()).unwrap();
        assert!(transcript.contains("Path cannot be empty"));
    }
}
