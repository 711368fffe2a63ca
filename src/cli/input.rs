//! Input file discovery and output directory resolution.
use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::lib::{
    errors::InputError,
    fs::{list_files_with, WalkOptions},
    paths::resolve_user_dir,
};

pub const INPUT_DIR_PROMPT: &str = "Enter input directory path";
pub const OUTPUT_DIR_PROMPT: &str = "Enter output directory path";
pub const EXIT_PROMPT: &str = "Press enter to exit";

/// How the process was invoked, decided from the raw argument count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationMode {
    /// Arguments were given (command line or files dropped onto the binary).
    Cli,
    /// Started without arguments; directories are asked for on stdin.
    Interactive,
}

impl InvocationMode {
    /// `raw_arg_count` includes the program name, as in `std::env::args_os()`.
    pub fn from_raw_arg_count(raw_arg_count: usize) -> Self {
        if raw_arg_count >= 2 {
            InvocationMode::Cli
        } else {
            InvocationMode::Interactive
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            InvocationMode::Cli => "cli",
            InvocationMode::Interactive => "interactive",
        }
    }
}

/// Input-related options parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRequest {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Files to process and the directory results go to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInputs {
    pub input_files: Vec<PathBuf>,
    pub output_dir: PathBuf,
}

/// Source of answers for interactive prompts.
pub trait Prompter {
    fn ask(&mut self, prompt: &'static str) -> Result<String, InputError>;
}

/// Prompter reading answers line by line from a reader (normally stdin).
pub struct StdioPrompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdioPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for StdioPrompter<R, W> {
    fn ask(&mut self, prompt: &'static str) -> Result<String, InputError> {
        let to_prompt_error = |source| InputError::Prompt { prompt, source };

        write!(self.output, "\n{prompt}: ").map_err(to_prompt_error)?;
        self.output.flush().map_err(to_prompt_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(to_prompt_error)?;
        if read == 0 {
            return Err(to_prompt_error(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            )));
        }

        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}

/// Produce the input file list and output directory for one run.
///
/// In CLI mode an input directory takes precedence over listed files, and the
/// output directory falls back to the input directory. In interactive mode
/// both directories are asked for; an empty input answer means no files.
/// Relative directories are taken against `executable_dir`.
pub fn resolve_inputs(
    mode: InvocationMode,
    request: &InputRequest,
    executable_dir: &Path,
    walk: WalkOptions,
    prompter: &mut dyn Prompter,
) -> Result<ResolvedInputs, InputError> {
    match mode {
        InvocationMode::Cli => {
            let input_dir = non_empty(request.input_dir.as_deref());
            let input_files = match input_dir {
                Some(dir) => list_files_with(&resolve_user_dir(Some(dir), executable_dir), walk),
                None => {
                    for file in request.files.iter().filter(|file| !file.is_file()) {
                        warn!(
                            target: "pathguard::input",
                            path = %file.display(),
                            "Listed input is not a readable file"
                        );
                    }
                    request.files.clone()
                }
            };
            let output_dir = resolve_user_dir(
                non_empty(request.output_dir.as_deref()).or(input_dir),
                executable_dir,
            );

            Ok(ResolvedInputs {
                input_files,
                output_dir,
            })
        }
        InvocationMode::Interactive => {
            let input_answer = prompter.ask(INPUT_DIR_PROMPT)?;
            let input_files = if input_answer.is_empty() {
                debug!(
                    target: "pathguard::input",
                    "No input directory entered"
                );
                Vec::new()
            } else {
                list_files_with(
                    &resolve_user_dir(Some(Path::new(&input_answer)), executable_dir),
                    walk,
                )
            };

            let output_answer = prompter.ask(OUTPUT_DIR_PROMPT)?;
            let output_dir = resolve_user_dir(Some(Path::new(&output_answer)), executable_dir);

            Ok(ResolvedInputs {
                input_files,
                output_dir,
            })
        }
    }
}

fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|path| !path.as_os_str().is_empty())
}
