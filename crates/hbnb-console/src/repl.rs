//! Read loop.
//!
//! Interactive sessions print the prompt before every line. Piped sessions
//! print it once (without its trailing space) before the first command and
//! then after each command's output, so a transcript reads the same way a
//! terminal session does. `quit` and end of input leave no trailing prompt.

use std::io::{BufRead, Write};

use hbnb_store::ObjectStore;
use tracing::debug;

use crate::dispatch::{Console, ReplControl};
use crate::error::ConsoleError;

/// How the read loop presents itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplOptions {
    pub prompt: String,
    /// `true` when input comes from a terminal.
    pub interactive: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            prompt: "(hbnb) ".to_string(),
            interactive: true,
        }
    }
}

/// Read and execute lines until `quit` or end of input.
pub fn run<S, R, W>(
    console: &mut Console<S>,
    mut input: R,
    out: &mut W,
    options: &ReplOptions,
) -> Result<(), ConsoleError>
where
    S: ObjectStore,
    R: BufRead,
    W: Write,
{
    if !options.interactive {
        writeln!(out, "{}", options.prompt.trim_end())?;
    }

    let mut line = String::new();
    let mut commands = 0usize;
    loop {
        if options.interactive {
            write!(out, "{}", options.prompt)?;
            out.flush()?;
        }

        line.clear();
        let read = input.read_line(&mut line)?;
        let command = if read == 0 { "EOF" } else { line.as_str() };

        let control = console.execute(command, out)?;
        commands += 1;
        if control == ReplControl::Exit {
            break;
        }

        if !options.interactive {
            write!(out, "{}", options.prompt)?;
        }
        out.flush()?;
    }

    out.flush()?;
    debug!(commands, "session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use hbnb_store::InMemoryObjectStore;
    use hbnb_types::ClassRegistry;

    fn session(input: &str, interactive: bool) -> (String, Console<InMemoryObjectStore>) {
        let mut console = Console::new(ClassRegistry::standard(), InMemoryObjectStore::new());
        let mut out = Vec::new();
        let options = ReplOptions {
            interactive,
            ..Default::default()
        };
        run(&mut console, Cursor::new(input), &mut out, &options).unwrap();
        (String::from_utf8(out).unwrap(), console)
    }

    #[test]
    fn piped_transcript_with_quit() {
        let (out, _) = session("count User\n\nshow\nquit\n", false);
        assert_eq!(
            out,
            "(hbnb)\n0\n(hbnb) (hbnb) ** class name missing **\n(hbnb) "
        );
    }

    #[test]
    fn piped_transcript_ends_with_eof_newline() {
        let (out, _) = session("all\n", false);
        assert_eq!(out, "(hbnb)\n[]\n(hbnb) \n");
    }

    #[test]
    fn piped_empty_input() {
        let (out, _) = session("", false);
        assert_eq!(out, "(hbnb)\n\n");
    }

    #[test]
    fn interactive_prompts_before_each_line() {
        let (out, _) = session("count User\nquit\n", true);
        assert_eq!(out, "(hbnb) 0\n(hbnb) ");
    }

    #[test]
    fn interactive_eof() {
        let (out, _) = session("", true);
        assert_eq!(out, "(hbnb) \n");
    }

    #[test]
    fn commands_after_quit_are_not_read() {
        let (_, console) = session("quit\ncreate User\n", false);
        assert!(console.store().all().is_empty());
    }

    #[test]
    fn last_line_without_newline_runs() {
        let (out, console) = session("create User", false);
        assert_eq!(console.store().all().len(), 1);
        assert!(out.ends_with("(hbnb) \n"));
    }

    #[test]
    fn custom_prompt() {
        let mut console = Console::new(ClassRegistry::standard(), InMemoryObjectStore::new());
        let mut out = Vec::new();
        let options = ReplOptions {
            prompt: "> ".into(),
            interactive: false,
        };
        run(&mut console, Cursor::new("quit\n"), &mut out, &options).unwrap();
        assert_eq!(out, b">\n");
    }
}
