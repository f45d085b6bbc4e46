//! Simple interactive CLI mode
//!
//! Line-oriented loop that drives a session from typed commands and prints a
//! report after each one.

use crate::core::Feedback;
use crate::corpus::CorpusSource;
use crate::engine::{Report, Session};
use crate::output::formatters::feedback_line;
use crate::output::{write_feedback_error, write_report};
use anyhow::Result;
use colored::Colorize;
use log::warn;
use std::io::{BufRead, Write};
use std::str::FromStr;

const HELP: &str = "\
Commands (positions are 0-based):
  score <word> <bgy>     apply a guess and its feedback, e.g. score crane bbgyb
  green <letter> <pos>   letter is at pos
  yellow <letter> <pos>  letter is in the word, but not at pos
  greenword <pattern>    greens by position, e.g. _r_te
  yellowword <pattern>   yellows by position, e.g. e...a
  include <letters>      word contains all of these letters
  black <letters>        word contains none of these letters
  substring <text>       word contains this text
  start <text>           word starts with this text
  end <text>             word ends with this text
  report                 show what is left
  reset                  reload the word list and start over
  help                   show this message
  quit                   leave";

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Score { word: String, score: String },
    Green { letter: char, position: usize },
    Yellow { letter: char, position: usize },
    GreenWord(String),
    YellowWord(String),
    Include(String),
    Black(String),
    Substring(String),
    Start(String),
    End(String),
    Report,
    Reset,
    Help,
    Quit,
}

/// Reasons a line could not be turned into a [`Command`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{0}' is not a single letter")]
    BadLetter(String),
    #[error("'{0}' is not a position")]
    BadPosition(String),
}

fn single_letter(arg: &str) -> Result<char, CommandError> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_alphabetic() => Ok(ch),
        _ => Err(CommandError::BadLetter(arg.to_string())),
    }
}

fn position(arg: &str) -> Result<usize, CommandError> {
    arg.parse()
        .map_err(|_| CommandError::BadPosition(arg.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Err(CommandError::Unknown(String::new()));
        };
        let name = name.to_lowercase();
        let args: Vec<&str> = parts.collect();

        let one = |command: &'static str, expected: &'static str| {
            args.first()
                .map(|s| (*s).to_string())
                .ok_or(CommandError::MissingArgument { command, expected })
        };
        let two = |command: &'static str, expected: &'static str| match args.as_slice() {
            [a, b, ..] => Ok((*a, *b)),
            _ => Err(CommandError::MissingArgument { command, expected }),
        };

        let command = match name.as_str() {
            "score" | "s" => {
                let (word, score) = two("score", "a word and a score")?;
                Self::Score {
                    word: word.to_string(),
                    score: score.to_string(),
                }
            }
            "green" | "g" => {
                let (letter, pos) = two("green", "a letter and a position")?;
                Self::Green {
                    letter: single_letter(letter)?,
                    position: position(pos)?,
                }
            }
            "yellow" | "y" => {
                let (letter, pos) = two("yellow", "a letter and a position")?;
                Self::Yellow {
                    letter: single_letter(letter)?,
                    position: position(pos)?,
                }
            }
            "greenword" => Self::GreenWord(one("greenword", "a pattern")?),
            "yellowword" => Self::YellowWord(one("yellowword", "a pattern")?),
            "include" => Self::Include(one("include", "letters")?),
            "black" | "exclude" => Self::Black(one("black", "letters")?),
            "substring" => Self::Substring(one("substring", "text")?),
            "start" | "startswith" => Self::Start(one("start", "text")?),
            "end" | "endswith" => Self::End(one("end", "text")?),
            "report" => Self::Report,
            "reset" | "new" => Self::Reset,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

/// Run one command against the session, writing its output
///
/// Returns `false` once the user asks to quit.
///
/// # Errors
///
/// Returns an error if writing fails. A failed reset is reported to `out` and
/// leaves the session as it was.
pub fn execute<S, W>(session: &mut Session<S>, command: Command, out: &mut W) -> Result<bool>
where
    S: CorpusSource,
    W: Write,
{
    let report: Report = match command {
        Command::Score { word, score } => match Feedback::parse(&word, &score) {
            Ok((guess, feedback)) => {
                writeln!(out, "{}", feedback_line(&guess, &feedback))?;
                session.apply_guess(&guess, &feedback)
            }
            Err(e) => {
                warn!("rejected feedback '{word}' / '{score}': {e}");
                write_feedback_error(out, &e)?;
                return Ok(true);
            }
        },
        Command::Green { letter, position } => session.match_position(letter, position),
        Command::Yellow { letter, position } => session.exclude_position(letter, position),
        Command::GreenWord(pattern) => session.match_word(&pattern),
        Command::YellowWord(pattern) => session.exclude_word(&pattern),
        Command::Include(letters) => session.include_letters(&letters),
        Command::Black(letters) => session.exclude_letters(&letters),
        Command::Substring(text) => session.include_substring(&text),
        Command::Start(text) => session.starts_with(&text),
        Command::End(text) => session.ends_with(&text),
        Command::Report => session.report(),
        Command::Reset => match session.reset() {
            Ok(report) => report,
            Err(e) => {
                warn!("reset failed: {e}");
                writeln!(out, "{}", format!("Could not reload: {e}").red())?;
                return Ok(true);
            }
        },
        Command::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(true);
        }
        Command::Quit => return Ok(false),
    };

    write_report(out, &report)?;
    Ok(true)
}

/// Run the simple interactive mode until `quit` or end of input
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_simple<S, R, W>(session: &mut Session<S>, input: R, out: &mut W) -> Result<()>
where
    S: CorpusSource,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Wordle helper. Type 'help' for commands.")?;
    write_report(out, &session.report())?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                if !execute(session, command, out)? {
                    break;
                }
            }
            Err(e) => writeln!(out, "{e}")?,
        }
    }

    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CandidateSet, CorpusError, Word};
    use crate::corpus::{FrequencyMap, InMemoryCorpus};
    use std::cell::Cell;
    use test_case::test_case;

    /// Loads once, then fails every reload
    struct OneShotCorpus {
        inner: InMemoryCorpus,
        loads: Cell<usize>,
    }

    impl CorpusSource for OneShotCorpus {
        fn load_candidates(&self, exclude_used: bool) -> Result<CandidateSet, CorpusError> {
            self.loads.set(self.loads.get() + 1);
            if self.loads.get() > 1 {
                return Err(CorpusError::malformed("used.txt", 1, "file went away"));
            }
            self.inner.load_candidates(exclude_used)
        }
    }

    fn corpus() -> InMemoryCorpus {
        let words = ["crane", "slate", "irate", "crate", "grate", "robot"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let freq: FrequencyMap = (b'a'..=b'z').map(|ch| (ch, 1.0)).collect();
        InMemoryCorpus::new(words, freq)
    }

    fn session() -> Session<InMemoryCorpus> {
        Session::new(corpus(), false).unwrap()
    }

    #[test_case("score crane bbgyb", Command::Score { word: "crane".into(), score: "bbgyb".into() })]
    #[test_case("green a 2", Command::Green { letter: 'a', position: 2 })]
    #[test_case("Y e 0", Command::Yellow { letter: 'e', position: 0 })]
    #[test_case("greenword _r_te", Command::GreenWord("_r_te".into()))]
    #[test_case("black xyz", Command::Black("xyz".into()))]
    #[test_case("  start   cr ", Command::Start("cr".into()))]
    #[test_case("reset", Command::Reset)]
    #[test_case("q", Command::Quit)]
    fn parse_commands(line: &str, expected: Command) {
        assert_eq!(line.parse::<Command>(), Ok(expected));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "frobnicate".parse::<Command>(),
            Err(CommandError::Unknown("frobnicate".into()))
        );
        assert!(matches!(
            "green a".parse::<Command>(),
            Err(CommandError::MissingArgument { command: "green", .. })
        ));
        assert_eq!(
            "green ab 2".parse::<Command>(),
            Err(CommandError::BadLetter("ab".into()))
        );
        assert_eq!(
            "yellow a two".parse::<Command>(),
            Err(CommandError::BadPosition("two".into()))
        );
        assert!(matches!(
            "include".parse::<Command>(),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn execute_applies_and_reports() {
        let mut s = session();
        let mut out = Vec::new();

        let keep_going = execute(&mut s, "greenword __ate".parse().unwrap(), &mut out).unwrap();
        assert!(keep_going);
        assert_eq!(s.candidates().len(), 4);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("words remaining."));
        assert!(text.contains("Try the following:"));
    }

    #[test]
    fn execute_score_echoes_guess() {
        let mut s = session();
        let mut out = Vec::new();

        execute(&mut s, "score crane bbgbg".parse().unwrap(), &mut out).unwrap();
        let texts: Vec<&str> = s.candidates().iter().map(Word::text).collect();
        assert_eq!(texts, ["slate"]);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("CRANE ⬜⬜🟩⬜🟩\n"));
    }

    #[test]
    fn execute_invalid_score_leaves_session() {
        let mut s = session();
        let mut out = Vec::new();

        execute(&mut s, "score abcd bbbbb".parse().unwrap(), &mut out).unwrap();
        assert_eq!(s.candidates().len(), 6);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Uh, this word is 4 letters long."));
        assert!(!text.contains("words remaining."));
    }

    #[test]
    fn run_simple_until_quit() {
        let mut s = session();
        let input = b"include r\n\nnonsense\nstart cr\nquit\nblack c\n" as &[u8];
        let mut out = Vec::new();

        run_simple(&mut s, input, &mut out).unwrap();

        // "black c" comes after quit and is never applied
        let texts: Vec<&str> = s.candidates().iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "crate"]);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("unknown command 'nonsense'"));
    }

    #[test]
    fn failed_reset_keeps_session_and_loop() {
        let source = OneShotCorpus {
            inner: corpus(),
            loads: Cell::new(0),
        };
        let mut s = Session::new(source, false).unwrap();
        let input = b"start cr\nreset\nend te\n" as &[u8];
        let mut out = Vec::new();

        run_simple(&mut s, input, &mut out).unwrap();

        // the loop carried on after the failed reset and kept narrowing
        let texts: Vec<&str> = s.candidates().iter().map(Word::text).collect();
        assert_eq!(texts, ["crate"]);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Could not reload"));
        assert!(text.contains("file went away"));
    }

    #[test]
    fn run_simple_reset_restores() {
        let mut s = session();
        let input = b"black a\nreset\n" as &[u8];
        let mut out = Vec::new();

        run_simple(&mut s, input, &mut out).unwrap();
        assert_eq!(s.candidates().len(), 6);
    }
}
