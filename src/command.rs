//! Command vocabulary of the interactive session.
//!
//! One line per invocation: `ls`, `cd <path>`, `pwd`, `mv <src> <dst>`,
//! `exit`. Argument counts are exact; anything else in the head position is
//! an unknown command, reported to the caller rather than raised as fatal.

use crate::error::ShellError;

/// A single parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `ls`: list the current directory.
    List,
    /// `cd <path>`: change the current directory.
    ChangeDirectory(String),
    /// `pwd`: print the current directory path.
    PrintLocation,
    /// `mv <src> <dst>`: rename or move one entry.
    Move { src: String, dst: String },
    /// `exit`: end the session.
    Exit,
}

impl Command {
    /// Parses one input line. Blank input is `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, ShellError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();
        let command = match (head, args.as_slice()) {
            ("ls", []) => Command::List,
            ("pwd", []) => Command::PrintLocation,
            ("exit", []) => Command::Exit,
            ("cd", [path]) => Command::ChangeDirectory((*path).to_string()),
            ("mv", [src, dst]) => Command::Move {
                src: (*src).to_string(),
                dst: (*dst).to_string(),
            },
            ("ls" | "pwd" | "exit" | "cd" | "mv", _) => {
                return Err(ShellError::InvalidCommand(head.to_string()))
            }
            _ => return Err(ShellError::UnknownCommand(head.to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vocabulary() {
        assert_eq!(Command::parse("ls").unwrap(), Some(Command::List));
        assert_eq!(Command::parse("pwd").unwrap(), Some(Command::PrintLocation));
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Exit));
        assert_eq!(
            Command::parse("cd del1").unwrap(),
            Some(Command::ChangeDirectory("del1".to_string()))
        );
        assert_eq!(
            Command::parse("mv a.txt del1/").unwrap(),
            Some(Command::Move {
                src: "a.txt".to_string(),
                dst: "del1/".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_blank_line_is_nothing() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_wrong_arity_is_invalid() {
        assert!(matches!(
            Command::parse("mv only_one").unwrap_err(),
            ShellError::InvalidCommand(_)
        ));
        assert!(matches!(
            Command::parse("mv a b c").unwrap_err(),
            ShellError::InvalidCommand(_)
        ));
        assert!(matches!(
            Command::parse("cd").unwrap_err(),
            ShellError::InvalidCommand(_)
        ));
        assert!(matches!(
            Command::parse("ls extra").unwrap_err(),
            ShellError::InvalidCommand(_)
        ));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(matches!(
            Command::parse("rm file.txt").unwrap_err(),
            ShellError::UnknownCommand(_)
        ));
    }
}
