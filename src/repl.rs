//! Interactive front-end.
//!
//! A plain readline loop over the engine: prompt with the current location,
//! parse one command per line, print the operation's output or a one-line
//! error, and repeat. No filesystem logic lives here.

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use crate::command::Command;
use crate::engine::Engine;
use crate::error::ShellError;

enum Dispatch {
    Continue(Option<String>),
    Exit,
}

/// Runs the interactive session until `exit` or end of input.
pub fn run(engine: &mut Engine) -> Result<(), Box<dyn std::error::Error>> {
    let mut rl: Editor<(), DefaultHistory> = Editor::new()?;

    loop {
        let prompt = format!("{}$ ", engine.current_location());
        match rl.readline(&prompt) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match dispatch(engine, &line) {
                    Ok(Dispatch::Continue(Some(output))) => println!("{output}"),
                    Ok(Dispatch::Continue(None)) => {}
                    Ok(Dispatch::Exit) => break,
                    Err(e) => eprintln!("Error: {e}"),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {e}");
                break;
            }
        }
    }
    Ok(())
}

fn dispatch(engine: &mut Engine, line: &str) -> Result<Dispatch, ShellError> {
    let Some(command) = Command::parse(line)? else {
        return Ok(Dispatch::Continue(None));
    };
    let output = match command {
        Command::List => {
            let names = engine.list();
            if names.is_empty() {
                None
            } else {
                Some(names.join("\n"))
            }
        }
        Command::ChangeDirectory(path) => {
            engine.change_directory(&path)?;
            None
        }
        Command::PrintLocation => Some(engine.current_location().to_string()),
        Command::Move { src, dst } => {
            engine.rename(&src, &dst)?;
            None
        }
        Command::Exit => return Ok(Dispatch::Exit),
    };
    Ok(Dispatch::Continue(output))
}
