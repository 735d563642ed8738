pub mod config;
pub mod error;
pub mod input;
pub mod responder;

use std::io::{self, BufRead, Write};

use config::Config;
use error::Result;
use log::info;
pub use responder::Responder;

const EXIT_WORD: &str = "bye";

/// Runs the interactive loop on standard input until `bye` or end of input.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the terminal cannot be
/// read from or written to. Missing response files are not errors.
pub fn run() -> Result<()> {
    let config = Config::from_env()?;
    let mut responder = Responder::new(&config);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "Welcome to the help desk. Type 'bye' to leave.")?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let words = input::split_words(&line?);
        if words.contains(EXIT_WORD) {
            info!("Exit word received");
            break;
        }

        let reply = responder.generate_response(&words);
        writeln!(stdout, "{}", reply.trim_end())?;
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    writeln!(stdout, "Nice talking to you. Bye...")?;
    Ok(())
}
