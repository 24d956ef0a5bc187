use anyhow::Result;
use rational_repl::prelude::*;
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = ReplConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .init();

    let mut dispatcher = Dispatcher::new();

    let mut rl = DefaultEditor::new()?;
    if let Some(path) = &config.history {
        if let Err(err) = rl.load_history(path) {
            tracing::debug!(path = %path.display(), %err, "no history loaded");
        }
    }

    loop {
        let command = rl.readline(&config.prompt);

        match command {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                match dispatcher.dispatch(&line) {
                    DispatchResult::Success(Some(message)) => println!("{}", message),
                    DispatchResult::Success(None) => {}
                    DispatchResult::Failure(message) => eprintln!("error: {}", message),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
    }

    if let Some(path) = &config.history {
        if let Err(err) = rl.save_history(path) {
            tracing::warn!(path = %path.display(), %err, "could not save history");
        }
    }

    Ok(())
}
