use anyhow::Result;
use std::io;

fn main() -> Result<()> {
    // Initialize logging. Records go to stderr so stdout stays clean.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    greeter::run(stdin.lock(), stdout.lock())?;

    Ok(())
}
