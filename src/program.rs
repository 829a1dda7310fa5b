use anyhow::{Context, Result};
use log::{debug, warn};
use std::io::{BufRead, Write};

use crate::{
    config::{BIRTHDAY_PERSON_AGE, BIRTHDAY_PERSON_NAME, NAME_PROMPT, ROSTER},
    greeter::{enumerated_greetings, greet},
    names::NameLengths,
    person::Person,
};

/// Reads one line and strips its line terminator.
///
/// End of input yields an empty name.
pub fn read_name<R: BufRead>(mut input: R) -> Result<String> {
    let mut line = String::new();
    let bytes_read = input
        .read_line(&mut line)
        .context("failed to read name from input")?;

    if bytes_read == 0 {
        warn!("Reached end of input before a name was entered");
        return Ok(line);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}

/// Runs the whole greeting session against `input` and `output`.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<()> {
    write!(output, "{}", NAME_PROMPT).context("failed to write prompt")?;
    output.flush().context("failed to flush prompt")?;

    let name = read_name(input)?;
    debug!("Read name {:?}", name);

    write_session(&name, &mut output).context("failed to write greeting output")?;
    output.flush().context("failed to flush greeting output")?;

    Ok(())
}

fn write_session<W: Write>(name: &str, output: &mut W) -> std::io::Result<()> {
    writeln!(output, "{}", greet(name))?;

    debug!("Greeting roster of {} names", ROSTER.len());
    for line in enumerated_greetings(&ROSTER) {
        writeln!(output, "{}", line)?;
    }

    let lengths = NameLengths::from_names(ROSTER);
    writeln!(output, "Name lengths: {}", lengths)?;

    let mut person = Person::new(BIRTHDAY_PERSON_NAME, BIRTHDAY_PERSON_AGE);
    let message = person.birthday();
    debug!("{} aged to {}", person.name(), person.age());
    writeln!(output, "{}", message)?;

    Ok(())
}
