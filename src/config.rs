/// Prompt written before reading the name from input.
pub const NAME_PROMPT: &str = "Enter your name: ";

/// Names greeted in order after the interactive greeting.
pub const ROSTER: [&str; 3] = ["Alice", "Bob", "Charlie"];

/// Name of the person whose birthday is celebrated.
pub const BIRTHDAY_PERSON_NAME: &str = "David";

/// Age of the birthday person before the birthday.
pub const BIRTHDAY_PERSON_AGE: u32 = 25;
