pub mod config;
pub mod greeter;
pub mod names;
pub mod person;
pub mod program;

pub use greeter::{enumerated_greetings, greet};
pub use names::NameLengths;
pub use person::Person;
pub use program::run;
