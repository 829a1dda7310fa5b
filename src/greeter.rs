/// Builds the greeting for `name`, verbatim.
pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Greets every name, prefixing each line with its 1-based position.
pub fn enumerated_greetings<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let name = name.as_ref();
            format!("{}. {}: {}", i + 1, name, greet(name))
        })
        .collect()
}
