#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Ages the person by one year and describes the new age.
    pub fn birthday(&mut self) -> String {
        self.age += 1;
        format!("{} is now {} years old!", self.name, self.age)
    }
}
