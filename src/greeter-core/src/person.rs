use std::collections::BTreeMap;
use std::fmt;

pub const GREETING_KEY: &str = "Greeting";
pub const GREETING_VALUE: &str = "Hello";

/// The mapping returned by [`Person::greet`].
pub type Greeting = BTreeMap<String, String>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Person {
            name: name.into(),
            age,
        }
    }

    /// Always `{"Greeting": "Hello"}`, whoever is asked.
    pub fn greet(&self) -> Greeting {
        BTreeMap::from([(GREETING_KEY.to_string(), GREETING_VALUE.to_string())])
    }

    /// Adds a year and returns the new age. Saturates at `u32::MAX`.
    pub fn increment_age(&mut self) -> u32 {
        self.age = self.age.saturating_add(1);
        self.age
    }
}

/// Renders as `{name age}`.
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.name, self.age)
    }
}
