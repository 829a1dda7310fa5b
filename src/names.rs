use std::collections::{btree_map, BTreeMap};
use std::fmt;

/// Mapping from a name to its length in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameLengths {
    lengths: BTreeMap<String, usize>,
}

impl NameLengths {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                (name.to_string(), name.chars().count())
            })
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.lengths.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, usize> {
        self.lengths.iter()
    }
}

impl FromIterator<(String, usize)> for NameLengths {
    fn from_iter<T: IntoIterator<Item = (String, usize)>>(iter: T) -> Self {
        Self {
            lengths: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NameLengths {
    type Item = (&'a String, &'a usize);
    type IntoIter = btree_map::Iter<'a, String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Renders as a dictionary literal: {'Alice': 5, 'Bob': 3}.
impl fmt::Display for NameLengths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, length)) in self.lengths.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}': {}", name, length)?;
        }
        write!(f, "}}")
    }
}
