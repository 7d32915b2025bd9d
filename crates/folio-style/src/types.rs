//! Value types shared by the descriptor tables.

use std::fmt;

/// An ordered list of style class names.
///
/// Table entries are written as space-separated strings; a `ClassList`
/// splits them into individual classes and keeps insertion order so the
/// rendered attribute is stable between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ClassList {
    classes: Vec<&'static str>,
}

impl ClassList {
    /// Create an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a class list from a space-separated table entry.
    pub fn parse(classes: &'static str) -> Self {
        let mut list = Self::new();
        list.extend(classes);
        list
    }

    /// Append every class of a space-separated table entry.
    pub fn extend(&mut self, classes: &'static str) {
        self.classes.extend(classes.split_whitespace());
    }

    /// Append classes using builder pattern.
    pub fn with(mut self, classes: &'static str) -> Self {
        self.extend(classes);
        self
    }

    /// Check whether a single class is present.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    /// Iterate the classes in order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.classes.iter().copied()
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}
