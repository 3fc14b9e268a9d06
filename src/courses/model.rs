//! Course and Author records
//!
//! The serde renames are the wire format: `course`, `coursename`, `price`,
//! `author.fullname`, `author.website`.

use serde::{Deserialize, Serialize};

/// A course offered by the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Identifier assigned at creation, preserved across updates
    #[serde(rename = "course", default)]
    pub id: String,

    /// Display name; an empty name marks a payload as empty
    #[serde(rename = "coursename", default)]
    pub name: String,

    #[serde(default)]
    pub price: i64,

    #[serde(default)]
    pub author: Option<Author>,
}

/// Author embedded in a course. Has no identity of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "fullname", default)]
    pub full_name: String,

    #[serde(default)]
    pub website: String,
}

impl Course {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            author: None,
        }
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    /// A course payload is empty when it carries no name. The id is not
    /// considered because the server assigns it.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl Author {
    pub fn new(full_name: impl Into<String>, website: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            website: website.into(),
        }
    }
}

/// The two courses every fresh catalog starts with
pub fn seed_courses() -> Vec<Course> {
    vec![
        Course::new("1", "ReactJS", 299).with_author(Author::new("Nishchal Gupta", "lco.dev")),
        Course::new("2", "MERN Stack", 599).with_author(Author::new("Nishchal Gupta", "go.dev")),
    ]
}
