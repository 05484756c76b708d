//! Wire types for the catalog API.
//!
//! Field names and genre spellings match the server exactly. One asymmetry
//! is inherited from it: book responses wrap each genre in an object
//! (`{"name": "Fiction"}`) while create and update requests send plain
//! strings (`"Fiction"`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-assigned book identifier.
pub type BookId = u64;

/// Server-assigned review identifier.
pub type ReviewId = u64;

/// The closed set of genre labels the catalog accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Fiction,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    Fantasy,
    Mystery,
    Biography,
    History,
    Romance,
}

impl Genre {
    /// Every genre, in the catalog's canonical order.
    pub const ALL: [Genre; 7] = [
        Genre::Fiction,
        Genre::ScienceFiction,
        Genre::Fantasy,
        Genre::Mystery,
        Genre::Biography,
        Genre::History,
        Genre::Romance,
    ];

    /// The label exactly as the server spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Fantasy => "Fantasy",
            Genre::Mystery => "Mystery",
            Genre::Biography => "Biography",
            Genre::History => "History",
            Genre::Romance => "Romance",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown genre '{s}' (expected one of: {})",
                    Genre::ALL.map(Genre::as_str).join(", ")
                )
            })
    }
}

/// A genre as book responses carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreTag {
    pub name: Genre,
}

impl From<Genre> for GenreTag {
    fn from(name: Genre) -> Self {
        Self { name }
    }
}

/// A user-submitted review. Owned by exactly one book and only ever
/// reachable through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    /// 1 to 5 inclusive, enforced server-side.
    pub rating: u8,
    pub comment: String,
}

/// A catalog book as the server returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub description: String,
    pub year_published: i32,
    pub pages: u32,
    #[serde(default)]
    pub genres: Vec<GenreTag>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Draft for creating a book. The server assigns the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCreate {
    pub title: String,
    pub author: String,
    pub description: String,
    pub year_published: i32,
    pub pages: u32,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Partial update: only the fields present on the wire are changed, the
/// rest keep their server-side values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_published: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<Genre>>,
}

/// Draft for attaching a review to a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewCreate {
    pub rating: u8,
    pub comment: String,
}

/// Aggregate counters pushed by the stats feed.
///
/// Ephemeral by contract: each snapshot fully replaces the previous one and
/// nothing is persisted client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppStats {
    pub total_books: u64,
    pub total_reviews: u64,
}
