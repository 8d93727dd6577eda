use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}

impl From<(usize, usize)> for Location {
    fn from((line, col): (usize, usize)) -> Self {
        Location { line, col }
    }
}

impl Location {
    /// Converts a byte offset into `source` to a 1-based line/column pair.
    pub fn from_pos(source: &str, pos: usize) -> Self {
        let pos = pos.min(source.len());
        let prefix = source.get(..pos).unwrap_or(source);
        let line = prefix.matches('\n').count() + 1;
        let col = prefix.rfind('\n').map_or(pos + 1, |nl| pos - nl);
        Location { line, col }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("XML syntax error at {location}: {message}")]
    Syntax { message: String, location: Location },

    #[error("Unexpected end tag </{found}> at {location}, expected </{expected}>")]
    MismatchedEndTag {
        expected: String,
        found: String,
        location: Location,
    },

    #[error("Document has no root element")]
    MissingRoot,

    #[error("Second root element <{name}> at {location}")]
    MultipleRoots { name: String, location: Location },

    #[error("Content outside the root element at {location}")]
    ContentOutsideRoot { location: Location },

    #[error("Document contains a NUL character at {location}")]
    NulCharacter { location: Location },

    #[error("Source is not valid {charset}")]
    Decode { charset: String },

    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}
