use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown project: `{}`", _0)]
    UnknownProject(String),

    #[error("Project `{}` may not depend on itself.", _0)]
    SelfDependency(String),

    #[error("`{}` is not a candidate in this selection session.", _0)]
    InvalidCandidate(String),

    #[error("The selection session has already been resolved.")]
    SessionClosed,

    #[error("The project list may not be empty.")]
    EmptyRegistry,

    #[error("Found a non-unique project identifier: `{}`", _0)]
    DuplicateProject(String),

    #[error("Invalid project identifier: identifier may not be empty")]
    EmptyProjectId,

    #[error("Invalid project identifier `{}`: identifier may not contain whitespace", _0)]
    IdWithWhitespace(String),

    #[error("Invalid project identifier `{}`: `{}` is reserved by the snapshot format", _0, _1)]
    ReservedIdCharacter(String, char),

    #[error("Malformed snapshot record on line {}: `{}`", .line, .content)]
    MalformedSnapshotLine { line: usize, content: String },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("Terminal I/O error: {}", _0)]
    Terminal(#[from] std::io::Error),

    #[error("Misc error: {}", _0)]
    Misc(String),
}

impl Error {
    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }
}
