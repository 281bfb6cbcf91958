use std::io;

/// Errors that can occur while turning a Go interface into an adapter
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{reason}")]
    SourceImportFailure { reason: String },

    #[error("type {name} not found in: {package}")]
    NotFound { name: String, package: String },

    #[error("not an interface: {0}")]
    NotInterface(String),

    #[error("generic interface not supported: {0}")]
    GenericUnsupported(String),

    #[error("empty interface: {0}")]
    EmptyInterface(String),

    #[error("only single method interfaces is supported")]
    MultiMethodUnsupported,

    #[error("embedded interface not supported: {0}")]
    EmbeddedUnsupported(String),

    #[error("render: {0}")]
    RenderFailure(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Tree-sitter error: {0}")]
    TreeSitterError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A pipeline stage wrapping the error of the stage below it.
    #[error("{stage}")]
    Context {
        stage: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn stage(stage: impl Into<String>, source: Error) -> Self {
        Error::Context {
            stage: stage.into(),
            source: Box::new(source),
        }
    }

    /// The innermost error, skipping every stage wrapper.
    pub fn root(&self) -> &Error {
        match self {
            Error::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Attach a stage name to a failing result
pub trait ResultExt<T> {
    fn stage(self, stage: &str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn stage(self, stage: &str) -> Result<T> {
        self.map_err(|e| Error::stage(stage, e))
    }
}

/// Result type alias for mockf operations
pub type Result<T> = std::result::Result<T, Error>;
