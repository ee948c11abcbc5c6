/// Failure categories. Each maps to a process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No CSV lines at all, or unusable configuration.
    InvalidInput,
    /// A price/quantity cell did not parse, or a row is too short.
    Parse,
    /// The definition service could not be reached.
    Lookup,
    /// The encoder met a field type it cannot encode.
    UnsupportedType,
    /// The encoder could not read a field value.
    Serialization,
    /// Writing to stdout or the diagnostic sink failed.
    Output,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Output => 1,
            ErrorKind::InvalidInput => 2,
            ErrorKind::Parse => 3,
            ErrorKind::Lookup => 4,
            ErrorKind::UnsupportedType | ErrorKind::Serialization => 5,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
