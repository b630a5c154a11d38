use thiserror::Error;
use trivia_core_types::RequestId;

/// Result type alias using TriviaError
pub type Result<T> = std::result::Result<T, TriviaError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code for programmatic handling and to a
/// `Failure` class that the boundary turns into a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrErrorKind {
    // Validation
    InvalidInput,
    MissingField,
    InvalidField,
    InvalidCategory,
    MissingQuizCategory,

    // Lookup
    NotFound,
    EmptyPage,
    NoMatches,

    // Mutation
    Unprocessable,

    // Boundary
    MethodNotAllowed,

    // Integration/IO
    Persistence,
    Serialization,
    Io,

    // Internal
    Internal,
}

impl TrErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            TrErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            TrErrorKind::MissingField => "ERR_MISSING_FIELD",
            TrErrorKind::InvalidField => "ERR_INVALID_FIELD",
            TrErrorKind::InvalidCategory => "ERR_INVALID_CATEGORY",
            TrErrorKind::MissingQuizCategory => "ERR_MISSING_QUIZ_CATEGORY",
            TrErrorKind::NotFound => "ERR_NOT_FOUND",
            TrErrorKind::EmptyPage => "ERR_EMPTY_PAGE",
            TrErrorKind::NoMatches => "ERR_NO_MATCHES",
            TrErrorKind::Unprocessable => "ERR_UNPROCESSABLE",
            TrErrorKind::MethodNotAllowed => "ERR_METHOD_NOT_ALLOWED",
            TrErrorKind::Persistence => "ERR_PERSISTENCE",
            TrErrorKind::Serialization => "ERR_SERIALIZATION",
            TrErrorKind::Io => "ERR_IO",
            TrErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Classify this kind into the failure class reported at the boundary
    pub fn failure(&self) -> Failure {
        match self {
            TrErrorKind::InvalidInput
            | TrErrorKind::MissingField
            | TrErrorKind::InvalidField
            | TrErrorKind::InvalidCategory
            | TrErrorKind::MissingQuizCategory => Failure::BadRequest,
            TrErrorKind::NotFound | TrErrorKind::EmptyPage | TrErrorKind::NoMatches => {
                Failure::NotFound
            }
            TrErrorKind::Unprocessable => Failure::Unprocessable,
            TrErrorKind::MethodNotAllowed => Failure::MethodNotAllowed,
            TrErrorKind::Persistence
            | TrErrorKind::Serialization
            | TrErrorKind::Io
            | TrErrorKind::Internal => Failure::Internal,
        }
    }
}

/// Failure classes visible to callers of the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Failure {
    BadRequest,
    NotFound,
    MethodNotAllowed,
    Unprocessable,
    Internal,
}

impl Failure {
    /// HTTP status code for this failure class
    pub fn status_code(&self) -> u16 {
        match self {
            Failure::BadRequest => 400,
            Failure::NotFound => 404,
            Failure::MethodNotAllowed => 405,
            Failure::Unprocessable => 422,
            Failure::Internal => 500,
        }
    }

    /// Public message placed in the error envelope
    pub fn message(&self) -> &'static str {
        match self {
            Failure::BadRequest => "bad request",
            Failure::NotFound => "resource not found",
            Failure::MethodNotAllowed => "method not allowed",
            Failure::Unprocessable => "unprocessable",
            Failure::Internal => "internal server error",
        }
    }
}

/// Canonical structured error type
///
/// Carries a kind for classification plus optional context for logs.
#[derive(Debug, Clone)]
pub struct TrError {
    kind: TrErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    field: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<TrError>>,
}

impl TrError {
    /// Create a new error with the specified kind
    pub fn new(kind: TrErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            field: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Name the input field the error is about
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Attach the id of the HTTP request that failed
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: TrError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Re-classify a store failure that happened while mutating.
    ///
    /// Lookup and validation errors keep their kind; anything else becomes
    /// `Unprocessable` with the original error kept as the source.
    pub fn into_unprocessable(self, op: &str) -> Self {
        match self.kind.failure() {
            Failure::BadRequest | Failure::NotFound | Failure::Unprocessable => self,
            Failure::MethodNotAllowed | Failure::Internal => TrError::new(TrErrorKind::Unprocessable)
                .with_op(op)
                .with_message(self.message.clone())
                .with_source(self),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> TrErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the failure class
    pub fn failure(&self) -> Failure {
        self.kind.failure()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the field name, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&TrError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for TrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for TrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for trivia operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriviaError {
    // ===== Validation Errors =====
    /// A required input field was absent or null
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A field was present but its value is not acceptable
    #[error("Invalid value for field {field}: {reason}")]
    InvalidField { field: String, reason: String },

    /// Quiz request without a `quiz_category`
    #[error("Quiz request is missing quiz_category")]
    MissingQuizCategory,

    /// Category id does not resolve to a known category
    #[error("Category not found: {category_id}")]
    CategoryNotFound { category_id: i64 },

    // ===== Lookup Errors =====
    /// Question id does not exist
    #[error("Question not found: {question_id}")]
    QuestionNotFound { question_id: i64 },

    /// Unfiltered listing produced an empty page
    #[error("No questions on page {page}")]
    EmptyPage { page: usize },

    /// Search produced no matches
    #[error("No questions match search term {term:?}")]
    NoSearchMatches { term: String },
}

impl From<TriviaError> for TrError {
    fn from(err: TriviaError) -> Self {
        match err {
            TriviaError::MissingField { field } => TrError::new(TrErrorKind::MissingField)
                .with_message(format!("Missing required field: {}", field))
                .with_field(field),

            TriviaError::InvalidField { field, reason } => {
                TrError::new(TrErrorKind::InvalidField)
                    .with_message(reason)
                    .with_field(field)
            }

            TriviaError::MissingQuizCategory => TrError::new(TrErrorKind::MissingQuizCategory)
                .with_field("quiz_category")
                .with_message("Required keys missing from request body"),

            TriviaError::CategoryNotFound { category_id } => {
                TrError::new(TrErrorKind::InvalidCategory)
                    .with_entity_id(category_id.to_string())
                    .with_message("Category not found")
            }

            TriviaError::QuestionNotFound { question_id } => TrError::new(TrErrorKind::NotFound)
                .with_entity_id(question_id.to_string())
                .with_message("Question not found"),

            TriviaError::EmptyPage { page } => TrError::new(TrErrorKind::EmptyPage)
                .with_message(format!("No questions on page {}", page)),

            TriviaError::NoSearchMatches { term } => TrError::new(TrErrorKind::NoMatches)
                .with_message(format!("No questions match {:?}", term)),
        }
    }
}
