// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in sensconv return `error::Result<T>`.  No panics
// in production paths; errors propagate unchanged to `main`, which prints
// them to stderr and exits non-zero.  Nothing is retried or recovered.

/// Every error that sensconv can produce.
#[derive(Debug)]
pub(crate) enum SensError {
    /// A native sensitivity value is outside its platform's legal range.
    /// Raised at construction time only — an already-constructed value can
    /// always be converted.
    Validation {
        /// The platform whose range was violated, e.g. `"windows"`.
        platform: &'static str,
        /// What was wrong with the value, for display purposes.
        detail: String,
    },

    /// An adapter was handed a sensitivity variant it does not own
    /// (e.g. a KDE value passed to the Windows adapter).  This is a
    /// programming/integration error, not a user-input error.
    TypeMismatch {
        /// The adapter that rejected the value, e.g. `"windows"`.
        adapter: &'static str,
        /// The variant the adapter works on.
        expected: &'static str,
        /// The variant it was actually given.
        got: &'static str,
    },

    /// The `--json` report failed to serialize.
    Report(serde_json::Error),
}

impl std::fmt::Display for SensError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { platform, detail } => {
                write!(f, "invalid {platform} sensitivity: {detail}")
            }
            Self::TypeMismatch {
                adapter,
                expected,
                got,
            } => {
                write!(f, "{adapter} adapter expected {expected}, got {got}")
            }
            Self::Report(e) => write!(f, "JSON report error: {e}"),
        }
    }
}

impl std::error::Error for SensError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Report(e) => Some(e),
            Self::Validation { .. } | Self::TypeMismatch { .. } => None,
        }
    }
}

// Convert a serde_json error directly into a SensError so that `?` can be
// used on serialization results in the report path.
impl From<serde_json::Error> for SensError {
    fn from(e: serde_json::Error) -> Self {
        Self::Report(e)
    }
}

/// Convenience alias used throughout the crate.
pub(crate) type Result<T> = std::result::Result<T, SensError>;
