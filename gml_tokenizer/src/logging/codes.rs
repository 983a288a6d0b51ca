//! Consolidated diagnostic codes and classification system
//!
//! Single source of truth for all error and success codes, their metadata,
//! and classification functions.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a diagnostic code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// File processing error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const FILE_TOO_LARGE: Code = Code::new("E006");
    pub const EMPTY_FILE: Code = Code::new("E007");
    pub const INVALID_ENCODING: Code = Code::new("E008");
    pub const IO_ERROR: Code = Code::new("E009");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const UNMATCHED_INPUT: Code = Code::new("E020");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I005");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

fn metadata_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    static REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let entries = [
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                "Internal error in the tokenizer runtime",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                "Global subsystem initialization failed",
            ),
            ErrorMetadata::new(
                "E005",
                "FileProcessing",
                Severity::High,
                false,
                "Source file does not exist",
            ),
            ErrorMetadata::new(
                "E006",
                "FileProcessing",
                Severity::High,
                false,
                "Source file exceeds the compile-time size limit",
            ),
            ErrorMetadata::new(
                "E007",
                "FileProcessing",
                Severity::Medium,
                true,
                "Source file is empty",
            ),
            ErrorMetadata::new(
                "E008",
                "FileProcessing",
                Severity::High,
                false,
                "Source file is not valid UTF-8",
            ),
            ErrorMetadata::new(
                "E009",
                "FileProcessing",
                Severity::High,
                false,
                "I/O failure while reading the source file",
            ),
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::High,
                false,
                "No rule in the pattern table matches the input",
            ),
        ];

        entries
            .into_iter()
            .map(|meta| (meta.code, meta))
            .collect()
    })
}

/// Get the metadata entry for a code, if registered
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    metadata_registry().get(code)
}

/// Get the human-readable description for a code
pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|meta| meta.description)
        .unwrap_or("Unknown error")
}

/// Get the category for a code
pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|meta| meta.category)
        .unwrap_or("Unknown")
}

/// Get the severity for a code (unregistered codes default to Low)
pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|meta| meta.severity)
        .unwrap_or(Severity::Low)
}

/// Check whether an error with this code is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_metadata(code)
        .map(|meta| meta.recoverable)
        .unwrap_or(true)
}
