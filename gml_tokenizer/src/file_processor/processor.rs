//! File processor implementation with compile-time limits and global logging integration

use crate::config::constants::compile_time::file_processing::{
    LARGE_FILE_THRESHOLD, MAX_FILE_SIZE,
};
use crate::logging::codes;
use crate::{log_debug, log_error, log_success, log_warning};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File processor specific errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum FileProcessorError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("File too large: {size} bytes (max: {max_size})")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("File is empty")]
    EmptyFile,

    #[error("Invalid UTF-8 encoding in file: {path}")]
    InvalidEncoding { path: String },

    #[error("I/O error reading file: {message}")]
    IoError { message: String },
}

impl FileProcessorError {
    /// Get the appropriate error code for this error type
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            FileProcessorError::FileNotFound { .. } => codes::file_processing::FILE_NOT_FOUND,
            FileProcessorError::FileTooLarge { .. } => codes::file_processing::FILE_TOO_LARGE,
            FileProcessorError::EmptyFile => codes::file_processing::EMPTY_FILE,
            FileProcessorError::InvalidEncoding { .. } => codes::file_processing::INVALID_ENCODING,
            FileProcessorError::IoError { .. } => codes::file_processing::IO_ERROR,
        }
    }

    /// Check if the error leaves the input unusable for tokenization
    pub fn is_recoverable(&self) -> bool {
        crate::logging::codes::is_recoverable(self.error_code().as_str())
    }
}

/// File metadata collected during processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetadata {
    /// File path as given
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// Number of lines in the file
    pub line_count: usize,
    /// When the file was read
    pub processed_at: DateTime<Utc>,
}

impl FileMetadata {
    /// Get file size in human-readable format
    pub fn human_readable_size(&self) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = self.size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", self.size, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }

    /// Check if the file crosses the compile-time large-file threshold
    pub fn is_large_file(&self) -> bool {
        self.size > LARGE_FILE_THRESHOLD
    }
}

/// File processing result containing source and metadata
#[derive(Debug, Clone)]
pub struct FileProcessingResult {
    /// File contents as a UTF-8 string
    pub source: String,
    /// File metadata
    pub metadata: FileMetadata,
}

impl FileProcessingResult {
    /// Get character count
    pub fn char_count(&self) -> usize {
        self.source.chars().count()
    }
}

/// Read a source file, enforcing the compile-time size limits.
pub fn process_file(file_path: &str) -> Result<FileProcessingResult, FileProcessorError> {
    let path = Path::new(file_path);

    log_debug!("Processing source file", "path" => file_path);

    let file_metadata = fs::metadata(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FileProcessorError::FileNotFound {
            path: file_path.to_string(),
        },
        _ => FileProcessorError::IoError {
            message: e.to_string(),
        },
    })?;

    let size = file_metadata.len();
    if size > MAX_FILE_SIZE {
        let error = FileProcessorError::FileTooLarge {
            size,
            max_size: MAX_FILE_SIZE,
        };
        log_error!(error.error_code(), "File exceeds size limit",
            "path" => file_path,
            "size" => size,
            "max_size" => MAX_FILE_SIZE);
        return Err(error);
    }

    if size == 0 {
        let error = FileProcessorError::EmptyFile;
        log_error!(error.error_code(), "File is empty", "path" => file_path);
        return Err(error);
    }

    let source = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => FileProcessorError::InvalidEncoding {
            path: file_path.to_string(),
        },
        ErrorKind::NotFound => FileProcessorError::FileNotFound {
            path: file_path.to_string(),
        },
        _ => FileProcessorError::IoError {
            message: e.to_string(),
        },
    })?;

    let metadata = FileMetadata {
        path: path.to_path_buf(),
        size,
        line_count: source.lines().count(),
        processed_at: Utc::now(),
    };

    if metadata.is_large_file() {
        log_warning!("Processing large source file",
            "path" => file_path,
            "size" => metadata.human_readable_size());
    }

    log_success!(
        codes::success::FILE_PROCESSING_SUCCESS,
        "File processed successfully",
        "path" => file_path,
        "size" => metadata.human_readable_size(),
        "lines" => metadata.line_count
    );

    Ok(FileProcessingResult { source, metadata })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_process_valid_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("script.gml");
        fs::write(&file_path, "var x = 1;\nexit;\n").unwrap();

        let result = process_file(file_path.to_str().unwrap()).unwrap();
        assert_eq!(result.source, "var x = 1;\nexit;\n");
        assert_eq!(result.metadata.line_count, 2);
        assert_eq!(result.metadata.size, 17);
        assert_eq!(result.char_count(), 17);
    }

    #[test]
    fn test_missing_file() {
        let result = process_file("/nonexistent/script.gml");
        assert!(matches!(
            result,
            Err(FileProcessorError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_empty_file_rejected() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("empty.gml");
        fs::write(&file_path, "").unwrap();

        let result = process_file(file_path.to_str().unwrap());
        assert!(matches!(result, Err(FileProcessorError::EmptyFile)));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("binary.gml");
        fs::write(&file_path, [0xff, 0xfe, 0x00, 0x01]).unwrap();

        let result = process_file(file_path.to_str().unwrap());
        assert!(matches!(
            result,
            Err(FileProcessorError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn test_error_codes() {
        let error = FileProcessorError::FileNotFound {
            path: "script.gml".to_string(),
        };
        assert_eq!(error.error_code().as_str(), "E005");

        let error = FileProcessorError::EmptyFile;
        assert_eq!(error.error_code().as_str(), "E007");
    }

    #[test]
    fn test_human_readable_size() {
        let metadata = FileMetadata {
            path: PathBuf::from("script.gml"),
            size: 2048,
            line_count: 10,
            processed_at: Utc::now(),
        };
        assert_eq!(metadata.human_readable_size(), "2.00 KB");
        assert!(!metadata.is_large_file());
    }
}
