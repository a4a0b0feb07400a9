//! Shared constants: date-time patterns, expression keywords, file extensions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Timestamp down to milliseconds, used for serial identifiers.
pub const YYYYMMDDHHMMSSSSS: &str = "yyyyMMddHHmmssSSS";
/// Timestamp down to seconds.
pub const YYYYMMDDHHMMSS: &str = "yyyyMMddHHmmss";
/// Calendar date.
pub const YYYYMMDD: &str = "yyyyMMdd";

/// Opening delimiter of a template token.
pub const TOKEN_OPEN: &str = "${";
/// Closing delimiter of a template token.
pub const TOKEN_CLOSE: char = '}';
/// Separates a directive name from its argument inside a token.
pub const ARROW: &str = "->";
/// Directive rendering the current time with a date pattern.
pub const CURRENT_TIMESTAMP: &str = "currentTimestamp";
/// Directive rendering the next sequence value with a numeric format.
pub const SERIAL_NUMBER: &str = "serialNumber";

/// Empty string.
pub const EMPTY: &str = "";
/// Single space.
pub const SPACE: &str = " ";
/// Dot, as used before a file extension.
pub const DOT: &str = ".";
/// Forward slash path separator.
pub const SLASH: &str = "/";
/// Backslash path separator.
pub const BACKSLASH: &str = "\\";
/// Hyphen.
pub const HYPHEN: &str = "-";
/// Underscore.
pub const UNDERLINE: &str = "_";
/// Comma.
pub const COMMA: &str = ",";
/// Colon.
pub const COLON: &str = ":";

/// Well-known file extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileExtension {
    /// Plain text.
    Txt,
    /// Comma separated values.
    Csv,
    /// JSON document.
    Json,
    /// Legacy Word document.
    Doc,
    /// Word document.
    Docx,
    /// Legacy Excel workbook.
    Xls,
    /// Excel workbook.
    Xlsx,
    /// PDF document.
    Pdf,
    /// Zip archive.
    Zip,
}

impl FileExtension {
    /// All known extensions.
    pub const ALL: [Self; 9] = [
        Self::Txt,
        Self::Csv,
        Self::Json,
        Self::Doc,
        Self::Docx,
        Self::Xls,
        Self::Xlsx,
        Self::Pdf,
        Self::Zip,
    ];

    /// The bare extension, e.g. `pdf`.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Doc => "doc",
            Self::Docx => "docx",
            Self::Xls => "xls",
            Self::Xlsx => "xlsx",
            Self::Pdf => "pdf",
            Self::Zip => "zip",
        }
    }

    /// The extension with its leading dot, e.g. `.pdf`.
    #[must_use]
    pub fn suffix(self) -> String {
        format!("{DOT}{}", self.extension())
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for FileExtension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim_start_matches('.');
        Self::ALL
            .into_iter()
            .find(|ext| ext.extension().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown file extension: {s}"))
    }
}
