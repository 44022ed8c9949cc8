use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the search terms have to appear on a result page
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TermsAppearing {
    #[default]
    Any,
    Title,
    Text,
    Url,
    Links,
}

impl TermsAppearing {
    pub const ALL: [TermsAppearing; 5] = [
        TermsAppearing::Any,
        TermsAppearing::Title,
        TermsAppearing::Text,
        TermsAppearing::Url,
        TermsAppearing::Links,
    ];

    /// Stored code, e.g. `title`
    pub fn code(self) -> &'static str {
        match self {
            TermsAppearing::Any => "any",
            TermsAppearing::Title => "title",
            TermsAppearing::Text => "text",
            TermsAppearing::Url => "url",
            TermsAppearing::Links => "links",
        }
    }

    /// Query operator that restricts matching, `None` for [`TermsAppearing::Any`]
    pub fn operator(self) -> Option<&'static str> {
        match self {
            TermsAppearing::Any => None,
            TermsAppearing::Title => Some("allintitle:"),
            TermsAppearing::Text => Some("allintext:"),
            TermsAppearing::Url => Some("allinurl:"),
            TermsAppearing::Links => Some("allinanchor:"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TermsAppearing::Any => "Anywhere in the page",
            TermsAppearing::Title => "In the title of the page",
            TermsAppearing::Text => "In the text of the page",
            TermsAppearing::Url => "In the URL of the page",
            TermsAppearing::Links => "In links to the page",
        }
    }
}

impl FromStr for TermsAppearing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|terms| terms.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown terms scope: {}", s))
    }
}

impl fmt::Display for TermsAppearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// File format restriction for results
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    #[default]
    Any,
    Pdf,
    Ps,
    Dwf,
    Kml,
    Kmz,
    Xls,
    Ppt,
    Doc,
    Rtf,
    Swf,
}

impl FileType {
    pub const ALL: [FileType; 11] = [
        FileType::Any,
        FileType::Pdf,
        FileType::Ps,
        FileType::Dwf,
        FileType::Kml,
        FileType::Kmz,
        FileType::Xls,
        FileType::Ppt,
        FileType::Doc,
        FileType::Rtf,
        FileType::Swf,
    ];

    pub fn code(self) -> &'static str {
        match self {
            FileType::Any => "any",
            FileType::Pdf => "pdf",
            FileType::Ps => "ps",
            FileType::Dwf => "dwf",
            FileType::Kml => "kml",
            FileType::Kmz => "kmz",
            FileType::Xls => "xls",
            FileType::Ppt => "ppt",
            FileType::Doc => "doc",
            FileType::Rtf => "rtf",
            FileType::Swf => "swf",
        }
    }

    /// Code emitted after `filetype:`, `None` for [`FileType::Any`]
    pub fn filter_code(self) -> Option<&'static str> {
        match self {
            FileType::Any => None,
            other => Some(other.code()),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileType::Any => "Any format",
            FileType::Pdf => "Adobe Acrobat PDF (.pdf)",
            FileType::Ps => "Adobe PostScript (.ps)",
            FileType::Dwf => "Autodesk DWF (.dwf)",
            FileType::Kml => "Google Earth KML (.kml)",
            FileType::Kmz => "Google Earth KMZ (.kmz)",
            FileType::Xls => "Microsoft Excel (.xls)",
            FileType::Ppt => "Microsoft PowerPoint (.ppt)",
            FileType::Doc => "Microsoft Word (.doc)",
            FileType::Rtf => "Rich Text Format (.rtf)",
            FileType::Swf => "Shockwave Flash (.swf)",
        }
    }
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|file_type| file_type.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown file type: {}", s))
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Rejected form input, reported before any query is synthesized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter at least one keyword")]
    MissingKeyword,
}

/// Structured search criteria collected from the form.
///
/// Also the on-disk history record: field names are serialized in camelCase and
/// enum values as lowercase codes. Optional fields tolerate being absent or
/// `null`, and unknown enum codes read back as `Any`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_base")]
    pub base: String,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient_string")]
    pub exact_match: String,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient_string")]
    pub exclude: String,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient_string")]
    pub domain: String,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient_enum")]
    pub terms_appearing: TermsAppearing,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient_enum")]
    pub file_type: FileType,
}

impl SearchCriteria {
    /// Criteria with only the keywords set
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into(), ..Self::default() }
    }

    pub fn with_exact_match(mut self, exact_match: impl Into<String>) -> Self {
        self.exact_match = exact_match.into();
        self
    }

    pub fn with_exclude(mut self, exclude: impl Into<String>) -> Self {
        self.exclude = exclude.into();
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_terms_appearing(mut self, terms_appearing: TermsAppearing) -> Self {
        self.terms_appearing = terms_appearing;
        self
    }

    pub fn with_file_type(mut self, file_type: FileType) -> Self {
        self.file_type = file_type;
        self
    }

    /// Check the form-level constraints that synthesis relies on
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingKeyword`] if `base` holds no keyword
    /// (empty or whitespace only).
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base.trim().is_empty() {
            return Err(ValidationError::MissingKeyword);
        }
        Ok(())
    }
}
