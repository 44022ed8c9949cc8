use std::str::FromStr;

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer for the keyword field: must be a string with at least one keyword
pub fn deserialize_base<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    if s.trim().is_empty() {
        return Err(Error::custom("base keywords cannot be empty"));
    }

    Ok(s)
}

/// Custom deserializer for optional text fields: `null` reads as an empty string
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Custom deserializer for selector fields: unknown codes and non-strings fall back to the default
pub fn deserialize_lenient_enum<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s.parse().unwrap_or_else(|_| {
            tracing::debug!("Unknown selector value {:?}, using default", s);
            T::default()
        })),
        _ => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{FileType, SearchCriteria, TermsAppearing};

    #[test]
    fn test_record_with_all_fields() {
        let json = r#"{
            "base": "rust",
            "exactMatch": "borrow checker",
            "exclude": "game",
            "domain": "doc.rust-lang.org",
            "termsAppearing": "title",
            "fileType": "pdf"
        }"#;

        let criteria: SearchCriteria = serde_json::from_str(json).unwrap();
        assert_eq!(criteria.base, "rust");
        assert_eq!(criteria.exact_match, "borrow checker");
        assert_eq!(criteria.exclude, "game");
        assert_eq!(criteria.domain, "doc.rust-lang.org");
        assert_eq!(criteria.terms_appearing, TermsAppearing::Title);
        assert_eq!(criteria.file_type, FileType::Pdf);
    }

    #[test]
    fn test_record_missing_optional_fields() {
        let criteria: SearchCriteria = serde_json::from_str(r#"{"base": "cats"}"#).unwrap();
        assert_eq!(criteria, SearchCriteria::new("cats"));
    }

    #[test]
    fn test_record_with_null_fields() {
        let json = r#"{"base":"cats","exactMatch":null,"domain":null,"fileType":null}"#;
        let criteria: SearchCriteria = serde_json::from_str(json).unwrap();
        assert_eq!(criteria, SearchCriteria::new("cats"));
    }

    #[test]
    fn test_unknown_selector_values_default_to_any() {
        let json = r#"{"base":"cats","termsAppearing":"body","fileType":"exe"}"#;
        let criteria: SearchCriteria = serde_json::from_str(json).unwrap();
        assert_eq!(criteria.terms_appearing, TermsAppearing::Any);
        assert_eq!(criteria.file_type, FileType::Any);
    }

    #[test]
    fn test_non_string_selector_defaults_to_any() {
        let json = r#"{"base":"cats","termsAppearing":3,"fileType":{"code":"pdf"}}"#;
        let criteria: SearchCriteria = serde_json::from_str(json).unwrap();
        assert_eq!(criteria.terms_appearing, TermsAppearing::Any);
        assert_eq!(criteria.file_type, FileType::Any);
    }

    #[test]
    fn test_record_missing_base_is_rejected() {
        let result = serde_json::from_str::<SearchCriteria>(r#"{"exactMatch":"a"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_with_blank_base_is_rejected() {
        let result = serde_json::from_str::<SearchCriteria>(r#"{"base":"   "}"#);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_non_string_text_field_is_rejected() {
        let result = serde_json::from_str::<SearchCriteria>(r#"{"base":"a","domain":42}"#);
        assert!(result.is_err());
    }
}
