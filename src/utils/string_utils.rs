//! # 문자열 유틸리티
//!
//! 요청 필드 검증과 정리에 쓰이는 공통 함수들입니다.

use serde::Deserialize;
use validator::{ValidateEmail, ValidationError};

pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 빈 문자열과 공백만 있는 문자열을 `None`으로 역직렬화합니다.
///
/// 부분 수정 요청에서 "값 없음 = 변경하지 않음"을 표현하는 데 사용합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// `validator`의 custom 검증 함수: 공백만 있는 값을 거부합니다.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("blank")
            .with_message("값이 비어 있습니다".into()));
    }
    Ok(())
}

/// `validator`의 custom 검증 함수: 이메일은 선택이지만 값이 있으면 형식을 검사합니다.
pub fn validate_optional_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_email() {
        return Ok(());
    }
    Err(ValidationError::new("invalid_email")
        .with_message("유효한 이메일 주소를 입력해주세요".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  Hi2  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("Hi2".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": ""}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.optional_field, None);
    }

    #[test]
    fn test_validate_optional_email() {
        assert!(validate_optional_email("").is_ok());
        assert!(validate_optional_email("a@x.com").is_ok());
        assert!(validate_optional_email("not-an-email").is_err());
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Hi").is_ok());
        assert!(validate_not_blank("  ").is_err());
    }
}
