//! 사용자 입력 검증
//!
//! 저장소에 쓰기 전에 후보 사용자 레코드의 구조적 정합성을 확인합니다.
//! 모든 검사는 부수 효과가 없으며, 필드별 오류를 순서대로 누적합니다.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateLength;

use crate::domain::dto::users::request::UserPayload;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const NAME_LENGTH: &str = "Name must be between 3 and 50 characters long.";
pub const INVALID_EMAIL: &str = "Invalid email format";
pub const ADDRESS_REQUIRED: &str = "Address is required.";

const NAME_MIN_CHARS: u64 = 3;
const NAME_MAX_CHARS: u64 = 50;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex")
});

/// 검증 결과
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// 이름 검증. 빈 값이면 길이 검사는 건너뜁니다.
pub fn validate_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some(NAME_REQUIRED);
    }

    // 길이는 UTF-16 코드 유닛이 아니라 유니코드 스칼라 값(char) 개수다.
    // 서로게이트 쌍 문자(이모지 등)는 한 글자로 센다.
    if !name.validate_length(Some(NAME_MIN_CHARS), Some(NAME_MAX_CHARS), None) {
        return Some(NAME_LENGTH);
    }

    None
}

pub fn validate_email(email: &str) -> Option<&'static str> {
    if EMAIL_REGEX.is_match(email) {
        None
    } else {
        Some(INVALID_EMAIL)
    }
}

pub fn validate_address(address: &str) -> Option<&'static str> {
    address.is_empty().then_some(ADDRESS_REQUIRED)
}

/// 후보 사용자 전체를 검증합니다.
///
/// 이름, 이메일, 주소 순서로 오류를 모으며 필드 간 단락 평가는 하지 않습니다.
/// 누락된 필드는 빈 문자열로 취급합니다.
pub fn validate_user(candidate: &UserPayload) -> ValidationResult {
    let errors = [
        validate_name(candidate.name.as_deref().unwrap_or_default()),
        validate_email(candidate.email.as_deref().unwrap_or_default()),
        validate_address(candidate.address.as_deref().unwrap_or_default()),
    ]
    .into_iter()
    .flatten()
    .map(str::to_string)
    .collect();

    ValidationResult::from_errors(errors)
}
