//! User Entity Implementation
//!
//! 사용자 엔티티와 문서 저장소 표현(BSON 문서) 사이의 매핑을 담당합니다.

use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

/// placeholder 문서를 식별하는 필드 이름
pub const PLACEHOLDER_FIELD: &str = "placeholder";

/// 사용자 엔티티
///
/// 시스템의 유일한 리소스입니다. `id`는 저장소가 생성 시 할당하며 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// 저장소가 할당한 문서 ID
    pub id: String,
    /// 사용자 이름 (3-50자)
    pub name: String,
    /// 이메일 주소
    pub email: String,
    /// 주소
    pub address: String,
}

impl User {
    /// 문서 ID와 필드로부터 사용자를 구성합니다.
    ///
    /// 누락되었거나 문자열이 아닌 필드는 빈 문자열로 읽습니다.
    pub fn from_document(id: impl Into<String>, fields: &Document) -> Self {
        let text = |key: &str| fields.get_str(key).unwrap_or_default().to_string();

        Self {
            id: id.into(),
            name: text("name"),
            email: text("email"),
            address: text("address"),
        }
    }
}

/// 빈 컬렉션을 열거 가능한 상태로 유지하기 위한 placeholder 문서인지 확인합니다.
pub fn is_placeholder(fields: &Document) -> bool {
    fields.get_bool(PLACEHOLDER_FIELD).unwrap_or(false)
}

/// placeholder 문서 본문
pub fn placeholder_document() -> Document {
    doc! { PLACEHOLDER_FIELD: true }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_document_reads_fields() {
        let fields = doc! {
            "name": "Alice Smith",
            "email": "a@b.com",
            "address": "1 Main St",
        };

        let user = User::from_document("abc", &fields);

        assert_eq!(
            user,
            User {
                id: "abc".to_string(),
                name: "Alice Smith".to_string(),
                email: "a@b.com".to_string(),
                address: "1 Main St".to_string(),
            }
        );
    }

    #[test]
    fn test_from_document_defaults_missing_fields() {
        let user = User::from_document("abc", &doc! { "name": 42 });

        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(is_placeholder(&placeholder_document()));
        assert!(!is_placeholder(&doc! { "placeholder": "yes" }));
        assert!(!is_placeholder(&doc! { "name": "Alice" }));
    }

    #[test]
    fn test_serializes_wire_shape() {
        let user = User::from_document("id-1", &doc! { "name": "Bob", "email": "b@c.io", "address": "x" });
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "id": "id-1", "name": "Bob", "email": "b@c.io", "address": "x" })
        );
    }
}
