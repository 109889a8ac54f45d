//! 사용자 생성/수정 요청 DTO

use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};

/// 사용자 생성 및 부분 수정 요청 본문
///
/// 모든 필드가 선택 사항이며 알 수 없는 필드는 무시됩니다.
/// 본문의 `id`는 생성 시 무시되고 수정 시 경로의 ID로 덮어씁니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl UserPayload {
    /// 경로에서 받은 ID로 본문의 ID를 대체합니다.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// 전달된 필드만 담은 저장용 문서를 만듭니다. `id`는 포함하지 않습니다.
    pub fn to_document(&self) -> Document {
        let mut fields = doc! {};

        for (key, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("address", &self.address),
        ] {
            if let Some(value) = value {
                fields.insert(key, value.as_str());
            }
        }

        fields
    }
}
