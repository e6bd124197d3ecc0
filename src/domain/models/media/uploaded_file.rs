//! 업로드 파일 모델
//!
//! 멀티파트 요청에서 읽어 들인 파일과, 저장소 업로드 결과를 표현합니다.

/// 메모리에 버퍼링된 업로드 파일
#[derive(Clone)]
pub struct UploadedFile {
    /// 멀티파트 필드 이름 (`avatar`, `coverImage`)
    pub field_name: String,
    /// 클라이언트가 보낸 원본 파일 이름
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// 저장소에 전달할 파일 이름. 원본 이름이 없으면 필드 이름을 사용합니다.
    pub fn upload_name(&self) -> String {
        self.file_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.field_name.clone())
    }
}

impl std::fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedFile")
            .field("field_name", &self.field_name)
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// 저장소 업로드 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    /// 공개 접근 가능한 URL
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_name_falls_back_to_field_name() {
        let file = UploadedFile {
            field_name: "avatar".to_string(),
            file_name: Some("  ".to_string()),
            content_type: None,
            bytes: vec![1, 2, 3],
        };

        assert_eq!(file.upload_name(), "avatar");
        assert_eq!(file.len(), 3);
    }
}
