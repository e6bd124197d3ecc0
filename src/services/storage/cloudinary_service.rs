//! 미디어 저장소 서비스
//!
//! 아바타와 커버 이미지를 외부 파일 호스팅 서비스에 업로드하고 공개 URL을 돌려받습니다.
//! 기본 구현은 Cloudinary 호환 업로드 API(`POST {base}/{cloud}/auto/upload`)를 사용합니다.
//!
//! ## 서명 규칙
//!
//! ```text
//! signature = sha256_hex("timestamp={ts}" + api_secret)
//! ```

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use crate::config::StorageConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::media::{UploadedFile, UploadedMedia};

/// 미디어 업로드 추상화
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// 파일을 업로드하고 공개 URL을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ExternalServiceError` - 요청 실패, 비정상 응답, URL 누락
    async fn upload(&self, file: &UploadedFile) -> AppResult<UploadedMedia>;
}

/// 업로드 API 응답 중 필요한 필드
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    url: Option<String>,
}

/// Cloudinary 업로드 클라이언트
pub struct CloudinaryStorage {
    config: StorageConfig,
    client: reqwest::Client,
}

impl CloudinaryStorage {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn upload_url(&self) -> String {
        format!(
            "{}/{}/auto/upload",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.cloud_name
        )
    }

    fn sign(&self, timestamp: i64) -> String {
        signature(timestamp, &self.config.api_secret)
    }
}

#[async_trait]
impl MediaStorage for CloudinaryStorage {
    async fn upload(&self, file: &UploadedFile) -> AppResult<UploadedMedia> {
        let timestamp = Utc::now().timestamp();

        let mut part = Part::bytes(file.bytes.clone()).file_name(file.upload_name());
        if let Some(content_type) = file.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .map_err(|e| AppError::ValidationError(format!("Invalid content type: {}", e)))?;
        }

        let form = Form::new()
            .part("file", part)
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("signature_algorithm", "sha256")
            .text("signature", self.sign(timestamp));

        debug!("미디어 업로드 시작: {} ({} bytes)", file.upload_name(), file.len());

        let response = self.client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("미디어 업로드 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("미디어 업로드 실패 ({}): {}", status, error_text);
            return Err(AppError::ExternalServiceError(format!(
                "Media upload failed with status {}", status
            )));
        }

        let body = response
            .json::<UploadResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("미디어 업로드 응답 파싱 실패: {}", e)))?;

        body.secure_url
            .or(body.url)
            .map(|url| UploadedMedia { url })
            .ok_or_else(|| AppError::ExternalServiceError("Media upload returned no URL".to_string()))
    }
}

/// 업로드 요청 서명 (SHA-256 hex)
fn signature(timestamp: i64, api_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("timestamp={}{}", timestamp, api_secret).as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
pub mod fake {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use super::*;

    /// 네트워크 없이 URL을 돌려주는 테스트용 저장소
    #[derive(Default)]
    pub struct FakeMediaStorage {
        uploads: AtomicUsize,
        fail_cover_images: AtomicBool,
    }

    impl FakeMediaStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn uploads(&self) -> usize {
            self.uploads.load(Ordering::SeqCst)
        }

        /// `coverImage` 필드 업로드를 실패시킵니다.
        pub fn fail_cover_images(&self) {
            self.fail_cover_images.store(true, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl MediaStorage for FakeMediaStorage {
        async fn upload(&self, file: &UploadedFile) -> AppResult<UploadedMedia> {
            if file.field_name == "coverImage" && self.fail_cover_images.load(Ordering::SeqCst) {
                return Err(AppError::ExternalServiceError("upload rejected".to_string()));
            }

            self.uploads.fetch_add(1, Ordering::SeqCst);
            Ok(UploadedMedia {
                url: format!("https://media.test/{}", file.upload_name()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> CloudinaryStorage {
        CloudinaryStorage::new(StorageConfig {
            cloud_name: "demo".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            api_base_url: "https://api.cloudinary.com/v1_1/".to_string(),
        })
    }

    #[test]
    fn test_upload_url() {
        assert_eq!(
            storage().upload_url(),
            "https://api.cloudinary.com/v1_1/demo/auto/upload"
        );
    }

    #[test]
    fn test_signature_is_sha256_of_timestamp_and_secret() {
        let expected = {
            let mut hasher = Sha256::new();
            hasher.update(b"timestamp=1700000000secret");
            format!("{:x}", hasher.finalize())
        };

        assert_eq!(storage().sign(1_700_000_000), expected);
        assert_eq!(expected.len(), 64);
    }
}
