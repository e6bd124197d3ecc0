//! 외부 미디어 저장소 연동

pub mod cloudinary_service;

pub use cloudinary_service::{CloudinaryStorage, MediaStorage};
#[cfg(test)]
pub use cloudinary_service::fake::FakeMediaStorage;
