//! 장소 이미지 파일 정리 유틸리티
//!
//! 장소 삭제 후 연결된 이미지 파일을 best-effort 로 제거합니다.
//! 이미지 정리는 트랜잭션 보장의 일부가 아니므로, 실패하더라도
//! 호출자에게 에러를 전파하지 않고 로그만 남깁니다.

use actix_web::web;
use log::warn;

/// 장소에 연결된 이미지 파일을 best-effort 로 삭제합니다.
///
/// 파일 시스템 작업은 블로킹이므로 actix의 블로킹 스레드 풀에서 수행합니다.
/// 외부 URL(`http://`, `https://`)을 가리키는 이미지 참조는 로컬에 파일이
/// 없으므로 건너뜁니다.
///
/// # Arguments
///
/// * `image_path` - 삭제할 이미지의 경로 또는 URL
///
/// # Examples
///
/// ```rust,ignore
/// use crate::utils::image_storage::remove_image;
///
/// // 트랜잭션 커밋 이후 호출
/// remove_image("uploads/images/abc123.png").await;
/// ```
pub async fn remove_image(image_path: &str) {
    // 외부 URL은 로컬 정리 대상이 아님
    if image_path.starts_with("http://") || image_path.starts_with("https://") {
        return;
    }

    let path = image_path.to_string();

    let result = web::block(move || std::fs::remove_file(&path)).await;

    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            warn!("이미지 파일 삭제 실패 ({}): {}", image_path, e);
        }
        Err(e) => {
            warn!("이미지 삭제 작업 실행 실패 ({}): {}", image_path, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_remove_image_skips_remote_urls() {
        // URL 참조는 파일 시스템을 건드리지 않고 조용히 반환되어야 함
        remove_image("https://cdn.example.com/images/photo.png").await;
        remove_image("http://cdn.example.com/images/photo.png").await;
    }

    #[actix_web::test]
    async fn test_remove_image_missing_file_is_best_effort() {
        // 존재하지 않는 파일 삭제는 에러를 전파하지 않아야 함
        remove_image("uploads/images/definitely-missing.png").await;
    }

    #[actix_web::test]
    async fn test_remove_image_deletes_local_file() {
        let dir = std::env::temp_dir();
        let path = dir.join("place_service_test_image.png");
        std::fs::write(&path, b"fake-image-bytes").unwrap();

        remove_image(path.to_str().unwrap()).await;

        assert!(!path.exists());
    }
}
