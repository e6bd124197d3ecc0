//! 계정 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결과 미디어 저장소를 설정하고 사용자/관리자 계정 REST API를 제공합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use account_service_backend::config::{AppConfig, CorsOrigins};
use account_service_backend::core::{AccountStores, AppError, AppState};
use account_service_backend::db::Database;
use account_service_backend::domain::entities::accounts::AccountKind;
use account_service_backend::repositories::accounts::AccountRepository;
use account_service_backend::routes::configure_all_routes;
use account_service_backend::services::auth::PasswordHasher;
use account_service_backend::services::storage::CloudinaryStorage;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_status = load_env_file();
    init_logging();
    info!("{}", env_status);

    info!("🚀 계정 서비스 시작중...");

    let config = AppConfig::from_env().map_err(into_io_error)?;
    info!("환경: {:?}, bcrypt cost: {}", config.environment, config.bcrypt_cost);

    let state = initialize_state(&config).await.map_err(into_io_error)?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(config, state).await
}

/// MongoDB 연결, 인덱스 생성, 서비스 조립
///
/// # Errors
///
/// * `AppError::DatabaseError` - 연결 실패 또는 인덱스 생성 실패
async fn initialize_state(config: &AppConfig) -> Result<AppState, AppError> {
    info!("📡 데이터베이스 연결 중...");
    let database = Database::connect(&config.database).await?;

    let users = Arc::new(AccountRepository::new(&database, AccountKind::User));
    let admins = Arc::new(AccountRepository::new(&database, AccountKind::Admin));
    users.create_indexes().await?;
    admins.create_indexes().await?;

    let media = Arc::new(CloudinaryStorage::new(config.storage.clone()));

    Ok(AppState::new(
        config.tokens.clone(),
        PasswordHasher::new(config.bcrypt_cost),
        config.uploads.clone(),
        AccountStores { users, admins },
        media,
    ))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(config: AppConfig, state: AppState) -> io::Result<()> {
    let bind_address = config.bind_address.clone();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1/users, http://{}/api/v1/admin", bind_address, bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second,
        config.rate_limit.burst_size
    );

    let cors_origins = config.cors_origins.clone();

    HttpServer::new(move || {
        let state = state.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(move |cfg| configure_all_routes(cfg, &state))
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// 로거 초기화 전에 호출되므로 결과 메시지를 반환하고, 호출자가 로깅합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => format!("Current profile: {}, {} 파일 로드 됨", profile, file),
        Err(e) => format!("Current profile: {}, 환경 파일 로드 실패: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=account_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// `CORS_ORIGIN`이 `*`이면 모든 Origin을 허용하고, 아니면 쉼표로 구분된 목록만 허용합니다.
/// 인증 쿠키를 주고받기 위해 자격 증명을 지원합니다.
fn configure_cors(origins: &CorsOrigins) -> Cors {
    let cors = match origins {
        CorsOrigins::Any => Cors::default().allow_any_origin(),
        CorsOrigins::List(list) => list
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin)),
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

fn into_io_error(err: AppError) -> io::Error {
    error!("❌ 초기화 실패: {}", err);
    io::Error::other(err.to_string())
}
