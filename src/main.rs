//! 사용자 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 설정을 읽어 문서 저장소와 ID 토큰 검증기를 만든 뒤 `web::Data`로 주입합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use users_service_backend::config::{
    CorsConfig, Environment, IdentityConfig, ServerConfig, StoreBackend, StoreConfig,
};
use users_service_backend::db::Database;
use users_service_backend::repositories::users::{
    InMemoryUserStore, MongoUserStore, UserRepository, UserStore,
};
use users_service_backend::routes::configure_all_routes;
use users_service_backend::services::auth::{build_verifier, IdTokenVerifier};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 서비스 시작중... ({})", Environment::current().as_str());

    let store_config = StoreConfig::from_env().map_err(|e| {
        error!("저장소 설정 오류: {}", e);
        std::io::Error::other(e)
    })?;

    let identity_config = IdentityConfig::from_env().map_err(|e| {
        error!("인증 설정 오류: {}", e);
        std::io::Error::other(e)
    })?;

    let store = initialize_store(&store_config).await?;
    let repository = UserRepository::with_placeholder(store, store_config.placeholder_on_empty);

    let verifier = build_verifier(&identity_config);
    info!("🔐 ID 토큰 검증기: {}", verifier.provider().as_str());

    start_http_server(repository, verifier).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    repository: UserRepository,
    verifier: Arc<dyn IdTokenVerifier>,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let allowed_origins = CorsConfig::allowed_origins();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/users", bind_address);

    let repository = web::Data::new(repository);
    let verifier = web::Data::from(verifier);

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(repository.clone())
            .app_data(verifier.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address.as_str())?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 stderr로 남긴다
    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] env 파일 로드 실패: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 설정된 문서 저장소를 초기화합니다
///
/// MongoDB 연결 실패 시 서버는 시작되지 않습니다.
async fn initialize_store(config: &StoreConfig) -> std::io::Result<Arc<dyn UserStore>> {
    match config.backend {
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(config).await.map_err(|e| {
                error!("MongoDB 연결 실패: {}", e);
                std::io::Error::other(e)
            })?;

            info!("✅ 컬렉션: {}.{}", database.database_name(), config.collection_name);
            Ok(Arc::new(MongoUserStore::new(&database, &config.collection_name)))
        }
        StoreBackend::InMemory => {
            warn!("⚠️ 메모리 저장소 사용 중: 재시작 시 데이터가 사라집니다");
            Ok(Arc::new(InMemoryUserStore::new()))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin이 비어 있으면 모든 Origin을 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
