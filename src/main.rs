//! # studyplan 웹 서버 진입점
//!
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩
//! 4. API 라우터 설정
//! 5. HTTP 서버 시작

use anyhow::Result;
use axum::Router;
use studyplan::{config::Config, routes};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // RUST_LOG가 없으면 studyplan, tower_http, axum을 debug 레벨로
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studyplan=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        slot_policy = ?config.slot_policy,
        seeded = config.plan_seed.is_some(),
        "Starting studyplan server on {}:{}",
        config.host,
        config.port
    );

    let state = routes::AppState::from_config(&config);

    // 개발 환경에서는 모든 출처를 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // .nest(): /plans → /api/v1/plans
        .nest("/api/v1", routes::api_router(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
