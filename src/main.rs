use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use std::time::Duration;
use tracing::{debug, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use rust_school_admin::config::AppConfig;
use rust_school_admin::models::AppStartTime;
use rust_school_admin::routes;
use rust_school_admin::runtime::lifetime;
use rust_school_admin::utils::{json_error_handler, path_error_handler, query_error_handler};

/// 开发环境输出带源码位置的彩色日志，其余环境输出 JSON；返回的 guard 需要存活到进程结束
fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.app.log_level))
        .with_writer(writer)
        .event_format(tracing_subscriber::fmt::format().with_level(true).with_ansi(true));

    if config.is_development() {
        builder.with_file(true).with_line_number(true).init();
    } else {
        builder.json().init();
    }
    guard
}

/// 按配置构造 CORS；来源列表含 `*` 时放开所有来源
fn build_cors(config: &AppConfig) -> Cors {
    let cors = &config.cors;
    let mut builder = Cors::default()
        .allowed_methods(cors.allowed_methods.iter().map(String::as_str))
        .allowed_headers(cors.allowed_headers.iter().map(String::as_str))
        .max_age(cors.max_age);

    if cors.allowed_origins.iter().any(|origin| origin == "*") {
        builder = builder.allow_any_origin();
    } else {
        for origin in &cors.allowed_origins {
            builder = builder.allowed_origin(origin);
        }
        // 刷新令牌放在 Cookie 中，需要携带凭据
        builder = builder.supports_credentials();
    }
    builder
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    setup_panic!();
    AppConfig::init().map_err(|e| std::io::Error::other(format!("Invalid configuration: {e}")))?;
    let config = AppConfig::get();

    let _log_guard = init_tracing(config);

    warn!(
        "Starting {} v{} ({} environment)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.app.environment
    );

    let startup = lifetime::startup::prepare_server_startup()
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let storage = startup.storage.clone();
    let cache = startup.cache.clone();

    debug!(
        "Storage, cache and admin bootstrap ready in {} ms",
        chrono::Utc::now()
            .signed_duration_since(app_start_time.start_datetime)
            .num_milliseconds()
    );

    warn!("Using {} worker(s)", config.server.workers);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(config))
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Connection", "keep-alive"))
                    .add((
                        "Keep-Alive",
                        format!("timeout={}, max=1000", config.server.timeouts.keep_alive),
                    ))
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            // 参数解析失败统一返回 ApiResponse
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(cache.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .app_data(web::PayloadConfig::new(
                config.server.limits.max_payload_size,
            ))
            .configure(routes::configure_auth_routes)
            .configure(routes::configure_user_routes)
            .configure(routes::configure_teachers_routes)
            .configure(routes::configure_students_routes)
            .configure(routes::configure_curriculum_routes) // 课程、模块、科目
            .configure(routes::configure_school_years_routes)
            .configure(routes::configure_classes_routes)
            .configure(routes::configure_classrooms_routes)
            .configure(routes::configure_rosters_routes) // 排课与日历
            .configure(routes::configure_absences_routes)
            .configure(routes::configure_assessments_routes)
            .configure(routes::configure_results_routes)
            .configure(routes::configure_finance_routes)
            .configure(routes::configure_quran_routes)
            .configure(routes::configure_quran_logs_routes)
            .configure(routes::configure_dashboard_routes)
    })
    .keep_alive(Duration::from_secs(config.server.timeouts.keep_alive))
    .client_request_timeout(Duration::from_millis(config.server.timeouts.client_request))
    .client_disconnect_timeout(Duration::from_millis(
        config.server.timeouts.client_disconnect,
    ))
    .workers(config.server.workers);

    let server = {
        #[cfg(unix)]
        {
            if let Some(socket_path) = config.unix_socket_path() {
                warn!("Starting server on Unix socket: {}", socket_path);
                if std::path::Path::new(socket_path).exists() {
                    std::fs::remove_file(socket_path)?;
                }
                server.bind_uds(socket_path)?
            } else {
                let bind_address = config.server_bind_address();
                warn!("Starting server at http://{}", bind_address);
                server.bind(bind_address)?
            }
        }

        #[cfg(not(unix))]
        {
            let bind_address = config.server_bind_address();
            warn!("Starting server at http://{}", bind_address);
            server.bind(bind_address)?
        }
    }
    .run();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Graceful shutdown: all tasks completed");
        }
    }

    Ok(())
}
