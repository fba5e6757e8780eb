use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

use configs::AppConfig;

fn main() -> std::process::ExitCode {
    // load .env early so RUST_LOG, DATABASE_URL and friends apply
    dotenv().ok();

    let loaded = AppConfig::load_and_validate();
    let format = loaded.as_ref().map(|(cfg, _)| cfg.logging.format).unwrap_or_default();
    common::utils::logging::init_logging(format);
    info!(service = "inventory", event = "logger_init", "tracing subscriber initialized");

    let cfg = match loaded {
        // ensure_env reports which source was used
        Ok((cfg, _source)) => cfg,
        Err(e) => {
            error!(service = "inventory", event = "config_invalid", error = format!("{e:#}"), "configuration rejected");
            return std::process::ExitCode::FAILURE;
        }
    };

    // basic process context (nothing sensitive)
    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // log panics with process context
    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "inventory",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "inventory", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "inventory",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "inventory service starting"
    );

    let config_path = configs::config_path();
    rt.block_on(async move {
        if let Err(e) = common::env::ensure_env(&config_path).await {
            error!(service = "inventory", event = "env_check_failed", error = %e, "startup checks failed");
            return std::process::ExitCode::FAILURE;
        }

        // server::run stops on Ctrl+C after draining in-flight requests
        match server::run(cfg).await {
            Ok(()) => {
                info!(service = "inventory", event = "stop", %service_id, pid, "server stopped normally");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "inventory", event = "run_failed", error = %e, "server::run returned error");
                std::process::ExitCode::FAILURE
            }
        }
    })
}
