pub mod handlers;
pub mod local_transport;

use std::sync::Arc;

use handlers::{router, AppState};
use lambda_http::{run, tracing as lambda_tracing, Error};
use lib::env_keys::{AWS_LAMBDA_RUNTIME_API, BIND_ADDRESS, DEFAULT_BIND_ADDRESS};
use lib::service::CommonService;
use std::env::{self, set_var};


#[tokio::main]
async fn main() -> Result<(), Error> {
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    lambda_tracing::init_default_subscriber();

    let config = aws_config::load_from_env().await;
    let service = CommonService::new(&config);

    let app = router(AppState::new(Arc::new(service.bedrock)));

    if env::var(AWS_LAMBDA_RUNTIME_API).is_ok() {
        return run(app).await;
    }

    let bind_address = env::var(BIND_ADDRESS).unwrap_or(DEFAULT_BIND_ADDRESS.to_owned());
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Starting Emotion Detector on {}", bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
