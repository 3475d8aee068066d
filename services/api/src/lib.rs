mod assess;
mod cli;
mod infra;
mod routes;
mod server;

use facial_harmony::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
