mod cli;
mod infra;
mod report;
mod routes;
mod server;

use guna_milan::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
