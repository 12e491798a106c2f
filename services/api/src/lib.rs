mod cli;
mod infra;
mod parse;
mod routes;
mod server;

use rea_transmorgrifier::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
