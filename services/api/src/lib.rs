mod cli;
mod commands;
mod infra;
mod routes;
mod server;

pub use infra::AppState;
pub use routes::router;

use rehab_ai::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
