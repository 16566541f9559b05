pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{run_server, serve};
pub use state::AppState;
