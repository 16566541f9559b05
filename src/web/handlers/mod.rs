pub mod error;
pub mod health;
pub mod reload;
pub mod search;

pub use error::AppError;
pub use health::health_check;
pub use reload::reload_store;
pub use search::search_posters;
