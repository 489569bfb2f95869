pub mod storage;
pub mod types;

pub use storage::{append, get_store_path, list, load_store, save_store};
pub use types::{PredictionRecord, PredictionStore};
