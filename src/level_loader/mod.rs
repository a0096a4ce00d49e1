pub mod error;
mod loader;

pub use error::LevelLoaderError;
pub use loader::{decode_level, encode_level, load_level_from_file, save_level_to_file};
