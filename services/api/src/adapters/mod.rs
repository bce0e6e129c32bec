pub mod catalog_file;
pub mod chat_llm;

pub use catalog_file::{load_catalog, parse_catalog, CatalogFileError};
pub use chat_llm::OpenAiChatAdapter;
