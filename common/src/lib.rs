//! Photo Shopping Common Library
//!
//! CLIとWeb(WASM)で共有される型と検索フロー

pub mod types;
pub mod error;
pub mod session;
pub mod card;
pub mod parser;
pub mod view;
pub mod transport;
pub mod controller;

pub use types::{PhotoCategory, PhotoFile, PhotoForm, ProductResult};
pub use error::{Error, Result};
pub use session::UploadSession;
pub use card::{card_html, html_escape, CARD_CONTAINER_CLASS};
pub use parser::{parse_search_response, SearchResponse};
pub use view::UploadView;
pub use transport::{HttpReply, UploadTransport, UPLOAD_URL_ENDPOINT};
pub use controller::{PhotoSearch, LOADING_PROMPT};
