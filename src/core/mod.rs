pub mod cache;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod service;
pub mod tags;
pub mod validator;

pub use cache::{MemoryCache, ResultCache};
pub use error::{FetchError, TagError};
pub use extractor::{ExtractionPipeline, TagStrategy};
pub use fetcher::{HttpFetcher, PageFetcher};
pub use service::TagService;
pub use tags::{ExtractionResult, Provenance, TagList, MAX_TAGS};
pub use validator::{is_valid_source, parse_source};
