pub mod cli;
pub mod config;
pub mod core;
pub mod extractors;
pub mod server;
pub mod utils;

pub use core::{
    is_valid_source, ExtractionPipeline, ExtractionResult, HttpFetcher, MemoryCache, PageFetcher,
    Provenance, ResultCache, TagError, TagList, TagService, TagStrategy,
};
pub use server::{router, AppState, RateLimiter, TagsResponse};
