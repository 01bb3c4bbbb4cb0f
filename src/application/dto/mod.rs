/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod why_request;
mod why_response;

pub use output_format::OutputFormat;
pub use why_request::{
    WhyRequest, WhyRequestBuilder, DEFAULT_CHAIN_SEARCH_LIMIT, DEFAULT_DB_PATH,
};
pub use why_response::WhyResponse;
