/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI adapter and the use case, keeping the
/// dependency analysis core isolated.
mod depend_info_request;
mod depend_info_response;
mod graph_format;

pub use depend_info_request::DependInfoRequest;
pub use depend_info_response::DependInfoResponse;
pub use graph_format::GraphFormat;
