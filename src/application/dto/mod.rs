mod analyze_request;
mod analyze_response;

pub use analyze_request::AnalyzeRequest;
pub use analyze_response::AnalyzeResponse;
