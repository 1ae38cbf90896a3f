pub mod gemini;
pub mod request;
pub mod response;
