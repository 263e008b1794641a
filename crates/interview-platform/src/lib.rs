pub mod storage;
pub mod http;
pub mod select;

#[cfg(test)]
mod tests;

pub use http::HttpInterviewApi;
pub use select::connect;
