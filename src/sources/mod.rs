pub mod http;
pub mod newsapi;
pub mod traits;

pub use http::ReqwestTransport;
pub use newsapi::NewsApiConfig;
pub use traits::{HttpResponse, HttpTransport, TransportError};
