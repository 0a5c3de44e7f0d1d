pub mod metrics;
pub mod request_id;

pub use self::metrics::track_requests;
pub use self::request_id::request_id_middleware;
