pub mod backoff;
pub mod transport;
