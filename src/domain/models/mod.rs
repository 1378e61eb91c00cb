pub mod message;
pub mod response;

pub use message::{MAX_REGISTRATION_IDS, MAX_TIME_TO_LIVE, Message, Notification, Priority};
pub use response::{DeliveryResult, ErrorCode, Response};
