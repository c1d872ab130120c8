mod api_envelope;
mod health;
mod process_bkd;

pub use api_envelope::{ApiEnvelope, ApiError};
pub use health::health_handler;
pub use process_bkd::{
    WrappedPayload, method_not_allowed_handler, preflight_handler, process_bkd_handler,
    wrapped_handler,
};
