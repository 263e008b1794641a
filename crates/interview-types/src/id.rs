//! Opaque record identifiers.
//!
//! Every id is a UUID v4 with a short kind prefix, so ids are never reused
//! and a stray id in a log line says what it points at.

pub const INTERVIEW_PREFIX: &str = "intv_";
pub const SESSION_PREFIX: &str = "chat_";
pub const MESSAGE_PREFIX: &str = "msg_";
pub const EVALUATION_PREFIX: &str = "eval_";

pub fn new_id(prefix: &str) -> String {
    format!("{}{}", prefix, uuid::Uuid::new_v4().simple())
}
