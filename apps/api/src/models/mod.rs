pub mod envelope;
pub mod record;
pub mod request;
