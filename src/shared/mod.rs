pub mod constants;
pub mod content_type;
pub mod keys;
pub mod test_helpers;
