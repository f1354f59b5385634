pub mod record;
pub mod streak;
