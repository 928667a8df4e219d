pub mod waitlist;
pub mod calculation;
