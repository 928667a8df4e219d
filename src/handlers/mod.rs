pub mod waitlist;
pub mod calculator;
