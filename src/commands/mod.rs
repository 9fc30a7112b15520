pub mod booking;
pub mod cancel;
pub mod start;
pub mod total;
