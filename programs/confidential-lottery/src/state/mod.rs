pub mod lottery;
pub mod ticket;

pub use lottery::*;
pub use ticket::*;
