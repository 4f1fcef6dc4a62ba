pub mod leveling;
pub mod ticket;
