pub mod daily;
pub mod rank;
