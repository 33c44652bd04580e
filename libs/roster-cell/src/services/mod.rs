pub mod booking;
pub mod hospital;
pub mod roster;

pub use hospital::{find_hospital, hospitals};
pub use roster::Roster;
