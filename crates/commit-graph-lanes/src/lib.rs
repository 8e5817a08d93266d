mod assign;

pub use assign::{assign_lanes, OccupancyRow, PALETTE};
