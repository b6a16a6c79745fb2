mod algo;

pub use algo::{direction_for_neighbor, neighbor_rotations};
