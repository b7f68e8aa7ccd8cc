pub mod bit_vector;
pub mod bitmap_index;

pub use bit_vector::BitVector;
pub use bitmap_index::{BitmapIndex, BitmapIndexBuilder};

#[cfg(test)]
mod bitmap_index_test;
