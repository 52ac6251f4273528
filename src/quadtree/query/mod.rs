pub mod find;
pub mod nearest_n;
pub mod range_circular;
