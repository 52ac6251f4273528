pub mod find;
pub mod nearest_n;
pub mod range_circular;
pub mod range_orthogonal;
