pub mod distribution;
pub mod summary;
pub mod table;
pub mod trend;
