// Domain layer - series and derived statistics models
pub mod series;
pub mod statistics;
pub mod trend;
