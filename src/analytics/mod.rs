// Analytics layer - pure statistics over in-memory series
pub mod autocorrelation;
pub mod axis;
pub mod correlation;
pub mod descriptive;
pub mod filtering;
pub mod regression;
pub mod service;
pub mod trend;
