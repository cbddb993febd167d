pub mod assessment;
pub mod classification;
pub mod confidence;
pub mod engine;
pub mod model;
pub mod render;
pub mod sections;

pub use engine::{interpret, interpret_with_config, InterpretConfig, DEFAULT_CONFIDENCE};
pub use model::{AnalysisVerdict, ConfidenceBand, DetailSection, Likelihood, MaliciousIntent};
