pub mod genai;
pub mod improvement;
pub mod outputs;
pub mod rate;
pub mod scenario;
pub mod underwriting;
