pub mod classifier;
pub mod filter;
pub mod normalizer;
pub mod onnx_model;
pub mod reference;
pub mod stability;
pub mod types;
pub mod vocabulary;
