pub mod generator;
pub mod pools;
pub mod sampler;
