//! 业务服务模块

pub mod hash_emitter;

pub use hash_emitter::HashEmitter;
