//! Configuration management for the N-Queens game

pub mod settings;

pub use settings::{
    Settings, GameConfig, AnimationConfig, PersistenceConfig, OutputConfig,
    OutputFormat, CliOverrides,
};
