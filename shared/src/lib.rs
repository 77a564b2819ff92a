//! Wire contract between the quiz admin frontend and its backend:
//! records, request bodies, the endpoint table, errors and configuration.

pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;

pub use config::{AppConfig, ConfigError, LogLevel};
pub use endpoints::{encode_segment, Endpoint, HttpMethod, QuestionScope};
pub use error::ApiError;
pub use models::{
    Category, CategoryPayload, Community, Entity, EntityKind, Level, LevelRef, NamePayload,
    Question, QuestionPayload,
};
