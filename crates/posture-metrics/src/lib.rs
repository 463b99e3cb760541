//! 姿势测量指标评估库
//!
//! 将姿态估计管线输出的原始测量值映射为定性状态（正常/警告/危险）
//! 与 0-100 的量化评分。所有函数均为纯函数，不持有状态、不做 I/O。

pub mod error;
pub mod evaluator;
pub mod models;

pub use error::{MetricError, Result};
pub use evaluator::MeasurementEvaluator;
pub use models::{MeasurementDefinition, MeasurementKind, MeasurementStatus};
