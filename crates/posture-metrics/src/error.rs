//! 测量配置错误类型

use thiserror::Error;

/// 测量定义在构造期的校验错误
///
/// 评估函数本身对合法定义是全函数，错误只会出现在配置加载阶段。
#[derive(Debug, Error)]
pub enum MetricError {
    #[error("理想区间无效: ideal_min {min} 大于 ideal_max {max}")]
    InvertedRange { min: f64, max: f64 },

    #[error("测量边界必须为有限数值: {field} = {value}")]
    NonFiniteBound { field: &'static str, value: f64 },

    #[error("警告阈值不能为负数: {0}")]
    NegativeWarningThreshold(f64),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, MetricError>;
