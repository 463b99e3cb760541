//! 游戏配置错误类型

use thiserror::Error;

/// 难度配置在构造期的校验错误
///
/// 刷新与结算函数对合法配置是全函数，错误只会出现在配置加载阶段。
#[derive(Debug, Error)]
pub enum GameConfigError {
    #[error("概率必须在 [0,1] 区间内: {field} = {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },

    #[error("金色与炸弹概率之和不能超过 1: {sum}")]
    ChanceSumExceedsOne { sum: f64 },

    #[error("时长必须为正数: {field}")]
    ZeroDuration { field: &'static str },

    #[error("同屏地鼠上限必须在 1-9 之间: {0}")]
    InvalidMaxMoles(u8),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, GameConfigError>;
