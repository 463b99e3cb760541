//! 游戏化引擎错误类型

use thiserror::Error;

/// 徽章目录在构造期的校验错误
///
/// 规则计算本身对合法输入是全函数，错误只会出现在目录构造阶段。
#[derive(Debug, Error)]
pub enum GamificationError {
    #[error("徽章 id 重复: {id}")]
    DuplicateBadgeId { id: String },

    #[error("徽章目录为空")]
    EmptyCatalog,
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, GamificationError>;
