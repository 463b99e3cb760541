//! 游戏化规则引擎
//!
//! 康复应用的经验值、等级、徽章与连续天数计算核心。
//! 所有规则都是纯函数：输入为调用方组装的只读快照，输出为全新的值，
//! 状态的持久化由外部存储负责。

pub mod catalog;
pub mod error;
pub mod evaluator;
pub mod level;
pub mod models;
pub mod streak;
pub mod xp;

pub use catalog::{BadgeCatalog, BadgeCondition, BadgeDefinition};
pub use error::{GamificationError, Result};
pub use evaluator::BadgeEvaluator;
pub use level::{level_for, total_xp_for_level, xp_for_level, LevelInfo};
pub use models::{AnalysisRecord, Badge, BadgeCheckContext, ExerciseRecord, GameScore};
pub use streak::calculate_streak;
pub use xp::{BreakdownEntry, XpAction, XpCalculation, XpCalculator, XpContext, XpReward};
