//! 打地鼠规则引擎
//!
//! 手势追踪小游戏的刷新决策与回合结算规则。命中判定、连击累计等
//! 实时循环由外部游戏循环持有，本库只提供纯函数规则：
//! 随机源与时钟都由调用方注入，保证序列可复现。

pub mod difficulty;
pub mod engine;
pub mod error;
pub mod models;

pub use difficulty::{Difficulty, DifficultyConfig};
pub use engine::{WhackAMoleEngine, GRID_CELLS};
pub use error::{GameConfigError, Result};
pub use models::{grid_cell, GridCell, MoleKind, MoleState, RoundTally, WhackAMoleResult};
