//! 难度配置
//!
//! 三档难度的常量表，固定每档的回合时长、地鼠可见时长、刷新间隔、
//! 特殊地鼠概率与同屏上限。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GameConfigError, Result};

/// 难度档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// 获取该档位的配置（常量表）
    pub fn config(self) -> DifficultyConfig {
        match self {
            Self::Easy => DifficultyConfig {
                game_duration_secs: 60,
                mole_show_ms: 1500,
                spawn_interval_ms: 1200,
                golden_chance: 0.10,
                bomb_chance: 0.05,
                max_moles: 2,
            },
            Self::Normal => DifficultyConfig {
                game_duration_secs: 60,
                mole_show_ms: 1100,
                spawn_interval_ms: 900,
                golden_chance: 0.12,
                bomb_chance: 0.10,
                max_moles: 3,
            },
            Self::Hard => DifficultyConfig {
                game_duration_secs: 60,
                mole_show_ms: 800,
                spawn_interval_ms: 600,
                golden_chance: 0.15,
                bomb_chance: 0.15,
                max_moles: 4,
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Normal => write!(f, "normal"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// 单个难度档位的规则参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// 回合时长（秒）
    pub game_duration_secs: u32,
    /// 单只地鼠的可见时长（毫秒）
    pub mole_show_ms: u64,
    /// 刷新间隔（毫秒）
    pub spawn_interval_ms: u64,
    /// 金色地鼠概率
    pub golden_chance: f64,
    /// 炸弹概率
    pub bomb_chance: f64,
    /// 3x3 棋盘上的同屏地鼠上限
    pub max_moles: u8,
}

impl DifficultyConfig {
    /// 构造期校验
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.golden_chance) {
            return Err(GameConfigError::ProbabilityOutOfRange {
                field: "golden_chance",
                value: self.golden_chance,
            });
        }
        if !(0.0..=1.0).contains(&self.bomb_chance) {
            return Err(GameConfigError::ProbabilityOutOfRange {
                field: "bomb_chance",
                value: self.bomb_chance,
            });
        }
        let sum = self.golden_chance + self.bomb_chance;
        if sum > 1.0 {
            return Err(GameConfigError::ChanceSumExceedsOne { sum });
        }
        if self.game_duration_secs == 0 {
            return Err(GameConfigError::ZeroDuration {
                field: "game_duration_secs",
            });
        }
        if self.mole_show_ms == 0 {
            return Err(GameConfigError::ZeroDuration {
                field: "mole_show_ms",
            });
        }
        if self.spawn_interval_ms == 0 {
            return Err(GameConfigError::ZeroDuration {
                field: "spawn_interval_ms",
            });
        }
        if self.max_moles == 0 || self.max_moles > 9 {
            return Err(GameConfigError::InvalidMaxMoles(self.max_moles));
        }
        Ok(())
    }
}
