//! 经验值计算
//!
//! 将一次用户行为加上其上下文指标（准确度、得分、连击、连续天数、时长）
//! 映射为一笔经验值奖励及其明细。输出只依赖输入，无随机、无时钟读取。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 可获得经验值的用户行为
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XpAction {
    PostureAnalysis,
    ExerciseComplete,
    GamePlay,
    DailyChallenge,
    StreakBonus,
    BadgeEarned,
    HighAccuracy,
}

impl XpAction {
    /// 行为对应的静态奖励表
    pub fn reward(self) -> XpReward {
        match self {
            Self::PostureAnalysis => XpReward::new(20, "Posture analysis", "자세 분석"),
            Self::ExerciseComplete => XpReward::new(30, "Exercise complete", "운동 완료"),
            Self::GamePlay => XpReward::new(15, "Game play", "게임 플레이"),
            Self::DailyChallenge => XpReward::new(25, "Daily challenge", "일일 챌린지"),
            Self::StreakBonus => XpReward::new(15, "Streak bonus", "연속 운동 보너스"),
            Self::BadgeEarned => XpReward::new(25, "Badge earned", "배지 획득"),
            Self::HighAccuracy => XpReward::new(20, "High accuracy", "높은 정확도"),
        }
    }
}

impl fmt::Display for XpAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PostureAnalysis => "posture_analysis",
            Self::ExerciseComplete => "exercise_complete",
            Self::GamePlay => "game_play",
            Self::DailyChallenge => "daily_challenge",
            Self::StreakBonus => "streak_bonus",
            Self::BadgeEarned => "badge_earned",
            Self::HighAccuracy => "high_accuracy",
        };
        write!(f, "{}", s)
    }
}

/// 单个行为的基础奖励定义
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct XpReward {
    pub base_xp: u32,
    pub label: &'static str,
    pub label_ko: &'static str,
}

impl XpReward {
    const fn new(base_xp: u32, label: &'static str, label_ko: &'static str) -> Self {
        Self {
            base_xp,
            label,
            label_ko,
        }
    }
}

/// 经验值计算的上下文指标
///
/// 各字段只对特定行为生效，无关组合不产生加成。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct XpContext {
    /// 动作准确度（0-100）
    pub accuracy: Option<f64>,
    /// 单局游戏得分
    pub score: Option<u32>,
    /// 单局最大连击
    pub combo: Option<u32>,
    /// 连续运动天数
    pub streak: Option<u32>,
    /// 运动时长（秒）
    pub duration_secs: Option<u32>,
}

/// 经验值明细行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub source: String,
    pub source_ko: String,
    pub amount: u32,
}

impl BreakdownEntry {
    fn new(source: &str, source_ko: &str, amount: u32) -> Self {
        Self {
            source: source.to_string(),
            source_ko: source_ko.to_string(),
            amount,
        }
    }
}

/// 一次经验值计算的结果
///
/// 每次调用产生全新的值；外部存储只累计 total_xp，本结构不持久化。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XpCalculation {
    pub base_xp: u32,
    pub bonus_xp: u32,
    pub total_xp: u32,
    pub breakdown: Vec<BreakdownEntry>,
}

/// 经验值计算器
pub struct XpCalculator;

impl XpCalculator {
    /// 计算一次行为的经验值奖励
    ///
    /// 各加成规则相互独立，每条触发的规则追加一行明细。
    /// 连续奖励（StreakBonus）是例外：基础值被整体改写为
    /// `10 * min(streak, 30)`，不走加成路径。
    pub fn calculate(action: XpAction, ctx: &XpContext) -> XpCalculation {
        let reward = action.reward();
        let mut base_xp = reward.base_xp;
        let mut bonus_xp = 0;
        let mut breakdown = vec![BreakdownEntry::new(reward.label, reward.label_ko, base_xp)];

        match action {
            XpAction::ExerciseComplete => {
                if let Some(accuracy) = ctx.accuracy {
                    // 只取最高档
                    let bonus = if accuracy >= 95.0 {
                        15
                    } else if accuracy >= 85.0 {
                        10
                    } else if accuracy >= 75.0 {
                        5
                    } else {
                        0
                    };
                    if bonus > 0 {
                        bonus_xp += bonus;
                        breakdown.push(BreakdownEntry::new(
                            "Accuracy bonus",
                            "정확도 보너스",
                            bonus,
                        ));
                    }
                }
                if let Some(duration) = ctx.duration_secs {
                    let bonus = if duration >= 1800 {
                        20
                    } else if duration >= 900 {
                        10
                    } else {
                        0
                    };
                    if bonus > 0 {
                        bonus_xp += bonus;
                        breakdown.push(BreakdownEntry::new(
                            "Duration bonus",
                            "운동 시간 보너스",
                            bonus,
                        ));
                    }
                }
            }
            XpAction::GamePlay => {
                if let Some(score) = ctx.score {
                    let bonus = if score >= 10000 {
                        20
                    } else if score >= 5000 {
                        10
                    } else {
                        0
                    };
                    if bonus > 0 {
                        bonus_xp += bonus;
                        breakdown.push(BreakdownEntry::new("Score bonus", "고득점 보너스", bonus));
                    }
                }
                if let Some(combo) = ctx.combo {
                    let bonus = if combo >= 30 {
                        15
                    } else if combo >= 20 {
                        10
                    } else {
                        0
                    };
                    if bonus > 0 {
                        bonus_xp += bonus;
                        breakdown.push(BreakdownEntry::new("Combo bonus", "콤보 보너스", bonus));
                    }
                }
            }
            XpAction::StreakBonus => {
                if let Some(streak) = ctx.streak {
                    base_xp = 10 * streak.min(30);
                    breakdown[0].amount = base_xp;
                }
            }
            _ => {}
        }

        XpCalculation {
            base_xp,
            bonus_xp,
            total_xp: base_xp + bonus_xp,
            breakdown,
        }
    }
}
