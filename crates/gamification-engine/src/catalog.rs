//! 徽章目录
//!
//! 固定的成就定义表。达成条件以声明式枚举表达，评估逻辑集中在一处
//! 分发，静态数据中不内嵌可执行逻辑，便于序列化与单独测试。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GamificationError, Result};
use crate::models::{Badge, BadgeCheckContext};

/// 徽章达成条件
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BadgeCondition {
    /// 累计完成姿势分析次数
    AnalysisCount { count: u32 },
    /// 累计完成运动次数
    ExerciseCount { count: u32 },
    /// 单次分析评分达标
    SingleAnalysisScore { score: u8 },
    /// 单次运动准确度达标
    SingleExerciseAccuracy { accuracy: f64 },
    /// 累计游戏局数
    GamesPlayed { count: u32 },
    /// 单局游戏得分达标
    SingleGameScore { score: u32 },
    /// 单局最大连击达标
    SingleGameCombo { combo: u32 },
    /// 连续运动天数达标
    StreakDays { days: u32 },
    /// 达到指定等级
    LevelReached { level: u32 },
}

impl BadgeCondition {
    /// 判定条件是否满足
    ///
    /// 只读取上下文字段，无副作用。本次刚完成的分析（current_analysis）
    /// 在写入历史之前也参与单次评分类条件的判定。
    pub fn is_met(&self, ctx: &BadgeCheckContext) -> bool {
        match *self {
            Self::AnalysisCount { count } => ctx.analysis_history.len() as u32 >= count,
            Self::ExerciseCount { count } => ctx.exercise_records.len() as u32 >= count,
            Self::SingleAnalysisScore { score } => {
                ctx.current_analysis
                    .as_ref()
                    .is_some_and(|a| a.score >= score)
                    || ctx.analysis_history.iter().any(|a| a.score >= score)
            }
            Self::SingleExerciseAccuracy { accuracy } => {
                ctx.exercise_records.iter().any(|r| r.accuracy >= accuracy)
            }
            Self::GamesPlayed { count } => ctx.game_scores.len() as u32 >= count,
            Self::SingleGameScore { score } => ctx.game_scores.iter().any(|g| g.score >= score),
            Self::SingleGameCombo { combo } => {
                ctx.game_scores.iter().any(|g| g.max_combo >= combo)
            }
            Self::StreakDays { days } => ctx.streak >= days,
            Self::LevelReached { level } => ctx.level >= level,
        }
    }
}

/// 徽章定义
///
/// 静态目录中的一条成就，每个 id 全局唯一。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeDefinition {
    pub id: String,
    pub name: String,
    pub name_ko: String,
    pub description: String,
    pub description_ko: String,
    pub icon: String,
    pub condition_label: String,
    pub condition: BadgeCondition,
}

impl BadgeDefinition {
    /// 由定义创建一枚已获得的徽章实例
    pub fn earn(&self, earned_at: DateTime<Utc>) -> Badge {
        Badge {
            id: self.id.clone(),
            name: self.name.clone(),
            name_ko: self.name_ko.clone(),
            description: self.description.clone(),
            description_ko: self.description_ko.clone(),
            icon: self.icon.clone(),
            condition_label: self.condition_label.clone(),
            earned_at,
        }
    }
}

/// 徽章目录
///
/// 有序的定义序列，判定时按定义顺序遍历，保证输出顺序稳定。
#[derive(Debug, Clone)]
pub struct BadgeCatalog {
    definitions: Vec<BadgeDefinition>,
}

impl BadgeCatalog {
    /// 从定义序列构造目录，构造期校验 id 唯一且目录非空
    pub fn new(definitions: Vec<BadgeDefinition>) -> Result<Self> {
        if definitions.is_empty() {
            return Err(GamificationError::EmptyCatalog);
        }

        let mut seen = std::collections::HashSet::new();
        for def in &definitions {
            if !seen.insert(def.id.as_str()) {
                return Err(GamificationError::DuplicateBadgeId {
                    id: def.id.clone(),
                });
            }
        }

        Ok(Self { definitions })
    }

    /// 标准成就目录
    pub fn standard() -> Self {
        let definitions = vec![
            def(
                "first_analysis",
                "First Analysis",
                "첫 분석",
                "Complete your first posture analysis",
                "첫 자세 분석을 완료하세요",
                "🔍",
                "자세 분석 1회 완료",
                BadgeCondition::AnalysisCount { count: 1 },
            ),
            def(
                "analysis_enthusiast",
                "Analysis Enthusiast",
                "분석 마니아",
                "Complete 10 posture analyses",
                "자세 분석을 10회 완료하세요",
                "📊",
                "자세 분석 10회 완료",
                BadgeCondition::AnalysisCount { count: 10 },
            ),
            def(
                "first_exercise",
                "First Exercise",
                "첫 운동",
                "Complete your first exercise session",
                "첫 운동을 완료하세요",
                "🏃",
                "운동 1회 완료",
                BadgeCondition::ExerciseCount { count: 1 },
            ),
            def(
                "exercise_beginner",
                "Exercise Beginner",
                "운동 입문",
                "Complete 10 exercise sessions",
                "운동을 10회 완료하세요",
                "💪",
                "운동 10회 완료",
                BadgeCondition::ExerciseCount { count: 10 },
            ),
            def(
                "exercise_expert",
                "Exercise Expert",
                "운동 고수",
                "Complete 50 exercise sessions",
                "운동을 50회 완료하세요",
                "🔥",
                "운동 50회 완료",
                BadgeCondition::ExerciseCount { count: 50 },
            ),
            def(
                "exercise_master",
                "Exercise Master",
                "운동 마스터",
                "Complete 100 exercise sessions",
                "운동을 100회 완료하세요",
                "🏆",
                "운동 100회 완료",
                BadgeCondition::ExerciseCount { count: 100 },
            ),
            def(
                "perfect_posture",
                "Perfect Posture",
                "완벽한 자세",
                "Score 90 or higher on a single analysis",
                "한 번의 분석에서 90점 이상을 받으세요",
                "✨",
                "분석 점수 90점 이상",
                BadgeCondition::SingleAnalysisScore { score: 90 },
            ),
            def(
                "accuracy_master",
                "Accuracy Master",
                "정확도 달인",
                "Reach 95% accuracy in a single exercise",
                "한 번의 운동에서 정확도 95%를 달성하세요",
                "🎯",
                "운동 정확도 95% 이상",
                BadgeCondition::SingleExerciseAccuracy { accuracy: 95.0 },
            ),
            def(
                "first_game",
                "First Game",
                "첫 게임",
                "Play your first minigame",
                "첫 미니게임을 플레이하세요",
                "🎮",
                "게임 1회 플레이",
                BadgeCondition::GamesPlayed { count: 1 },
            ),
            def(
                "game_lover",
                "Game Lover",
                "게임 애호가",
                "Play 20 minigames",
                "미니게임을 20회 플레이하세요",
                "🕹️",
                "게임 20회 플레이",
                BadgeCondition::GamesPlayed { count: 20 },
            ),
            def(
                "high_scorer",
                "High Scorer",
                "고득점자",
                "Score 5000 or more in a single game",
                "한 게임에서 5000점 이상을 획득하세요",
                "🌟",
                "게임 점수 5000점 이상",
                BadgeCondition::SingleGameScore { score: 5000 },
            ),
            def(
                "combo_king",
                "Combo King",
                "콤보 킹",
                "Reach a 20 combo in a single game",
                "한 게임에서 20 콤보를 달성하세요",
                "⚡",
                "게임 콤보 20 이상",
                BadgeCondition::SingleGameCombo { combo: 20 },
            ),
            def(
                "week_streak",
                "One Week Streak",
                "일주일 연속",
                "Exercise 7 days in a row",
                "7일 연속으로 운동하세요",
                "📅",
                "7일 연속 운동",
                BadgeCondition::StreakDays { days: 7 },
            ),
            def(
                "month_streak",
                "One Month Streak",
                "한 달 연속",
                "Exercise 30 days in a row",
                "30일 연속으로 운동하세요",
                "🗓️",
                "30일 연속 운동",
                BadgeCondition::StreakDays { days: 30 },
            ),
            def(
                "level_5",
                "Level 5",
                "레벨 5",
                "Reach level 5",
                "레벨 5에 도달하세요",
                "🥉",
                "레벨 5 달성",
                BadgeCondition::LevelReached { level: 5 },
            ),
            def(
                "level_10",
                "Level 10",
                "레벨 10",
                "Reach level 10",
                "레벨 10에 도달하세요",
                "🥈",
                "레벨 10 달성",
                BadgeCondition::LevelReached { level: 10 },
            ),
            def(
                "level_20",
                "Level 20",
                "레벨 20",
                "Reach level 20",
                "레벨 20에 도달하세요",
                "🥇",
                "레벨 20 달성",
                BadgeCondition::LevelReached { level: 20 },
            ),
        ];

        // 标准目录的 id 在编译期就已固定，构造不可能失败
        Self::new(definitions).expect("standard badge catalog must be valid")
    }

    /// 按 id 查找定义，未知 id 返回 None（预期结果，不是错误）
    pub fn get(&self, id: &str) -> Option<&BadgeDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    /// 按定义顺序迭代
    pub fn iter(&self) -> impl Iterator<Item = &BadgeDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn def(
    id: &str,
    name: &str,
    name_ko: &str,
    description: &str,
    description_ko: &str,
    icon: &str,
    condition_label: &str,
    condition: BadgeCondition,
) -> BadgeDefinition {
    BadgeDefinition {
        id: id.to_string(),
        name: name.to_string(),
        name_ko: name_ko.to_string(),
        description: description.to_string(),
        description_ko: description_ko.to_string(),
        icon: icon.to_string(),
        condition_label: condition_label.to_string(),
        condition,
    }
}
