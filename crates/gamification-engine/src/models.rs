//! 游戏化领域模型

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 运动记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub date: NaiveDate,
    /// 动作准确度（0-100）
    pub accuracy: f64,
    pub duration_secs: u32,
}

/// 小游戏成绩记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameScore {
    pub date: NaiveDate,
    pub score: u32,
    pub max_combo: u32,
}

/// 姿势分析记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub date: NaiveDate,
    /// 综合姿势评分（0-100）
    pub score: u8,
}

/// 徽章判定上下文
///
/// 由调用方从外部存储组装的只读快照，评估器只读取、从不修改。
#[derive(Debug, Clone)]
pub struct BadgeCheckContext {
    pub exercise_records: Vec<ExerciseRecord>,
    pub game_scores: Vec<GameScore>,
    pub analysis_history: Vec<AnalysisRecord>,
    /// 本次刚完成的分析（若有），在写入历史前参与判定
    pub current_analysis: Option<AnalysisRecord>,
    pub level: u32,
    /// 已获得的徽章 id 集合
    pub earned: HashSet<String>,
    /// 当前连续运动天数
    pub streak: u32,
}

impl Default for BadgeCheckContext {
    fn default() -> Self {
        Self {
            exercise_records: Vec::new(),
            game_scores: Vec::new(),
            analysis_history: Vec::new(),
            current_analysis: None,
            level: 1,
            earned: HashSet::new(),
            streak: 0,
        }
    }
}

/// 已获得的徽章实例
///
/// 每个 id 只在条件首次满足时创建一次，之后不再重新判定或撤销。
/// 归属与持久化由外部的用户档案存储负责。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub name_ko: String,
    pub description: String,
    pub description_ko: String,
    pub icon: String,
    pub condition_label: String,
    pub earned_at: DateTime<Utc>,
}
