//! 打地鼠领域模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 地鼠类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoleKind {
    Normal,
    Golden,
    Bomb,
}

impl MoleKind {
    /// 命中一只该类型地鼠的得分（炸弹为负分）
    ///
    /// 逐次计分与连击累计由外部游戏循环完成，本库只在回合结算时
    /// 套用连击奖励。
    pub fn points(self) -> i32 {
        match self {
            Self::Normal => 100,
            Self::Golden => 300,
            Self::Bomb => -200,
        }
    }
}

/// 一只地鼠的状态
///
/// 由刷新函数创建，可见性与命中标记由外部游戏循环改写，回合结束后丢弃。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoleState {
    /// 回合内唯一 id
    pub id: String,
    /// 3x3 棋盘格编号（0-8）
    pub position: u8,
    pub kind: MoleKind,
    pub is_visible: bool,
    pub is_hit: bool,
    pub show_time: DateTime<Utc>,
    pub hide_time: DateTime<Utc>,
}

/// 回合内累计的计数器，由外部游戏循环逐次累加
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RoundTally {
    pub moles_hit: u32,
    pub total_moles: u32,
    pub golden_hits: u32,
    pub bombs_hit: u32,
    pub max_combo: u32,
    /// 逐次计分的累计值（炸弹扣分后可能为负）
    pub base_score: i32,
}

/// 回合结算结果，结算后不可变
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhackAMoleResult {
    pub moles_hit: u32,
    pub total_moles: u32,
    pub golden_hits: u32,
    pub bombs_hit: u32,
    pub max_combo: u32,
    /// 含连击奖励、已做 0 下限的最终得分
    pub score: u32,
}

impl WhackAMoleResult {
    /// 命中率（0-100，四舍五入）；一只地鼠都没出现时记 0
    pub fn accuracy(&self) -> u32 {
        if self.total_moles == 0 {
            return 0;
        }
        (100.0 * self.moles_hit as f64 / self.total_moles as f64).round() as u32
    }
}

/// 3x3 棋盘中的一个格子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub row: u8,
    pub col: u8,
}

impl GridCell {
    /// 格子中心的归一化坐标（0-1），供渲染层换算为像素
    pub fn center(self) -> (f32, f32) {
        (
            (self.col as f32 + 0.5) / 3.0,
            (self.row as f32 + 0.5) / 3.0,
        )
    }
}

/// 格编号到行列的纯几何换算，调用方保证编号在 0-8 之间
pub fn grid_cell(position: u8) -> GridCell {
    GridCell {
        row: position / 3,
        col: position % 3,
    }
}
