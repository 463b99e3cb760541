//! 等级换算
//!
//! 三角形等级表：完成第 N 级需要 N * 100 经验值。
//! 等级信息始终由累计经验值即时导出，不单独存储，避免两者漂移。

use serde::Serialize;

/// 由累计经验值导出的等级信息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelInfo {
    pub level: u32,
    /// 当前等级内已积累的经验值
    pub current_level_xp: u32,
    /// 升至下一级所需的经验值总量
    pub xp_for_next_level: u32,
    /// 当前等级进度（0-100）
    pub progress: f64,
}

/// 完成第 `level` 级所需的经验值
pub fn xp_for_level(level: u32) -> u32 {
    level * 100
}

/// 从零开始升到第 `target` 级所需的累计经验值
pub fn total_xp_for_level(target: u32) -> u32 {
    (1..target).map(xp_for_level).sum()
}

/// 由累计经验值计算等级信息
///
/// 从 1 级开始逐级扣减，每次扣减量严格递增，循环必然终止。
pub fn level_for(total_xp: u32) -> LevelInfo {
    let mut level = 1;
    let mut remaining = total_xp;

    while remaining >= xp_for_level(level) {
        remaining -= xp_for_level(level);
        level += 1;
    }

    let xp_for_next_level = xp_for_level(level);
    LevelInfo {
        level,
        current_level_xp: remaining,
        xp_for_next_level,
        progress: 100.0 * remaining as f64 / xp_for_next_level as f64,
    }
}
