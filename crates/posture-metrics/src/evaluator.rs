//! 测量值评估器
//!
//! 根据理想区间定义，将单个测量值映射为状态和 0-100 评分。

use tracing::debug;

use crate::models::{MeasurementDefinition, MeasurementStatus};

/// 测量值评估器
pub struct MeasurementEvaluator;

impl MeasurementEvaluator {
    /// 评估定性状态
    ///
    /// 区间内为 Normal；区间外按偏离被突破边界的距离判定，
    /// 偏差不超过警告阈值为 Warning，否则为 Danger。
    pub fn status(def: &MeasurementDefinition, value: f64) -> MeasurementStatus {
        if value >= def.ideal_min && value <= def.ideal_max {
            return MeasurementStatus::Normal;
        }

        let deviation = if value < def.ideal_min {
            def.ideal_min - value
        } else {
            value - def.ideal_max
        };

        let status = if deviation <= def.warning_threshold {
            MeasurementStatus::Warning
        } else {
            MeasurementStatus::Danger
        };

        debug!(value, deviation, %status, "测量值超出理想区间");
        status
    }

    /// 计算 0-100 评分
    ///
    /// 区间内满分；区间外按偏离区间中点的超额距离线性扣分，
    /// 最大可容忍偏差为区间宽度（即 2 倍半宽）。
    /// 退化区间（ideal_min == ideal_max）下任何偏差都记 0 分。
    pub fn score(def: &MeasurementDefinition, value: f64) -> u8 {
        if value >= def.ideal_min && value <= def.ideal_max {
            return 100;
        }

        let midpoint = (def.ideal_min + def.ideal_max) / 2.0;
        let half_range = (def.ideal_max - def.ideal_min) / 2.0;
        let deviation = (value - midpoint).abs() - half_range;
        let max_deviation = 2.0 * half_range;

        if max_deviation <= 0.0 {
            return 0;
        }

        let score = 100.0 - 100.0 * deviation / max_deviation;
        score.round().clamp(0.0, 100.0) as u8
    }

    /// 多项指标的综合评分：各项评分的算术平均，四舍五入
    ///
    /// 空输入记 0 分（尚无任何测量结果）。
    pub fn overall_score(scores: &[u8]) -> u8 {
        if scores.is_empty() {
            return 0;
        }
        let sum: u32 = scores.iter().map(|&s| s as u32).sum();
        (sum as f64 / scores.len() as f64).round() as u8
    }
}
