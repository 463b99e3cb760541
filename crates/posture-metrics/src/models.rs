//! 测量指标领域模型

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MetricError, Result};

/// 姿势测量指标种类
///
/// 与姿态估计管线输出的指标一一对应，每种指标通过 [`definition`]
/// 关联一张静态的理想区间表。
///
/// [`definition`]: MeasurementKind::definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    /// 颅椎角（度），衡量头部前倾程度
    NeckAngle,
    /// 双肩连线倾斜角（度）
    ShoulderTilt,
    /// 头部侧倾角（度）
    HeadTilt,
    /// 头部前伸比例（相对肩宽）
    ForwardHeadRatio,
    /// 胸椎后凸角（度）
    SpineCurvature,
}

impl MeasurementKind {
    /// 获取该指标的理想区间定义（常量表，永不变更）
    pub fn definition(self) -> MeasurementDefinition {
        match self {
            Self::NeckAngle => MeasurementDefinition::new(50.0, 70.0, 8.0),
            Self::ShoulderTilt => MeasurementDefinition::new(-3.0, 3.0, 4.0),
            Self::HeadTilt => MeasurementDefinition::new(-5.0, 5.0, 5.0),
            Self::ForwardHeadRatio => MeasurementDefinition::new(0.0, 0.12, 0.08),
            Self::SpineCurvature => MeasurementDefinition::new(20.0, 40.0, 10.0),
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NeckAngle => "neck_angle",
            Self::ShoulderTilt => "shoulder_tilt",
            Self::HeadTilt => "head_tilt",
            Self::ForwardHeadRatio => "forward_head_ratio",
            Self::SpineCurvature => "spine_curvature",
        };
        write!(f, "{}", s)
    }
}

/// 测量指标的理想区间定义
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementDefinition {
    pub ideal_min: f64,
    pub ideal_max: f64,
    /// 超出理想区间后仍判定为警告（而非危险）的最大偏差
    pub warning_threshold: f64,
}

impl MeasurementDefinition {
    pub fn new(ideal_min: f64, ideal_max: f64, warning_threshold: f64) -> Self {
        Self {
            ideal_min,
            ideal_max,
            warning_threshold,
        }
    }

    /// 构造期校验
    ///
    /// 区间倒置、非有限边界、负阈值都属于配置错误，应在加载时拒绝，
    /// 而不是在每次评估时检查。
    pub fn validate(&self) -> Result<()> {
        if !self.ideal_min.is_finite() {
            return Err(MetricError::NonFiniteBound {
                field: "ideal_min",
                value: self.ideal_min,
            });
        }
        if !self.ideal_max.is_finite() {
            return Err(MetricError::NonFiniteBound {
                field: "ideal_max",
                value: self.ideal_max,
            });
        }
        if !self.warning_threshold.is_finite() {
            return Err(MetricError::NonFiniteBound {
                field: "warning_threshold",
                value: self.warning_threshold,
            });
        }
        if self.ideal_min > self.ideal_max {
            return Err(MetricError::InvertedRange {
                min: self.ideal_min,
                max: self.ideal_max,
            });
        }
        if self.warning_threshold < 0.0 {
            return Err(MetricError::NegativeWarningThreshold(
                self.warning_threshold,
            ));
        }
        Ok(())
    }
}

/// 测量结果的定性状态
///
/// 由测量值与定义即时导出，不依赖历史、不持久化。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementStatus {
    Normal,
    Warning,
    Danger,
}

impl fmt::Display for MeasurementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Warning => write!(f, "warning"),
            Self::Danger => write!(f, "danger"),
        }
    }
}
