//! 连续运动天数计算
//!
//! 以日历天为单位统计连续运动天数。"今天"由调用方注入，
//! 时区与夏令时语义完全由调用方提供的日期决定，本模块不读时钟。

use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;
use tracing::debug;

use crate::models::ExerciseRecord;

/// 计算当前连续运动天数
///
/// 同一天的多条记录合并为一个日期，不会虚增连续天数。
/// 最近一次运动既不是今天也不是昨天时，连续中断，返回 0；
/// 否则从最近日期起逐日向前统计，遇到大于一天的间隔即停止。
pub fn calculate_streak(records: &[ExerciseRecord], today: NaiveDate) -> u32 {
    let dates: BTreeSet<NaiveDate> = records.iter().map(|r| r.date).collect();

    let mut iter = dates.iter().rev();
    let Some(&latest) = iter.next() else {
        return 0;
    };

    let yesterday = today - Days::new(1);
    if latest != today && latest != yesterday {
        debug!(%latest, %today, "连续天数已中断");
        return 0;
    }

    let mut streak = 1;
    let mut current = latest;
    for &previous in iter {
        if (current - previous).num_days() == 1 {
            streak += 1;
            current = previous;
        } else {
            break;
        }
    }

    debug!(streak, "连续天数计算完成");
    streak
}
