//! 徽章评估器
//!
//! 按目录定义顺序遍历，跳过已获得的 id，对其余定义逐条判定条件。
//! 返回的徽章由调用方写入用户档案存储，本模块不持久化任何状态。

use chrono::{DateTime, Utc};
use tracing::info;

use crate::catalog::BadgeCatalog;
use crate::models::{Badge, BadgeCheckContext};

/// 徽章评估器
pub struct BadgeEvaluator;

impl BadgeEvaluator {
    /// 判定本次快照下新达成的徽章
    ///
    /// 时间由调用方注入作为 earned_at，便于确定性测试。
    /// 返回序列保持目录定义顺序；在 earned 集合随结果累积的前提下，
    /// 同一 id 至多出现在一次调用的输出中。
    pub fn check_new_badges(
        catalog: &BadgeCatalog,
        ctx: &BadgeCheckContext,
        now: DateTime<Utc>,
    ) -> Vec<Badge> {
        let mut new_badges = Vec::new();

        for definition in catalog.iter() {
            if ctx.earned.contains(&definition.id) {
                continue;
            }
            if definition.condition.is_met(ctx) {
                info!(badge_id = %definition.id, "徽章达成");
                new_badges.push(definition.earn(now));
            }
        }

        new_badges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExerciseRecord, GameScore};
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    fn context_with_one_exercise() -> BadgeCheckContext {
        BadgeCheckContext {
            exercise_records: vec![ExerciseRecord {
                date: date(1),
                accuracy: 88.0,
                duration_secs: 900,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_first_exercise_badge_earned() {
        let catalog = BadgeCatalog::standard();
        let ctx = context_with_one_exercise();

        let badges = BadgeEvaluator::check_new_badges(&catalog, &ctx, Utc::now());

        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].id, "first_exercise");
    }

    #[test]
    fn test_already_earned_badges_skipped() {
        let catalog = BadgeCatalog::standard();
        let mut ctx = context_with_one_exercise();
        ctx.earned.insert("first_exercise".to_string());

        let badges = BadgeEvaluator::check_new_badges(&catalog, &ctx, Utc::now());
        assert!(badges.is_empty());
    }

    #[test]
    fn test_re_evaluation_is_idempotent() {
        // 第二次调用的 earned 集合包含第一次的结果时，不会重复发放
        let catalog = BadgeCatalog::standard();
        let mut ctx = context_with_one_exercise();
        ctx.game_scores = vec![GameScore {
            date: date(1),
            score: 6000,
            max_combo: 21,
        }];
        ctx.streak = 7;

        let first = BadgeEvaluator::check_new_badges(&catalog, &ctx, Utc::now());
        assert!(!first.is_empty());

        for badge in &first {
            ctx.earned.insert(badge.id.clone());
        }
        let second = BadgeEvaluator::check_new_badges(&catalog, &ctx, Utc::now());
        assert!(second.is_empty());
    }

    #[test]
    fn test_output_preserves_catalog_order() {
        let catalog = BadgeCatalog::standard();
        let ctx = BadgeCheckContext {
            exercise_records: vec![
                ExerciseRecord {
                    date: date(1),
                    accuracy: 96.0,
                    duration_secs: 600,
                };
                10
            ],
            ..Default::default()
        };

        let badges = BadgeEvaluator::check_new_badges(&catalog, &ctx, Utc::now());
        let ids: Vec<_> = badges.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["first_exercise", "exercise_beginner", "accuracy_master"]
        );
    }

    #[test]
    fn test_earned_at_uses_injected_clock() {
        let catalog = BadgeCatalog::standard();
        let ctx = context_with_one_exercise();
        let now = "2025-06-01T09:30:00Z".parse().unwrap();

        let badges = BadgeEvaluator::check_new_badges(&catalog, &ctx, now);
        assert_eq!(badges[0].earned_at, now);
    }
}
