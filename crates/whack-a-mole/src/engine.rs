//! 刷新决策与回合结算
//!
//! 每个刷新 tick 由外部游戏循环调用 [`spawn_mole`]，传入当前时间与
//! 已占用的格子；回合结束时调用 [`finalize_result`] 套用连击奖励。
//!
//! [`spawn_mole`]: WhackAMoleEngine::spawn_mole
//! [`finalize_result`]: WhackAMoleEngine::finalize_result

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::debug;
use uuid::Uuid;

use crate::difficulty::DifficultyConfig;
use crate::models::{MoleKind, MoleState, RoundTally, WhackAMoleResult};

/// 3x3 棋盘的格子总数
pub const GRID_CELLS: u8 = 9;

/// 每 5 连击折算的结算奖励分
const COMBO_BONUS_STEP: u32 = 50;

/// 打地鼠规则引擎
pub struct WhackAMoleEngine;

impl WhackAMoleEngine {
    /// 决定是否在空闲格子上刷出一只地鼠
    ///
    /// 棋盘已满时返回 None，调用方应跳过本次刷新而不是强行生成。
    /// 位置在空闲格子中均匀抽取；类型由一次均匀抽样按
    /// 炸弹 -> 金色 -> 普通 的区间划分决定。
    pub fn spawn_mole<R: Rng + ?Sized>(
        config: &DifficultyConfig,
        now: DateTime<Utc>,
        occupied: &[u8],
        rng: &mut R,
    ) -> Option<MoleState> {
        let free: Vec<u8> = (0..GRID_CELLS)
            .filter(|cell| !occupied.contains(cell))
            .collect();
        if free.is_empty() {
            return None;
        }

        let position = free[rng.random_range(0..free.len())];

        let roll: f64 = rng.random();
        let kind = if roll < config.bomb_chance {
            MoleKind::Bomb
        } else if roll < config.bomb_chance + config.golden_chance {
            MoleKind::Golden
        } else {
            MoleKind::Normal
        };

        debug!(position, kind = ?kind, "刷出地鼠");

        Some(MoleState {
            id: Uuid::new_v4().to_string(),
            position,
            kind,
            is_visible: true,
            is_hit: false,
            show_time: now,
            hide_time: now + Duration::milliseconds(config.mole_show_ms as i64),
        })
    }

    /// 回合结算
    ///
    /// 每 5 连击折算 50 分奖励，总分做 0 下限（炸弹扣分不会出现负的最终分）。
    pub fn finalize_result(tally: &RoundTally) -> WhackAMoleResult {
        let combo_bonus = (tally.max_combo / 5 * COMBO_BONUS_STEP) as i32;
        let score = (tally.base_score + combo_bonus).max(0) as u32;

        WhackAMoleResult {
            moles_hit: tally.moles_hit,
            total_moles: tally.total_moles,
            golden_hits: tally.golden_hits,
            bombs_hit: tally.bombs_hit,
            max_combo: tally.max_combo,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        "2025-06-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_spawn_on_full_board_returns_none() {
        let config = Difficulty::Normal.config();
        let occupied: Vec<u8> = (0..9).collect();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(WhackAMoleEngine::spawn_mole(&config, now(), &occupied, &mut rng).is_none());
    }

    #[test]
    fn test_spawn_avoids_occupied_cells() {
        let config = Difficulty::Normal.config();
        let occupied: Vec<u8> = (0..8).collect();
        let mut rng = StdRng::seed_from_u64(1);

        // 只剩 8 号格可用
        for _ in 0..20 {
            let mole = WhackAMoleEngine::spawn_mole(&config, now(), &occupied, &mut rng).unwrap();
            assert_eq!(mole.position, 8);
        }
    }

    #[test]
    fn test_spawn_is_deterministic_with_seeded_rng() {
        let config = Difficulty::Hard.config();

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let a = WhackAMoleEngine::spawn_mole(&config, now(), &[], &mut rng_a).unwrap();
            let b = WhackAMoleEngine::spawn_mole(&config, now(), &[], &mut rng_b).unwrap();
            assert_eq!(a.position, b.position);
            assert_eq!(a.kind, b.kind);
        }
    }

    #[test]
    fn test_spawn_kind_follows_chance_partition() {
        let mut config = Difficulty::Normal.config();
        let mut rng = StdRng::seed_from_u64(7);

        // 炸弹概率 1 => 全部是炸弹
        config.bomb_chance = 1.0;
        config.golden_chance = 0.0;
        for _ in 0..20 {
            let mole = WhackAMoleEngine::spawn_mole(&config, now(), &[], &mut rng).unwrap();
            assert_eq!(mole.kind, MoleKind::Bomb);
        }

        // 金色概率 1 => 全部是金色
        config.bomb_chance = 0.0;
        config.golden_chance = 1.0;
        for _ in 0..20 {
            let mole = WhackAMoleEngine::spawn_mole(&config, now(), &[], &mut rng).unwrap();
            assert_eq!(mole.kind, MoleKind::Golden);
        }

        // 两者皆 0 => 全部是普通
        config.golden_chance = 0.0;
        for _ in 0..20 {
            let mole = WhackAMoleEngine::spawn_mole(&config, now(), &[], &mut rng).unwrap();
            assert_eq!(mole.kind, MoleKind::Normal);
        }
    }

    #[test]
    fn test_spawn_sets_visibility_window() {
        let config = Difficulty::Easy.config();
        let mut rng = StdRng::seed_from_u64(3);

        let mole = WhackAMoleEngine::spawn_mole(&config, now(), &[], &mut rng).unwrap();
        assert!(mole.is_visible);
        assert!(!mole.is_hit);
        assert_eq!(mole.show_time, now());
        assert_eq!(
            mole.hide_time - mole.show_time,
            Duration::milliseconds(config.mole_show_ms as i64)
        );
    }

    #[test]
    fn test_spawn_ids_unique_within_round() {
        let config = Difficulty::Normal.config();
        let mut rng = StdRng::seed_from_u64(9);

        let mut ids = std::collections::HashSet::new();
        for _ in 0..100 {
            let mole = WhackAMoleEngine::spawn_mole(&config, now(), &[], &mut rng).unwrap();
            assert!(ids.insert(mole.id));
        }
    }

    #[test]
    fn test_finalize_applies_combo_bonus() {
        let tally = RoundTally {
            moles_hit: 18,
            total_moles: 20,
            golden_hits: 2,
            bombs_hit: 1,
            max_combo: 12,
            base_score: 1900,
        };
        let result = WhackAMoleEngine::finalize_result(&tally);

        // 12 连击 => 2 档奖励 100 分
        assert_eq!(result.score, 2000);
        assert_eq!(result.max_combo, 12);
        assert_eq!(result.accuracy(), 90);
    }

    #[test]
    fn test_finalize_floors_negative_score_at_zero() {
        let tally = RoundTally {
            moles_hit: 1,
            total_moles: 10,
            golden_hits: 0,
            bombs_hit: 4,
            max_combo: 1,
            base_score: -700,
        };
        let result = WhackAMoleEngine::finalize_result(&tally);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_combo_bonus_is_monotonic() {
        let mut previous = 0;
        for max_combo in 0..40 {
            let tally = RoundTally {
                max_combo,
                base_score: 1000,
                ..Default::default()
            };
            let score = WhackAMoleEngine::finalize_result(&tally).score;
            assert!(score >= previous, "max_combo = {}", max_combo);
            previous = score;
        }
    }
}
