//! Player level, XP, skill points, skills and base luck.

use crate::core::constants::{
    LEVEL_UP_COIN_REWARD_PER_LEVEL, PASSIVE_LUCK_GAIN, STARTING_BASE_LUCK, XP_CURVE_BASE,
    XP_CURVE_EXPONENT,
};
use crate::core::error::{GameError, Result};
use serde::{Deserialize, Serialize};

/// XP required to advance from `level` to `level + 1`.
pub fn xp_for_next_level(level: u32) -> u64 {
    (XP_CURVE_BASE * f64::powf(level as f64, XP_CURVE_EXPONENT)) as u64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    /// Reel gain and XP per catch.
    Strength,
    /// Flat luck per level.
    Luck,
    /// Resistance to reel depletion.
    Endurance,
    /// Sale value.
    Knowledge,
}

impl Skill {
    pub fn all() -> [Skill; 4] {
        [Skill::Strength, Skill::Luck, Skill::Endurance, Skill::Knowledge]
    }

    fn per_level(self) -> f64 {
        match self {
            Skill::Strength => 0.1,
            Skill::Luck => 0.05,
            Skill::Endurance => 0.08,
            Skill::Knowledge => 0.07,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Skill::Strength => "Pulling Strength",
            Skill::Luck => "Luck",
            Skill::Endurance => "Endurance",
            Skill::Knowledge => "Fish Knowledge",
        }
    }
}

/// Skill levels. Every skill starts at level 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub strength: u32,
    pub luck: u32,
    pub endurance: u32,
    pub knowledge: u32,
}

impl Default for Skills {
    fn default() -> Self {
        Self {
            strength: 1,
            luck: 1,
            endurance: 1,
            knowledge: 1,
        }
    }
}

impl Skills {
    pub fn level(&self, skill: Skill) -> u32 {
        match skill {
            Skill::Strength => self.strength,
            Skill::Luck => self.luck,
            Skill::Endurance => self.endurance,
            Skill::Knowledge => self.knowledge,
        }
    }

    fn level_mut(&mut self, skill: Skill) -> &mut u32 {
        match skill {
            Skill::Strength => &mut self.strength,
            Skill::Luck => &mut self.luck,
            Skill::Endurance => &mut self.endurance,
            Skill::Knowledge => &mut self.knowledge,
        }
    }

    /// Multiplicative effect: `1 + level × per-level rate`.
    pub fn effect(&self, skill: Skill) -> f64 {
        1.0 + self.level(skill) as f64 * skill.per_level()
    }
}

/// Outcome of an XP award.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelUpSummary {
    pub levels_gained: u32,
    pub new_level: u32,
    /// Coins earned across every level gained.
    pub coin_reward: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progression {
    pub level: u32,
    /// Always below `xp_for_next_level(level)`.
    pub xp: u64,
    pub skill_points: u32,
    pub base_luck: f64,
    pub skills: Skills,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            skill_points: 0,
            base_luck: STARTING_BASE_LUCK,
            skills: Skills::default(),
        }
    }
}

impl Progression {
    pub fn xp_to_next(&self) -> u64 {
        xp_for_next_level(self.level)
    }

    /// Adds XP, levelling up as many times as it covers. Surplus carries over.
    pub fn add_xp(&mut self, amount: u64) -> LevelUpSummary {
        self.xp += amount;
        let mut summary = LevelUpSummary {
            new_level: self.level,
            ..LevelUpSummary::default()
        };

        loop {
            let xp_needed = xp_for_next_level(self.level);
            if xp_needed == 0 || self.xp < xp_needed {
                break;
            }
            self.xp -= xp_needed;
            self.level += 1;
            self.skill_points += 1;
            summary.levels_gained += 1;
            summary.coin_reward += LEVEL_UP_COIN_REWARD_PER_LEVEL * self.level as u64;
        }

        summary.new_level = self.level;
        summary
    }

    /// Spends one skill point on `skill`, returning its new level.
    pub fn upgrade_skill(&mut self, skill: Skill) -> Result<u32> {
        if self.skill_points == 0 {
            return Err(GameError::NoSkillPoints);
        }
        self.skill_points -= 1;
        let level = self.skills.level_mut(skill);
        *level += 1;
        Ok(*level)
    }

    /// Passive base-luck gain, kept to one decimal.
    pub fn gain_passive_luck(&mut self) -> f64 {
        self.base_luck = ((self.base_luck + PASSIVE_LUCK_GAIN) * 10.0).round() / 10.0;
        self.base_luck
    }

    /// Repairs a loaded record so the XP invariant holds.
    pub fn normalize(&mut self) -> LevelUpSummary {
        self.level = self.level.max(1);
        self.add_xp(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_curve() {
        assert_eq!(xp_for_next_level(1), 100);
        assert_eq!(xp_for_next_level(2), 282);
        assert_eq!(xp_for_next_level(4), 800);
    }

    #[test]
    fn test_exact_level_up_leaves_zero_xp() {
        let mut p = Progression::default();
        let summary = p.add_xp(100);
        assert_eq!(p.level, 2);
        assert_eq!(p.xp, 0);
        assert_eq!(p.skill_points, 1);
        assert_eq!(summary.levels_gained, 1);
        assert_eq!(summary.coin_reward, 100);
    }

    #[test]
    fn test_surplus_carries_over() {
        let mut p = Progression::default();
        p.add_xp(150);
        assert_eq!(p.level, 2);
        assert_eq!(p.xp, 50);
    }

    #[test]
    fn test_large_award_levels_repeatedly() {
        let mut p = Progression::default();
        // 100 + 282 + 519 = 901 reaches level 4
        let summary = p.add_xp(901);
        assert_eq!(p.level, 4);
        assert_eq!(p.xp, 0);
        assert_eq!(p.skill_points, 3);
        assert_eq!(summary.coin_reward, 50 * (2 + 3 + 4));
        assert!(p.xp < p.xp_to_next());
    }

    #[test]
    fn test_below_threshold_no_level() {
        let mut p = Progression::default();
        let summary = p.add_xp(99);
        assert_eq!(p.level, 1);
        assert_eq!(summary.levels_gained, 0);
        assert_eq!(summary.coin_reward, 0);
    }

    #[test]
    fn test_upgrade_skill_spends_point() {
        let mut p = Progression::default();
        assert!(matches!(
            p.upgrade_skill(Skill::Luck),
            Err(GameError::NoSkillPoints)
        ));

        p.skill_points = 1;
        assert_eq!(p.upgrade_skill(Skill::Luck).unwrap(), 2);
        assert_eq!(p.skill_points, 0);
        assert!((p.skills.effect(Skill::Luck) - 1.10).abs() < 1e-12);
    }

    #[test]
    fn test_initial_skill_effects() {
        let skills = Skills::default();
        assert!((skills.effect(Skill::Strength) - 1.1).abs() < 1e-12);
        assert!((skills.effect(Skill::Luck) - 1.05).abs() < 1e-12);
        assert!((skills.effect(Skill::Endurance) - 1.08).abs() < 1e-12);
        assert!((skills.effect(Skill::Knowledge) - 1.07).abs() < 1e-12);
    }

    #[test]
    fn test_passive_luck_rounds_to_one_decimal() {
        let mut p = Progression::default();
        for _ in 0..7 {
            p.gain_passive_luck();
        }
        assert_eq!(p.base_luck, 2.4);
    }

    #[test]
    fn test_normalize_repairs_overfull_xp() {
        let mut p = Progression {
            xp: 250,
            ..Progression::default()
        };
        p.normalize();
        assert_eq!(p.level, 2);
        assert_eq!(p.xp, 150);
    }

    #[test]
    fn test_missing_fields_default() {
        let p: Progression = serde_json::from_str(r#"{"level": 3}"#).unwrap();
        assert_eq!(p.level, 3);
        assert_eq!(p.skills, Skills::default());
        assert_eq!(p.base_luck, 1.0);
    }
}
