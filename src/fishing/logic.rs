//! Fishing session state machine.
//!
//! A session walks `Idle → Casting → Waiting → Biting → Reeling` and resolves
//! into `Caught` or `Escaped` before returning to `Idle`. Each phase arms its
//! own timers on entry; entering any phase first cancels everything armed by
//! the previous one, so a timer can never fire into a later phase.
//!
//! The session never touches inventory or progression directly. Resolutions
//! are reported as [`SessionSignal`]s and the owner applies side effects.

use super::generation::pick_species;
use super::luck::RodStats;
use super::types::{FishPosition, FishingPhase, FishingSession, SessionSignal, SessionTimer, SessionView};
use crate::content::{BaitEffect, Catalog, FishSpecies, Rarity, Weather, WorldEventSpec};
use crate::core::constants::{
    AUTOPLAY_BITE_DELAY_MS, AUTOPLAY_CAST_DELAY_MS, AUTOPLAY_REEL_DELAY_MS, BASE_BITE_CHANCE,
    BITE_COUNTDOWN_TICK_MS, BITE_RADIUS, BITE_WINDOW_BASE_MS, BITE_WINDOW_ENDURANCE_DIVISOR,
    BITE_WINDOW_LUCK_DIVISOR, BITE_WINDOW_MAX_MS, BITE_WINDOW_MIN_MS, BITE_WINDOW_SPEED_DIVISOR,
    CAST_DELAY_MS, FISH_BASE_SPEED, FISH_FRAME_MS, HOOK_POSITION, REEL_BASE_GAIN,
    REEL_MIN_DEPLETION, REEL_START_PROGRESS, REEL_TICK_MS, RESOLVE_TO_IDLE_MS,
    TARGET_REACHED_RADIUS,
};
use crate::core::error::{GameError, Result};
use crate::core::scheduler::Scheduler;
use rand::Rng;
use tracing::debug;

/// Live inputs a session step reads. Rebuilt by the owner before every step
/// so expiring potions or a weather change apply immediately.
#[derive(Debug, Clone, Copy)]
pub struct SessionContext<'a> {
    pub catalog: &'a Catalog,
    /// Composed luck, before the bait multiplier.
    pub luck: f64,
    pub rod: RodStats,
    pub bait: Option<BaitEffect>,
    pub strength_effect: f64,
    pub endurance_effect: f64,
    pub weather: Weather,
    pub event: Option<&'a WorldEventSpec>,
}

/// Bite window length in milliseconds, clamped to [1000, 5000].
pub fn bite_window_ms(rod: &RodStats, luck: f64) -> f64 {
    let factor = 1.0 + rod.endurance / BITE_WINDOW_ENDURANCE_DIVISOR
        - rod.speed / BITE_WINDOW_SPEED_DIVISOR
        + luck / BITE_WINDOW_LUCK_DIVISOR;
    (BITE_WINDOW_BASE_MS * factor).clamp(BITE_WINDOW_MIN_MS, BITE_WINDOW_MAX_MS)
}

/// Reel progress lost per tick against a fish of the given rarity.
pub fn reel_depletion(rarity: Rarity, endurance_effect: f64, rod_endurance: f64) -> f64 {
    let fish_strength = 1.0 + rarity.rank() as f64 / 5.0;
    let rod_power = endurance_effect + rod_endurance / 50.0;
    (fish_strength / rod_power).max(REEL_MIN_DEPLETION)
}

/// Reel progress gained per player action.
pub fn reel_gain(strength_effect: f64, rod_endurance: f64) -> f64 {
    REEL_BASE_GAIN * strength_effect * (1.0 + rod_endurance / 100.0)
}

fn random_spawn(rng: &mut impl Rng) -> FishPosition {
    let x = if rng.gen_bool(0.5) { -20.0 } else { 120.0 };
    FishPosition::new(x, rng.gen_range(10.0..90.0))
}

fn random_target(rng: &mut impl Rng) -> FishPosition {
    FishPosition::new(rng.gen_range(10.0..90.0), rng.gen_range(20.0..90.0))
}

fn hook() -> FishPosition {
    FishPosition::new(HOOK_POSITION.0, HOOK_POSITION.1)
}

impl FishingSession {
    pub fn new(now_ms: u64) -> Self {
        Self {
            phase: FishingPhase::Idle,
            status: FishingPhase::Idle.default_status().to_string(),
            hooked: None,
            bite_window_ms: 0.0,
            bite_remaining: 0.0,
            reel_progress: 0.0,
            fish_position: None,
            fish_target: None,
            autoplay: false,
            timers: Scheduler::new(now_ms),
        }
    }

    pub fn phase(&self) -> FishingPhase {
        self.phase
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn hooked(&self) -> Option<&'static FishSpecies> {
        self.hooked
    }

    pub fn reel_progress(&self) -> f64 {
        self.reel_progress
    }

    pub fn bite_remaining(&self) -> f64 {
        self.bite_remaining
    }

    pub fn bite_window(&self) -> f64 {
        self.bite_window_ms
    }

    pub fn fish_position(&self) -> Option<FishPosition> {
        self.fish_position
    }

    pub fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    /// Number of timers currently armed.
    pub fn armed_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn has_timer(&self, timer: SessionTimer) -> bool {
        self.timers.is_scheduled(timer)
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.timers.next_due_ms()
    }

    pub fn pop_due(&mut self, until_ms: u64) -> Option<SessionTimer> {
        self.timers.pop_due(until_ms)
    }

    pub fn advance_clock(&mut self, now_ms: u64) {
        self.timers.advance_clock(now_ms);
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            phase: self.phase,
            status: self.status.clone(),
            bite_window_percent: self.bite_remaining,
            reel_progress_percent: self.reel_progress,
            fish_position: self.fish_position,
            hooked: self.hooked.map(|s| s.name.to_string()),
            autoplay: self.autoplay,
        }
    }

    /// Starts a cast. Only valid from `Idle` with bait equipped.
    pub fn cast(&mut self, has_bait: bool) -> Result<Vec<SessionSignal>> {
        if self.phase != FishingPhase::Idle {
            return Err(GameError::NotIdle);
        }
        if !has_bait {
            return Err(GameError::NoBait);
        }
        Ok(vec![self.enter(FishingPhase::Casting)])
    }

    /// The player's single action button: hooks the fish while biting, pulls
    /// the line while reeling, does nothing otherwise.
    pub fn action(&mut self, ctx: &SessionContext, rng: &mut impl Rng) -> Vec<SessionSignal> {
        match self.phase {
            FishingPhase::Biting => {
                let hooked = pick_species(
                    ctx.catalog,
                    ctx.luck,
                    ctx.bait.as_ref(),
                    ctx.weather,
                    ctx.event,
                    rng,
                );
                match hooked {
                    Some(species) => {
                        debug!(species = species.id, rarity = ?species.rarity, "Fish hooked");
                        self.hooked = Some(species);
                        self.reel_progress = REEL_START_PROGRESS;
                        vec![self.enter(FishingPhase::Reeling)]
                    }
                    None => self.escape(),
                }
            }
            FishingPhase::Reeling => {
                let gain = reel_gain(ctx.strength_effect, ctx.rod.endurance);
                self.reel_progress = (self.reel_progress + gain).min(100.0);
                if self.reel_progress >= 100.0 {
                    self.land()
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }

    /// Turns auto-play on or off. Enabling mid-cast picks up at the current
    /// phase's cadence.
    pub fn set_autoplay(&mut self, enabled: bool) {
        self.autoplay = enabled;
        self.timers.cancel_kind(SessionTimer::AutoPlay);
        if enabled {
            self.arm_autoplay();
        }
    }

    fn arm_autoplay(&mut self) {
        let delay = match self.phase {
            FishingPhase::Idle => AUTOPLAY_CAST_DELAY_MS,
            FishingPhase::Biting => AUTOPLAY_BITE_DELAY_MS,
            FishingPhase::Reeling => AUTOPLAY_REEL_DELAY_MS,
            _ => return,
        };
        self.timers.schedule_once(SessionTimer::AutoPlay, delay);
    }

    /// Handles one fired timer.
    pub fn fire(
        &mut self,
        timer: SessionTimer,
        ctx: &SessionContext,
        rng: &mut impl Rng,
    ) -> Vec<SessionSignal> {
        match (timer, self.phase) {
            (SessionTimer::CastComplete, FishingPhase::Casting) => {
                self.fish_position = Some(random_spawn(rng));
                self.fish_target = Some(random_target(rng));
                vec![self.enter(FishingPhase::Waiting)]
            }
            (SessionTimer::FishFrame, FishingPhase::Waiting) => self.wander(ctx, rng),
            (SessionTimer::BiteCountdown, FishingPhase::Biting) => {
                let decrement = 100.0 / (self.bite_window_ms / BITE_COUNTDOWN_TICK_MS as f64);
                self.bite_remaining = (self.bite_remaining - decrement).max(0.0);
                Vec::new()
            }
            (SessionTimer::BiteExpired, FishingPhase::Biting) => {
                self.bite_remaining = 0.0;
                self.escape()
            }
            (SessionTimer::ReelTick, FishingPhase::Reeling) => self.reel_tick(ctx),
            (SessionTimer::ResolveToIdle, FishingPhase::Caught | FishingPhase::Escaped) => {
                vec![self.enter(FishingPhase::Idle)]
            }
            (SessionTimer::AutoPlay, FishingPhase::Idle) if self.autoplay => {
                vec![SessionSignal::AutoCast]
            }
            (SessionTimer::AutoPlay, FishingPhase::Biting | FishingPhase::Reeling)
                if self.autoplay =>
            {
                let signals = self.action(ctx, rng);
                if self.phase == FishingPhase::Reeling && !self.has_timer(SessionTimer::AutoPlay) {
                    self.arm_autoplay();
                }
                signals
            }
            (timer, phase) => {
                debug!(?timer, ?phase, "Ignoring timer outside its phase");
                Vec::new()
            }
        }
    }

    /// One wander frame: move toward the target, retarget on arrival, and roll
    /// for a bite while near the hook.
    fn wander(&mut self, ctx: &SessionContext, rng: &mut impl Rng) -> Vec<SessionSignal> {
        let (pos, target) = match (self.fish_position, self.fish_target) {
            (Some(p), Some(t)) => (p, t),
            _ => return Vec::new(),
        };

        let dist = pos.distance_to(target);
        if dist < TARGET_REACHED_RADIUS {
            self.fish_target = Some(random_target(rng));
            return Vec::new();
        }

        let speed = FISH_BASE_SPEED * (1.0 + ctx.rod.speed / 100.0);
        let next = FishPosition::new(
            pos.x + (target.x - pos.x) / dist * speed,
            pos.y + (target.y - pos.y) / dist * speed,
        );
        self.fish_position = Some(next);

        if next.distance_to(hook()) < BITE_RADIUS {
            let bite_speed = ctx.bait.map(|b| b.bite_speed).unwrap_or(1.0);
            if rng.gen::<f64>() < BASE_BITE_CHANCE * bite_speed {
                self.bite_window_ms = bite_window_ms(&ctx.rod, ctx.luck);
                return vec![self.enter(FishingPhase::Biting)];
            }
        }
        Vec::new()
    }

    fn reel_tick(&mut self, ctx: &SessionContext) -> Vec<SessionSignal> {
        let rarity = match self.hooked {
            Some(species) => species.rarity,
            None => return self.escape(),
        };
        let depletion = reel_depletion(rarity, ctx.endurance_effect, ctx.rod.endurance);
        self.reel_progress -= depletion;
        if self.reel_progress <= 0.0 {
            self.reel_progress = 0.0;
            self.escape()
        } else {
            Vec::new()
        }
    }

    fn land(&mut self) -> Vec<SessionSignal> {
        self.reel_progress = 100.0;
        let mut signals = vec![self.enter(FishingPhase::Caught)];
        if let Some(species) = self.hooked {
            signals.push(SessionSignal::Caught(species));
        }
        signals
    }

    fn escape(&mut self) -> Vec<SessionSignal> {
        vec![self.enter(FishingPhase::Escaped), SessionSignal::Escaped]
    }

    /// Switches phase: tears down every armed timer, then arms the new
    /// phase's timers.
    fn enter(&mut self, phase: FishingPhase) -> SessionSignal {
        self.timers.cancel_all();
        debug!(from = ?self.phase, to = ?phase, at_ms = self.timers.now_ms(), "Fishing phase change");
        self.phase = phase;
        self.status = phase.default_status().to_string();

        match phase {
            FishingPhase::Idle => {
                self.hooked = None;
                self.fish_position = None;
                self.fish_target = None;
                self.bite_remaining = 0.0;
                self.reel_progress = 0.0;
            }
            FishingPhase::Casting => {
                self.hooked = None;
                self.bite_remaining = 0.0;
                self.reel_progress = 0.0;
                self.timers.schedule_once(SessionTimer::CastComplete, CAST_DELAY_MS);
            }
            FishingPhase::Waiting => {
                self.timers.schedule_every(SessionTimer::FishFrame, FISH_FRAME_MS);
            }
            FishingPhase::Biting => {
                self.bite_remaining = 100.0;
                self.timers
                    .schedule_every(SessionTimer::BiteCountdown, BITE_COUNTDOWN_TICK_MS);
                self.timers
                    .schedule_once(SessionTimer::BiteExpired, self.bite_window_ms.round() as u64);
            }
            FishingPhase::Reeling => {
                self.fish_position = None;
                self.fish_target = None;
                self.bite_remaining = 0.0;
                self.timers.schedule_every(SessionTimer::ReelTick, REEL_TICK_MS);
            }
            FishingPhase::Caught | FishingPhase::Escaped => {
                self.fish_position = None;
                self.fish_target = None;
                self.timers
                    .schedule_once(SessionTimer::ResolveToIdle, RESOLVE_TO_IDLE_MS);
            }
        }

        if self.autoplay {
            self.arm_autoplay();
        }
        SessionSignal::PhaseChanged(phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn rod_stats(speed: f64, endurance: f64) -> RodStats {
        RodStats {
            luck: 1.0,
            speed,
            endurance,
            max_weight: 10.0,
            size_increase: 0.0,
            mutation_chance: 0.0,
            xp_boost: 1.0,
        }
    }

    fn context(catalog: &Catalog) -> SessionContext<'_> {
        SessionContext {
            catalog,
            luck: 11.0,
            rod: rod_stats(1.0, 5.0),
            bait: catalog.bait("worm-bait").map(|b| b.effect),
            strength_effect: 1.1,
            endurance_effect: 1.08,
            weather: Weather::Sunny,
            event: None,
        }
    }

    /// Fires every due timer up to `until`, collecting signals.
    fn run_until(
        session: &mut FishingSession,
        until: u64,
        ctx: &SessionContext,
        rng: &mut ChaCha8Rng,
    ) -> Vec<SessionSignal> {
        let mut signals = Vec::new();
        while let Some(timer) = session.pop_due(until) {
            signals.extend(session.fire(timer, ctx, rng));
        }
        session.advance_clock(until);
        signals
    }

    fn run_until_phase(
        session: &mut FishingSession,
        phase: FishingPhase,
        ctx: &SessionContext,
        rng: &mut ChaCha8Rng,
    ) {
        for _ in 0..200_000 {
            if session.phase() == phase {
                return;
            }
            let Some(timer) = session.pop_due(u64::MAX) else {
                break;
            };
            session.fire(timer, ctx, rng);
        }
        assert_eq!(session.phase(), phase);
    }

    #[test]
    fn test_bite_window_clamped() {
        assert_eq!(bite_window_ms(&rod_stats(0.0, 0.0), 0.0), 2500.0);
        assert_eq!(bite_window_ms(&rod_stats(0.0, 500.0), 0.0), 5000.0);
        assert_eq!(bite_window_ms(&rod_stats(500.0, 0.0), 0.0), 1000.0);
        let w = bite_window_ms(&rod_stats(1.0, 5.0), 11.0);
        let expected = 2500.0 * (1.0 + 0.1 - 1.0 / 120.0 + 11.0 / 1500.0);
        assert!((w - expected).abs() < 1e-9);
    }

    #[test]
    fn test_reel_depletion_floor() {
        // Common fish against a sturdy rod bottoms out at 0.5
        assert_eq!(reel_depletion(Rarity::Common, 1.08, 100.0), 0.5);
        let d = reel_depletion(Rarity::Executors, 1.08, 5.0);
        assert!((d - 3.0 / 1.18).abs() < 1e-9);
    }

    #[test]
    fn test_reel_gain() {
        assert!((reel_gain(1.1, 5.0) - 5.0 * 1.1 * 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_cast_requires_bait_and_idle() {
        let mut session = FishingSession::new(0);
        assert!(matches!(session.cast(false), Err(GameError::NoBait)));
        assert_eq!(session.phase(), FishingPhase::Idle);

        session.cast(true).unwrap();
        assert_eq!(session.phase(), FishingPhase::Casting);
        assert!(matches!(session.cast(true), Err(GameError::NotIdle)));
    }

    #[test]
    fn test_casting_waits_fixed_delay() {
        let catalog = Catalog::standard();
        let ctx = context(&catalog);
        let mut rng = create_test_rng();
        let mut session = FishingSession::new(0);
        session.cast(true).unwrap();

        run_until(&mut session, CAST_DELAY_MS - 1, &ctx, &mut rng);
        assert_eq!(session.phase(), FishingPhase::Casting);

        run_until(&mut session, CAST_DELAY_MS, &ctx, &mut rng);
        assert_eq!(session.phase(), FishingPhase::Waiting);
        let pos = session.fish_position().unwrap();
        assert!(pos.x == -20.0 || pos.x == 120.0);
        assert!(session.has_timer(SessionTimer::FishFrame));
    }

    #[test]
    fn test_fish_eventually_bites() {
        let catalog = Catalog::standard();
        let ctx = context(&catalog);
        let mut rng = create_test_rng();
        let mut session = FishingSession::new(0);
        session.cast(true).unwrap();

        run_until_phase(&mut session, FishingPhase::Biting, &ctx, &mut rng);
        assert_eq!(session.bite_remaining(), 100.0);
        assert!(session.has_timer(SessionTimer::BiteExpired));
        assert!(!session.has_timer(SessionTimer::FishFrame));
    }

    #[test]
    fn test_bite_expires_into_escape() {
        let catalog = Catalog::standard();
        let ctx = context(&catalog);
        let mut rng = create_test_rng();
        let mut session = FishingSession::new(0);
        session.cast(true).unwrap();
        run_until_phase(&mut session, FishingPhase::Biting, &ctx, &mut rng);

        let start = session.now_ms();
        let window = session.bite_window().round() as u64;
        let signals = run_until(&mut session, start + window, &ctx, &mut rng);
        assert!(signals.contains(&SessionSignal::Escaped));
        assert_eq!(session.phase(), FishingPhase::Escaped);
        assert_eq!(session.bite_remaining(), 0.0);

        run_until(&mut session, start + window + RESOLVE_TO_IDLE_MS, &ctx, &mut rng);
        assert_eq!(session.phase(), FishingPhase::Idle);
        assert_eq!(session.armed_timers(), 0);
    }

    #[test]
    fn test_bite_countdown_decrements() {
        let catalog = Catalog::standard();
        let ctx = context(&catalog);
        let mut rng = create_test_rng();
        let mut session = FishingSession::new(0);
        session.cast(true).unwrap();
        run_until_phase(&mut session, FishingPhase::Biting, &ctx, &mut rng);

        let start = session.now_ms();
        run_until(&mut session, start + 500, &ctx, &mut rng);
        let expected = 100.0 - 5.0 * 100.0 / (session.bite_window() / 100.0);
        assert!((session.bite_remaining() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_action_while_biting_hooks_and_cancels_bite_timers() {
        let catalog = Catalog::standard();
        let ctx = context(&catalog);
        let mut rng = create_test_rng();
        let mut session = FishingSession::new(0);
        session.cast(true).unwrap();
        run_until_phase(&mut session, FishingPhase::Biting, &ctx, &mut rng);

        let signals = session.action(&ctx, &mut rng);
        assert_eq!(signals, vec![SessionSignal::PhaseChanged(FishingPhase::Reeling)]);
        assert!(session.hooked().is_some());
        assert_eq!(session.reel_progress(), REEL_START_PROGRESS);
        assert!(!session.has_timer(SessionTimer::BiteExpired));
        assert!(!session.has_timer(SessionTimer::BiteCountdown));

        // Well past the old bite window: the stale expiry must not fire
        let now = session.now_ms();
        let signals = run_until(&mut session, now + 250, &ctx, &mut rng);
        assert!(!signals.contains(&SessionSignal::Escaped));
        assert_eq!(session.phase(), FishingPhase::Reeling);
    }

    #[test]
    fn test_reeling_without_action_escapes() {
        let catalog = Catalog::standard();
        let ctx = context(&catalog);
        let mut rng = create_test_rng();
        let mut session = FishingSession::new(0);
        session.cast(true).unwrap();
        run_until_phase(&mut session, FishingPhase::Biting, &ctx, &mut rng);
        session.action(&ctx, &mut rng);

        let mut caught = false;
        let mut escaped = false;
        for _ in 0..1_000 {
            let Some(timer) = session.pop_due(u64::MAX) else {
                break;
            };
            for signal in session.fire(timer, &ctx, &mut rng) {
                match signal {
                    SessionSignal::Caught(_) => caught = true,
                    SessionSignal::Escaped => escaped = true,
                    _ => {}
                }
            }
            assert!((0.0..=100.0).contains(&session.reel_progress()));
            if session.phase() == FishingPhase::Escaped {
                break;
            }
        }
        assert!(escaped && !caught);
        assert_eq!(session.reel_progress(), 0.0);
    }

    #[test]
    fn test_mashing_action_lands_fish() {
        let catalog = Catalog::standard();
        let ctx = context(&catalog);
        let mut rng = create_test_rng();
        let mut session = FishingSession::new(0);
        session.cast(true).unwrap();
        run_until_phase(&mut session, FishingPhase::Biting, &ctx, &mut rng);
        session.action(&ctx, &mut rng);

        let mut signals = Vec::new();
        for _ in 0..100 {
            signals = session.action(&ctx, &mut rng);
            if session.phase() != FishingPhase::Reeling {
                break;
            }
        }
        assert_eq!(session.phase(), FishingPhase::Caught);
        assert_eq!(session.reel_progress(), 100.0);
        assert!(matches!(signals.last(), Some(SessionSignal::Caught(_))));
        assert!(session.has_timer(SessionTimer::ResolveToIdle));
        assert_eq!(session.armed_timers(), 1);

        // Further presses do nothing once resolved
        assert!(session.action(&ctx, &mut rng).is_empty());
    }

    #[test]
    fn test_autoplay_runs_full_cycle() {
        let catalog = Catalog::standard();
        let ctx = context(&catalog);
        let mut rng = create_test_rng();
        let mut session = FishingSession::new(0);
        session.set_autoplay(true);
        assert!(session.has_timer(SessionTimer::AutoPlay));

        let signals = run_until(&mut session, AUTOPLAY_CAST_DELAY_MS, &ctx, &mut rng);
        assert_eq!(signals, vec![SessionSignal::AutoCast]);
        session.cast(true).unwrap();

        let mut resolved = false;
        for _ in 0..200_000 {
            let Some(timer) = session.pop_due(u64::MAX) else {
                break;
            };
            let signals = session.fire(timer, &ctx, &mut rng);
            if signals
                .iter()
                .any(|s| matches!(s, SessionSignal::Caught(_) | SessionSignal::Escaped))
            {
                resolved = true;
                break;
            }
        }
        assert!(resolved);
    }

    #[test]
    fn test_disabling_autoplay_cancels_timer() {
        let mut session = FishingSession::new(0);
        session.set_autoplay(true);
        session.set_autoplay(false);
        assert!(!session.has_timer(SessionTimer::AutoPlay));
        assert_eq!(session.armed_timers(), 0);
    }
}
