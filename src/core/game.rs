//! The game orchestrator.
//!
//! A [`Game`] owns the persisted record, the live fishing session, the world
//! and every timer, all on one virtual millisecond timeline. Callers advance
//! the timeline with [`Game::advance_to`] and invoke player operations in
//! between; timers fire one at a time in due order, so a phase change made by
//! one timer is visible to the next.
//!
//! Player operations return `Result`. A rejected operation changes nothing
//! and its message is also queued as a [`GameEvent::Notice`].

use super::constants::{
    AUTOPLAY_MIN_LEVEL, DAY_NIGHT_CHECK_MS, EVENT_ROLL_MS, EXPIRY_SWEEP_MS, PASSIVE_LUCK_MS,
    PRICE_DECAY_INTERVAL_MS, RELIC_DROP_CHANCE, RELIC_ITEM_ID, RELIC_LOCATION_ID,
    WEATHER_CHANGE_MS,
};
use super::error::{GameError, Result};
use super::events::GameEvent;
use super::game_state::GameState;
use super::scheduler::Scheduler;
use crate::character::{Consumables, Skill};
use crate::content::{Catalog, Enchantment, FishSpecies, ItemKind, Rarity};
use crate::economy::{
    self, plan_travel, today_utc, Altar, Destination, EnchantRollCounter, Purchase, SaleModifiers,
    SaleReceipt,
};
use crate::fishing::{
    check_mutation, compose_luck, generate_weight, CaughtFish, FishingSession, LuckFactors,
    RodStats, SessionContext, SessionSignal, SessionView,
};
use crate::persistence::{
    load_game, load_roll_counter, save_game, save_roll_counter, BlobStore, LoadSource,
};
use crate::world::{WorldState, WorldView};
use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info};

/// Timers the game keeps running regardless of the fishing phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameTimer {
    ExpirySweep,
    PriceDecay,
    DayNight,
    WeatherChange,
    EventRoll,
    PassiveLuck,
}

pub struct Game {
    catalog: Catalog,
    state: GameState,
    consumables: Consumables,
    session: FishingSession,
    world: WorldState,
    altar: Altar,
    timers: Scheduler<GameTimer>,
    catch_ordinal: u64,
    events: Vec<GameEvent>,
}

fn composed_luck(
    catalog: &Catalog,
    state: &GameState,
    consumables: &Consumables,
    world: &WorldState,
    now_ms: u64,
) -> f64 {
    compose_luck(&LuckFactors {
        base_luck: state.progression.base_luck,
        rod_luck: state.rods.equipped_stats(catalog).luck,
        potion_luck: consumables.potion_luck(catalog, now_ms),
        skill_luck_level: state.progression.skills.luck,
        weather: world.weather,
        is_day: world.is_day,
        event: world.active_event(now_ms),
    })
}

fn session_context<'a>(
    catalog: &'a Catalog,
    state: &GameState,
    consumables: &Consumables,
    world: &WorldState,
    now_ms: u64,
) -> SessionContext<'a> {
    let skills = &state.progression.skills;
    SessionContext {
        catalog,
        luck: composed_luck(catalog, state, consumables, world, now_ms),
        rod: state.rods.equipped_stats(catalog),
        bait: consumables.bait_effect(catalog),
        strength_effect: skills.effect(Skill::Strength),
        endurance_effect: skills.effect(Skill::Endurance),
        weather: world.weather,
        event: world.active_event(now_ms),
    }
}

impl Game {
    /// Starts a game at `now_ms` with every world timer armed. Loaded state is
    /// repaired first; active bait and potions always start empty.
    pub fn new(
        catalog: Catalog,
        mut state: GameState,
        roll_counter: EnchantRollCounter,
        now_ms: u64,
    ) -> Self {
        state.normalize(&catalog);

        let mut timers = Scheduler::new(now_ms);
        timers.schedule_every(GameTimer::ExpirySweep, EXPIRY_SWEEP_MS);
        timers.schedule_every(GameTimer::PriceDecay, PRICE_DECAY_INTERVAL_MS);
        timers.schedule_every(GameTimer::DayNight, DAY_NIGHT_CHECK_MS);
        timers.schedule_every(GameTimer::WeatherChange, WEATHER_CHANGE_MS);
        timers.schedule_every(GameTimer::EventRoll, EVENT_ROLL_MS);
        timers.schedule_every(GameTimer::PassiveLuck, PASSIVE_LUCK_MS);

        Self {
            catalog,
            state,
            consumables: Consumables::default(),
            session: FishingSession::new(now_ms),
            world: WorldState::new(now_ms),
            altar: Altar::new(roll_counter),
            timers,
            catch_ordinal: 0,
            events: Vec::new(),
        }
    }

    /// A brand-new player with the starter kit.
    pub fn new_player(catalog: Catalog, now_ms: u64) -> Self {
        let state = GameState::new_player(&catalog);
        Self::new(catalog, state, EnchantRollCounter::default(), now_ms)
    }

    /// Loads a player's save and roll counter. Never fails; see
    /// [`load_game`] for the fallbacks.
    pub fn load(store: &impl BlobStore, catalog: Catalog, username: &str, now_ms: u64) -> Self {
        let loaded = load_game(store, &catalog, username);
        let counter = load_roll_counter(store, username);
        let mut game = Self::new(catalog, loaded.state, counter, now_ms);
        let message = match loaded.source {
            LoadSource::Saved => format!("Game loaded for {}", username),
            LoadSource::NewPlayer => format!("Welcome, {}!", username),
            LoadSource::Recovered => String::from("Save data was unreadable, starting fresh"),
        };
        game.events.push(GameEvent::notice(message));
        game
    }

    pub fn save(&self, store: &mut impl BlobStore, username: &str) -> Result<()> {
        save_game(store, username, &self.state)?;
        save_roll_counter(store, username, &self.altar.counter)
    }

    // ── Read-only views ─────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn consumables(&self) -> &Consumables {
        &self.consumables
    }

    pub fn session(&self) -> &FishingSession {
        &self.session
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn roll_counter(&self) -> &EnchantRollCounter {
        &self.altar.counter
    }

    pub fn pending_enchantment(&self) -> Option<&'static Enchantment> {
        self.altar.pending()
    }

    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    /// Composed luck right now, before any bait multiplier.
    pub fn luck(&self) -> f64 {
        composed_luck(
            &self.catalog,
            &self.state,
            &self.consumables,
            &self.world,
            self.now_ms(),
        )
    }

    pub fn rod_stats(&self) -> RodStats {
        self.state.rods.equipped_stats(&self.catalog)
    }

    pub fn session_view(&self) -> SessionView {
        self.session.view()
    }

    pub fn world_view(&self) -> WorldView {
        self.world.view(self.now_ms())
    }

    /// Takes every event queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Timeline ────────────────────────────────────────────────────

    /// Fires every session and world timer due at or before `now_ms`, in due
    /// order, then moves both clocks to `now_ms`.
    pub fn advance_to(&mut self, now_ms: u64, rng: &mut impl Rng) {
        loop {
            let session_due = self.session.next_due_ms().filter(|&d| d <= now_ms);
            let world_due = self.timers.next_due_ms().filter(|&d| d <= now_ms);
            match (session_due, world_due) {
                (None, None) => break,
                (Some(s), Some(w)) if w < s => self.fire_world_timer(now_ms, rng),
                (Some(_), _) => self.fire_session_timer(now_ms, rng),
                (None, Some(_)) => self.fire_world_timer(now_ms, rng),
            }
        }
        self.session.advance_clock(now_ms);
        self.timers.advance_clock(now_ms);
    }

    fn fire_session_timer(&mut self, until_ms: u64, rng: &mut impl Rng) {
        let Some(timer) = self.session.pop_due(until_ms) else {
            return;
        };
        let now = self.session.now_ms();
        self.timers.advance_clock(now);

        let catalog = self.catalog;
        let ctx = session_context(&catalog, &self.state, &self.consumables, &self.world, now);
        let signals = self.session.fire(timer, &ctx, rng);
        self.apply_signals(signals, rng);
    }

    fn fire_world_timer(&mut self, until_ms: u64, rng: &mut impl Rng) {
        let Some(timer) = self.timers.pop_due(until_ms) else {
            return;
        };
        let now = self.timers.now_ms();
        self.session.advance_clock(now);

        match timer {
            GameTimer::ExpirySweep => {
                for id in self.consumables.sweep_expired(now) {
                    let potion = self.catalog.item_name(&id).to_string();
                    info!(potion = %potion, "Potion expired");
                    self.events.push(GameEvent::PotionExpired { potion });
                }
                if let Some(spec) = self.world.sweep_event(now) {
                    self.events.push(GameEvent::WorldEventEnded {
                        name: spec.name.to_string(),
                    });
                }
            }
            GameTimer::PriceDecay => {
                let changed = self.state.shop_prices.decay(&self.catalog);
                if changed > 0 {
                    debug!(changed, "Shop prices decayed");
                }
            }
            GameTimer::DayNight => {
                if let Some(is_day) = self.world.update_clock(now) {
                    self.events.push(GameEvent::TimeOfDayChanged { is_day });
                }
            }
            GameTimer::WeatherChange => {
                if let Some(weather) = self.world.change_weather(rng) {
                    self.events.push(GameEvent::WeatherChanged { weather });
                }
            }
            GameTimer::EventRoll => {
                if let Some(spec) = self.world.try_start_event(&self.catalog, now, rng) {
                    self.events.push(GameEvent::WorldEventStarted {
                        name: spec.name.to_string(),
                    });
                }
            }
            GameTimer::PassiveLuck => {
                let base_luck = self.state.progression.gain_passive_luck();
                debug!(base_luck, "Passive luck gained");
            }
        }
    }

    fn apply_signals(&mut self, signals: Vec<SessionSignal>, rng: &mut impl Rng) {
        for signal in signals {
            match signal {
                SessionSignal::PhaseChanged(phase) => {
                    self.events.push(GameEvent::PhaseChanged { phase });
                }
                SessionSignal::Caught(species) => self.on_caught(species, rng),
                SessionSignal::Escaped => {
                    self.events.push(GameEvent::FishEscaped);
                    self.use_bait_charge();
                }
                SessionSignal::AutoCast => {
                    if let Err(e) = self.start_cast() {
                        debug!(error = %e, "Auto-play cast rejected");
                        self.stop_autoplay();
                    }
                }
            }
        }
    }

    /// Applies every side effect of a landed fish.
    fn on_caught(&mut self, species: &'static FishSpecies, rng: &mut impl Rng) {
        let now = self.now_ms();
        let luck = self.luck();
        let rod = self.rod_stats();

        let weight = generate_weight(&self.catalog, luck, &rod, rng);
        let mutation = check_mutation(luck, &rod, self.world.is_day, rng);
        let fish_id = format!("{}-{}-{}", species.id, now, self.catch_ordinal);
        self.catch_ordinal += 1;

        self.state.inventory.add_fish(CaughtFish {
            id: fish_id.clone(),
            species_id: species.id.to_string(),
            weight,
            mutation,
            caught_at_ms: now,
        });
        self.state.collection.record(species.id, weight, mutation);
        self.state.total_caught += 1;

        if self.state.location == RELIC_LOCATION_ID && rng.gen_bool(RELIC_DROP_CHANCE) {
            self.state
                .inventory
                .add_item(RELIC_ITEM_ID, ItemKind::Material, 1);
            info!("Stonehenge relic dropped");
            self.events.push(GameEvent::RelicFound);
        }

        let strength = self.state.progression.skills.effect(Skill::Strength);
        let xp = (species.xp as f64 * strength * rod.xp_boost).floor() as u64;
        let caught = GameEvent::FishCaught {
            fish_id,
            species: species.name.to_string(),
            rarity: species.rarity,
            weight,
            mutation,
            xp,
        };
        info!(
            species = species.id,
            rarity = ?species.rarity,
            weight,
            ?mutation,
            xp,
            "Fish caught"
        );
        self.session.set_status(caught.to_string());
        self.events.push(caught);

        self.award_xp(xp);
        self.use_bait_charge();
    }

    fn award_xp(&mut self, xp: u64) {
        let summary = self.state.progression.add_xp(xp);
        if summary.levels_gained == 0 {
            return;
        }
        self.state.money += summary.coin_reward;
        info!(
            level = summary.new_level,
            coins = summary.coin_reward,
            "Level up"
        );
        self.events.push(GameEvent::LevelUp {
            level: summary.new_level,
            coins: summary.coin_reward,
        });
    }

    fn use_bait_charge(&mut self) {
        let Some(id) = self.consumables.consume_bait_use() else {
            return;
        };
        let bait = self.catalog.item_name(&id).to_string();
        info!(bait = %bait, "Bait used up");
        self.events.push(GameEvent::BaitDepleted { bait });
        if self.session.is_autoplay() {
            self.stop_autoplay();
        }
    }

    fn stop_autoplay(&mut self) {
        self.session.set_autoplay(false);
        self.events.push(GameEvent::AutoplayStopped);
    }

    fn start_cast(&mut self) -> Result<()> {
        let signals = self.session.cast(self.consumables.has_bait())?;
        for signal in signals {
            if let SessionSignal::PhaseChanged(phase) = signal {
                self.events.push(GameEvent::PhaseChanged { phase });
            }
        }
        Ok(())
    }

    fn report<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            debug!(error = %e, "Operation rejected");
            self.events.push(GameEvent::notice(e.to_string()));
        }
        result
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.events.push(GameEvent::notice(message));
    }

    // ── Fishing ─────────────────────────────────────────────────────

    /// Casts the line. Requires an idle session and an active bait.
    pub fn cast(&mut self) -> Result<()> {
        let result = self.start_cast();
        self.report(result)
    }

    /// The action button: hook while biting, pull while reeling.
    pub fn action(&mut self, rng: &mut impl Rng) {
        let catalog = self.catalog;
        let now = self.now_ms();
        let ctx = session_context(&catalog, &self.state, &self.consumables, &self.world, now);
        let signals = self.session.action(&ctx, rng);
        self.apply_signals(signals, rng);
    }

    /// Turns auto-play on or off, returning the new setting. Turning it on
    /// needs the minimum level and an active bait.
    pub fn toggle_autoplay(&mut self) -> Result<bool> {
        let result = self.try_toggle_autoplay();
        self.report(result)
    }

    fn try_toggle_autoplay(&mut self) -> Result<bool> {
        let enable = !self.session.is_autoplay();
        if enable {
            if self.state.progression.level < AUTOPLAY_MIN_LEVEL {
                return Err(GameError::LevelTooLow {
                    required: AUTOPLAY_MIN_LEVEL,
                });
            }
            if !self.consumables.has_bait() {
                return Err(GameError::NoBait);
            }
        }
        self.session.set_autoplay(enable);
        self.notify(if enable {
            "Auto-fishing enabled"
        } else {
            "Auto-fishing disabled"
        });
        Ok(enable)
    }

    // ── Inventory ───────────────────────────────────────────────────

    /// Uses one bait or potion from the inventory.
    pub fn use_item(&mut self, id: &str) -> Result<()> {
        let result = self.try_use_item(id);
        self.report(result)
    }

    fn try_use_item(&mut self, id: &str) -> Result<()> {
        if self.state.inventory.item_count(id) == 0 {
            return Err(GameError::UnknownItem(id.to_string()));
        }
        let now = self.now_ms();
        if let Some(bait) = self.catalog.bait(id) {
            self.state.inventory.remove_item(id, 1)?;
            self.consumables.equip_bait(bait);
            info!(bait = bait.id, uses = bait.effect.durability, "Bait equipped");
            self.notify(format!("Using {}", bait.name));
        } else if let Some(potion) = self.catalog.potion(id) {
            self.state.inventory.remove_item(id, 1)?;
            let expires_at_ms = self.consumables.apply_potion(potion, now);
            info!(potion = potion.id, expires_at_ms, "Potion applied");
            self.notify(format!("{} is active", potion.name));
        } else {
            return Err(GameError::NotUsable(self.catalog.item_name(id).to_string()));
        }
        Ok(())
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        let result = self.state.inventory.toggle_favorite(id);
        self.report(result)
    }

    // ── Shop and selling ────────────────────────────────────────────

    pub fn buy_item(&mut self, id: &str) -> Result<Purchase> {
        let result = economy::buy_item(
            &self.catalog,
            &mut self.state.shop_prices,
            &mut self.state.money,
            &mut self.state.inventory,
            id,
        );
        if let Ok(purchase) = &result {
            let message = format!("Bought {}", self.catalog.item_name(&purchase.id));
            self.notify(message);
        }
        self.report(result)
    }

    pub fn buy_rod(&mut self, id: &str) -> Result<u64> {
        let result = economy::buy_rod(&self.catalog, &mut self.state.money, &mut self.state.rods, id);
        if let (Ok(_), Some(rod)) = (&result, self.catalog.rod(id)) {
            info!(rod = rod.id, "Rod bought");
            self.notify(format!("Bought and equipped {}", rod.name));
        }
        self.report(result)
    }

    pub fn equip_rod(&mut self, id: &str) -> Result<()> {
        let result = self.state.rods.equip(id);
        if let (Ok(()), Some(rod)) = (&result, self.catalog.rod(id)) {
            self.notify(format!("Equipped {}", rod.name));
        }
        self.report(result)
    }

    fn sale_modifiers(&self) -> SaleModifiers {
        SaleModifiers::new(
            self.state.progression.skills.effect(Skill::Knowledge),
            self.world.active_event(self.now_ms()),
        )
    }

    fn settle(&mut self, result: Result<SaleReceipt>) -> Result<SaleReceipt> {
        if let Ok(receipt) = &result {
            self.state.money += receipt.coins;
            info!(fish = receipt.sold.len(), coins = receipt.coins, "Fish sold");
            self.notify(format!(
                "Sold {} fish for {} coins",
                receipt.sold.len(),
                receipt.coins
            ));
        }
        self.report(result)
    }

    /// Sells one fish by instance id. Returns the coins earned.
    pub fn sell_fish(&mut self, id: &str, rng: &mut impl Rng) -> Result<u64> {
        let mods = self.sale_modifiers();
        let result = economy::sell_fish(&mut self.state.inventory, &self.catalog, id, &mods, rng);
        self.settle(result).map(|r| r.coins)
    }

    pub fn sell_rarity(&mut self, rarity: Rarity, rng: &mut impl Rng) -> Result<SaleReceipt> {
        let mods = self.sale_modifiers();
        let result =
            economy::sell_rarity(&mut self.state.inventory, &self.catalog, rarity, &mods, rng);
        self.settle(result)
    }

    pub fn sell_selected(&mut self, ids: &[String], rng: &mut impl Rng) -> Result<SaleReceipt> {
        let mods = self.sale_modifiers();
        let result =
            economy::sell_selected(&mut self.state.inventory, &self.catalog, ids, &mods, rng);
        self.settle(result)
    }

    // ── Progression and travel ──────────────────────────────────────

    pub fn upgrade_skill(&mut self, skill: Skill) -> Result<u32> {
        let result = self.state.progression.upgrade_skill(skill);
        if let Ok(level) = &result {
            let message = format!("{} is now level {}", skill.name(), level);
            self.notify(message);
        }
        self.report(result)
    }

    /// Moves to a fishing location, or opens the altar for action locations.
    pub fn travel(&mut self, id: &str) -> Result<Destination> {
        let rod = self.rod_stats();
        let result = plan_travel(&self.catalog, &rod, id);
        match &result {
            Ok(Destination::Fishing(location)) => {
                self.state.location = location.id.to_string();
                info!(location = location.id, "Travelled");
                self.notify(format!("Travelled to {}", location.name));
            }
            Ok(Destination::Action(_)) => self.open_altar(),
            Err(_) => {}
        }
        self.report(result)
    }

    // ── Enchanting ──────────────────────────────────────────────────

    pub fn open_altar(&mut self) {
        self.open_altar_on(today_utc());
    }

    /// Opens the altar as of `today`, discarding any unapplied roll.
    pub fn open_altar_on(&mut self, today: NaiveDate) {
        self.altar.open(today);
    }

    pub fn roll_enchantment(&mut self, rng: &mut impl Rng) -> Result<&'static Enchantment> {
        self.roll_enchantment_on(today_utc(), rng)
    }

    pub fn roll_enchantment_on(
        &mut self,
        today: NaiveDate,
        rng: &mut impl Rng,
    ) -> Result<&'static Enchantment> {
        let result = self
            .altar
            .roll(&self.catalog, &mut self.state.inventory, today, rng);
        if let Ok(enchantment) = &result {
            let message = format!("Rolled {} ({:?})", enchantment.name, enchantment.tier);
            self.notify(message);
        }
        self.report(result)
    }

    /// Applies the pending roll to the equipped rod.
    pub fn apply_enchantment(&mut self) -> Result<&'static Enchantment> {
        let result = self.altar.apply(&mut self.state.rods);
        if let Ok((rod_id, enchantment)) = &result {
            let rod = self.catalog.rod(rod_id).map(|r| r.name).unwrap_or("rod");
            info!(rod = %rod_id, enchantment = enchantment.id, "Enchantment applied");
            let message = format!("{} applied to {}!", enchantment.name, rod);
            self.notify(message);
        }
        self.report(result).map(|(_, e)| e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::ActiveBait;
    use crate::content::data::LUCK_POTION_ID;
    use crate::fishing::{FishingPhase, SessionTimer};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn new_game() -> Game {
        Game::new_player(Catalog::standard(), 0)
    }

    #[test]
    fn test_cast_without_bait_is_rejected_with_notice() {
        let mut game = new_game();
        assert!(matches!(game.cast(), Err(GameError::NoBait)));
        assert_eq!(game.session().phase(), FishingPhase::Idle);
        let events = game.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::Notice { message } if message.contains("bait"))));
    }

    #[test]
    fn test_cast_moves_to_waiting() {
        let mut game = new_game();
        let mut rng = create_test_rng();
        game.use_item("worm-bait").unwrap();
        assert_eq!(game.state().inventory.item_count("worm-bait"), 2);

        game.cast().unwrap();
        assert_eq!(game.session().phase(), FishingPhase::Casting);
        game.advance_to(600, &mut rng);
        assert_eq!(game.session().phase(), FishingPhase::Waiting);
    }

    #[test]
    fn test_materials_are_not_usable() {
        let mut game = new_game();
        game.state.inventory.add_item(RELIC_ITEM_ID, ItemKind::Material, 1);
        assert!(matches!(
            game.use_item(RELIC_ITEM_ID),
            Err(GameError::NotUsable(_))
        ));
        assert_eq!(game.state().inventory.relic_count(), 1);
        assert!(matches!(
            game.use_item("golden-bait"),
            Err(GameError::UnknownItem(_))
        ));
    }

    #[test]
    fn test_potion_raises_luck_until_swept() {
        let mut game = new_game();
        let mut rng = create_test_rng();
        let before = game.luck();
        game.use_item(LUCK_POTION_ID).unwrap();
        assert!((game.luck() - before - 40.0).abs() < 1e-9);

        game.drain_events();
        game.advance_to(240_000, &mut rng);
        assert!(game.consumables().potions.is_empty());
        assert!(game
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::PotionExpired { .. })));
        assert!(game.luck() < before + 40.0);
    }

    #[test]
    fn test_autoplay_needs_level() {
        let mut game = new_game();
        game.use_item("worm-bait").unwrap();
        assert!(matches!(
            game.toggle_autoplay(),
            Err(GameError::LevelTooLow { required: 5 })
        ));
        game.state.progression.level = 5;
        assert_eq!(game.toggle_autoplay().unwrap(), true);
        assert_eq!(game.toggle_autoplay().unwrap(), false);
    }

    #[test]
    fn test_catch_applies_side_effects() {
        let mut game = new_game();
        let mut rng = create_test_rng();
        game.use_item("worm-bait").unwrap();
        let species = game.catalog().species("tuna").unwrap();

        game.on_caught(species, &mut rng);

        let state = game.state();
        assert_eq!(state.total_caught, 1);
        assert_eq!(state.inventory.fish.len(), 1);
        let fish = &state.inventory.fish[0];
        assert!(fish.id.starts_with("tuna-0-"));
        assert!(fish.weight > 0.0);
        assert_eq!(state.collection.get("tuna").unwrap().count, 1);
        let expected_xp = (species.xp as f64 * 1.1).floor() as u64;
        assert_eq!(state.progression.xp, expected_xp % 100);
        assert_eq!(
            game.consumables().bait.as_ref().unwrap().remaining_uses,
            2
        );
    }

    #[test]
    fn test_last_bait_use_stops_autoplay() {
        let mut game = new_game();
        let mut rng = create_test_rng();
        game.state.progression.level = 5;
        game.consumables.bait = Some(ActiveBait {
            id: String::from("golden-bait"),
            remaining_uses: 1,
        });
        game.toggle_autoplay().unwrap();
        game.drain_events();

        let species = game.catalog().species("tuna").unwrap();
        game.on_caught(species, &mut rng);
        assert!(!game.session().is_autoplay());
        assert!(!game.session().has_timer(SessionTimer::AutoPlay));
        let events = game.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::BaitDepleted { .. })));
        assert!(events.contains(&GameEvent::AutoplayStopped));
    }

    #[test]
    fn test_world_timers_run_on_schedule() {
        let mut game = new_game();
        let mut rng = create_test_rng();
        game.advance_to(60_000, &mut rng);
        assert!((game.state().progression.base_luck - 1.2).abs() < 1e-9);
        assert_eq!(game.world_view().clock, "00:02");
        assert_eq!(game.now_ms(), 60_000);
    }

    #[test]
    fn test_travel_and_altar() {
        let mut game = new_game();
        assert!(matches!(
            game.travel("deep-sea"),
            Err(GameError::LocationLocked(_))
        ));
        assert_eq!(game.state().location, "calm-lake");
        assert!(matches!(
            game.travel("enchanting-altar"),
            Ok(Destination::Action(_))
        ));
        assert_eq!(game.state().location, "calm-lake");
    }

    #[test]
    fn test_enchant_roll_and_apply() {
        let mut game = new_game();
        let mut rng = create_test_rng();
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert!(matches!(
            game.roll_enchantment_on(today, &mut rng),
            Err(GameError::InsufficientRelics)
        ));

        game.state.inventory.add_item(RELIC_ITEM_ID, ItemKind::Material, 1);
        game.open_altar_on(today);
        let rolled = game.roll_enchantment_on(today, &mut rng).unwrap();
        assert_eq!(game.pending_enchantment().map(|e| e.id), Some(rolled.id));
        assert_eq!(game.roll_counter().rolls, 1);

        let applied = game.apply_enchantment().unwrap();
        assert_eq!(applied.id, rolled.id);
        assert!(game.pending_enchantment().is_none());
    }

    #[test]
    fn test_level_up_pays_coins() {
        let mut game = new_game();
        game.award_xp(100);
        assert_eq!(game.state().money, 100 + 100);
        assert_eq!(game.state().progression.level, 2);
        assert!(game
            .drain_events()
            .contains(&GameEvent::LevelUp { level: 2, coins: 100 }));
    }
}
