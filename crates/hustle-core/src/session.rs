//! Simulation session - main entry point for running one playthrough.
//!
//! [`Session`] owns everything that changes during play: the ECS world
//! (player plus map objects), clock, vitals, score, dialogue box, deferred
//! scheduler and map catalog. There is no global game state; external
//! collaborators (renderer, audio, input devices) feed discrete events in
//! and read per-frame snapshots out.

use hecs::{Entity, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::{Facing, Hitboxes, Interactable, MapObject, MoveState, Player};
use crate::events::{Category, EventKey};
use crate::map::{MapCatalog, MapError};
use crate::systems::{
    dispatch, nearest_interactable, player_movement_system, Confirm, Continuation, DialogueBox,
    DialogueView, FadeRequest, InputState, MapSwap, Progress, Scheduler,
};
use hustle_logic::collision::Rect;
use hustle_logic::constants::clock::DEADLINE_DAY;
use hustle_logic::constants::dialogue::SCROLL_CHARS_PER_TICK;
use hustle_logic::constants::energy::RESTORE_PER_HOUR;
use hustle_logic::constants::player::FIXED_TICK;
use hustle_logic::score;

/// Tunable parameters for one playthrough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Reaching this day ends the run.
    pub deadline_day: u32,
    /// Time of day the session starts at, in day-seconds.
    pub start_day_seconds: f32,
    pub start_energy: i32,
    /// Simulated seconds of game time per real second of tick time.
    pub time_scale: f32,
    /// Fixed RNG seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            deadline_day: DEADLINE_DAY,
            start_day_seconds: 480.0,
            start_energy: 100,
            time_scale: 1.0,
            seed: None,
        }
    }
}

/// Whether the run is still live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// One playthrough of the game.
pub struct Session {
    world: World,
    /// Clock, vitals and score - the state the event dispatcher mutates.
    pub progress: Progress,
    dialogue: DialogueBox,
    scheduler: Scheduler,
    catalog: MapCatalog,
    rng: StdRng,
    config: SessionConfig,
    phase: Phase,
    paused: bool,
    player: Entity,
    nearest: Option<Entity>,
    bounds: Option<Rect>,
    current_map: Option<String>,
    fades: Vec<FadeRequest>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let mut world = World::new();
        let player = world.spawn((
            Player,
            Hitboxes::at(0.0, 0.0),
            MoveState::default(),
            Facing::default(),
        ));

        let mut progress = Progress::default();
        progress.clock.day_seconds = config.start_day_seconds;
        progress.clock.deadline_day = config.deadline_day;
        progress.vitals.set_energy(config.start_energy);

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            world,
            progress,
            dialogue: DialogueBox::new(),
            scheduler: Scheduler::new(),
            catalog: MapCatalog::new(),
            rng,
            config,
            phase: Phase::Running,
            paused: false,
            player,
            nearest: None,
            bounds: None,
            current_map: None,
            fades: Vec::new(),
        }
    }

    /// Register a map document with the catalog.
    pub fn insert_map_json(&mut self, id: &str, json: &str) -> Result<(), MapError> {
        self.catalog.insert_json(id, json)
    }

    /// Swap to a registered map, placing the player at its spawn point (or
    /// the map centre when it has none). On error nothing changes.
    pub fn switch_map(&mut self, id: &str) -> Result<(), MapError> {
        self.load_map(id, None)
    }

    fn load_map(&mut self, id: &str, position: Option<(f32, f32)>) -> Result<(), MapError> {
        let def = self.catalog.get(id)?.clone();

        let stale: Vec<Entity> = self
            .world
            .query::<&MapObject>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in stale {
            let _ = self.world.despawn(entity);
        }

        for (index, obj) in def.objects.iter().enumerate() {
            let entity = self.world.spawn((MapObject {
                rect: obj.rect,
                order: index as u32,
            },));
            if obj.event.is_some() || obj.text.is_some() {
                let _ = self.world.insert_one(
                    entity,
                    Interactable {
                        event: obj.event.clone(),
                        text: obj.text.clone(),
                    },
                );
            }
        }

        let (x, y) = position
            .or(def.spawn)
            .unwrap_or_else(|| def.bounds.centre());
        if let Ok(mut boxes) = self.world.get::<&mut Hitboxes>(self.player) {
            boxes.set_pos(x, y);
        }

        self.bounds = Some(def.bounds);
        self.nearest = None;
        self.current_map = Some(id.to_string());
        log::info!("map '{}' loaded ({} objects)", def.name, def.objects.len());
        Ok(())
    }

    /// Advance the simulation by `dt` simulated seconds.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        if self.phase == Phase::GameOver || self.paused {
            return;
        }

        for task in self.scheduler.tick(dt) {
            match task {
                Continuation::Wake { minutes } => self.complete_sleep(minutes),
                Continuation::Dispatch(key) => self.run_dispatch(&key),
            }
        }
        if self.phase == Phase::GameOver {
            return;
        }

        // Time stands still during the sleep cutscene; the slept duration
        // is applied in one step by the wake continuation.
        if !self.progress.vitals.sleeping {
            let result = self.progress.clock.advance(dt * self.config.time_scale);
            if result.day_changed {
                log::info!("day {} begins", self.progress.clock.day);
            }
            if result.game_over {
                self.finish_run();
                return;
            }
        }

        let frozen = self.dialogue.is_open() || self.progress.vitals.sleeping;
        if let Ok(mut state) = self.world.get::<&mut MoveState>(self.player) {
            state.frozen = frozen;
        }

        player_movement_system(&mut self.world, input, FIXED_TICK, self.bounds.as_ref());
        self.nearest = nearest_interactable(&self.world);
        self.dialogue.tick(SCROLL_CHARS_PER_TICK);
    }

    /// Confirm press: advances dialogue, resolves a choice, or triggers the
    /// nearest interactable object.
    pub fn interact(&mut self) {
        if self.phase == Phase::GameOver || self.paused {
            return;
        }

        if self.dialogue.is_open() {
            match self.dialogue.confirm() {
                Confirm::Consumed => {}
                Confirm::Choice(key) => self.run_dispatch(&key),
                Confirm::Closed(Some(key)) => self.run_dispatch(&key),
                Confirm::Closed(None) => {}
            }
            return;
        }

        if self.progress.vitals.sleeping {
            return;
        }

        let Some(entity) = self.nearest else {
            return;
        };
        let props = match self.world.get::<&Interactable>(entity) {
            Ok(props) => (*props).clone(),
            Err(_) => return,
        };

        if let Some(key) = props.event {
            self.run_dispatch(&key);
        } else if let Some(text) = props.text {
            self.dialogue.open_text(&text);
        }
    }

    /// Escape press: aborts an open dialogue (discarding any pending choice
    /// without committing it), otherwise toggles pause.
    pub fn escape(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }
        if self.dialogue.is_open() {
            self.dialogue.dismiss();
            return;
        }
        self.paused = !self.paused;
    }

    pub fn choice_up(&mut self) {
        if !self.paused {
            self.dialogue.choice_up();
        }
    }

    pub fn choice_down(&mut self) {
        if !self.paused {
            self.dialogue.choice_down();
        }
    }

    /// Parse and run a raw interaction key. This is the string boundary -
    /// everything past here works on parsed [`EventKey`]s.
    pub fn trigger(&mut self, raw: &str) {
        let key = EventKey::parse(raw);
        self.run_dispatch(&key);
    }

    fn run_dispatch(&mut self, key: &EventKey) {
        let effect = dispatch(
            key,
            &mut self.progress,
            &mut self.scheduler,
            &self.catalog,
            &mut self.rng,
        );

        if let Some(swap) = &effect.map_swap {
            self.apply_swap(swap);
        }
        if let Some(fade) = effect.fade {
            self.fades.push(fade);
        }
        if effect.close {
            self.dialogue.dismiss();
        } else if !effect.text.is_empty() {
            self.dialogue.open_with(&effect.text, effect.on_close.clone());
            if !effect.choices.is_empty() {
                self.dialogue.set_choices(effect.choices);
            }
        }

        if self.progress.clock.day >= self.progress.clock.deadline_day {
            self.finish_run();
        }
    }

    fn apply_swap(&mut self, swap: &MapSwap) {
        // The dispatcher validated the id against the catalog, so this only
        // fails if the catalog changed underneath us; state stays put then.
        if let Err(e) = self.load_map(&swap.map_id, swap.position) {
            log::warn!("map swap to '{}' failed: {}", swap.map_id, e);
        }
    }

    fn complete_sleep(&mut self, minutes: f32) {
        let hours = minutes / 60.0;
        let vitals = &mut self.progress.vitals;
        vitals.set_energy((hours * RESTORE_PER_HOUR as f32).round() as i32);
        vitals.add_slept_hours(hours);
        vitals.sleeping = false;
        self.progress.score += score::sleep_points(hours);

        let result = self.progress.clock.advance(minutes);
        if result.day_changed {
            log::info!("day {} begins", self.progress.clock.day);
        }
        if result.game_over {
            self.finish_run();
            return;
        }

        self.dialogue.open_with(
            &format!(
                "You slept for {} hours!\nYou have {} energy.",
                hours.round() as i32,
                self.progress.vitals.energy
            ),
            Some(EventKey::prompt(Category::FadeIn)),
        );
    }

    fn finish_run(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }
        self.phase = Phase::GameOver;
        if let Ok(mut state) = self.world.get::<&mut MoveState>(self.player) {
            state.frozen = true;
        }
        log::info!(
            "run over on day {}: score {}",
            self.progress.clock.day,
            self.progress.score
        );
    }

    // ── Read-only snapshots for the presentation layer ──────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn score(&self) -> i32 {
        self.progress.score
    }

    pub fn current_map(&self) -> Option<&str> {
        self.current_map.as_deref()
    }

    /// True when an interactable object is in reach.
    pub fn can_interact(&self) -> bool {
        self.nearest.is_some()
    }

    pub fn dialogue_view(&self) -> Option<DialogueView> {
        self.dialogue.view()
    }

    /// Fade requests queued since the last drain; call once per frame.
    pub fn drain_fades(&mut self) -> Vec<FadeRequest> {
        std::mem::take(&mut self.fades)
    }

    /// Bottom-left corner of the player sprite.
    pub fn player_position(&self) -> (f32, f32) {
        self.world
            .get::<&Hitboxes>(self.player)
            .map(|boxes| (boxes.sprite.x, boxes.sprite.y))
            .unwrap_or((0.0, 0.0))
    }

    pub fn player_facing(&self) -> Facing {
        self.world
            .get::<&Facing>(self.player)
            .map(|facing| *facing)
            .unwrap_or_default()
    }

    pub fn player_moving(&self) -> bool {
        self.world
            .get::<&MoveState>(self.player)
            .map(|state| state.moving)
            .unwrap_or(false)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAMPUS: &str = r#"{
        "name": "Campus",
        "width": 2000.0,
        "height": 2000.0,
        "objects": [
            { "x": 900.0, "y": 900.0, "width": 8.0, "height": 8.0, "spawn": true },
            { "x": 960.0, "y": 900.0, "width": 80.0, "height": 80.0, "event": "comp_sci" },
            { "x": 400.0, "y": 400.0, "width": 60.0, "height": 60.0, "text": "A weathered statue." },
            { "x": 1800.0, "y": 900.0, "width": 40.0, "height": 40.0, "event": "teleport-town" }
        ]
    }"#;

    const TOWN: &str = r#"{
        "name": "Town",
        "width": 1000.0,
        "height": 1000.0,
        "objects": [
            { "x": 500.0, "y": 500.0, "width": 8.0, "height": 8.0, "spawn": true }
        ]
    }"#;

    fn session() -> Session {
        let mut session = Session::new(SessionConfig {
            start_day_seconds: 600.0,
            seed: Some(7),
            ..SessionConfig::default()
        });
        session.insert_map_json("campus", CAMPUS).unwrap();
        session.insert_map_json("town", TOWN).unwrap();
        session.switch_map("campus").unwrap();
        session
    }

    fn confirm_through_dialogue(session: &mut Session) {
        // First press completes the reveal, following presses turn pages
        // until the box closes.
        for _ in 0..10 {
            if session.dialogue_view().is_none() {
                return;
            }
            session.interact();
        }
    }

    #[test]
    fn test_spawns_at_map_spawn_point() {
        let session = session();
        assert_eq!(session.player_position(), (900.0, 900.0));
        assert_eq!(session.current_map(), Some("campus"));
    }

    #[test]
    fn test_interact_opens_study_menu_and_commits() {
        let mut session = session();
        session.update(&InputState::default(), 1.0 / 60.0);
        assert!(session.can_interact());

        session.interact();
        let view = session.dialogue_view().expect("prompt should open");
        assert!(view.choices.is_some());

        // Pick "3 hours": finish the reveal, move down once, confirm.
        session.interact();
        session.choice_down();
        session.interact();

        assert_eq!(session.progress.vitals.energy, 70);
        assert_eq!(session.progress.vitals.hours_studied, 3.0);
        let view = session.dialogue_view().expect("result text should open");
        assert!(view.choices.is_none());
    }

    #[test]
    fn test_escape_aborts_choice_without_committing() {
        let mut session = session();
        session.update(&InputState::default(), 1.0 / 60.0);
        session.interact();
        assert!(session.dialogue_view().is_some());

        let before = session.progress;
        session.escape();
        assert!(session.dialogue_view().is_none());
        assert_eq!(session.progress, before);
        assert!(!session.is_paused(), "escape closed the dialogue, not paused");
    }

    #[test]
    fn test_signage_shows_text() {
        let mut session = session();
        // Walk the player onto the statue.
        if let Ok(mut boxes) = session.world.get::<&mut Hitboxes>(session.player) {
            boxes.set_pos(400.0, 400.0);
        }
        session.update(&InputState::default(), 1.0 / 60.0);
        session.interact();

        let view = session.dialogue_view().expect("signage should open");
        assert!(view.choices.is_none());
    }

    #[test]
    fn test_sleep_cycle_restores_energy_and_advances_day() {
        let mut session = session();
        session.progress.clock.day_seconds = 1320.0; // 22:00
        session.progress.vitals.set_energy(20);

        session.trigger("accomodation-sleep");
        assert!(session.progress.vitals.sleeping);
        assert_eq!(session.drain_fades().len(), 1);

        // Clock holds still during the fade.
        session.update(&InputState::default(), 1.0);
        assert!((session.progress.clock.day_seconds - 1320.0).abs() < 0.001);

        // Fade completes; the wake continuation applies everything at once.
        session.update(&InputState::default(), 2.5);
        assert!(!session.progress.vitals.sleeping);
        assert_eq!(session.progress.vitals.energy, 100);
        assert_eq!(session.progress.vitals.hours_slept, 10.0);
        assert_eq!(session.progress.clock.day, 2);
        // 08:00 plus the sliver of passive time left in this tick.
        assert!(session.progress.clock.day_seconds >= 480.0);
        assert!(session.progress.clock.day_seconds < 490.0);

        // Wake text closes into a fade-from-black request.
        assert!(session.dialogue_view().is_some());
        confirm_through_dialogue(&mut session);
        assert_eq!(session.drain_fades().len(), 1);
    }

    #[test]
    fn test_teleport_moves_to_other_map_spawn() {
        let mut session = session();
        session.trigger("teleport-town");
        assert_eq!(session.current_map(), Some("town"));
        assert_eq!(session.player_position(), (500.0, 500.0));

        session.trigger("teleport-campus-120,80");
        assert_eq!(session.current_map(), Some("campus"));
        assert_eq!(session.player_position(), (120.0, 80.0));
    }

    #[test]
    fn test_failed_teleport_changes_nothing() {
        let mut session = session();
        let position = session.player_position();

        session.trigger("teleport-moon");
        assert_eq!(session.current_map(), Some("campus"));
        assert_eq!(session.player_position(), position);
        assert!(session.dialogue_view().is_some());
    }

    #[test]
    fn test_sleeping_into_deadline_ends_the_run() {
        let mut session = session();
        session.progress.clock.day = 7;
        session.progress.clock.day_seconds = 1320.0;

        session.trigger("accomodation-sleep");
        session.update(&InputState::default(), 4.0);

        assert_eq!(session.phase(), Phase::GameOver);
        // Further updates and interactions are inert.
        let after = session.progress;
        session.update(&InputState::default(), 10.0);
        session.interact();
        assert_eq!(session.progress, after);
    }

    #[test]
    fn test_passive_time_reaches_midnight() {
        let mut session = session();
        session.progress.clock.day_seconds = 1439.5;
        session.update(&InputState::default(), 1.0);
        assert_eq!(session.progress.clock.day, 2);
    }

    #[test]
    fn test_pause_stops_the_clock() {
        let mut session = session();
        let before = session.progress.clock.day_seconds;
        session.escape();
        assert!(session.is_paused());
        session.update(&InputState::default(), 5.0);
        assert!((session.progress.clock.day_seconds - before).abs() < 0.001);
        session.escape();
        session.update(&InputState::default(), 5.0);
        assert!(session.progress.clock.day_seconds > before);
    }
}
