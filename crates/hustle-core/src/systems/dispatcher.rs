//! Event dispatch - turns interaction keys into game-state transitions.
//!
//! Every activity follows the same two-phase protocol: a key with no
//! arguments *prompts* (returns a choice menu and mutates nothing), a key
//! with arguments *commits* (validates preconditions, then applies energy,
//! clock, counter and score effects in one step). A failed precondition
//! returns explanatory text and leaves the session state untouched - the
//! same dialogue channel carries successes and failures.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::events::{Category, EventKey};
use crate::map::MapCatalog;
use crate::systems::scheduler::{Continuation, Scheduler};
use hustle_logic::clock::GameClock;
use hustle_logic::constants::clock::{OPENING_TIME, SECONDS_PER_HOUR, WAKE_TIME};
use hustle_logic::constants::energy::COST_PER_HOUR;
use hustle_logic::constants::fade::SLEEP_FADE_SECONDS;
use hustle_logic::score;
use hustle_logic::vitals::Vitals;

/// Topics on offer at the social hub.
const TOPICS: [&str; 9] = [
    "dogs",
    "cats",
    "exams",
    "celebrities",
    "flatmates",
    "video games",
    "sport",
    "food",
    "fashion",
];

/// Mutable gameplay state the dispatcher operates on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub clock: GameClock,
    pub vitals: Vitals,
    pub score: i32,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            clock: GameClock::default(),
            vitals: Vitals::default(),
            score: 0,
        }
    }
}

/// A fade the presentation layer should play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeRequest {
    pub duration: f32,
}

/// A fully validated map switch for the session to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSwap {
    pub map_id: String,
    pub position: Option<(f32, f32)>,
}

/// What the session should do with a dispatch result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effect {
    /// Dialogue text to show; empty means no dialogue.
    pub text: String,
    /// Choice menu attached to the dialogue.
    pub choices: Vec<(String, EventKey)>,
    /// Key to fire when the dialogue is dismissed normally.
    pub on_close: Option<EventKey>,
    /// Close the active dialogue instead of opening one.
    pub close: bool,
    pub fade: Option<FadeRequest>,
    pub map_swap: Option<MapSwap>,
}

impl Effect {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    fn with_choices(text: impl Into<String>, choices: Vec<(String, EventKey)>) -> Self {
        Self {
            text: text.into(),
            choices,
            ..Self::default()
        }
    }

    fn close() -> Self {
        Self {
            close: true,
            ..Self::default()
        }
    }
}

/// Run one interaction key against the session state.
pub fn dispatch(
    key: &EventKey,
    progress: &mut Progress,
    scheduler: &mut Scheduler,
    catalog: &MapCatalog,
    rng: &mut impl Rng,
) -> Effect {
    log::debug!("dispatch {}", key);
    match &key.category {
        Category::Study => study(key, progress),
        Category::Eat => eat(key, progress),
        Category::Social => social(key, progress, rng),
        Category::Sleep => sleep(key, progress, scheduler),
        Category::Teleport => teleport(key, catalog),
        Category::Exit => Effect::close(),
        Category::FadeIn => Effect {
            close: true,
            fade: Some(FadeRequest {
                duration: SLEEP_FADE_SECONDS,
            }),
            ..Effect::default()
        },
        Category::Other(_) => fallback(key),
    }
}

/// Total fallback for unknown keys and malformed arguments: flavor text,
/// never an error, so odd map data degrades gracefully.
fn fallback(key: &EventKey) -> Effect {
    Effect::text(format!("This is a {}!", key))
}

fn before_opening(clock: &GameClock) -> bool {
    clock.day_seconds <= OPENING_TIME
}

fn study(key: &EventKey, progress: &mut Progress) -> Effect {
    if before_opening(&progress.clock) {
        return Effect::text(
            "The Computer Science building is still locked.\nNothing opens before 8am.",
        );
    }

    let Some(raw_hours) = key.args.first() else {
        return Effect::with_choices(
            "How long do you want to study for?",
            vec![
                ("2 hours".to_string(), EventKey::commit(Category::Study, ["2"])),
                ("3 hours".to_string(), EventKey::commit(Category::Study, ["3"])),
                ("4 hours".to_string(), EventKey::commit(Category::Study, ["4"])),
                ("Maybe later".to_string(), EventKey::prompt(Category::Exit)),
            ],
        );
    };

    let hours: i32 = match raw_hours.parse() {
        Ok(h) if h > 0 => h,
        _ => return fallback(key),
    };

    let cost = hours * COST_PER_HOUR;
    if progress.vitals.energy < cost {
        return Effect::text("You're too tired to study right now.\nGet some sleep first.");
    }

    progress.vitals.decrease_energy(cost);
    progress.vitals.add_study_hours(hours as f32);
    progress.score += score::study_points(hours as f32);
    progress.clock.advance(hours as f32 * SECONDS_PER_HOUR);

    Effect::text(format!(
        "You studied for {} hours.\nYou feel better prepared for the exam.",
        hours
    ))
}

fn eat(key: &EventKey, progress: &mut Progress) -> Effect {
    if before_opening(&progress.clock) {
        return Effect::text("The Ron Cooke Hub doesn't serve food this early.");
    }

    if key.args.is_empty() {
        return Effect::with_choices(
            "Grab some food at the Ron Cooke Hub?\nIt'll take about an hour.",
            vec![
                ("Yes".to_string(), EventKey::commit(Category::Eat, ["meal"])),
                ("No".to_string(), EventKey::prompt(Category::Exit)),
            ],
        );
    }

    if progress.vitals.energy < COST_PER_HOUR {
        return Effect::text("You're too tired to queue for food.\nGet some sleep first.");
    }

    let meal = match progress.clock.hour() {
        0..=11 => "breakfast",
        12..=16 => "lunch",
        _ => "dinner",
    };

    progress.vitals.decrease_energy(COST_PER_HOUR);
    progress.vitals.add_recreational_hours(1.0);
    progress.score += score::recreation_points(1.0);
    progress.clock.advance(SECONDS_PER_HOUR);

    Effect::text(format!("You take an hour to eat {} with your flatmates.", meal))
}

fn social(key: &EventKey, progress: &mut Progress, rng: &mut impl Rng) -> Effect {
    if before_opening(&progress.clock) {
        return Effect::text("There's nobody at the Piazza this early.\nCome back after 8am.");
    }

    let Some(topic) = key.args.first() else {
        let mut choices: Vec<(String, EventKey)> = TOPICS
            .choose_multiple(rng, 3)
            .map(|topic| {
                (
                    topic.to_string(),
                    EventKey::commit(Category::Social, [*topic]),
                )
            })
            .collect();
        choices.push(("Not right now".to_string(), EventKey::prompt(Category::Exit)));
        return Effect::with_choices("What do you want to chat about?", choices);
    };

    // How long the chat runs is drawn fresh here, independent of the topic
    // the player picked.
    let hours = rng.gen_range(1..4);
    let cost = hours * COST_PER_HOUR;
    if progress.vitals.energy < cost {
        return Effect::text("You're too tired to hold a conversation.\nGet some sleep first.");
    }

    progress.vitals.decrease_energy(cost);
    progress.vitals.add_recreational_hours(hours as f32);
    progress.score += score::recreation_points(hours as f32);
    progress.clock.advance(hours as f32 * SECONDS_PER_HOUR);

    Effect::text(format!(
        "You talked about {} for {} hours!\nTime well spent.",
        topic, hours
    ))
}

fn sleep(key: &EventKey, progress: &mut Progress, scheduler: &mut Scheduler) -> Effect {
    if key.args.is_empty() {
        return Effect::with_choices(
            "Sleep until 8am?",
            vec![
                (
                    "Yes".to_string(),
                    EventKey::commit(Category::Sleep, ["sleep"]),
                ),
                ("No".to_string(), EventKey::prompt(Category::Exit)),
            ],
        );
    }

    // Minutes until the fixed 08:00 wake, wrapping past midnight when the
    // evening is already past it.
    let minutes = progress.clock.seconds_until(WAKE_TIME);
    progress.vitals.sleeping = true;
    scheduler.schedule(SLEEP_FADE_SECONDS, Continuation::Wake { minutes });

    Effect {
        close: true,
        fade: Some(FadeRequest {
            duration: SLEEP_FADE_SECONDS,
        }),
        ..Effect::default()
    }
}

fn teleport(key: &EventKey, catalog: &MapCatalog) -> Effect {
    let Some(map_id) = key.args.first() else {
        return Effect::text("The door doesn't seem to lead anywhere.");
    };

    if !catalog.contains(map_id) {
        return Effect::text(format!("You can't get to {} from here.", map_id));
    }

    // Validate the optional respawn coordinate in full before requesting
    // the swap; a half-parsed coordinate must not move the player.
    let position = match key.args.get(1) {
        None => None,
        Some(raw) => match parse_coordinate(raw) {
            Some(point) => Some(point),
            None => return Effect::text("The door doesn't seem to lead anywhere."),
        },
    };

    Effect {
        close: true,
        map_swap: Some(MapSwap {
            map_id: map_id.clone(),
            position,
        }),
        ..Effect::default()
    }
}

fn parse_coordinate(raw: &str) -> Option<(f32, f32)> {
    let (x, y) = raw.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}
