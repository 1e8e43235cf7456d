//! Battle engine - Round loop between a fighter squad and a mob squad
//!
//! A battle runs whole rounds until one side's total health reaches zero
//! or the round cap is exceeded. Every random draw comes from the
//! [`RandomSource`] passed to [`Battle::run`], so a scripted source
//! replays a battle exactly.

mod auras;
mod event;
mod ordering;
mod outcome;
mod resolution;
mod targeting;

pub use auras::AuraFlags;
pub use event::BattleEvent;
pub use ordering::{attack_order, AttackSlot};
pub use outcome::{BattleOutcome, OutcomeReason, Winner};
pub use resolution::AttackResult;
pub use targeting::{assassin_target, aura_check, hunter_row, mage_column, taunt_target, AuraCheck};

use crate::combatant::Combatant;
use crate::rng::RandomSource;
use crate::squad::{FighterSquad, MobSquad};
use crate::types::{FighterClass, Position, Side};
use constants::*;
use event::Journal;
use resolution::{resolve_attack, AttackContext};
use tracing::{debug, trace};

/// Battle tuning constants
pub mod constants {
    pub use super::resolution::{
        BASTION_DAMAGE_REDUCTION, BASTION_DODGE_MULTIPLIER, CRUSADER_BOOST_PER_DEAD,
        PALADIN_DAMAGE_REDUCTION, SHADOW_DANCER_EVADE_CHANCE,
    };
    pub use super::targeting::SENTINEL_TAUNT_THRESHOLD;

    /// Battles still running after this many rounds are lost by the fighters
    pub const MAX_ROUNDS: u32 = 300;
    pub const BRAWLER_EXTRA_ATTACK_CHANCE: f64 = 0.15;
    pub const HUNTER_MULTIPLIER: f64 = 0.75;
    pub const MAGE_MULTIPLIER: f64 = 0.5;
    pub const PRIEST_REVIVE_CHANCE: f64 = 0.1;
    /// Share of max health a revived fighter comes back with
    pub const PRIEST_REVIVE_FRACTION: f64 = 0.25;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Continue,
    /// The opposing side has no living target; the round stops here
    Halt,
}

/// Berserker damage multiplier for a health fraction, and whether the
/// attack becomes undodgeable
pub fn berserker_multiplier(health_fraction: f64) -> (f64, bool) {
    if (0.75..=1.0).contains(&health_fraction) {
        (1.0, false)
    } else if (0.5..0.75).contains(&health_fraction) {
        (1.25, false)
    } else if (0.25..0.5).contains(&health_fraction) {
        (1.5, false)
    } else if health_fraction < 0.25 {
        (1.75, true)
    } else {
        (1.0, false)
    }
}

/// A single battle between two squads
#[derive(Debug, Clone)]
pub struct Battle {
    fighters: FighterSquad,
    mobs: MobSquad,
    flags: AuraFlags,
    dead_fighters: Vec<Position>,
    round: u32,
    running: bool,
    journal: Journal,
}

impl Battle {
    /// Start a battle; squads are used as given, including current health
    pub fn new(fighters: FighterSquad, mobs: MobSquad) -> Self {
        let dead_fighters = fighters.dead_positions();
        Battle {
            fighters,
            mobs,
            flags: AuraFlags::default(),
            dead_fighters,
            round: 1,
            running: true,
            journal: Journal::default(),
        }
    }

    /// Fresh copies of the fighters against the mob squad of a dungeon level
    pub fn for_dungeon_level(fighters: &FighterSquad, level: u32) -> Self {
        Battle::new(fighters.fresh(), MobSquad::for_dungeon_level(level))
    }

    /// Record a [`BattleEvent`] journal while the battle runs
    pub fn with_journal(mut self) -> Self {
        self.journal = Journal::recording();
        self
    }

    pub fn fighters(&self) -> &FighterSquad {
        &self.fighters
    }

    pub fn mobs(&self) -> &MobSquad {
        &self.mobs
    }

    pub fn flags(&self) -> &AuraFlags {
        &self.flags
    }

    /// Current round counter, starting at 1
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Dead fighter cells in column-major order, as of the last refresh
    pub fn dead_fighters(&self) -> &[Position] {
        &self.dead_fighters
    }

    pub fn events(&self) -> &[BattleEvent] {
        self.journal.events()
    }

    /// The action queue the next round would use
    pub fn attack_order(&self) -> Vec<AttackSlot> {
        attack_order(&self.fighters, &self.mobs)
    }

    /// Winner by total health, if either side is wiped out
    pub fn winner(&self) -> Option<Winner> {
        if self.fighters.total_health() == 0.0 {
            Some(Winner::Mobs)
        } else if self.mobs.total_health() == 0.0 {
            Some(Winner::Fighters)
        } else {
            None
        }
    }

    /// Play rounds until the battle ends
    pub fn run<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> BattleOutcome {
        while self.running {
            self.play_round(rng);
            if self.round > MAX_ROUNDS {
                self.running = false;
                return self.outcome(Winner::Mobs, OutcomeReason::Exhausted);
            }
            if self.winner().is_some() {
                self.running = false;
            }
        }

        // A halted battle always has a wiped-out side
        let winner = self.winner().unwrap_or(Winner::Mobs);
        self.outcome(winner, OutcomeReason::SideDefeated)
    }

    fn outcome(&self, winner: Winner, reason: OutcomeReason) -> BattleOutcome {
        let outcome = BattleOutcome {
            winner,
            rounds: self.round,
            reason,
            remaining_mob_health: self.mobs.total_health(),
        };
        debug!(winner = winner.as_str(), rounds = outcome.rounds, reason = reason.code(), "battle finished");
        outcome
    }

    /// Play one round: every living combatant acts once in hit order,
    /// then a living Priest may revive a dead fighter
    pub fn play_round<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let order = self.attack_order();
        let mut attack = 0;

        for slot in order {
            let target = match slot.side {
                Side::Fighters => self.mobs.first_living(),
                Side::Mobs => self.fighters.first_living(),
            };
            let Some(target) = target else {
                self.running = false;
                break;
            };
            let attacker_alive = match slot.side {
                Side::Fighters => self.fighters.is_alive_at(slot.position),
                Side::Mobs => self.mobs.is_alive_at(slot.position),
            };
            if !attacker_alive {
                continue;
            }

            attack += 1;
            self.dead_fighters = self.fighters.dead_positions();
            self.record_action(slot, attack);

            let turn = match slot.side {
                Side::Fighters => self.fighter_turn(slot.position, target, rng),
                Side::Mobs => self.mob_turn(slot.position, target, rng),
            };
            if turn == Turn::Halt {
                self.running = false;
                break;
            }
        }

        self.dead_fighters = self.fighters.dead_positions();
        self.priest_revival(rng);

        let (round, fighters, mobs) = (self.round, &self.fighters, &self.mobs);
        self.journal.record(|| BattleEvent::RoundSummary {
            round,
            fighters_health: fighters.total_health(),
            mobs_health: mobs.total_health(),
        });
        trace!(round, attacks = attack, "round complete");
        self.round += 1;
    }

    fn record_action(&mut self, slot: AttackSlot, attack: u32) {
        let (round, fighters, mobs) = (self.round, &self.fighters, &self.mobs);
        self.journal.record(|| BattleEvent::Action {
            round,
            attack,
            attacker: match slot.side {
                Side::Fighters => fighters.get(slot.position).map(Combatant::label),
                Side::Mobs => mobs.get(slot.position).map(Combatant::label),
            }
            .unwrap_or_default(),
        });
    }

    fn fighter_turn<R: RandomSource + ?Sized>(
        &mut self,
        attacker: Position,
        mut target: Position,
        rng: &mut R,
    ) -> Turn {
        let Some(fighter) = self.fighters.get(attacker) else {
            return Turn::Continue;
        };
        let class = fighter.fighter_class();
        let health_fraction = fighter.health_fraction();

        match class {
            FighterClass::Assassin => match assassin_target(&self.mobs) {
                Some(back) => target = back,
                None => return Turn::Halt,
            },
            FighterClass::Brawler => {
                if rng.next_unit() < BRAWLER_EXTRA_ATTACK_CHANCE {
                    let fighters = &self.fighters;
                    self.journal.record(|| BattleEvent::BrawlerExtraAttack {
                        attacker: fighters.get(attacker).map(Combatant::label).unwrap_or_default(),
                    });
                    self.fighter_strikes(attacker, target, 1.0, rng);
                    match self.mobs.first_living() {
                        Some(next) => target = next,
                        None => return Turn::Halt,
                    }
                }
            }
            FighterClass::Hunter => {
                let Some(row) = hunter_row(&self.mobs) else {
                    return Turn::Halt;
                };
                let mut dealt = 0.0;
                for cell in Position::row_cells(row) {
                    if self.mobs.is_occupied(cell) {
                        dealt += self.fighter_strikes(attacker, cell, HUNTER_MULTIPLIER, rng).damage();
                    }
                }
                trace!(row, dealt, "hunter volley");
                return Turn::Continue;
            }
            FighterClass::Mage => {
                let Some(col) = mage_column(&self.mobs) else {
                    return Turn::Halt;
                };
                let mut dealt = 0.0;
                for cell in Position::column(col) {
                    if self.mobs.is_occupied(cell) {
                        dealt += self.fighter_strikes(attacker, cell, MAGE_MULTIPLIER, rng).damage();
                    }
                }
                trace!(col, dealt, "mage blast");
                return Turn::Continue;
            }
            FighterClass::Berserker => {
                let (multiplier, undodgeable) = berserker_multiplier(health_fraction);
                if undodgeable {
                    self.flags.arm_guaranteed_hit();
                }
                self.fighter_strikes(attacker, target, multiplier, rng);
                return Turn::Continue;
            }
            _ => {}
        }

        self.fighter_strikes(attacker, target, 1.0, rng);
        Turn::Continue
    }

    fn mob_turn<R: RandomSource + ?Sized>(
        &mut self,
        attacker: Position,
        target: Position,
        rng: &mut R,
    ) -> Turn {
        let auras = aura_check(&self.fighters, target);
        if auras.bastion {
            self.flags.arm_bastion();
        }
        if auras.paladin {
            self.flags.arm_paladin();
        }

        let taunted = taunt_target(&self.fighters, target);
        let result = self.mob_strikes(attacker, taunted, rng);
        if taunted != target {
            trace!(from = %target, to = %taunted, damage = result.damage(), "sentinel drew the attack");
        }
        Turn::Continue
    }

    fn fighter_strikes<R: RandomSource + ?Sized>(
        &mut self,
        attacker: Position,
        target: Position,
        multiplier: f64,
        rng: &mut R,
    ) -> AttackResult {
        let (Some(fighter), Some(mob)) = (self.fighters.get_mut(attacker), self.mobs.get_mut(target))
        else {
            return AttackResult::Missed;
        };
        let mut ctx = AttackContext {
            flags: &mut self.flags,
            dead_fighters: self.dead_fighters.len(),
            journal: &mut self.journal,
        };
        resolve_attack(fighter, mob, multiplier, &mut ctx, rng)
    }

    fn mob_strikes<R: RandomSource + ?Sized>(
        &mut self,
        attacker: Position,
        target: Position,
        rng: &mut R,
    ) -> AttackResult {
        let (Some(mob), Some(fighter)) = (self.mobs.get_mut(attacker), self.fighters.get_mut(target))
        else {
            return AttackResult::Missed;
        };
        let mut ctx = AttackContext {
            flags: &mut self.flags,
            dead_fighters: self.dead_fighters.len(),
            journal: &mut self.journal,
        };
        resolve_attack(mob, fighter, 1.0, &mut ctx, rng)
    }

    /// End-of-round revival of one random dead fighter
    fn priest_revival<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        if self.dead_fighters.is_empty() || !self.fighters.has_living(FighterClass::Priest) {
            return;
        }
        if rng.next_unit() >= PRIEST_REVIVE_CHANCE {
            return;
        }

        let index = (rng.next_unit() * self.dead_fighters.len() as f64).floor() as usize;
        let chosen = self.dead_fighters[index.min(self.dead_fighters.len() - 1)];
        if let Some(fighter) = self.fighters.get_mut(chosen) {
            fighter.revive(PRIEST_REVIVE_FRACTION);
            debug!(fighter = %fighter.name, round = self.round, "fighter revived");
            let name = fighter.name.clone();
            self.journal.record(|| BattleEvent::Resurrected { fighter: name });
        }
        self.dead_fighters = self.fighters.dead_positions();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{Fighter, Mob};
    use crate::rng::ScriptedRandom;
    use crate::stats::FighterInputs;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn fighter(class: FighterClass) -> Fighter {
        Fighter::new(class, None, FighterInputs::default())
    }

    fn dead(class: FighterClass) -> Fighter {
        let mut f = fighter(class);
        f.take_damage(f64::MAX);
        f
    }

    #[test]
    fn test_overwhelming_fighter_wins_first_round() {
        let inputs = FighterInputs { equip_damage: 1e6, ..Default::default() };
        let fighters =
            FighterSquad::new().with(pos(0, 0), Fighter::new(FighterClass::NoClass, None, inputs));
        let mut battle = Battle::new(fighters, MobSquad::for_dungeon_level(1));

        let outcome = battle.run(&mut ScriptedRandom::constant(0.0));
        assert_eq!(outcome.winner, Winner::Fighters);
        assert_eq!(outcome.reason, OutcomeReason::SideDefeated);
        assert_eq!(outcome.rounds, 2);
        assert_eq!(outcome.remaining_mob_health, 0.0);
        assert!(!battle.is_running());
    }

    #[test]
    fn test_empty_fighter_squad_loses_without_draws() {
        let mut rng = ScriptedRandom::constant(0.5);
        let mut battle = Battle::new(FighterSquad::new(), MobSquad::for_dungeon_level(1));
        let outcome = battle.run(&mut rng);

        assert_eq!(outcome.winner, Winner::Mobs);
        assert_eq!(outcome.reason, OutcomeReason::SideDefeated);
        assert_eq!(outcome.rounds, 2);
        assert_eq!(outcome.remaining_mob_health, 500.0);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_round_cap_exhausts_fighters() {
        let fighters = FighterSquad::new().with(pos(0, 0), fighter(FighterClass::NoClass));
        let mut battle = Battle::new(fighters, MobSquad::for_dungeon_level(1));
        // Every hit roll misses
        let mut rng = ScriptedRandom::constant(0.99);
        let outcome = battle.run(&mut rng);

        assert_eq!(outcome.winner, Winner::Mobs);
        assert_eq!(outcome.reason, OutcomeReason::Exhausted);
        assert_eq!(outcome.rounds, MAX_ROUNDS + 1);
        assert_eq!(outcome.remaining_mob_health, 500.0);
        assert_eq!(rng.draws(), 2 * MAX_ROUNDS as usize);
    }

    #[test]
    fn test_same_state_and_rolls_give_same_round() {
        let fighters = FighterSquad::new()
            .with(pos(0, 0), fighter(FighterClass::Brawler))
            .with(pos(1, 0), fighter(FighterClass::ShadowDancer))
            .with(pos(0, 1), fighter(FighterClass::Priest));
        let mut battle = Battle::new(fighters, MobSquad::for_dungeon_level(120));
        let rolls = vec![0.3, 0.07, 0.91, 0.12, 0.5, 0.02, 0.66];
        battle.play_round(&mut ScriptedRandom::new(rolls.clone()));

        let mut a = battle.clone();
        let mut b = battle.clone();
        a.play_round(&mut ScriptedRandom::new(rolls.clone()));
        b.play_round(&mut ScriptedRandom::new(rolls));

        assert_eq!(a.fighters(), b.fighters());
        assert_eq!(a.mobs(), b.mobs());
        assert_eq!(a.flags(), b.flags());
        assert_eq!(a.round(), b.round());
    }

    #[test]
    fn test_crusader_damage_grows_with_dead_allies() {
        let fighters = FighterSquad::new()
            .with(pos(0, 0), fighter(FighterClass::Crusader))
            .with(pos(1, 0), dead(FighterClass::NoClass))
            .with(pos(2, 0), dead(FighterClass::NoClass))
            .with(pos(0, 1), dead(FighterClass::NoClass));
        let mut battle = Battle::new(fighters, MobSquad::for_dungeon_level(1));
        battle.play_round(&mut ScriptedRandom::constant(0.5));

        let mitigation = 1.0 - Mob::new(1).stats().defense_fraction;
        let expected = (mitigation * (1.0 - 0.0) * (100.0 * (1.0 + 0.2 * 3.0)) * 1.0).floor();
        let mob = battle.mobs().get(pos(0, 0)).unwrap();
        assert_eq!(mob.stats().current_health, 500.0 - expected);
        assert_eq!(battle.dead_fighters().len(), 3);
    }

    #[test]
    fn test_priest_revives_dead_fighter() {
        let fighters = FighterSquad::new()
            .with(pos(0, 0), fighter(FighterClass::Priest))
            .with(pos(1, 0), dead(FighterClass::NoClass));
        let mut battle = Battle::new(fighters, MobSquad::for_dungeon_level(1)).with_journal();
        // priest misses, mob misses, revival roll, index roll
        let mut rng = ScriptedRandom::new(vec![0.99, 0.99, 0.05, 0.0]);
        battle.play_round(&mut rng);

        let revived = battle.fighters().get(pos(1, 0)).unwrap();
        assert_eq!(revived.stats().current_health, 125.0);
        assert_eq!(revived.stats().hits_landed, 0);
        assert!(battle.dead_fighters().is_empty());
        assert_eq!(rng.draws(), 4);
        assert!(battle.events().iter().any(|e| e.code() == "PRIEST_RESURRECTED"));
    }

    #[test]
    fn test_no_revival_without_living_priest() {
        let fighters = FighterSquad::new()
            .with(pos(0, 0), fighter(FighterClass::NoClass))
            .with(pos(1, 0), dead(FighterClass::Priest));
        let mut battle = Battle::new(fighters, MobSquad::for_dungeon_level(1));
        let mut rng = ScriptedRandom::constant(0.0);
        battle.play_round(&mut rng);
        assert!(!battle.fighters().is_alive_at(pos(1, 0)));
    }

    #[test]
    fn test_hunter_strikes_whole_row_including_dead() {
        let mut dead_mob = Mob::new(1);
        dead_mob.take_damage(f64::MAX);
        let mobs = MobSquad::new()
            .with(pos(0, 0), dead_mob)
            .with(pos(0, 1), Mob::new(1))
            .with(pos(1, 0), Mob::new(1));
        let fighters = FighterSquad::new().with(pos(0, 0), fighter(FighterClass::Hunter));
        let mut battle = Battle::new(fighters, mobs);
        battle.play_round(&mut ScriptedRandom::constant(0.5));

        let hunter = battle.fighters().get(pos(0, 0)).unwrap();
        assert_eq!(hunter.stats().hits_landed, 2);

        let mitigation = 1.0 - Mob::new(1).stats().defense_fraction;
        let expected = (mitigation * 100.0 * HUNTER_MULTIPLIER).floor();
        assert_eq!(battle.mobs().get(pos(0, 1)).unwrap().stats().current_health, 500.0 - expected);
        assert_eq!(battle.mobs().get(pos(1, 0)).unwrap().stats().current_health, 500.0);
    }

    #[test]
    fn test_mage_strikes_first_living_column() {
        let mobs = MobSquad::new()
            .with(pos(0, 1), Mob::new(1))
            .with(pos(2, 1), Mob::new(1));
        let fighters = FighterSquad::new().with(pos(0, 0), fighter(FighterClass::Mage));
        let mut battle = Battle::new(fighters, mobs);
        battle.play_round(&mut ScriptedRandom::constant(0.5));

        let mitigation = 1.0 - Mob::new(1).stats().defense_fraction;
        let expected = (mitigation * 100.0 * MAGE_MULTIPLIER).floor();
        for cell in [pos(0, 1), pos(2, 1)] {
            assert_eq!(battle.mobs().get(cell).unwrap().stats().current_health, 500.0 - expected);
        }
    }

    #[test]
    fn test_brawler_extra_attack_retargets() {
        // First mob dies to the extra attack, the normal attack hits the next one
        let inputs = FighterInputs { equip_damage: 1e6, ..Default::default() };
        let fighters =
            FighterSquad::new().with(pos(0, 0), Fighter::new(FighterClass::Brawler, None, inputs));
        let mobs = MobSquad::new()
            .with(pos(0, 0), Mob::new(1))
            .with(pos(1, 0), Mob::new(1));
        let mut battle = Battle::new(fighters, mobs).with_journal();
        battle.play_round(&mut ScriptedRandom::constant(0.12));

        assert!(!battle.mobs().is_alive_at(pos(0, 0)));
        assert!(!battle.mobs().is_alive_at(pos(1, 0)));
        assert_eq!(battle.winner(), Some(Winner::Fighters));
        assert!(battle.events().iter().any(|e| e.code() == "SP_BR_DOUBLE"));
    }

    #[test]
    fn test_berserker_multiplier_ladder() {
        assert_eq!(berserker_multiplier(1.0), (1.0, false));
        assert_eq!(berserker_multiplier(0.75), (1.0, false));
        assert_eq!(berserker_multiplier(0.6), (1.25, false));
        assert_eq!(berserker_multiplier(0.25), (1.5, false));
        assert_eq!(berserker_multiplier(0.1), (1.75, true));
        assert_eq!(berserker_multiplier(0.0), (1.75, true));
    }

    #[test]
    fn test_bastion_aura_consumed_by_mob_attack() {
        let fighters = FighterSquad::new()
            .with(pos(0, 0), fighter(FighterClass::NoClass))
            .with(pos(1, 0), fighter(FighterClass::Bastion));
        let mut battle = Battle::new(fighters, MobSquad::for_dungeon_level(1)).with_journal();
        battle.play_round(&mut ScriptedRandom::constant(0.5));

        assert!(!battle.flags().bastion_pending());
        assert!(battle.events().iter().any(|e| e.code() == "SP_BS_DMG_DODGE"));
    }

    #[test]
    fn test_journal_empty_unless_enabled() {
        let fighters = FighterSquad::new().with(pos(0, 0), fighter(FighterClass::NoClass));
        let mut battle = Battle::new(fighters, MobSquad::for_dungeon_level(1));
        battle.play_round(&mut ScriptedRandom::constant(0.5));
        assert!(battle.events().is_empty());
    }

    #[test]
    fn test_sentinel_takes_hit_for_hurt_fighter_under_paladin_aura() {
        let mut hurt = fighter(FighterClass::NoClass);
        hurt.take_damage(450.0);
        let fighters = FighterSquad::new()
            .with(pos(0, 0), hurt)
            .with(pos(1, 0), fighter(FighterClass::Paladin))
            .with(pos(0, 1), fighter(FighterClass::Sentinel));
        let mobs = MobSquad::new().with(pos(0, 0), Mob::new(1));
        let mut battle = Battle::new(fighters, mobs).with_journal();
        battle.play_round(&mut ScriptedRandom::constant(0.5));

        let sentinel = battle.fighters().get(pos(0, 1)).unwrap();
        let mitigation = 1.0 - sentinel.stats().defense_fraction;
        let expected =
            (mitigation * (1.0 - (0.0 + PALADIN_DAMAGE_REDUCTION)) * Mob::new(1).stats().damage * 1.0).floor();
        assert_eq!(sentinel.stats().current_health, 500.0 - expected);
        assert_eq!(battle.fighters().get(pos(0, 0)).unwrap().stats().current_health, 50.0);
        assert_eq!(battle.fighters().get(pos(1, 0)).unwrap().stats().current_health, 500.0);
        assert!(!battle.flags().paladin_pending());
        assert!(battle.events().iter().any(|e| e.code() == "SP_PL_DMG_REDUCTION"));
    }

    #[test]
    fn test_assassin_strikes_back_column() {
        let mobs = MobSquad::new()
            .with(pos(0, 0), Mob::new(1))
            .with(pos(1, 1), Mob::new(75));
        // Enough health to outlast the level-75 mob acting first
        let inputs = FighterInputs { equip_health: 1e6, ..Default::default() };
        let fighters =
            FighterSquad::new().with(pos(0, 0), Fighter::new(FighterClass::Assassin, None, inputs));
        let mut battle = Battle::new(fighters, mobs);
        battle.play_round(&mut ScriptedRandom::constant(0.5));

        let back = Mob::new(75);
        let expected = ((1.0 - back.stats().defense_fraction) * 1.0 * 100.0 * 1.0).floor();
        assert!(expected > 0.0);
        assert_eq!(
            battle.mobs().get(pos(1, 1)).unwrap().stats().current_health,
            back.stats().max_health - expected
        );
        assert_eq!(battle.mobs().get(pos(0, 0)).unwrap().stats().current_health, 500.0);
        assert_eq!(battle.fighters().get(pos(0, 0)).unwrap().stats().hits_landed, 1);
    }

    #[test]
    fn test_zero_hit_roll_lands_at_capped_chance() {
        let inputs = FighterInputs { equip_hit: 1e6, ..Default::default() };
        let fighters =
            FighterSquad::new().with(pos(0, 0), Fighter::new(FighterClass::NoClass, None, inputs));
        let mut battle = Battle::new(fighters, MobSquad::for_dungeon_level(1));
        let mut rng = ScriptedRandom::constant(0.0);
        battle.play_round(&mut rng);

        assert_eq!(crate::stats::hit_chance(1e6 + 50.0, Mob::new(1).stats().dodge), 0.95);
        assert_eq!(battle.fighters().get(pos(0, 0)).unwrap().stats().hits_landed, 1);
        assert_eq!(battle.mobs().get(pos(0, 0)).unwrap().stats().hits_landed, 1);
        assert!(battle.mobs().get(pos(0, 0)).unwrap().stats().current_health < 500.0);
        // hit and crit roll for each side
        assert_eq!(rng.draws(), 4);
    }
}
