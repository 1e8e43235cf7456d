//! Attack resolution - One attacker strikes one target
//!
//! Resolution order:
//! 1. Crusader scaling of the target's defense and dodge, or of the attacker's offense
//! 2. Shadow Dancer evasion roll (ends the attack)
//! 3. Bastion aura on a fighter target
//! 4. Hit roll against the contested hit chance
//! 5. Shadow Dancer double damage and Paladin aura on a landed hit
//! 6. Crit roll, then floored damage applied to the target

use super::auras::AuraFlags;
use super::event::{BattleEvent, Journal};
use crate::combatant::Combatant;
use crate::rng::RandomSource;
use crate::stats::{constants::CRIT_CHANCE, defense_curve, hit_chance};
use crate::types::FighterClass;
use tracing::trace;

/// Extra stat multiplier per dead fighter for Crusaders
pub const CRUSADER_BOOST_PER_DEAD: f64 = 0.2;
/// Chance a Shadow Dancer evades an incoming attack before the hit roll
pub const SHADOW_DANCER_EVADE_CHANCE: f64 = 0.25;
pub const BASTION_DAMAGE_REDUCTION: f64 = 0.25;
pub const BASTION_DODGE_MULTIPLIER: f64 = 1.5;
pub const PALADIN_DAMAGE_REDUCTION: f64 = 0.15;

/// What happened to a single attack
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackResult {
    /// A Shadow Dancer target evaded before the hit roll
    Evaded,
    Missed,
    Hit { damage: f64, critical: bool },
}

impl AttackResult {
    pub fn damage(&self) -> f64 {
        match self {
            AttackResult::Hit { damage, .. } => *damage,
            _ => 0.0,
        }
    }
}

/// Shared battle state an attack reads and consumes
pub(crate) struct AttackContext<'a> {
    pub flags: &'a mut AuraFlags,
    /// Number of dead fighters, refreshed before every action
    pub dead_fighters: usize,
    pub journal: &'a mut Journal,
}

/// Resolve one attack and apply its damage to the target
pub(crate) fn resolve_attack<A, T, R>(
    attacker: &mut A,
    target: &mut T,
    multiplier: f64,
    ctx: &mut AttackContext<'_>,
    rng: &mut R,
) -> AttackResult
where
    A: Combatant + ?Sized,
    T: Combatant + ?Sized,
    R: RandomSource + ?Sized,
{
    let boost = 1.0 + CRUSADER_BOOST_PER_DEAD * ctx.dead_fighters as f64;

    let mut mitigation = 1.0 - target.stats().defense_fraction;
    let mut target_dodge = target.stats().dodge;
    let mut attacker_hit = attacker.stats().hit;
    let mut attacker_damage = attacker.stats().damage;
    let mut attacker_crit = attacker.stats().crit_bonus;
    let mut damage_reduction = 0.0;

    if target.has_class(FighterClass::Crusader) {
        mitigation = 1.0 - defense_curve(boost * target.stats().defense_raw);
        target_dodge *= boost;
    }
    if attacker.has_class(FighterClass::Crusader) {
        attacker_hit *= boost;
        attacker_damage *= boost;
        attacker_crit *= boost;
    }

    if target.has_class(FighterClass::ShadowDancer)
        && rng.next_unit() < SHADOW_DANCER_EVADE_CHANCE
    {
        ctx.flags.arm_double_damage();
        attacker.record_hit();
        ctx.journal.record(|| BattleEvent::Evaded {
            target: target.label(),
            attacker: attacker.label(),
        });
        return AttackResult::Evaded;
    }

    if target.is_fighter() && ctx.flags.take_bastion() {
        damage_reduction += BASTION_DAMAGE_REDUCTION;
        target_dodge *= BASTION_DODGE_MULTIPLIER;
        ctx.journal.record(|| BattleEvent::BastionAura { target: target.label() });
    }

    let chance = hit_chance(attacker_hit, target_dodge);
    let roll = if ctx.flags.take_guaranteed_hit() {
        ctx.journal.record(|| BattleEvent::CannotBeDodged { attacker: attacker.label() });
        -1.0
    } else {
        rng.next_unit()
    };

    // A NaN chance fails even a guaranteed hit
    if !(roll < chance) {
        ctx.journal.record(|| BattleEvent::Miss {
            attacker: attacker.label(),
            target: target.label(),
        });
        trace!(attacker = %attacker.label(), chance, roll, "attack missed");
        return AttackResult::Missed;
    }

    attacker.record_hit();

    if attacker.has_class(FighterClass::ShadowDancer) && ctx.flags.take_double_damage() {
        attacker_damage *= 2.0;
        ctx.journal.record(|| BattleEvent::DoubleDamage { attacker: attacker.label() });
    }
    if target.is_fighter() && ctx.flags.take_paladin() {
        damage_reduction += PALADIN_DAMAGE_REDUCTION;
        ctx.journal.record(|| BattleEvent::PaladinAura { target: target.label() });
    }

    let mut amount = mitigation * (1.0 - damage_reduction) * attacker_damage * multiplier;
    let critical = rng.next_unit() < CRIT_CHANCE;
    if critical {
        amount *= 1.0 + attacker_crit;
    }
    let damage = amount.floor().max(0.0);
    target.take_damage(damage);

    ctx.journal.record(|| BattleEvent::Damage {
        attacker: attacker.label(),
        target: target.label(),
        amount: damage,
        critical,
    });
    trace!(
        attacker = %attacker.label(),
        target = %target.label(),
        damage,
        critical,
        "attack landed"
    );

    AttackResult::Hit { damage, critical }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{Fighter, Mob};
    use crate::rng::ScriptedRandom;
    use crate::stats::FighterInputs;

    fn fighter(class: FighterClass) -> Fighter {
        Fighter::new(class, None, FighterInputs::default())
    }

    fn strike<A: Combatant, T: Combatant>(
        attacker: &mut A,
        target: &mut T,
        flags: &mut AuraFlags,
        dead_fighters: usize,
        rng: &mut ScriptedRandom,
    ) -> AttackResult {
        let mut journal = Journal::recording();
        let mut ctx = AttackContext { flags, dead_fighters, journal: &mut journal };
        resolve_attack(attacker, target, 1.0, &mut ctx, rng)
    }

    fn expected_damage(target: &Mob, damage: f64) -> f64 {
        ((1.0 - target.stats().defense_fraction) * damage).floor()
    }

    #[test]
    fn test_sure_hit_no_crit() {
        let mut attacker = fighter(FighterClass::NoClass);
        let mut target = Mob::new(1);
        // hit roll 0.5 < 0.625, crit roll 0.5 misses
        let mut rng = ScriptedRandom::constant(0.5);
        let result = strike(&mut attacker, &mut target, &mut AuraFlags::default(), 0, &mut rng);

        let expected = expected_damage(&Mob::new(1), 100.0);
        assert_eq!(result, AttackResult::Hit { damage: expected, critical: false });
        assert_eq!(target.stats().current_health, 500.0 - expected);
        assert_eq!(attacker.stats().hits_landed, 1);
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn test_miss_draws_once() {
        let mut attacker = fighter(FighterClass::NoClass);
        let mut target = Mob::new(1);
        let mut rng = ScriptedRandom::constant(0.99);
        let result = strike(&mut attacker, &mut target, &mut AuraFlags::default(), 0, &mut rng);
        assert_eq!(result, AttackResult::Missed);
        assert_eq!(target.stats().current_health, 500.0);
        assert_eq!(attacker.stats().hits_landed, 0);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_crit_multiplies_damage() {
        let inputs = FighterInputs { equip_crit: 100.0, ..Default::default() };
        let mut attacker = Fighter::new(FighterClass::NoClass, None, inputs);
        let mut target = Mob::new(1);
        let mut rng = ScriptedRandom::constant(0.0);
        let result = strike(&mut attacker, &mut target, &mut AuraFlags::default(), 0, &mut rng);

        let raw = (1.0 - Mob::new(1).stats().defense_fraction) * 100.0 * 2.0;
        assert_eq!(result, AttackResult::Hit { damage: raw.floor(), critical: true });
    }

    #[test]
    fn test_crusader_scales_with_dead_fighters() {
        let mut attacker = fighter(FighterClass::Crusader);
        let mut target = Mob::new(1);
        let mut rng = ScriptedRandom::constant(0.5);
        strike(&mut attacker, &mut target, &mut AuraFlags::default(), 3, &mut rng);

        // 3 dead fighters: damage x1.6
        let expected = expected_damage(&Mob::new(1), (1.0 + 0.2 * 3.0) * 100.0);
        assert_eq!(target.stats().current_health, 500.0 - expected);
    }

    #[test]
    fn test_crusader_target_defense_rescaled() {
        let mut attacker = Mob::new(1);
        let mut target = fighter(FighterClass::Crusader);
        let mut rng = ScriptedRandom::constant(0.5);
        strike(&mut attacker, &mut target, &mut AuraFlags::default(), 2, &mut rng);

        let mitigation = 1.0 - defense_curve((1.0 + 0.2 * 2.0) * 25.0);
        let expected = (mitigation * 75.0).floor();
        assert_eq!(target.stats().current_health, 500.0 - expected);
    }

    #[test]
    fn test_shadow_dancer_evade_then_double_damage() {
        let mut mob = Mob::new(1);
        let mut dancer = fighter(FighterClass::ShadowDancer);
        let mut flags = AuraFlags::default();

        let mut rng = ScriptedRandom::constant(0.1);
        let result = strike(&mut mob, &mut dancer, &mut flags, 0, &mut rng);
        assert_eq!(result, AttackResult::Evaded);
        assert_eq!(dancer.stats().current_health, 500.0);
        assert_eq!(mob.stats().hits_landed, 1);
        assert!(flags.double_damage_pending());

        let mut rng = ScriptedRandom::constant(0.5);
        let mut target = Mob::new(1);
        strike(&mut dancer, &mut target, &mut flags, 0, &mut rng);
        let expected = expected_damage(&Mob::new(1), 200.0);
        assert_eq!(target.stats().current_health, 500.0 - expected);
        assert!(!flags.double_damage_pending());
    }

    #[test]
    fn test_double_damage_waits_for_a_shadow_dancer() {
        let mut flags = AuraFlags::default();
        flags.arm_double_damage();
        let mut attacker = fighter(FighterClass::Mage);
        let mut target = Mob::new(1);
        strike(&mut attacker, &mut target, &mut flags, 0, &mut ScriptedRandom::constant(0.5));
        assert_eq!(target.stats().current_health, 500.0 - expected_damage(&Mob::new(1), 100.0));
        assert!(flags.double_damage_pending());
    }

    #[test]
    fn test_guaranteed_hit_skips_roll() {
        let mut flags = AuraFlags::default();
        flags.arm_guaranteed_hit();
        let mut attacker = fighter(FighterClass::Berserker);
        let mut target = Mob::new(1);
        // Only the crit roll is drawn
        let mut rng = ScriptedRandom::constant(0.99);
        let result = strike(&mut attacker, &mut target, &mut flags, 0, &mut rng);
        assert!(matches!(result, AttackResult::Hit { critical: false, .. }));
        assert_eq!(rng.draws(), 1);
        assert!(!flags.guaranteed_hit_pending());
    }

    #[test]
    fn test_bastion_and_paladin_reduce_damage() {
        let mut flags = AuraFlags::default();
        flags.arm_bastion();
        flags.arm_paladin();
        let mut mob = Mob::new(1);
        let mut target = fighter(FighterClass::Mage);
        strike(&mut mob, &mut target, &mut flags, 0, &mut ScriptedRandom::constant(0.5));

        let mitigation = 1.0 - target.stats().defense_fraction;
        let expected = (mitigation * (1.0 - (0.0 + 0.25 + 0.15)) * 75.0).floor();
        assert_eq!(target.stats().current_health, 500.0 - expected);
        assert_eq!(flags, AuraFlags::default());
    }

    #[test]
    fn test_bastion_flag_ignored_for_mob_targets() {
        let mut flags = AuraFlags::default();
        flags.arm_bastion();
        let mut attacker = fighter(FighterClass::NoClass);
        let mut target = Mob::new(1);
        strike(&mut attacker, &mut target, &mut flags, 0, &mut ScriptedRandom::constant(0.5));
        assert!(flags.bastion_pending());
    }

    #[test]
    fn test_damage_never_drops_health_below_zero() {
        let inputs = FighterInputs { equip_damage: 1e9, ..Default::default() };
        let mut attacker = Fighter::new(FighterClass::NoClass, None, inputs);
        let mut target = Mob::new(1);
        strike(&mut attacker, &mut target, &mut AuraFlags::default(), 0, &mut ScriptedRandom::constant(0.5));
        assert_eq!(target.stats().current_health, 0.0);
        assert!(!target.is_alive());
    }
}
