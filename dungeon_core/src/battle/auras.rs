//! One-shot battle flags
//!
//! Each flag is armed by one action and consumed by the next attack that
//! checks it, regardless of who that attack involves.

use std::mem;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuraFlags {
    double_damage: bool,
    guaranteed_hit: bool,
    paladin: bool,
    bastion: bool,
}

impl AuraFlags {
    /// Set when a Shadow Dancer evades; doubles its next landed hit
    pub(crate) fn arm_double_damage(&mut self) {
        self.double_damage = true;
    }

    /// Set by a Berserker below a quarter health
    pub(crate) fn arm_guaranteed_hit(&mut self) {
        self.guaranteed_hit = true;
    }

    pub(crate) fn arm_paladin(&mut self) {
        self.paladin = true;
    }

    pub(crate) fn arm_bastion(&mut self) {
        self.bastion = true;
    }

    pub(crate) fn take_double_damage(&mut self) -> bool {
        mem::take(&mut self.double_damage)
    }

    pub(crate) fn take_guaranteed_hit(&mut self) -> bool {
        mem::take(&mut self.guaranteed_hit)
    }

    pub(crate) fn take_paladin(&mut self) -> bool {
        mem::take(&mut self.paladin)
    }

    pub(crate) fn take_bastion(&mut self) -> bool {
        mem::take(&mut self.bastion)
    }

    pub fn double_damage_pending(&self) -> bool {
        self.double_damage
    }

    pub fn guaranteed_hit_pending(&self) -> bool {
        self.guaranteed_hit
    }

    pub fn paladin_pending(&self) -> bool {
        self.paladin
    }

    pub fn bastion_pending(&self) -> bool {
        self.bastion
    }
}
