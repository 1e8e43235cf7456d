//! BattleEvent - Verbose battle journal entries

use crate::text::{render, TextLookup};

/// One journal entry, identified by a stable message code
#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    /// A combatant starts its action
    Action { round: u32, attack: u32, attacker: String },
    BrawlerExtraAttack { attacker: String },
    Evaded { target: String, attacker: String },
    BastionAura { target: String },
    CannotBeDodged { attacker: String },
    DoubleDamage { attacker: String },
    PaladinAura { target: String },
    Damage { attacker: String, target: String, amount: f64, critical: bool },
    Miss { attacker: String, target: String },
    Resurrected { fighter: String },
    RoundSummary { round: u32, fighters_health: f64, mobs_health: f64 },
}

impl BattleEvent {
    /// Message code for the text lookup layer
    pub fn code(&self) -> &'static str {
        match self {
            BattleEvent::Action { .. } => "ROUND_INFO",
            BattleEvent::BrawlerExtraAttack { .. } => "SP_BR_DOUBLE",
            BattleEvent::Evaded { .. } => "SP_SD_EVADED",
            BattleEvent::BastionAura { .. } => "SP_BS_DMG_DODGE",
            BattleEvent::CannotBeDodged { .. } => "ATK_CANNOT_DODGE",
            BattleEvent::DoubleDamage { .. } => "SP_SD_APL_DOUBLEDMG",
            BattleEvent::PaladinAura { .. } => "SP_PL_DMG_REDUCTION",
            BattleEvent::Damage { .. } => "DAMAGE_INFO",
            BattleEvent::Miss { .. } => "ATK_MISS",
            BattleEvent::Resurrected { .. } => "PRIEST_RESURRECTED",
            BattleEvent::RoundSummary { .. } => "FINAL_ROUND",
        }
    }

    /// Positional template arguments
    pub fn args(&self) -> Vec<String> {
        match self {
            BattleEvent::Action { round, attack, attacker } => {
                vec![round.to_string(), attack.to_string(), attacker.clone()]
            }
            BattleEvent::BrawlerExtraAttack { attacker }
            | BattleEvent::CannotBeDodged { attacker }
            | BattleEvent::DoubleDamage { attacker } => vec![attacker.clone()],
            BattleEvent::Evaded { target, attacker } => vec![target.clone(), attacker.clone()],
            BattleEvent::BastionAura { target } | BattleEvent::PaladinAura { target } => {
                vec![target.clone()]
            }
            BattleEvent::Damage { attacker, target, amount, critical } => {
                let mut args = vec![attacker.clone(), target.clone(), amount.to_string()];
                if *critical {
                    args.push("crit".to_string());
                }
                args
            }
            BattleEvent::Miss { attacker, target } => vec![attacker.clone(), target.clone()],
            BattleEvent::Resurrected { fighter } => vec![fighter.clone()],
            BattleEvent::RoundSummary { round, fighters_health, mobs_health } => vec![
                round.to_string(),
                fighters_health.trunc().to_string(),
                mobs_health.trunc().to_string(),
            ],
        }
    }

    /// Human-readable line; raw code and arguments without a lookup
    pub fn render(&self, lookup: Option<&dyn TextLookup>) -> String {
        render(lookup, self.code(), &self.args())
    }
}

/// Optional event sink; events are only built when recording
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Journal {
    events: Option<Vec<BattleEvent>>,
}

impl Journal {
    pub(crate) fn recording() -> Self {
        Journal { events: Some(Vec::new()) }
    }

    pub(crate) fn record(&mut self, event: impl FnOnce() -> BattleEvent) {
        if let Some(events) = self.events.as_mut() {
            events.push(event());
        }
    }

    pub(crate) fn events(&self) -> &[BattleEvent] {
        self.events.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::MessageCatalog;

    #[test]
    fn test_render_raw_codes() {
        let event = BattleEvent::Miss {
            attacker: "Mage".to_string(),
            target: "level 5 Mob".to_string(),
        };
        assert_eq!(event.render(None), "ATK_MISS Mage level 5 Mob");
    }

    #[test]
    fn test_render_damage_with_catalog() {
        let event = BattleEvent::Damage {
            attacker: "Hunter".to_string(),
            target: "level 1 Mob".to_string(),
            amount: 74.0,
            critical: false,
        };
        let catalog = MessageCatalog::english();
        assert_eq!(event.render(Some(&catalog)), "Hunter hits level 1 Mob and deals 74 damage.");
    }

    #[test]
    fn test_raw_damage_marks_only_critical_hits() {
        let mut event = BattleEvent::Damage {
            attacker: "a".to_string(),
            target: "b".to_string(),
            amount: 74.0,
            critical: false,
        };
        assert_eq!(event.render(None), "DAMAGE_INFO a b 74");

        if let BattleEvent::Damage { critical, .. } = &mut event {
            *critical = true;
        }
        assert_eq!(event.render(None), "DAMAGE_INFO a b 74 crit");
    }

    #[test]
    fn test_journal_only_records_when_enabled() {
        let mut silent = Journal::default();
        silent.record(|| BattleEvent::Resurrected { fighter: "Ada".to_string() });
        assert!(silent.events().is_empty());

        let mut journal = Journal::recording();
        journal.record(|| BattleEvent::Resurrected { fighter: "Ada".to_string() });
        assert_eq!(journal.events().len(), 1);
        assert_eq!(journal.events()[0].code(), "PRIEST_RESURRECTED");
    }
}
