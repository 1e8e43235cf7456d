//! Text lookup for human-readable battle logs
//!
//! The engine only produces message codes with positional arguments. A
//! [`TextLookup`] turns a code into a template with `{0}`, `{1}`, ...
//! placeholders. Without a lookup (or without a template for a code) the
//! message degrades to the raw code followed by its arguments.

use crate::config::{parse_toml, ConfigError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Source of message templates
pub trait TextLookup {
    fn template(&self, code: &str) -> Option<&str>;
}

/// Code -> template map, loadable from TOML
///
/// ```toml
/// [messages]
/// DAMAGE_INFO = "{0} hits {1} and deals {2} damage."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageCatalog {
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in English templates for every battle message code
    pub fn english() -> Self {
        let mut catalog = MessageCatalog::new();
        for (code, template) in [
            ("ROUND_INFO", "Round {0}, attack {1}"),
            ("DAMAGE_INFO", "{0} hits {1} and deals {2} damage."),
            ("ATK_MISS", "{0} misses {1}."),
            ("ATK_CANNOT_DODGE", "{0}'s attack cannot be dodged!"),
            ("SP_BR_DOUBLE", "{0} strikes twice!"),
            ("SP_SD_EVADED", "{0} evades the attack of {1}!"),
            ("SP_SD_APL_DOUBLEDMG", "{0} deals double damage!"),
            ("SP_BS_DMG_DODGE", "Bastion aura protects {0}: +25% damage reduction, +50% dodge."),
            ("SP_PL_DMG_REDUCTION", "Paladin aura protects {0}: +15% damage reduction."),
            ("PRIEST_RESURRECTED", "The Priest resurrects {0}!"),
            ("HEALTH_0", "A side's health reached 0."),
            ("LOSE_DUE_TO_EXHAUST", "Fighters exhausted after 300 rounds."),
            ("FINAL_ROUND", "End of round {0}: fighters {1} HP, mobs {2} HP"),
        ] {
            catalog.insert(code, template);
        }
        catalog
    }

    pub fn insert(&mut self, code: &str, template: &str) {
        self.messages.insert(code.to_string(), template.to_string());
    }

    /// Load a catalog from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        crate::config::load_toml(path)
    }

    /// Parse a catalog from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        parse_toml(content)
    }
}

impl TextLookup for MessageCatalog {
    fn template(&self, code: &str) -> Option<&str> {
        self.messages.get(code).map(String::as_str)
    }
}

/// Substitute `{n}` placeholders with positional arguments
///
/// Placeholders without a matching argument are left as written.
pub fn format_template(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });

        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Render a code with arguments, degrading to the raw code when no template exists
pub fn render(lookup: Option<&dyn TextLookup>, code: &str, args: &[String]) -> String {
    match lookup.and_then(|l| l.template(code)) {
        Some(template) => format_template(template, args),
        None if args.is_empty() => code.to_string(),
        None => format!("{} {}", code, args.join(" ")),
    }
}
