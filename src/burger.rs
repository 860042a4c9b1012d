//! Simple Factory and Factory Method over a single tagged burger type.
//!
//! Every burger is a `(Tier, Family)` pair. The Simple Factory only knows the
//! regular family; the Factory Method creators each pin one family and share
//! the key lookup through a provided trait method.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::FactoryError;

/// Diagnostic emitted whenever a factory rejects a key.
pub const INVALID_TYPE_MESSAGE: &str = "Invalid Burger Type, Please Enter Valid Input";

/// The discriminator a customer orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Basic,
    Standard,
    Premium,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Basic, Tier::Standard, Tier::Premium];

    /// The order key that selects this tier.
    pub fn key(self) -> &'static str {
        match self {
            Tier::Basic => "basic",
            Tier::Standard => "standard",
            Tier::Premium => "premium",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Tier::Basic => "basic",
            Tier::Standard => "Standard",
            Tier::Premium => "premium",
        }
    }
}

impl FromStr for Tier {
    type Err = FactoryError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.key() == key)
            .ok_or_else(|| FactoryError::invalid(key))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Product family a creator is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Regular,
    Wheat,
}

/// Capability shared by every product: describe how it is being prepared.
pub trait Preparable {
    fn preparation(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Burger {
    tier: Tier,
    family: Family,
}

impl Burger {
    pub fn new(tier: Tier, family: Family) -> Self {
        Self { tier, family }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn family(&self) -> Family {
        self.family
    }
}

impl Preparable for Burger {
    fn preparation(&self) -> String {
        let wheat = match self.family {
            Family::Regular => "",
            Family::Wheat => " Wheat",
        };
        format!("we are prepare {}{wheat} burger for you please wait!!!", self.tier.label())
    }
}

// ============================================================================
// Simple Factory
// ============================================================================

/// One concrete factory, regular burgers only.
#[derive(Debug, Default, Clone, Copy)]
pub struct BurgerFactory;

impl BurgerFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn try_create(&self, key: &str) -> Result<Burger, FactoryError> {
        let tier = key.parse::<Tier>()?;
        Ok(Burger::new(tier, Family::Regular))
    }

    /// Returns `None` for unknown keys; the caller decides whether to go on.
    pub fn create(&self, key: &str) -> Option<Burger> {
        match self.try_create(key) {
            Ok(burger) => {
                debug!(key, "simple factory built burger");
                Some(burger)
            }
            Err(err) => {
                warn!(%err, "{}", INVALID_TYPE_MESSAGE);
                None
            }
        }
    }
}

// ============================================================================
// Factory Method
// ============================================================================

/// Creator contract: same keys, family chosen by the implementor.
pub trait BurgerCreator {
    fn family(&self) -> Family;

    fn build(&self, tier: Tier) -> Burger {
        Burger::new(tier, self.family())
    }

    fn create_burger(&self, key: &str) -> Option<Burger> {
        match key.parse::<Tier>() {
            Ok(tier) => Some(self.build(tier)),
            Err(err) => {
                warn!(%err, family = ?self.family(), "{}", INVALID_TYPE_MESSAGE);
                None
            }
        }
    }
}

/// Regular burgers.
#[derive(Debug, Default, Clone, Copy)]
pub struct SinghBurger;

impl BurgerCreator for SinghBurger {
    fn family(&self) -> Family {
        Family::Regular
    }
}

/// Wheat burgers.
#[derive(Debug, Default, Clone, Copy)]
pub struct KingBurger;

impl BurgerCreator for KingBurger {
    fn family(&self) -> Family {
        Family::Wheat
    }
}

pub fn creator_for(family: Family) -> Box<dyn BurgerCreator> {
    match family {
        Family::Regular => Box::new(SinghBurger),
        Family::Wheat => Box::new(KingBurger),
    }
}
