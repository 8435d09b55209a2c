use serde::{Deserialize, Serialize};

/// Scope of the beverage service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceTier {
    FullBar,
    BeerWine,
}

impl ServiceTier {
    pub fn code(&self) -> &'static str {
        match self {
            ServiceTier::FullBar => "fullBar",
            ServiceTier::BeerWine => "beerWine",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceTier::FullBar => "Full Bar",
            ServiceTier::BeerWine => "Beer & Wine",
        }
    }

    /// What the tier includes, shown under the toggle
    pub fn description(&self) -> &'static str {
        match self {
            ServiceTier::FullBar => {
                "Full Bar + Custom Cocktail Menu (3 cocktails + 1 Mocktail) + Beer & Wine"
            }
            ServiceTier::BeerWine => {
                "3 Varieties of Red Wine, 3 Varieties of White wine and Draft Beer Selection."
            }
        }
    }

    /// Toggle order: the cheaper tier comes first
    pub fn all() -> Vec<ServiceTier> {
        vec![ServiceTier::BeerWine, ServiceTier::FullBar]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "fullBar" => Some(ServiceTier::FullBar),
            "beerWine" => Some(ServiceTier::BeerWine),
            _ => None,
        }
    }
}

impl Default for ServiceTier {
    fn default() -> Self {
        ServiceTier::BeerWine
    }
}

impl std::fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
