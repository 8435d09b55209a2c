use serde::{Deserialize, Serialize};

/// Who sponsors the event; selects the rate table row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrganizationCategory {
    GithubInternal,
    ExternalSponsor,
    NonProfit,
}

impl OrganizationCategory {
    /// Wire code, same as the serde representation
    pub fn code(&self) -> &'static str {
        match self {
            OrganizationCategory::GithubInternal => "githubInternal",
            OrganizationCategory::ExternalSponsor => "externalSponsor",
            OrganizationCategory::NonProfit => "nonProfit",
        }
    }

    /// Label shown on the category toggle
    pub fn display_name(&self) -> &'static str {
        match self {
            OrganizationCategory::GithubInternal => "GitHub Internal",
            OrganizationCategory::ExternalSponsor => "External Partner",
            OrganizationCategory::NonProfit => "Non-Profit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OrganizationCategory::GithubInternal => "Events Sponsored by GitHub & Microsoft",
            OrganizationCategory::ExternalSponsor => {
                "Events Hosted by GitHub; Sponsored by Partner Org"
            }
            OrganizationCategory::NonProfit => {
                "Events Hosted By GitHub; Sponsored by a Non-Profit Org"
            }
        }
    }

    pub fn all() -> Vec<OrganizationCategory> {
        vec![
            OrganizationCategory::GithubInternal,
            OrganizationCategory::ExternalSponsor,
            OrganizationCategory::NonProfit,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "githubInternal" => Some(OrganizationCategory::GithubInternal),
            "externalSponsor" => Some(OrganizationCategory::ExternalSponsor),
            "nonProfit" => Some(OrganizationCategory::NonProfit),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrganizationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_matches_serde() {
        for category in OrganizationCategory::all() {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.code()));
            assert_eq!(OrganizationCategory::from_code(category.code()), Some(category));
        }
        assert_eq!(OrganizationCategory::from_code("partner"), None);
    }
}
