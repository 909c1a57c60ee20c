use serde::{Deserialize, Serialize};

/// Physical activity level of the household, selecting one calorie multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

/// Household composition as edited by the user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdProfile {
    #[serde(default)]
    pub adults: u32,

    #[serde(default)]
    pub children: u32,

    #[serde(default)]
    pub elderly: u32,

    #[serde(default)]
    pub activity_level: ActivityLevel,
}

impl HouseholdProfile {
    pub fn new(adults: u32, children: u32, elderly: u32, activity_level: ActivityLevel) -> Self {
        Self {
            adults,
            children,
            elderly,
            activity_level,
        }
    }

    /// Total number of people in the household, saturating at `u32::MAX`.
    #[inline]
    pub fn size(&self) -> u32 {
        self.adults
            .saturating_add(self.children)
            .saturating_add(self.elderly)
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size() {
        let profile = HouseholdProfile::new(2, 1, 1, ActivityLevel::Light);
        assert_eq!(profile.size(), 4);
        assert!(!profile.is_empty());
        assert!(HouseholdProfile::default().is_empty());
    }

    #[test]
    fn test_size_saturates() {
        let profile = HouseholdProfile::new(u32::MAX, 1, u32::MAX, ActivityLevel::Light);
        assert_eq!(profile.size(), u32::MAX);
    }

    #[test]
    fn test_activity_level_serde_names() {
        let json = r#"{"adults": 1, "activityLevel": "very_active"}"#;
        let profile: HouseholdProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.activity_level, ActivityLevel::VeryActive);
        assert_eq!(profile.children, 0);
        assert_eq!(profile.activity_level.label(), "very_active");
    }
}
