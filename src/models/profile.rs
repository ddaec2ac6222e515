use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    Solo,
    Couple,
    Family,
    Group,
    #[default]
    None,
}

impl GroupType {
    pub const ALL: [GroupType; 5] = [
        GroupType::Solo,
        GroupType::Couple,
        GroupType::Family,
        GroupType::Group,
        GroupType::None,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GroupType::Solo => "Solo",
            GroupType::Couple => "Couple",
            GroupType::Family => "Family",
            GroupType::Group => "Group",
            GroupType::None => "Not set",
        }
    }

    pub fn next(self) -> Self {
        let index = GroupType::ALL.iter().position(|g| *g == self).unwrap_or(0);
        GroupType::ALL[(index + 1) % GroupType::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub name: String,
    pub age: u32,
    pub relationship: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub avatar: String,
    pub member_since: String,
    pub group_type: GroupType,
    pub family_members: Vec<FamilyMember>,
    pub interests: Vec<String>,
    pub accessibility: Vec<String>,
    pub visits: i32,
    pub animals_seen: i32,
    pub distance_walked: f64,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Alex".to_string(),
            avatar: "🧑".to_string(),
            member_since: "Member since 2023".to_string(),
            group_type: GroupType::Family,
            family_members: vec![
                FamilyMember {
                    name: "Sam".to_string(),
                    age: 34,
                    relationship: "Partner".to_string(),
                },
                FamilyMember {
                    name: "Mia".to_string(),
                    age: 7,
                    relationship: "Daughter".to_string(),
                },
            ],
            interests: vec!["big-cats".to_string(), "birds".to_string()],
            accessibility: vec!["stroller".to_string()],
            visits: 3,
            animals_seen: 27,
            distance_walked: 12.4,
        }
    }
}

/// Partial profile update. `None` fields leave the profile untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub member_since: Option<String>,
    pub group_type: Option<GroupType>,
    pub family_members: Option<Vec<FamilyMember>>,
    pub interests: Option<Vec<String>>,
    pub accessibility: Option<Vec<String>>,
    pub visits: Option<i32>,
    pub animals_seen: Option<i32>,
    pub distance_walked: Option<f64>,
}

impl ProfilePatch {
    pub fn group_type(mut self, group_type: GroupType) -> Self {
        self.group_type = Some(group_type);
        self
    }

    pub fn interests(mut self, interests: Vec<String>) -> Self {
        self.interests = Some(interests);
        self
    }

    /// Shallow merge into `profile`.
    pub fn apply_to(self, profile: &mut UserProfile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(avatar) = self.avatar {
            profile.avatar = avatar;
        }
        if let Some(member_since) = self.member_since {
            profile.member_since = member_since;
        }
        if let Some(group_type) = self.group_type {
            profile.group_type = group_type;
        }
        if let Some(family_members) = self.family_members {
            profile.family_members = family_members;
        }
        if let Some(interests) = self.interests {
            profile.interests = interests;
        }
        if let Some(accessibility) = self.accessibility {
            profile.accessibility = accessibility;
        }
        if let Some(visits) = self.visits {
            profile.visits = visits;
        }
        if let Some(animals_seen) = self.animals_seen {
            profile.animals_seen = animals_seen;
        }
        if let Some(distance_walked) = self.distance_walked {
            profile.distance_walked = distance_walked;
        }
    }
}
