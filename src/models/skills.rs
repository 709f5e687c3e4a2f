use serde::{Deserialize, Serialize};

/// An ordered, duplicate-free set of skill tags.
///
/// Insertion order is preserved so rosters render skills the way they were
/// picked. `toggle` is the single entry point the editor uses when a skill
/// checkbox flips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.iter().any(|s| s == skill)
    }

    /// Add a skill; no-op if already present.
    pub fn add(&mut self, skill: &str) {
        if !self.contains(skill) {
            self.0.push(skill.to_string());
        }
    }

    /// Remove a skill; no-op if absent.
    pub fn remove(&mut self, skill: &str) {
        self.0.retain(|s| s != skill);
    }

    /// Flip membership: present removes, absent adds.
    pub fn toggle(&mut self, skill: &str) {
        if self.contains(skill) {
            self.remove(skill);
        } else {
            self.add(skill);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(skills: Vec<String>) -> Self {
        let mut set = SkillSet::new();
        for skill in &skills {
            set.add(skill);
        }
        set
    }
}

impl FromIterator<String> for SkillSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}
