use crate::models::Agent;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Specialty filter shown to every agent
pub const ALL_SPECIALTIES: &str = "all";

/// Agent directory filter: a specialty button plus the name/location search box
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AgentFilter {
    /// Specialty tag, `all` or empty for everyone
    pub specialty: String,
    /// Case-insensitive substring of name or location
    pub search: String,
}

impl AgentFilter {
    pub fn with_specialty(self, specialty: impl Into<String>) -> Self {
        Self {
            specialty: specialty.into(),
            ..self
        }
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    pub fn matches(&self, agent: &Agent) -> bool {
        let any_specialty = self.specialty.is_empty() || self.specialty == ALL_SPECIALTIES;
        if !any_specialty && !agent.specialties.iter().any(|s| *s == self.specialty) {
            return false;
        }

        let search = self.search.to_lowercase();
        search.is_empty()
            || agent.name.to_lowercase().contains(&search)
            || agent.location.to_lowercase().contains(&search)
    }
}

/// Agents matching `filter`, in directory order
pub fn apply_agents<'a>(agents: &'a [Agent], filter: &AgentFilter) -> Vec<&'a Agent> {
    let matched: Vec<&Agent> = agents.iter().filter(|agent| filter.matches(agent)).collect();
    debug!("Agent filter {:?} matched {} of {}", filter, matched.len(), agents.len());
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AgentDirectory;

    fn ids(agents: &[&Agent]) -> Vec<u32> {
        agents.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_all_shows_everyone() {
        let directory = AgentDirectory::fixture();
        let agents = directory.agents();
        let everyone = vec![1, 2, 3, 4, 5, 6];

        assert_eq!(ids(&apply_agents(agents, &AgentFilter::default())), everyone);
        assert_eq!(
            ids(&apply_agents(agents, &AgentFilter::default().with_specialty("all"))),
            everyone
        );
    }

    #[test]
    fn test_specialty_filter() {
        let directory = AgentDirectory::fixture();
        let agents = directory.agents();

        let luxury = apply_agents(agents, &AgentFilter::default().with_specialty("luxury"));
        assert_eq!(ids(&luxury), vec![1, 5]);

        let commercial = apply_agents(agents, &AgentFilter::default().with_specialty("commercial"));
        assert_eq!(ids(&commercial), vec![2, 4, 5]);

        let unknown = apply_agents(agents, &AgentFilter::default().with_specialty("Luxury"));
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_search_by_name_or_location() {
        let directory = AgentDirectory::fixture();
        let agents = directory.agents();

        let by_name = apply_agents(agents, &AgentFilter::default().with_search("FATIMA"));
        assert_eq!(ids(&by_name), vec![5]);

        let by_location = apply_agents(agents, &AgentFilter::default().with_search("port harcourt"));
        assert_eq!(ids(&by_location), vec![6]);

        // Titles and descriptions are not searched
        let by_title = apply_agents(agents, &AgentFilter::default().with_search("consultant"));
        assert!(by_title.is_empty());
    }

    #[test]
    fn test_specialty_and_search_combine() {
        let directory = AgentDirectory::fixture();
        let filter = AgentFilter::default()
            .with_specialty("residential")
            .with_search("nigeria");
        assert_eq!(ids(&apply_agents(directory.agents(), &filter)), vec![1, 3, 6]);
    }
}
