use crate::filter::{apply_agents, AgentFilter};
use crate::models::Agent;

/// The agents listed on the directory page
#[derive(Debug, Clone, Default)]
pub struct AgentDirectory {
    agents: Vec<Agent>,
}

impl AgentDirectory {
    pub fn new(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    /// The built-in directory
    pub fn fixture() -> Self {
        Self::new(vec![
            agent(
                1,
                "Sarah Johnson",
                "Senior Real Estate Consultant",
                "property.jpg",
                (4.9, 127),
                &["residential", "luxury"],
                "Lagos, Nigeria",
                ("8+ years", 45),
                ("+234-801-234-5678", "sarah.j@assetplane.com"),
                "Specializing in luxury residential properties across Lagos with expertise in diaspora investments.",
            ),
            agent(
                2,
                "Michael Adebayo",
                "Commercial Property Expert",
                "buildings urban.jpg",
                (4.8, 89),
                &["commercial", "investment"],
                "Abuja, Nigeria",
                ("12+ years", 67),
                ("+234-803-456-7890", "michael.a@assetplane.com"),
                "Leading commercial property consultant with extensive portfolio in Abuja business districts.",
            ),
            agent(
                3,
                "Chiamaka Okafor",
                "Diaspora Property Specialist",
                "new-york.jpg",
                (5.0, 156),
                &["diaspora", "residential"],
                "Enugu, Nigeria",
                ("6+ years", 34),
                ("+234-805-678-9012", "chiamaka.o@assetplane.com"),
                "Dedicated to helping Nigerians in diaspora find and manage properties back home seamlessly.",
            ),
            agent(
                4,
                "David Kimani",
                "Agricultural Land Expert",
                "agriculture.jpg",
                (4.7, 73),
                &["agriculture", "commercial"],
                "Ogun, Nigeria",
                ("10+ years", 52),
                ("+234-807-890-1234", "david.k@assetplane.com"),
                "Specialist in agricultural land acquisition and development across Southwest Nigeria.",
            ),
            agent(
                5,
                "Fatima Al-Hassan",
                "Luxury Property Advisor",
                "skyscrapers.jpg",
                (4.9, 94),
                &["luxury", "commercial"],
                "Kano, Nigeria",
                ("7+ years", 28),
                ("+234-809-012-3456", "fatima.a@assetplane.com"),
                "Premium luxury property consultant serving high-net-worth individuals and corporations.",
            ),
            agent(
                6,
                "Emeka Nwosu",
                "Residential Property Expert",
                "sharp shot of houses.jpg",
                (4.8, 112),
                &["residential", "investment"],
                "Port Harcourt, Nigeria",
                ("9+ years", 89),
                ("+234-802-345-6789", "emeka.n@assetplane.com"),
                "Expert in residential properties with focus on family homes and investment opportunities.",
            ),
        ])
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn get(&self, id: u32) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    pub fn filter(&self, filter: &AgentFilter) -> Vec<&Agent> {
        apply_agents(&self.agents, filter)
    }

    /// Distinct specialty tags in first-seen order, for the filter buttons
    pub fn specialties(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.agents.iter().flat_map(|agent| &agent.specialties) {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag);
            }
        }
        tags
    }
}

#[allow(clippy::too_many_arguments)]
fn agent(
    id: u32,
    name: &str,
    title: &str,
    image: &str,
    (rating, reviews): (f32, u32),
    specialties: &[&str],
    location: &str,
    (experience, listings_handled): (&str, u32),
    (phone, email): (&str, &str),
    description: &str,
) -> Agent {
    Agent {
        id,
        name: name.to_string(),
        title: title.to_string(),
        image: Some(image.to_string()),
        rating,
        reviews,
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        location: location.to_string(),
        experience: experience.to_string(),
        listings_handled,
        phone: phone.to_string(),
        email: email.to_string(),
        verified: true,
        description: description.to_string(),
    }
}
