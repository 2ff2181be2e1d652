use crate::models::{Inspection, InspectionStatus, Listing};
use crate::persistence::{keys, load_json, save_json, KeyValueStore};
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

/// Inspection requests made from listing cards
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InspectionLog {
    entries: Vec<Inspection>,
}

impl InspectionLog {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self {
            entries: load_json(store, keys::INSPECTIONS).unwrap_or_default(),
        }
    }

    pub fn entries(&self) -> &[Inspection] {
        &self.entries
    }

    /// Inspections requested by one user
    pub fn for_user<'a>(&'a self, email: &'a str) -> impl Iterator<Item = &'a Inspection> + 'a {
        self.entries
            .iter()
            .filter(move |inspection| inspection.user_email.eq_ignore_ascii_case(email))
    }

    /// Book an inspection of `listing` on `date` (`YYYY-MM-DD`)
    pub fn schedule(
        &mut self,
        listing: &Listing,
        user_email: Option<&str>,
        date: &str,
        now: DateTime<Utc>,
        store: &mut dyn KeyValueStore,
    ) -> Result<Inspection> {
        let user_email = match user_email.map(str::trim) {
            Some(email) if !email.is_empty() => email,
            _ => anyhow::bail!("Please login to schedule an inspection"),
        };

        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .with_context(|| format!("Invalid inspection date {:?}, expected YYYY-MM-DD", date))?;

        let last_id = self.entries.iter().map(|i| i.id).max().unwrap_or(0);
        let inspection = Inspection {
            id: now.timestamp_millis().max(last_id.saturating_add(1)),
            property_id: listing.id,
            property_name: listing.title.clone(),
            date,
            status: InspectionStatus::Pending,
            user_email: user_email.to_string(),
            created_at: now,
        };

        self.entries.push(inspection.clone());
        save_json(store, keys::INSPECTIONS, &self.entries);
        info!("Inspection scheduled for {} on {}", listing.title, date);

        Ok(inspection)
    }
}
