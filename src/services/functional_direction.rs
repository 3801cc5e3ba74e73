use std::collections::HashMap;
use uuid::Uuid;

use crate::config::{AggregationPolicy, DirectionMeasure};
use crate::models::TrainingSeries;
use crate::services::attended_sessions;
use crate::store::CycleSnapshot;

/// Normalize a free-text training-zone label for catalog matching:
/// lowercased, the accented vowels á/é/ó stripped to their plain forms,
/// spaces turned into underscores.
pub fn normalize_direction(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace('á', "a")
        .replace('é', "e")
        .replace('ó', "o")
        .replace(' ', "_")
}

/// Match a normalized label against the catalog. An exact key wins;
/// otherwise the first catalog entry, in catalog order, where either
/// normalized string contains the other. Catalog order is the documented
/// tie-break.
fn match_direction<'a>(normalized: &str, catalog: &'a [(String, String)]) -> Option<&'a str> {
    if let Some((_, name)) = catalog.iter().find(|(key, _)| key == normalized) {
        return Some(name);
    }
    catalog
        .iter()
        .find(|(key, _)| normalized.contains(key.as_str()) || key.contains(normalized))
        .map(|(_, name)| name.as_str())
}

/// Buckets subdivision volume (or counts) into the configured
/// functional-direction catalog.
///
/// Every configured direction appears in the output, zero by default; an
/// empty catalog yields an empty mapping. Labels that match no configured
/// direction are skipped entirely.
#[derive(Debug, Clone)]
pub struct FunctionalDirectionAggregator {
    policy: AggregationPolicy,
}

impl FunctionalDirectionAggregator {
    pub fn new(policy: AggregationPolicy) -> Self {
        Self { policy }
    }

    pub fn calculate(
        &self,
        snapshot: &CycleSnapshot,
        athlete: Option<Uuid>,
    ) -> HashMap<String, f64> {
        let mut totals: HashMap<String, f64> = snapshot
            .directions
            .iter()
            .map(|config| (config.direction.clone(), 0.0))
            .collect();
        if totals.is_empty() {
            return totals;
        }

        let catalog: Vec<(String, String)> = snapshot
            .directions
            .iter()
            .map(|config| (normalize_direction(&config.direction), config.direction.clone()))
            .collect();

        let series_in_scope: Vec<&TrainingSeries> = match athlete {
            Some(athlete_id) => attended_sessions(snapshot, athlete_id)
                .into_iter()
                .flat_map(|attended| attended.series)
                .collect(),
            None => snapshot
                .sessions
                .iter()
                .filter(|session| session.origin.is_plan())
                .flat_map(|session| session.series.iter())
                .collect(),
        };

        for series in series_in_scope {
            for subdivision in &series.subdivisions {
                let Some(raw) = subdivision.functional_base.as_deref() else {
                    continue;
                };
                let normalized = normalize_direction(raw);
                if normalized.is_empty() {
                    continue;
                }

                let amount = match self.policy.direction_measure {
                    DirectionMeasure::Volume => {
                        let volume = subdivision.volume();
                        if volume <= 0.0 {
                            continue;
                        }
                        volume
                    }
                    DirectionMeasure::Count => 1.0,
                };

                if let Some(name) = match_direction(&normalized, &catalog) {
                    if let Some(slot) = totals.get_mut(name) {
                        *slot += amount;
                    }
                }
            }
        }

        totals
    }
}
