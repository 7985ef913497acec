use super::entities::CandidateRecord;

/// Filters accepted when listing candidates. All present filters must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateListFilter {
    pub skill: Option<String>,
    pub min_experience: Option<f64>,
    pub graduation_year: Option<i32>,
}

impl CandidateListFilter {
    pub fn matches(&self, record: &CandidateRecord) -> bool {
        self.matches_skill(record)
            && self
                .min_experience
                .map_or(true, |min| record.years_of_experience >= min)
            && self
                .graduation_year
                .map_or(true, |year| record.graduation_year == year)
    }

    // An empty skill filter is the same as no skill filter.
    fn matches_skill(&self, record: &CandidateRecord) -> bool {
        let Some(skill) = self.skill.as_deref().filter(|s| !s.is_empty()) else {
            return true;
        };

        let needle = skill.to_lowercase();
        record
            .skill_set
            .iter()
            .any(|entry| entry.to_lowercase().contains(&needle))
    }
}
