use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Volunteer profile as supplied by the data-access layer
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_location_pair"))]
pub struct VolunteerProfile {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
}

impl VolunteerProfile {
    /// The volunteer's coordinates, only when both latitude and longitude are set
    pub fn location(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
            _ => None,
        }
    }
}

fn validate_location_pair(profile: &VolunteerProfile) -> Result<(), ValidationError> {
    if profile.latitude.is_some() != profile.longitude.is_some() {
        let mut err = ValidationError::new("location_pair");
        err.message = Some("latitude and longitude must be set together".into());
        return Err(err);
    }
    Ok(())
}

/// Lifecycle state of an opportunity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityStatus {
    #[default]
    Active,
    Closed,
    Completed,
}

/// Volunteering opportunity posted by an organization
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub organization_id: Option<Uuid>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub schedule: Vec<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_vacancies")]
    pub vacancies: u32,
    #[serde(default)]
    pub status: OpportunityStatus,
    #[serde(default)]
    pub causes: Vec<String>,
}

impl Opportunity {
    /// Build an active opportunity with the fields that drive matching
    pub fn new(required_skills: Vec<String>, schedule: Vec<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            description: String::new(),
            organization_id: None,
            required_skills,
            schedule,
            address: None,
            latitude,
            longitude,
            start_date: None,
            end_date: None,
            vacancies: default_vacancies(),
            status: OpportunityStatus::Active,
            causes: Vec::new(),
        }
    }

    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

fn default_vacancies() -> u32 { 1 }

/// Scored opportunity produced by the matcher
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<'a> {
    pub opportunity: &'a Opportunity,
    pub score: f64,
    pub skill_match: f64,
    pub schedule_match: f64,
    pub distance_km: f64,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skill: f64,
    pub schedule: f64,
    pub distance: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skill + self.schedule + self.distance
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.5,
            schedule: 0.3,
            distance: 0.2,
        }
    }
}
