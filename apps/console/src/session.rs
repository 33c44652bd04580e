use serde_json::{json, Value};
use tracing::info;

use dashboard_cell::DashboardService;
use registration_cell::{submit, RegistrationForm};
use roster_cell::Roster;
use shared_config::AppConfig;
use shared_models::{AppError, Booking, SlotId, UserId};

/// One in-memory session: the roster lives as long as the session does.
pub struct Session {
    roster: Roster,
    dashboards: DashboardService,
    currency: String,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            roster: Roster::new(),
            dashboards: DashboardService::new(config),
            currency: config.currency_symbol.clone(),
        }
    }

    pub fn register(&mut self, form: &RegistrationForm) -> Result<UserId, AppError> {
        submit(form, &mut self.roster).map_err(AppError::from)
    }

    pub fn book(&mut self, patient: UserId, doctor: UserId, slot: SlotId) -> Result<Booking, AppError> {
        self.roster
            .book_slot(patient, doctor, slot)
            .map_err(AppError::from)
    }

    /// First slot offered by a doctor record, if any.
    pub fn first_slot(&self, doctor: UserId) -> Option<SlotId> {
        self.roster
            .find(doctor)
            .and_then(|u| u.as_doctor())
            .and_then(|d| d.slots.first())
            .map(|s| s.id)
    }

    pub fn users(&self) -> Value {
        json!(self.roster.summaries())
    }

    /// Hospitals known to the roster with the doctors working at each.
    pub fn hospitals(&self) -> Value {
        let hospitals: Vec<Value> = self
            .roster
            .hospitals()
            .iter()
            .map(|hospital| {
                let mut value = json!(hospital);
                value["doctors"] = hospital
                    .doctor_profiles()
                    .map(|(user, profile)| {
                        json!({
                            "id": user.id,
                            "name": user.name(),
                            "specializations": profile.specializations,
                        })
                    })
                    .collect();
                value
            })
            .collect();
        Value::Array(hospitals)
    }

    /// Dashboard view-model for a typed-in user id, or the error body.
    pub fn dashboard(&self, input: &str) -> Value {
        match self.dashboards.get_dashboard_for_input(input, &self.roster) {
            Ok(dashboard) => json!({ "currency": self.currency, "dashboard": dashboard }),
            Err(err) => {
                info!("No dashboard for input {:?}", input);
                AppError::from(err).to_json()
            }
        }
    }
}
