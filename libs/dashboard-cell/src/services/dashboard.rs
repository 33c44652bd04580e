use tracing::{debug, info, warn};

use roster_cell::Roster;
use shared_config::AppConfig;
use shared_models::{Profile, UserId};

use crate::models::{Dashboard, DashboardError};
use crate::services::{earnings, history, revenue};

/// Builds role-specific dashboards from a caller-owned roster.
#[derive(Debug, Clone)]
pub struct DashboardService {
    doctor_share_percent: u32,
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl DashboardService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            doctor_share_percent: config.effective_doctor_share_percent(),
        }
    }

    pub fn get_dashboard(&self, user_id: UserId, roster: &Roster) -> Result<Dashboard, DashboardError> {
        debug!("Building dashboard for user {}", user_id);

        let user = roster.find(user_id).ok_or_else(|| {
            warn!("Dashboard requested for unknown user {}", user_id);
            DashboardError::NotFound(user_id.to_string())
        })?;

        let dashboard = match &user.profile {
            Profile::Admin(admin) => Dashboard::Admin(revenue::admin_dashboard(admin, roster)),
            Profile::Doctor(_) => Dashboard::Doctor(earnings::doctor_dashboard(
                user,
                roster,
                self.doctor_share_percent,
            )),
            Profile::Patient(patient) => Dashboard::Patient(history::patient_dashboard(user, patient)),
        };

        info!("Built {} dashboard for user {}", dashboard.role(), user_id);
        Ok(dashboard)
    }

    /// Dashboard for a user id typed as free text. Input that is not a
    /// number selects nobody.
    pub fn get_dashboard_for_input(&self, input: &str, roster: &Roster) -> Result<Dashboard, DashboardError> {
        let user_id = input
            .parse::<UserId>()
            .map_err(|_| DashboardError::NotFound(input.trim().to_string()))?;

        self.get_dashboard(user_id, roster)
    }
}

/// Dashboard with the standard 60/40 doctor/platform split.
pub fn get_dashboard(user_id: UserId, roster: &Roster) -> Result<Dashboard, DashboardError> {
    DashboardService::default().get_dashboard(user_id, roster)
}

pub fn get_dashboard_for_input(input: &str, roster: &Roster) -> Result<Dashboard, DashboardError> {
    DashboardService::default().get_dashboard_for_input(input, roster)
}
