use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use shared_models::{DoctorProfile, Identity, PatientProfile, Profile, User, UserId};

use crate::models::{Hospital, UserSummary};
use crate::services::hospital;

/// Caller-owned collection of every registered user. Passed explicitly to
/// the registration and dashboard entry points.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Id the next admitted user will receive: one past the highest id in
    /// use. Once `u64::MAX` is taken, the lowest free id is reused instead.
    pub fn next_id(&self) -> UserId {
        let highest = self.users.iter().map(|u| u.id.0).max().unwrap_or(0);

        match highest.checked_add(1) {
            Some(next) => UserId(next),
            None => {
                let taken: HashSet<u64> = self.users.iter().map(|u| u.id.0).collect();
                UserId((1..).find(|id| !taken.contains(id)).unwrap_or(0))
            }
        }
    }

    /// Commit a new record and return its id. Doctor profiles are expected to
    /// have passed registration validation first.
    pub fn admit(&mut self, identity: Identity, profile: Profile) -> UserId {
        let id = self.next_id();
        let role = profile.role();

        self.users.push(User {
            id,
            identity,
            profile,
        });

        info!("Registered {} with id {}", role, id);
        id
    }

    pub fn find(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub(crate) fn find_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    pub fn doctors(&self) -> impl Iterator<Item = (&User, &DoctorProfile)> {
        self.users
            .iter()
            .filter_map(|u| u.as_doctor().map(|doctor| (u, doctor)))
    }

    pub fn patients(&self) -> impl Iterator<Item = (&User, &PatientProfile)> {
        self.users
            .iter()
            .filter_map(|u| u.as_patient().map(|patient| (u, patient)))
    }

    /// Every doctor record registered under `unique_id`.
    pub fn doctors_with_unique_id<'a>(
        &'a self,
        unique_id: &'a str,
    ) -> impl Iterator<Item = (&'a User, &'a DoctorProfile)> + 'a {
        self.doctors()
            .filter(move |(user, _)| user.unique_id() == unique_id)
    }

    pub fn hospitals(&self) -> Vec<Hospital<'_>> {
        hospital::hospitals(&self.users)
    }

    pub fn find_hospital(&self, name: &str) -> Option<Hospital<'_>> {
        hospital::find_hospital(&self.users, name)
    }

    /// Registered-users list in insertion order.
    pub fn summaries(&self) -> Vec<UserSummary> {
        debug!("Listing {} registered users", self.users.len());
        self.users.iter().map(UserSummary::from).collect()
    }
}
