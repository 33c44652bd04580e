use shared_models::User;

use crate::models::Hospital;

/// Project one hospital per admin record, with the doctors registered there.
pub fn hospitals(users: &[User]) -> Vec<Hospital<'_>> {
    users
        .iter()
        .filter_map(|u| u.as_admin())
        .map(|admin| Hospital {
            name: &admin.hospital,
            location: &admin.location,
            departments: &admin.departments,
            doctors: doctors_at(users, &admin.hospital),
        })
        .collect()
}

/// Exact-name lookup. The first admin record naming the hospital wins.
pub fn find_hospital<'a>(users: &'a [User], name: &str) -> Option<Hospital<'a>> {
    users
        .iter()
        .filter_map(|u| u.as_admin())
        .find(|admin| admin.hospital == name)
        .map(|admin| Hospital {
            name: &admin.hospital,
            location: &admin.location,
            departments: &admin.departments,
            doctors: doctors_at(users, &admin.hospital),
        })
}

fn doctors_at<'a>(users: &'a [User], hospital: &str) -> Vec<&'a User> {
    users
        .iter()
        .filter(|u| u.as_doctor().is_some_and(|doctor| doctor.hospital == hospital))
        .collect()
}
