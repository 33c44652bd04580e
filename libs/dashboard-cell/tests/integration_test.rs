use assert_matches::assert_matches;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use dashboard_cell::{get_dashboard, get_dashboard_for_input, Dashboard, DashboardError, DashboardService};
use registration_cell::register;
use roster_cell::Roster;
use shared_models::{AppError, PatientRegistration, Registration, Role, UserId};
use shared_utils::test_utils::{
    booking, doctor_registration, identity, proposed_slot, slot, time, TestConfig, TestUser,
};

/// CityHosp with two doctors. Dr. Rao (two specializations) has two slots,
/// Dr. Iyer one. Three patients book across them; Dr. Iyer also works a slot
/// at OtherHosp.
fn hospital_roster() -> Roster {
    let rao_morning = slot("2024-01-01", "09:00", "10:00", dec!(500), "CityHosp");
    let rao_evening = slot("2024-01-01", "17:00", "18:00", dec!(300), "CityHosp");
    let iyer_city = slot("2024-01-02", "09:00", "10:00", dec!(250.50), "CityHosp");

    Roster::from_users(vec![
        TestUser::admin(1, "Anita", "CityHosp", &["Cardiology", "Neurology"]),
        TestUser::doctor(
            2,
            "Dr. Rao",
            "DOC-1",
            "CityHosp",
            &["Cardiology", "Neurology"],
            vec![rao_morning.clone(), rao_evening.clone()],
        ),
        TestUser::doctor(3, "Dr. Iyer", "DOC-2", "CityHosp", &["Neurology"], vec![iyer_city.clone()]),
        TestUser::patient(
            4,
            "Meera",
            vec![booking(UserId(2), &rao_morning), booking(UserId(3), &iyer_city)],
        ),
        TestUser::patient(5, "Karan", vec![booking(UserId(2), &rao_morning)]),
        TestUser::patient(6, "Zoya", vec![booking(UserId(2), &rao_evening)]),
    ])
}

#[test]
fn test_admin_dashboard_rolls_up_revenue() {
    let roster = hospital_roster();

    let view = match get_dashboard(UserId(1), &roster).unwrap() {
        Dashboard::Admin(view) => view,
        other => panic!("expected admin dashboard, got {:?}", other),
    };

    assert_eq!(view.hospital, "CityHosp");
    assert_eq!(view.total_consultations, 4);
    // 2 * 500 + 1 * 300 + 1 * 250.50
    assert_eq!(view.total_revenue, dec!(1550.50));
    assert_eq!(view.revenue_by_doctor["Dr. Rao"], dec!(1300));
    assert_eq!(view.revenue_by_doctor["Dr. Iyer"], dec!(250.50));

    let by_doctor: Decimal = view.revenue_by_doctor.values().sum();
    assert_eq!(by_doctor, view.total_revenue);
}

#[test]
fn test_department_revenue_attributes_fully_to_each_specialization() {
    let roster = hospital_roster();

    let view = match get_dashboard(UserId(1), &roster).unwrap() {
        Dashboard::Admin(view) => view,
        other => panic!("expected admin dashboard, got {:?}", other),
    };

    assert_eq!(view.revenue_by_department["Cardiology"], dec!(1300));
    assert_eq!(view.revenue_by_department["Neurology"], dec!(1550.50));

    let by_department: Decimal = view.revenue_by_department.values().sum();
    assert!(by_department > view.total_revenue);
}

#[test]
fn test_doctor_dashboard_applies_configured_share() {
    let roster = hospital_roster();

    let view = match get_dashboard(UserId(2), &roster).unwrap() {
        Dashboard::Doctor(view) => view,
        other => panic!("expected doctor dashboard, got {:?}", other),
    };
    assert_eq!(view.doctor_name, "Dr. Rao");
    assert_eq!(view.total_consultations, 3);
    assert_eq!(view.total_earnings, dec!(780.00));
    assert_eq!(view.earnings_by_hospital["CityHosp"], dec!(780.00));

    let service = DashboardService::new(&TestConfig { doctor_share_percent: 70 }.to_app_config());
    let view = match service.get_dashboard(UserId(3), &roster).unwrap() {
        Dashboard::Doctor(view) => view,
        other => panic!("expected doctor dashboard, got {:?}", other),
    };
    // 70% of 250.50 = 175.35
    assert_eq!(view.total_earnings, dec!(175.35));
}

#[test]
fn test_patient_dashboard_preserves_booking_order() {
    let roster = hospital_roster();

    let view = match get_dashboard(UserId(4), &roster).unwrap() {
        Dashboard::Patient(view) => view,
        other => panic!("expected patient dashboard, got {:?}", other),
    };

    assert_eq!(view.patient_name, "Meera");
    let doctors: Vec<UserId> = view.bookings.iter().map(|b| b.doctor_id).collect();
    assert_eq!(doctors, vec![UserId(2), UserId(3)]);
    assert_eq!(view.bookings[0].time, time("09:00"));
    assert_eq!(view.bookings[1].amount, dec!(250.50));
}

#[test]
fn test_unknown_user_is_not_found() {
    let roster = hospital_roster();

    assert_matches!(get_dashboard(UserId(99), &roster), Err(DashboardError::NotFound(_)));
    assert_matches!(get_dashboard_for_input("abc", &roster), Err(DashboardError::NotFound(_)));
    assert_matches!(get_dashboard_for_input("", &roster), Err(DashboardError::NotFound(_)));

    let err = get_dashboard(UserId(99), &roster).unwrap_err();
    assert_matches!(AppError::from(err), AppError::NotFound(_));
}

#[test]
fn test_text_input_selects_user() {
    let roster = hospital_roster();

    let dashboard = get_dashboard_for_input(" 6 ", &roster).unwrap();
    assert_eq!(dashboard.role(), Role::Patient);
}

#[test]
fn test_dashboard_serializes_with_role_tag() {
    let roster = hospital_roster();
    let dashboard = get_dashboard(UserId(2), &roster).unwrap();

    let value = serde_json::to_value(&dashboard).unwrap();
    assert_eq!(value["role"], "doctor");
    assert_eq!(value["totalConsultations"], 3);
    assert!(value["earningsByHospital"].get("CityHosp").is_some());
}

#[test]
fn test_sub_cent_fees_keep_doctor_revenue_summing_to_total() {
    let mut roster = Roster::from_users(vec![TestUser::admin(1, "Anita", "CityHosp", &["Cardiology"])]);

    let mut doctors = Vec::new();
    for (unique_id, name, fee) in [("DOC-A", "Dr. A", dec!(0.005)), ("DOC-B", "Dr. B", dec!(10.015))] {
        let mut candidate = doctor_registration(
            unique_id,
            "CityHosp",
            &["Cardiology"],
            proposed_slot("2024-01-01", "09:00", "10:00", fee),
        );
        candidate.identity.name = name.to_string();
        doctors.push(register(Registration::Doctor(candidate), &mut roster).unwrap());
    }

    let patient = register(
        Registration::Patient(PatientRegistration { identity: identity("Meera", "PAT-1") }),
        &mut roster,
    )
    .unwrap();

    for doctor in &doctors {
        let slot_id = roster.find(*doctor).unwrap().as_doctor().unwrap().slots[0].id;
        roster.book_slot(patient, *doctor, slot_id).unwrap();
    }

    let view = match get_dashboard(UserId(1), &roster).unwrap() {
        Dashboard::Admin(view) => view,
        other => panic!("expected admin dashboard, got {:?}", other),
    };

    let by_doctor: Decimal = view.revenue_by_doctor.values().sum();
    assert_eq!(view.total_revenue, dec!(10.02));
    assert_eq!(by_doctor, view.total_revenue);
}

#[test]
fn test_oversized_share_is_capped_at_full_amount() {
    let roster = hospital_roster();
    let service = DashboardService::new(&TestConfig { doctor_share_percent: 150 }.to_app_config());

    let view = match service.get_dashboard(UserId(3), &roster).unwrap() {
        Dashboard::Doctor(view) => view,
        other => panic!("expected doctor dashboard, got {:?}", other),
    };
    assert_eq!(view.total_earnings, dec!(250.50));
}
