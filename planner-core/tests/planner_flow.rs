//! End-to-end planner flow through the facade

use chrono::NaiveDate;
use planner_core::config::PlannerConfig;
use planner_core::planner::Planner;
use rust_decimal::Decimal;
use shared::models::{
    BudgetItemCreate, GuestCreate, GuestRelation, RsvpStatus, TaskCreate, VendorCreate,
    VendorStatus, VendorUpdate, WeddingDetails,
};

fn guest(name: &str, invited: u32, rsvp: RsvpStatus) -> GuestCreate {
    GuestCreate {
        full_name: name.to_string(),
        phone_number: String::new(),
        relation: GuestRelation::Family,
        invited_count: invited,
        rsvp,
        special_notes: String::new(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_full_planning_session() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlannerConfig::with_data_dir(dir.path().join("data"));
    let mut planner = Planner::open(&config).unwrap();

    let noa = planner.guests.add(guest("Noa", 4, RsvpStatus::Confirmed)).unwrap();
    planner.guests.add(guest("Avi", 2, RsvpStatus::Maybe)).unwrap();

    let table = planner.seating.create_table("Family", 8).unwrap();
    planner.seating.assign_party(noa.id, Some(table.id)).unwrap();

    planner
        .budget
        .add(BudgetItemCreate {
            category: "Venue".to_string(),
            description: String::new(),
            planned: Decimal::from(40000),
            deposit: Decimal::from(10000),
        })
        .unwrap();

    let caterer = planner
        .vendors
        .add(VendorCreate {
            name: "Tasty".to_string(),
            category: "Catering".to_string(),
            contact: String::new(),
            phone: String::new(),
            email: String::new(),
            status: VendorStatus::default(),
            rating: 0,
        })
        .unwrap();
    planner
        .vendors
        .update(
            caterer.id,
            VendorUpdate {
                status: Some(VendorStatus::Approved),
                ..Default::default()
            },
        )
        .unwrap();

    let task = planner
        .tasks
        .add(TaskCreate {
            title: "Send invites".to_string(),
            description: String::new(),
            due_date: date(2026, 5, 1),
            category: String::new(),
        })
        .unwrap();
    planner.tasks.set_completed(task.id, true).unwrap();

    planner
        .wedding
        .set_details(WeddingDetails {
            groom_name: "Avi".to_string(),
            bride_name: "Noa".to_string(),
            date: Some(date(2026, 6, 20)),
            venue: "Garden Hall".to_string(),
            estimated_guests: 150,
        })
        .unwrap();

    let summary = planner.overview_at(date(2026, 6, 1)).unwrap();
    assert_eq!(summary.guest_entries, 2);
    assert_eq!(summary.total_invited, 6);
    assert_eq!(summary.confirmed_invited, 4);
    assert_eq!(summary.planned_total, Decimal::from(40000));
    assert_eq!(summary.deposit_total, Decimal::from(10000));
    assert_eq!(summary.tasks_total, 1);
    assert_eq!(summary.tasks_completed, 1);
    assert_eq!(summary.vendors_total, 1);
    assert_eq!(summary.vendors_approved, 1);
    assert_eq!(summary.tables, 1);
    assert_eq!(summary.seated_parties, 1);
    assert_eq!(summary.unassigned_parties, 1);
    assert_eq!(summary.days_until, Some(19));

    // everything above survives a process restart
    drop(planner);
    let planner = Planner::open(&config).unwrap();
    let summary = planner.overview_at(date(2026, 6, 1)).unwrap();
    assert_eq!(summary.guest_entries, 2);
    assert_eq!(summary.tables, 1);
    assert_eq!(summary.seated_parties, 1);
    assert_eq!(summary.planned_total, Decimal::from(40000));
}

#[test]
fn test_reset_wipes_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlannerConfig::with_data_dir(dir.path().join("data"));
    let mut planner = Planner::open(&config).unwrap();

    let g = planner.guests.add(guest("Noa", 2, RsvpStatus::Maybe)).unwrap();
    let table = planner.seating.create_table("T", 4).unwrap();
    planner.seating.assign_party(g.id, Some(table.id)).unwrap();
    planner.reset().unwrap();

    // the wipe is persistent, not just in-memory
    drop(planner);
    let planner = Planner::open(&config).unwrap();
    assert!(planner.guests.list().unwrap().is_empty());
    assert!(planner.seating.tables().is_empty());
}
