use mhs_activities::seed::default_catalog;
use mhs_activities::{Activities, ActivityError, ActivityRegistry, Confirmation};
use mhs_kernel::domain::config::ActivitiesConfig;
use mhs_kernel::domain::registry::FeatureSlice;
use std::sync::Arc;
use std::thread;

fn registry() -> ActivityRegistry {
    ActivityRegistry::new(default_catalog())
}

fn roster(registry: &ActivityRegistry, activity: &str) -> Vec<String> {
    registry.list().get(activity).map(|a| a.participants.clone()).unwrap_or_default()
}

#[test]
fn every_activity_is_listed_with_a_record() {
    let listed = registry().list();

    for name in ["Basketball", "Swimming", "Art Club", "Drama Club", "Chess Club"] {
        let activity = listed.get(name).unwrap_or_else(|| panic!("{name} should be listed"));
        assert!(!activity.description.is_empty());
        assert!(!activity.schedule.is_empty());
        assert!(activity.max_participants > 0);
    }
}

#[test]
fn signup_adds_email_exactly_once() {
    let registry = registry();
    let confirmation =
        registry.signup("Basketball", "newstudent@mergington.edu").expect("signup should succeed");

    assert_eq!(
        confirmation,
        Confirmation::SignedUp {
            activity: "Basketball".to_owned(),
            email: "newstudent@mergington.edu".to_owned(),
        }
    );

    let participants = roster(&registry, "Basketball");
    assert_eq!(participants.iter().filter(|p| *p == "newstudent@mergington.edu").count(), 1);
    assert_eq!(participants.last().map(String::as_str), Some("newstudent@mergington.edu"));
}

#[test]
fn second_signup_is_rejected() {
    let registry = registry();
    registry.signup("Swimming", "duplicate@mergington.edu").expect("first signup");

    let err = registry.signup("Swimming", "duplicate@mergington.edu").expect_err("duplicate");
    assert!(matches!(err, ActivityError::AlreadySignedUp { .. }));
    assert!(err.to_string().contains("already signed up"));
    assert_eq!(
        roster(&registry, "Swimming").iter().filter(|p| *p == "duplicate@mergington.edu").count(),
        1
    );
}

#[test]
fn signup_to_unknown_activity_is_rejected() {
    let err = registry()
        .signup("InvalidActivity", "student@mergington.edu")
        .expect_err("unknown activity");

    assert!(matches!(err, ActivityError::NotFound { .. }));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn unregister_removes_a_signed_up_student() {
    let registry = registry();
    registry.signup("Basketball", "unregister@mergington.edu").expect("signup");

    let confirmation =
        registry.unregister("Basketball", "unregister@mergington.edu").expect("unregister");

    assert!(confirmation.to_string().starts_with("Unregistered"));
    assert!(!roster(&registry, "Basketball").contains(&"unregister@mergington.edu".to_owned()));
}

#[test]
fn unregister_of_absent_student_is_rejected() {
    let err = registry()
        .unregister("Art Club", "notregistered@mergington.edu")
        .expect_err("student was never registered");

    assert!(matches!(err, ActivityError::NotRegistered { .. }));
    assert!(err.to_string().contains("not registered"));
}

#[test]
fn unregister_from_unknown_activity_is_rejected() {
    let err = registry()
        .unregister("InvalidActivity", "student@mergington.edu")
        .expect_err("unknown activity");

    assert!(matches!(err, ActivityError::NotFound { .. }));
}

#[test]
fn signup_unregister_cycle_restores_roster() {
    let registry = registry();
    let initial = roster(&registry, "Drama Club");

    registry.signup("Drama Club", "integration@mergington.edu").expect("signup");
    assert_eq!(roster(&registry, "Drama Club").len(), initial.len() + 1);

    registry.unregister("Drama Club", "integration@mergington.edu").expect("unregister");
    assert_eq!(roster(&registry, "Drama Club"), initial);
}

#[test]
fn one_student_can_join_several_activities() {
    let registry = registry();
    let activities = ["Basketball", "Swimming", "Art Club"];

    for activity in activities {
        registry.signup(activity, "multiactivity@mergington.edu").expect("signup");
    }

    for activity in activities {
        assert!(roster(&registry, activity).contains(&"multiactivity@mergington.edu".to_owned()));
    }
}

#[test]
fn concurrent_duplicate_signups_admit_one() {
    let registry = Arc::new(registry());

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.signup("Math Club", "racer@mergington.edu").is_ok())
        })
        .collect();

    let admitted =
        handles.into_iter().map(|h| h.join().expect("thread panicked")).filter(|ok| *ok).count();

    assert_eq!(admitted, 1);
    assert_eq!(
        roster(&registry, "Math Club").iter().filter(|p| *p == "racer@mergington.edu").count(),
        1
    );
}

#[test]
fn init_without_seed_registers_builtin_catalog() {
    let slice = mhs_activities::init(&ActivitiesConfig::default()).expect("init should succeed");
    let activities =
        slice.state.as_any().downcast_ref::<Activities>().expect("activities slice");

    assert_eq!(activities.registry.len(), default_catalog().len());
    activities.registry.signup("Chess Club", "emma@mergington.edu").expect("signup");
    assert_eq!(activities.registry.len(), default_catalog().len());
}
