/// End-to-end hazard evaluation scenarios.
///
/// Exercises the full public chain the client follows on every update:
/// wave height → alert level → inundation estimate → recommended safe
/// floor → display label. Scenarios that touch the process-wide run-up
/// multiplier serialize on a lock so they are stable under the parallel
/// test runner.

use std::sync::Mutex;

use tsumon_service::hazard::{
    classify_alert_level, estimate_inundation, recommend_safe_floor_default,
    runup_multiplier, set_runup_multiplier,
};
use tsumon_service::hazard::runup::RUNUP_MULTIPLIER_DEFAULT;
use tsumon_service::model::{format_floor_label, AlertLevel};

static MULTIPLIER_LOCK: Mutex<()> = Mutex::new(());

// ---------------------------------------------------------------------------
// Full-chain scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_warning_event_at_1_2m() {
    let _guard = MULTIPLIER_LOCK.lock().unwrap();
    set_runup_multiplier(RUNUP_MULTIPLIER_DEFAULT);

    // A 1.2 m wave: Warning card, 3.6 m estimated inundation,
    // evacuation to the 4th floor.
    let height = 1.2;
    assert_eq!(classify_alert_level(height), AlertLevel::Warning);

    let inundation = estimate_inundation(height);
    assert_eq!(inundation, 3.6);

    let floor = recommend_safe_floor_default(inundation);
    assert_eq!(floor, 4);
    assert_eq!(format_floor_label(floor), "4층");
}

#[test]
fn scenario_calm_sea_at_0m() {
    let _guard = MULTIPLIER_LOCK.lock().unwrap();
    set_runup_multiplier(RUNUP_MULTIPLIER_DEFAULT);

    // No wave: Safe card, no inundation, ground floor is fine.
    assert_eq!(classify_alert_level(0.0), AlertLevel::Safe);
    let inundation = estimate_inundation(0.0);
    assert_eq!(inundation, 0.0);
    assert_eq!(recommend_safe_floor_default(inundation), 1);
}

#[test]
fn scenario_missing_data_never_alarms() {
    let _guard = MULTIPLIER_LOCK.lock().unwrap();
    set_runup_multiplier(RUNUP_MULTIPLIER_DEFAULT);

    // A dropped sensor feed must degrade to the calm display, not a
    // spurious evacuation order.
    assert_eq!(classify_alert_level(f64::NAN), AlertLevel::Safe);
    assert_eq!(estimate_inundation(f64::NAN), 0.0);
    assert_eq!(recommend_safe_floor_default(f64::NAN), 1);
}

#[test]
fn scenario_critical_event_at_2_4m() {
    let _guard = MULTIPLIER_LOCK.lock().unwrap();
    set_runup_multiplier(RUNUP_MULTIPLIER_DEFAULT);

    let height = 2.4;
    assert_eq!(classify_alert_level(height), AlertLevel::Critical);

    // 2.4 * 3.0 = 7.2 m; ceil(7.2/3) = 3 flooded floors → floor 5.
    let inundation = estimate_inundation(height);
    assert_eq!(inundation, 7.2);
    assert_eq!(recommend_safe_floor_default(inundation), 5);
}

// ---------------------------------------------------------------------------
// Multiplier reconfiguration mid-event
// ---------------------------------------------------------------------------

#[test]
fn scenario_multiplier_change_applies_immediately() {
    let _guard = MULTIPLIER_LOCK.lock().unwrap();

    set_runup_multiplier(3.0);
    assert_eq!(estimate_inundation(1.0), 3.0);

    // Operator drops the multiplier to 2.5 mid-event; the very next
    // estimate for the same height reflects it.
    set_runup_multiplier(2.5);
    assert_eq!(estimate_inundation(1.0), 2.5);

    // An attempt to push it out of range clamps instead of failing.
    set_runup_multiplier(9.9);
    assert_eq!(runup_multiplier(), 4.0);
    assert_eq!(estimate_inundation(1.0), 4.0);

    set_runup_multiplier(RUNUP_MULTIPLIER_DEFAULT);
}

#[test]
fn scenario_bad_multiplier_input_is_inert() {
    let _guard = MULTIPLIER_LOCK.lock().unwrap();

    set_runup_multiplier(3.0);
    set_runup_multiplier(f64::NAN);
    set_runup_multiplier(f64::INFINITY);
    assert_eq!(
        runup_multiplier(),
        3.0,
        "non-finite setter input must leave the configured value untouched"
    );

    set_runup_multiplier(RUNUP_MULTIPLIER_DEFAULT);
}

// ---------------------------------------------------------------------------
// Threshold sweep
// ---------------------------------------------------------------------------

#[test]
fn scenario_rising_water_never_lowers_the_alert() {
    // Sweep heights upward; the classified level must be monotonically
    // non-decreasing (AlertLevel derives Ord in severity order).
    let mut previous = AlertLevel::Safe;
    let mut height = 0.0;
    while height <= 3.0 {
        let level = classify_alert_level(height);
        assert!(
            level >= previous,
            "alert level regressed from {:?} to {:?} at {:.2} m",
            previous,
            level,
            height
        );
        previous = level;
        height += 0.01;
    }
    assert_eq!(previous, AlertLevel::Critical);
}
