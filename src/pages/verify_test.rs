use super::*;

use crate::state::otp::RESEND_COOLDOWN_SECONDS;

// =============================================================
// Cell ids and labels
// =============================================================

#[test]
fn cell_ids_are_unique_and_indexed() {
    let ids: Vec<String> = (0..CODE_LENGTH).map(cell_id).collect();
    assert_eq!(ids[0], "otp-cell-0");
    assert_eq!(ids[CODE_LENGTH - 1], "otp-cell-5");
    let unique: std::collections::HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), CODE_LENGTH);
}

#[test]
fn countdown_label_formats_seconds() {
    assert_eq!(countdown_label(60), "60 sec");
    assert_eq!(countdown_label(1), "1 sec");
}

// =============================================================
// Countdown teardown
// =============================================================

// Mirrors the wakeup guard in the countdown task: flag first, then the
// expiry check, then the tick.
fn wakeup(alive: &std::sync::atomic::AtomicBool, entry: &mut OtpEntry) {
    if !alive.load(std::sync::atomic::Ordering::Relaxed) {
        return;
    }
    if entry.is_expired() {
        return;
    }
    entry.tick();
}

#[test]
fn no_tick_lands_after_teardown() {
    let alive = std::sync::atomic::AtomicBool::new(true);
    let mut entry = OtpEntry::new();

    wakeup(&alive, &mut entry);
    wakeup(&alive, &mut entry);
    assert_eq!(entry.seconds_remaining(), RESEND_COOLDOWN_SECONDS - 2);

    alive.store(false, std::sync::atomic::Ordering::Relaxed);
    let before_teardown = entry.clone();
    for _ in 0..10 {
        wakeup(&alive, &mut entry);
    }
    assert_eq!(entry, before_teardown);
}

#[test]
fn expired_countdown_stops_ticking_while_mounted() {
    let alive = std::sync::atomic::AtomicBool::new(true);
    let mut entry = OtpEntry::new();

    for _ in 0..RESEND_COOLDOWN_SECONDS + 5 {
        wakeup(&alive, &mut entry);
    }
    assert!(entry.is_expired());
    assert_eq!(entry.seconds_remaining(), 0);
}
