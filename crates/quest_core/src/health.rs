//! Health clamping.

use serde::Serialize;
use tracing::info;

pub const MIN_HEALTH: i32 = 0;
pub const MAX_HEALTH: i32 = 100;

/// Signed change to a health value: positive heals, negative hurts.
pub type HealthDelta = i32;

/// Threshold crossings reported by [`apply_delta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthEvent {
    /// Healing would have gone past the cap and was clamped.
    FullHealth,
    /// Damage brought health down to zero.
    GraveDanger,
}

/// Clamps `current + delta` into `[MIN_HEALTH, MAX_HEALTH]`.
///
/// Stateless: the caller stores the returned value.
pub fn apply_delta(current: i32, delta: HealthDelta) -> (i32, Option<HealthEvent>) {
    let raw = current.saturating_add(delta);
    let health = raw.clamp(MIN_HEALTH, MAX_HEALTH);
    let event = if raw > MAX_HEALTH {
        Some(HealthEvent::FullHealth)
    } else if health == MIN_HEALTH && delta < 0 {
        Some(HealthEvent::GraveDanger)
    } else {
        None
    };
    info!(
        target: "quest_core.health",
        current = health,
        max = MAX_HEALTH,
        delta,
        ?event,
        "health updated"
    );
    (health, event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_to_zero() {
        assert_eq!(apply_delta(10, -15), (0, Some(HealthEvent::GraveDanger)));
        assert_eq!(apply_delta(20, -20), (0, Some(HealthEvent::GraveDanger)));
    }

    #[test]
    fn healing_clamps_to_max() {
        assert_eq!(apply_delta(90, 30), (100, Some(HealthEvent::FullHealth)));
        assert_eq!(apply_delta(70, 30), (100, None));
    }

    #[test]
    fn plain_changes_report_nothing() {
        assert_eq!(apply_delta(100, -10), (90, None));
        assert_eq!(apply_delta(40, 30), (70, None));
        assert_eq!(apply_delta(0, 0), (0, None));
    }

    #[test]
    fn reclamping_is_idempotent() {
        for current in MIN_HEALTH..=MAX_HEALTH {
            for delta in -150..=150 {
                let (clamped, _) = apply_delta(current, delta);
                assert!((MIN_HEALTH..=MAX_HEALTH).contains(&clamped));
                assert_eq!(apply_delta(clamped, 0), (clamped, None));
            }
        }
    }
}
