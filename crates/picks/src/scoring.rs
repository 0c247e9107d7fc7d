//! Championship points awarded by finishing position.

/// Points for positions 1 through 5; every later position scores zero.
pub const POINTS_SCHEDULE: [i32; 5] = [25, 20, 15, 10, 5];

/// Points for a classified position, dropping by five per place and
/// floored at zero. Position `0` (unclassified) scores nothing.
pub fn points_for_position(position: u32) -> i32 {
    if position == 0 {
        return 0;
    }
    let position = i64::from(position);
    (25 - 5 * (position - 1)).max(0) as i32
}
