// Controller notifications

/// Edge-triggered notifications raised by the controller.
///
/// Events accumulate in the controller and are drained by the caller each
/// physics step; none fire more than once per state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionEvent {
    /// The character touched ground after being airborne
    Landed,

    /// The character entered (true) or left (false) the crouch stance
    CrouchChanged(bool),
}
