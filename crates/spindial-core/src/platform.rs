/// Host capabilities the engine needs to know about, kept behind a trait so the
/// core never sniffs a particular environment.
pub trait Platform {
    /// Motion events require an explicit, gesture-initiated permission prompt.
    fn needs_explicit_permission(&self) -> bool;

    /// Begin the permission prompt. Must be called synchronously from the user
    /// gesture; the answer comes back through
    /// `Session::motion_permission_resolved`.
    fn request_motion_permission(&mut self);

    /// Phone/tablet class input and speakers.
    fn is_touch_class(&self) -> bool;
}
