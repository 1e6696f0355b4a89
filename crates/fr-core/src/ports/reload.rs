/// Full application re-mount, the only way out of the recovery screen.
pub trait ReloadPort: Send + Sync {
    fn reload(&self);
}
