use crate::core::profile::StepProfile;

/// Everything the window needs; built once, never mutated.
#[derive(Clone, Debug, Default)]
pub struct ProfileView {
    pub title: String,
    pub source: String,
    pub records: usize,
    pub marker_radius: f32,
    pub profile: StepProfile,
}

impl ProfileView {
    /// Steps that received at least one value.
    pub fn populated_steps(&self) -> usize {
        self.profile.counts().iter().filter(|&&n| n > 0).count()
    }
}
