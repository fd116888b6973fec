//! Evidence, posterior, and belief types shared across the workspace.

pub mod belief;
pub mod evidence;
pub mod identifiers;
pub mod posterior;

pub use belief::{SkillBelief, Trend};
pub use evidence::{EvidenceSignal, SourceType};
pub use identifiers::SkillId;
pub use posterior::Posterior;
