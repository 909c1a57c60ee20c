mod persistence;
mod session;

pub use persistence::{
    load_catalog, load_snapshot, save_catalog, save_snapshot, JsonDirStore, PlanStore, SavedPlan,
};
pub use session::{PlanningSession, SessionState};
