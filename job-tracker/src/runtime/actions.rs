use crate::app::App;
use crate::persistence::Persistence;

use super::action_queue::Action;

pub(super) async fn run_action(action: Action, app: &mut App, persistence: &Persistence) {
    match action {
        Action::PersistApplications => persist_applications(app, persistence).await,
    }
}

/// A failed write is reported but not fatal; the next mutation rewrites the whole list.
async fn persist_applications(app: &mut App, persistence: &Persistence) {
    if let Err(e) = persistence.save(&app.applications).await {
        tracing::error!(error = %e, "failed to persist applications");
        app.set_status(format!("Could not save applications: {}", e));
    }
}
