use crate::app::App;
use crate::persistence::Persistence;

/// Load the stored application list into a fresh app.
pub async fn initialize_app_state(app: &mut App, persistence: &Persistence) {
    let applications = persistence.load().await;
    if !applications.is_empty() {
        app.set_status(format!("Loaded {} applications", applications.len()));
    }
    app.load_applications(applications);
}
