//! Poster session commands.

use anyhow::{Result, bail};
use jury::{ApiClient, FileStore, JuryConfig, Session, SessionsView};
use tracing::warn;

use crate::render::render_sessions;

/// List posters grouped by session, honoring saved collapse state
pub fn run(config: &JuryConfig, search: &str, sorts: &[(String, String)]) -> Result<()> {
    let client = ApiClient::from_config(config);
    let mut view = SessionsView::new(FileStore::in_dir(&config.state_dir));
    view.refresh(&client)?;
    view.set_search(search);

    for (session, column) in sorts {
        if view.set_sort(session, column).is_none() {
            warn!("Column {} is not sortable, ignoring", column);
        }
    }

    print!("{}", render_sessions(&view.buckets()));
    Ok(())
}

/// Flip and save the collapse state of one session
pub fn toggle(config: &JuryConfig, session: &str) -> Result<()> {
    let Some(session) = Session::from_name(session) else {
        let names: Vec<&str> = Session::canonical().map(|s| s.as_str()).collect();
        bail!("Unknown session {:?}, expected one of {}", session, names.join(", "));
    };

    let mut view = SessionsView::new(FileStore::in_dir(&config.state_dir));
    let collapsed = view.toggle(session.as_str())?;
    println!(
        "{} session {}",
        session,
        if collapsed { "collapsed" } else { "expanded" }
    );
    Ok(())
}
