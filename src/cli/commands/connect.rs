//! The `/connect` and `/disconnect` commands.

use crate::error::Result;
use crate::session::Session;

/// Open a connection to `host:port`.
pub async fn connect(session: &mut Session, address: &str) -> Result<()> {
    session.connect(address).await
}

/// Close the current connection, if any.
pub fn disconnect(session: &mut Session) {
    if !session.disconnect() {
        session.output().warning("not connected");
    }
}
