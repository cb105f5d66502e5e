//! Connection operations for designer state.

use stockflow_core::{ConnectionId, Point};

use super::DesignerState;
use crate::geometry::connection_route;
use crate::history::ActionType;
use crate::model::{Connection, ConnectionPatch};

impl DesignerState {
    /// Appends a connection and records a snapshot. Endpoints are not checked.
    pub fn add_connection(&mut self, connection: Connection) {
        tracing::debug!(
            "Adding {} connection {} ({} -> {})",
            connection.connection_type,
            connection.id,
            connection.source_id,
            connection.target_id
        );
        self.canvas.push_connection(connection);
        self.record(ActionType::ConnectionAdded);
    }

    /// Merges the fields present in `patch` into the connection. No snapshot.
    pub fn update_connection(&mut self, id: &ConnectionId, patch: ConnectionPatch) {
        match self.canvas.get_connection_mut(id) {
            Some(connection) => connection.apply(patch),
            None => tracing::trace!("update_connection: no connection {}", id),
        }
    }

    /// Removes the connection and records a snapshot, even if the id is unknown.
    pub fn remove_connection(&mut self, id: &ConnectionId) {
        let removed = self.canvas.remove_connection(id);
        tracing::debug!("Removed connection {} ({} removed)", id, removed);
        self.record(ActionType::ConnectionRemoved);
    }

    /// Point lookup; `None` if absent.
    pub fn get_connection(&self, id: &ConnectionId) -> Option<&Connection> {
        self.canvas.get_connection(id)
    }

    /// Polyline for drawing the connection, anchored on element edges.
    ///
    /// `None` if the connection is unknown or either endpoint no longer
    /// resolves to an element.
    pub fn connection_route(&self, id: &ConnectionId) -> Option<Vec<Point>> {
        let connection = self.canvas.get_connection(id)?;
        let source = self.canvas.get_element(&connection.source_id)?;
        let target = self.canvas.get_element(&connection.target_id)?;
        Some(connection_route(source, target, &connection.points))
    }
}
