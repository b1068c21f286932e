//! CRUD operations for [`Location`] records.

use strange_shows_shared::types::Location;

use crate::collection::KEY_LOCATIONS;
use crate::database::Database;
use crate::error::Result;

impl Database {
    /// Fetch all venues, insertion order preserved.
    pub fn locations_get_all(&self) -> Result<Vec<Location>> {
        self.read_collection(KEY_LOCATIONS)
    }

    /// Append a venue and persist the full list.
    pub fn locations_add(&self, location: &Location) -> Result<Vec<Location>> {
        let mut locations = self.locations_get_all()?;
        locations.push(location.clone());
        self.write_collection(KEY_LOCATIONS, &locations)?;
        tracing::debug!(location_id = %location.id, "location added");
        Ok(locations)
    }

    /// Replace the venue whose id equals `location.id`; silent no-op when
    /// no id matches.
    pub fn locations_update(&self, location: &Location) -> Result<Vec<Location>> {
        let mut locations = self.locations_get_all()?;
        for existing in &mut locations {
            if existing.id == location.id {
                *existing = location.clone();
            }
        }
        self.write_collection(KEY_LOCATIONS, &locations)?;
        Ok(locations)
    }

    /// Remove the venue with the given id. No-op if absent.
    pub fn locations_delete(&self, id: &str) -> Result<Vec<Location>> {
        let mut locations = self.locations_get_all()?;
        locations.retain(|l| l.id != id);
        self.write_collection(KEY_LOCATIONS, &locations)?;
        Ok(locations)
    }
}

#[cfg(test)]
mod tests {
    use strange_shows_shared::types::LocationStatus;

    use super::*;

    #[test]
    fn crud_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("test.db")).unwrap();
        let seeded = db.locations_get_all().unwrap().len();

        let venue = Location {
            id: "l9".into(),
            name: "Test Arcade".into(),
            address: "1 Test St".into(),
            coordinates: "Z-9".into(),
            status: LocationStatus::Open,
            capacity: 50,
        };

        let after_add = db.locations_add(&venue).unwrap();
        assert_eq!(after_add.len(), seeded + 1);

        let mut closed = venue.clone();
        closed.status = LocationStatus::Closed;
        let after_update = db.locations_update(&closed).unwrap();
        let found = after_update.iter().find(|l| l.id == "l9").unwrap();
        assert_eq!(found.status, LocationStatus::Closed);

        let after_delete = db.locations_delete("l9").unwrap();
        assert_eq!(after_delete.len(), seeded);
    }
}
