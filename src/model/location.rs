const OSM_EMBED_URL: &str = "https://www.openstreetmap.org/export/embed.html";

/// A place shown on the location map page
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: &'static str,
    pub description: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

pub static LOCATIONS: &[Location] = &[
    Location {
        name: "Office",
        description: "Where most of the products on this site were built.",
        latitude: 52.520008,
        longitude: 13.404954,
    },
    Location {
        name: "Co-working space",
        description: "Open to visitors on Tuesdays and Thursdays.",
        latitude: 52.507351,
        longitude: 13.390300,
    },
    Location {
        name: "Conference venue",
        description: "Home of the yearly meetup I help organise.",
        latitude: 52.498604,
        longitude: 13.442740,
    },
];

impl Location {
    /// OpenStreetMap embed URL with a marker on this location and a bounding box of
    /// `span` degrees in every direction.
    pub fn embed_url(&self, span: f64) -> String {
        let span = span.abs();

        format!(
            "{OSM_EMBED_URL}?bbox={:.6}%2C{:.6}%2C{:.6}%2C{:.6}&layer=mapnik&marker={:.6}%2C{:.6}",
            self.longitude - span,
            self.latitude - span,
            self.longitude + span,
            self.latitude + span,
            self.latitude,
            self.longitude,
        )
    }
}
