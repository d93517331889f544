//! Static video catalog backing the listing and watch views.
//!
//! Stands in for the video feed API, which is outside this client's scope.

pub struct Video {
    pub id: &'static str,
    pub title: &'static str,
    pub channel: &'static str,
    pub duration: &'static str,
    pub subscribers: u32,
}

pub const CATALOG: &[Video] = &[
    Video {
        id: "rust-in-90s",
        title: "Rust in 90 Seconds",
        channel: "CrabCasts",
        duration: "1:30",
        subscribers: 120_400,
    },
    Video {
        id: "sourdough-basics",
        title: "Sourdough Basics for Beginners",
        channel: "Flour Hour",
        duration: "12:04",
        subscribers: 88_210,
    },
    Video {
        id: "night-sky-timelapse",
        title: "Night Sky Timelapse over the Alps",
        channel: "SlowEarth",
        duration: "3:47",
        subscribers: 45_902,
    },
    Video {
        id: "mechanical-keyboards",
        title: "Why Mechanical Keyboards Sound Better",
        channel: "ClickClack",
        duration: "8:15",
        subscribers: 230_117,
    },
    Video {
        id: "city-biking",
        title: "Commuting by Bike: One Year Later",
        channel: "SpokeFolk",
        duration: "10:32",
        subscribers: 19_873,
    },
    Video {
        id: "coffee-pour-over",
        title: "The Perfect Pour Over, Every Time",
        channel: "Flour Hour",
        duration: "6:58",
        subscribers: 88_210,
    },
];

/// Look up a catalog entry by its id.
pub fn find(id: &str) -> Option<&'static Video> {
    CATALOG.iter().find(|video| video.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_and_unknown_ids() {
        assert_eq!(find("rust-in-90s").map(|v| v.title), Some("Rust in 90 Seconds"));
        assert!(find("nope").is_none());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
