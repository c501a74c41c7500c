use serde::Serialize;

/// A physical showroom pin for the locations map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Showroom {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

/// The dealership's showroom network. Static data, not loaded from disk.
pub const SHOWROOMS: [Showroom; 5] = [
    Showroom {
        name: "Dublin",
        lat: 53.3498,
        lon: -6.2603,
    },
    Showroom {
        name: "Cork",
        lat: 51.8985,
        lon: -8.4756,
    },
    Showroom {
        name: "Galway",
        lat: 53.2707,
        lon: -9.0568,
    },
    Showroom {
        name: "Belfast",
        lat: 54.5973,
        lon: -5.9301,
    },
    Showroom {
        name: "Westmeath",
        lat: 53.5346,
        lon: -7.3436,
    },
];
