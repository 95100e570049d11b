//! Subject registry: the six brain-map nodes.
//!
//! Pure static data, defined at process start and never mutated. Positions
//! and colors place each node on the 500x450 map the rendering layer draws.

use crate::models::Subject;

/// All subjects, in display order
pub const SUBJECTS: &[Subject] = &[
    Subject { id: "math", name: "Mathematics", x: 100, y: 150, color: (0x43, 0x61, 0xee) },
    Subject { id: "science", name: "Science", x: 250, y: 100, color: (0x3a, 0x0c, 0xa3) },
    Subject { id: "language", name: "Language", x: 400, y: 150, color: (0x72, 0x09, 0xb7) },
    Subject { id: "history", name: "History", x: 100, y: 300, color: (0xf7, 0x25, 0x85) },
    Subject { id: "arts", name: "Arts", x: 250, y: 350, color: (0x4c, 0xc9, 0xf0) },
    Subject { id: "technology", name: "Technology", x: 400, y: 300, color: (0x4d, 0x90, 0x8e) },
];

/// Width of the map coordinate space
pub const MAP_WIDTH: u16 = 500;
/// Height of the map coordinate space
pub const MAP_HEIGHT: u16 = 450;

pub fn all() -> &'static [Subject] {
    SUBJECTS
}

/// Look up a subject by id. Unknown ids return `None`; callers fall back to
/// generic content rather than failing.
pub fn find(id: &str) -> Option<&'static Subject> {
    SUBJECTS.iter().find(|s| s.id == id)
}

/// Every unordered pair of subjects, once. The map draws a connection line
/// between each pair, mirroring a fully connected neural net.
pub fn connections() -> Vec<(&'static Subject, &'static Subject)> {
    let mut pairs = Vec::new();
    for (i, a) in SUBJECTS.iter().enumerate() {
        for b in &SUBJECTS[i + 1..] {
            pairs.push((a, b));
        }
    }
    pairs
}
