use serde::Serialize;

/// A selectable subject node on the brain map.
///
/// Positions are in the map's own coordinate space (500x450, y grows
/// downward); the rendering layer translates them to terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub id: &'static str,
    pub name: &'static str,
    pub x: u16,
    pub y: u16,
    /// Node color as (r, g, b)
    pub color: (u8, u8, u8),
}
