// Canvas-2d renderers. Each one owns its canvas and redraw loop exclusively
// for the mounted lifetime; input data is passed as an immutable snapshot
// (skills) or a caller-owned flags cell (orb).

pub mod field;
pub mod helpers;
pub mod orb;
pub mod radar;
