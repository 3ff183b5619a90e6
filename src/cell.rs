//! Cell contents: ship kinds with their point values and display symbols.

/// Contents of a single board cell. Exactly one kind occupies each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Empty,
    Carrier,
    Cruiser,
    Tug,
}

impl CellKind {
    /// Points awarded for hitting a cell of this kind.
    pub const fn points(self) -> u32 {
        match self {
            CellKind::Empty => 0,
            CellKind::Carrier => 5,
            CellKind::Cruiser => 15,
            CellKind::Tug => 10,
        }
    }

    /// Symbol used when the cell is drawn.
    pub const fn symbol(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Carrier => 'P',
            CellKind::Cruiser => 'C',
            CellKind::Tug => 'R',
        }
    }

    /// Kind's display name.
    pub const fn name(self) -> &'static str {
        match self {
            CellKind::Empty => "Empty",
            CellKind::Carrier => "Carrier",
            CellKind::Cruiser => "Cruiser",
            CellKind::Tug => "Tug",
        }
    }

    pub const fn is_ship(self) -> bool {
        !matches!(self, CellKind::Empty)
    }
}
