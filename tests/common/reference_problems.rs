//! Reference problems with known discrete solutions or symmetries

use laplace_rs::grid::DirichletBoundary;
use laplace_rs::solver::Scenario;

/// One edge of the square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

/// The standard problem: top edge at 100, other edges at 0
pub fn heated_top(size: usize) -> Scenario {
    Scenario::new(size, DirichletBoundary::default()).unwrap()
}

/// A single edge held at `value`, the three others at 0
pub fn heated_edge(size: usize, edge: Edge, value: f64) -> Scenario {
    let mut boundary = DirichletBoundary::uniform(0.0);
    match edge {
        Edge::Top => boundary.top = value,
        Edge::Bottom => boundary.bottom = value,
        Edge::Left => boundary.left = value,
        Edge::Right => boundary.right = value,
    }
    Scenario::new(size, boundary).unwrap()
}

/// All edges at `value`: the exact solution is constant
pub fn uniform_boundary(size: usize, value: f64) -> Scenario {
    Scenario::new(size, DirichletBoundary::uniform(value)).unwrap()
}
