//! Named demo data sets.
//!
//! Nothing in the crate falls back to these implicitly; callers opt in by
//! name.  The city graph is shared read-only, so callers who want a variant
//! must clone it first.

use std::sync::LazyLock;

use crate::{graph::MatrixGraph, pert::Task};

/// The vertex labels of [`cities`].
pub const CITY_LABELS: [&str; 10] = [
    "Casablanca",
    "Rabat",
    "Marrakech",
    "Fes",
    "Tanger",
    "Agadir",
    "Meknes",
    "Oujda",
    "Kenitra",
    "Tetouan",
];

/// Road distances in kilometers between [`CITY_LABELS`]; `0` means there is
/// no direct road.
#[rustfmt::skip]
pub const CITY_DISTANCES: [[f64; 10]; 10] = [
    //  Cas    Rab    Mar    Fes    Tan    Aga    Mek    Ouj    Ken    Tet
    [   0.0,  87.0, 240.0,   0.0,   0.0,   0.0, 230.0,   0.0,   0.0,   0.0], // Casablanca
    [  87.0,   0.0,   0.0,   0.0,   0.0,   0.0, 140.0,   0.0,  40.0,   0.0], // Rabat
    [ 240.0,   0.0,   0.0,   0.0,   0.0, 250.0,   0.0,   0.0,   0.0,   0.0], // Marrakech
    [   0.0,   0.0,   0.0,   0.0,   0.0,   0.0,  60.0, 340.0,   0.0, 280.0], // Fes
    [   0.0,   0.0,   0.0,   0.0,   0.0,   0.0,   0.0,   0.0, 200.0,  60.0], // Tanger
    [   0.0,   0.0, 250.0,   0.0,   0.0,   0.0,   0.0,   0.0,   0.0,   0.0], // Agadir
    [ 230.0, 140.0,   0.0,  60.0,   0.0,   0.0,   0.0,   0.0, 120.0,   0.0], // Meknes
    [   0.0,   0.0,   0.0, 340.0,   0.0,   0.0,   0.0,   0.0,   0.0,   0.0], // Oujda
    [   0.0,  40.0,   0.0,   0.0, 200.0,   0.0, 120.0,   0.0,   0.0,   0.0], // Kenitra
    [   0.0,   0.0,   0.0, 280.0,  60.0,   0.0,   0.0,   0.0,   0.0,   0.0], // Tetouan
];

static CITIES: LazyLock<MatrixGraph> = LazyLock::new(|| {
    let matrix = CITY_DISTANCES.iter().map(|row| row.to_vec()).collect();
    MatrixGraph::new(CITY_LABELS, matrix).expect("demo city graph is well formed")
});

/// The 10-city demo road network, an undirected (symmetric) graph.
pub fn cities() -> &'static MatrixGraph {
    &CITIES
}

/// The house-construction demo project.
pub fn house_construction() -> Vec<Task> {
    vec![
        Task::new("A", 3.0).named("Prepare the site"),
        Task::new("B", 4.0).after(["A"]).named("Foundations"),
        Task::new("C", 2.0).after(["B"]).named("Walls"),
        Task::new("D", 5.0).after(["B"]).named("Roof"),
        Task::new("E", 2.0).after(["C"]).named("Wiring"),
        Task::new("F", 1.0).after(["D", "E"]).named("Finishing"),
    ]
}
