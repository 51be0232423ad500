use hexpath::geo::{ HexSettings, Orientation };
use hexpath::grid::{ Axial, Grid, Hex, Obstacles, Tile };
use hexpath::search::Outcome;
use hexpath::traverse::*;

use std::collections::HashSet;

fn axials(v: &[(i32, i32)]) -> Vec<Axial> {
    v.iter().copied().map(Axial::from).collect()
}

fn obstacles(v: &[(i32, i32)]) -> HashSet<Axial> {
    axials(v).into_iter().collect()
}

fn walls() -> HashSet<Axial> {
    obstacles(&[
        (0, 1), (1, 0), (2, -1), (-1, 2), (0, -2), (0, -1),
        (-1, 0), (1, -3), (1, -1), (2, -2), (2, -3),
    ])
}

fn path(start: (i32, i32), target: (i32, i32), avoid: Option<&dyn Obstacles>) -> Vec<Axial> {
    let p = path_find(start.into(), target.into());
    match avoid {
        Some(o) => p.avoiding(o).coordinates(None),
        None => p.coordinates(None),
    }
}

#[test]
fn spiral_radius_one() {
    let s = spiral(Axial::new(1, 2), 1).coordinates(None);
    assert_eq!(s, axials(&[(1, 2), (2, 1), (2, 2), (1, 3), (0, 3), (0, 2), (1, 1)]));
}

#[test]
fn spiral_sizes() {
    for r in 0 .. 8 {
        let s = spiral(Axial::new(-3, 7), r).coordinates(None);
        assert_eq!(s.len(), 1 + 3 * r as usize * (r as usize + 1));
        assert_eq!(s.iter().collect::<HashSet<_>>().len(), s.len());
    }
}

#[test]
fn ring_radius_two() {
    let r = ring(Axial::new(1, 2), 2).coordinates(None);
    assert_eq!(r.len(), 12);
    assert_eq!(r.first(), Some(&Axial::new(2, 0)));
    assert_eq!(r.last(), Some(&Axial::new(1, 0)));
}

#[test]
fn reachable_around_obstacles() {
    let o = obstacles(&[(1, 3), (2, 2), (3, 1), (2, 0), (1, 0), (0, 1), (-1, 2), (-1, 3)]);
    let start = Axial::new(1, 2);
    let d1 = axials(&[(1, 2), (2, 1), (0, 3), (0, 2), (1, 1)]);
    let mut d2 = d1.clone();
    d2.extend(axials(&[(3, 0), (0, 4), (-1, 4)]));
    let mut d3 = d2.clone();
    d3.extend(axials(&[(4, -1), (4, 0), (3, -1), (1, 4), (0, 5), (-1, 5), (-2, 5), (-2, 4)]));
    assert_eq!(reachable(start, 0).avoiding(&o).coordinates(None), vec![start]);
    assert_eq!(reachable(start, 1).avoiding(&o).coordinates(None), d1);
    assert_eq!(reachable(start, 2).avoiding(&o).coordinates(None), d2);
    assert_eq!(reachable(start, 3).avoiding(&o).coordinates(None), d3);
}

#[test]
fn reachable_never_enters_obstacles() {
    let o = walls();
    let found = reachable(Axial::new(-2, 1), 4).avoiding(&o).coordinates(None);
    assert!(found.iter().all(|a| !o.contains(a)));
    assert!(found.iter().all(|a| hexpath::grid::distance(*a, Axial::new(-2, 1)) <= 4));
}

#[test]
fn paths_without_obstacles() {
    assert_eq!(path((0, 0), (0, 4), None), axials(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]));
    assert_eq!(path((0, 0), (-3, 3), None), axials(&[(0, 0), (-1, 1), (-2, 2), (-3, 3)]));
    assert_eq!(path((-2, -1), (1, 1), None),
        axials(&[(-2, -1), (-1, -1), (0, -1), (1, -1), (1, 0), (1, 1)]));
    assert_eq!(path((-3, 2), (1, 2), None),
        axials(&[(-3, 2), (-2, 2), (-1, 2), (0, 2), (1, 2)]));
    assert_eq!(path((0, -3), (-3, 1), None),
        axials(&[(0, -3), (0, -2), (-1, -1), (-2, 0), (-3, 1)]));
}

#[test]
fn paths_around_obstacles() {
    let o = walls();
    assert_eq!(path((0, 0), (0, 4), Some(&o)),
        axials(&[(0, 0), (-1, 1), (-2, 2), (-2, 3), (-1, 3), (0, 3), (0, 4)]));
    assert_eq!(path((0, 0), (-3, 3), Some(&o)),
        axials(&[(0, 0), (-1, 1), (-2, 2), (-3, 3)]));
    assert_eq!(path((-2, -1), (1, 1), Some(&o)),
        axials(&[(-2, -1), (-2, 0), (-2, 1), (-2, 2), (-2, 3), (-1, 3), (0, 2), (1, 1)]));
    assert_eq!(path((-3, 2), (1, 2), Some(&o)),
        axials(&[(-3, 2), (-2, 2), (-2, 3), (-1, 3), (0, 2), (1, 2)]));
    assert_eq!(path((0, -3), (0, 0), Some(&o)),
        axials(&[(0, -3), (-1, -2), (-1, -1), (-2, 0), (-2, 1), (-1, 1), (0, 0)]));
}

#[test]
fn enclosed_start_has_no_path() {
    let o = walls();
    let p = path_find(Axial::new(1, -2), Axial::new(0, 0)).avoiding(&o);
    assert!(p.coordinates(None).is_empty());
    assert_eq!(p.tree(None).outcome(), Outcome::Exhausted);
}

#[test]
fn enclosed_target_has_no_path() {
    let o = walls();
    let p = path_find(Axial::new(0, 0), Axial::new(1, -2)).avoiding(&o);
    assert!(p.coordinates(None).is_empty());
    assert_eq!(p.tree(None).outcome(), Outcome::Overflow);
}

#[test]
fn paths_are_shortest_and_deterministic() {
    let o = walls();
    let p1 = path((-2, -1), (1, 1), Some(&o));
    let p2 = path((-2, -1), (1, 1), Some(&o));
    assert_eq!(p1, p2);
    assert!(p1.windows(2).all(|w| hexpath::grid::distance(w[0], w[1]) == 1));
    assert!(p1.iter().all(|a| !o.contains(a)));
    let free = path((-2, -1), (1, 1), None);
    assert_eq!(free.len(), 6);
}

#[test]
fn paths_around_grid_cells() {
    let settings = HexSettings::default().with_orientation(Orientation::FlatTop);
    let blocked = Grid::from_coordinates(Hex::factory(settings), walls());
    let p = path_find(Axial::new(0, 0), Axial::new(0, 4)).avoiding(&blocked);
    let hexes = p.traverse(Hex::factory(settings), None);
    assert_eq!(hexes.len(), 7);
    assert!(hexes.iter().all(|h| h.orientation() == Orientation::FlatTop));
}

#[test]
fn traversal_feeds_grid() {
    let settings = HexSettings::default();
    let mut grid = Grid::from_traverser(|a| Tile::new(Hex::new(a, settings), 1u32),
        &spiral(Axial::new(0, 0), 3), None);
    assert_eq!(grid.len(), 37);
    let route = path_find(Axial::new(-3, 0), Axial::new(3, 0));
    grid.update_along(&route, None, |a| Tile::new(Hex::new(a, settings), 1),
        |cells| cells.map(|mut t| { t.state = 0; t }));
    assert_eq!(grid.len(), 37);
    let cleared = grid.iter().filter(|t| t.state == 0).count();
    assert_eq!(cleared, 7);
    let along = grid.traverse(&route, None).map(|t| t.hex.axial()).collect::<Vec<_>>();
    assert_eq!(along, route.coordinates(None));
}

#[test]
fn chained_traversals() {
    let tour = path_find(Axial::new(0, 0), Axial::new(2, 0)).then(Spiral::new(1));
    let coords = tour.coordinates(None);
    assert_eq!(coords.len(), 3 + 7);
    assert_eq!(&coords[2 ..= 3], &axials(&[(2, 0), (2, 0)])[..]);
}
