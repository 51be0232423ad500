
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::HashMap;

use crate::grid::{ Coords, Cube };
use crate::grid::coords;

use super::{ Context, Outcome, Tree, Path };

/// A node in the "open" list of the A* algorithm to prioritise the search.
struct Open {
    coords: Cube,
    priority: u32,
    seq: u64,
}

impl PartialEq for Open {
    fn eq(&self, other: &Open) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for Open {}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Open) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Open {
    fn cmp(&self, other: &Open) -> Ordering {
        // Lower priorities (= estimated total costs) are considered
        // "greater" for the binary heap. Among equal priorities, the
        // earlier insertion is "greater".
        other.priority.cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Beginning at the given start coordinates, perform a cost-aware search across
/// the grid, subject to the constraints of the given context, returning the
/// resulting search tree from which paths may be extracted.
///
/// The search stops when any of the following conditions is met:
///
///   * Goal coordinates are given and found.
///   * The grid has been exhaustively searched.
///   * The frontier holds more entries than the context permits.
pub fn tree<C: Coords>(
    start: C,
    goal: Option<C>,
    ctx: &mut impl Context<C>
) -> Tree<C> {
    let max_cost      = ctx.max_cost();
    let max_frontier  = ctx.max_frontier();
    let mut parents   = HashMap::new();
    let mut costs     = HashMap::<C, u32>::new();
    let mut open      = BinaryHeap::new();
    let mut seq       = 0;
    let mut outcome   = Outcome::Exhausted;
    open.push(Open { coords: start.into(), priority: 0, seq });
    costs.insert(start, 0);
    while let Some(parent) = open.pop() {
        let pc = C::from(parent.coords);
        if goal == Some(pc) {
            outcome = Outcome::Found;
            break
        }
        let cost: u32 = costs.get(&pc).copied().unwrap_or(0);
        for child in coords::neighbours(parent.coords) {
            let cc = C::from(child);
            let new_cost = match ctx.cost(pc, cc) {
                Some(step) => cost.saturating_add(step),
                None => continue
            };
            if new_cost > max_cost {
                continue
            }
            if costs.get(&cc).map_or(true, |old| new_cost < *old) {
                parents.insert(cc, pc);
                costs.insert(cc, new_cost);
                let estimate = goal.map_or(0, |g| ctx.heuristic(cc, g));
                seq += 1;
                open.push(Open { coords: child, priority: new_cost.saturating_add(estimate), seq });
            }
        }
        if open.len() > max_frontier {
            outcome = Outcome::Overflow;
            break
        }
    }
    Tree { root: start, parents, costs, outcome }
}

/// Beginning at the given start coordinates, perform a cost-aware search for
/// a path to the given goal coordinates across the grid, subject to the
/// constraints of the given context. There is no path unless the goal
/// has been found.
///
/// This is equivalent to:
/// ```raw
/// let t = tree(start, Some(goal), ctx);
/// if t.outcome() == Outcome::Found { t.path(goal) } else { None }
/// ```
pub fn path<C: Coords>(
    start: C,
    goal: C,
    ctx: &mut impl Context<C>
) -> Option<Path<C>> {
    let t = tree(start, Some(goal), ctx);
    match t.outcome() {
        Outcome::Found => t.path(goal),
        _ => None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{ Axial, walk_ring };
    use crate::geo::Rotation;
    use crate::search::{ Costs, Uniform };
    use quickcheck::*;
    use std::collections::HashSet;

    #[test]
    fn prop_unobstructed_path_is_shortest() {
        fn prop(c1: Cube, dx: i8, dz: i8) -> bool {
            let c2 = Cube::new_xz(c1.x() + (dx % 20) as i32, c1.z() + (dz % 20) as i32);
            let p = match path(c1, c2, &mut Uniform::new()) {
                Some(p) => p,
                None => return false
            };
            p.len() == c1.distance(c2) as usize + 1
                && p.front().map(|n| n.coords) == Some(c1)
                && p.back().map(|n| (n.coords, n.cost)) == Some((c2, c1.distance(c2)))
                && p.iter().zip(p.iter().skip(1)).all(|(a, b)|
                    a.coords.distance(b.coords) == 1 && b.cost == a.cost + 1)
        }
        quickcheck(prop as fn(_,_,_) -> _);
    }

    #[test]
    fn ties_are_broken_first_in_first_out() {
        let p = path(Axial::new(0, 0), Axial::new(-3, 3), &mut Uniform::new())
            .map(|p| p.into_iter().map(|n| n.coords).collect::<Vec<_>>());
        assert_eq!(p, Some(vec![
            Axial::new(0, 0), Axial::new(-1, 1), Axial::new(-2, 2), Axial::new(-3, 3)
        ]));
    }

    #[test]
    fn costs_accumulate_along_the_path() {
        let mut ctx = Costs::new(|a: Axial| Some(if a.q == 1 { 3 } else { 2 }));
        let t = tree(Axial::new(0, 0), Some(Axial::new(2, 0)), &mut ctx);
        assert_eq!(t.outcome(), Outcome::Found);
        assert_eq!(t.cost(Axial::new(0, 0)), Some(0));
        let costs = t.path(Axial::new(2, 0))
            .map(|p| p.into_iter().map(|n| n.cost).collect::<Vec<_>>());
        assert_eq!(costs, Some(vec![0, 3, 5]));
    }

    #[test]
    fn start_is_goal() {
        let t = tree(Axial::new(4, -2), Some(Axial::new(4, -2)), &mut Uniform::new());
        assert_eq!(t.outcome(), Outcome::Found);
        assert_eq!(t.path(Axial::new(4, -2)).map(|p| p.len()), Some(1));
    }

    #[test]
    fn enclosed_start_exhausts() {
        let start = Axial::new(0, 0);
        let wall = walk_ring(start, 5usize, 1, Rotation::CW).collect::<HashSet<Axial>>();
        let mut ctx = Uniform::new().avoiding(&wall);
        let t = tree(start, Some(Axial::new(5, 0)), &mut ctx);
        assert_eq!(t.outcome(), Outcome::Exhausted);
        assert_eq!(t.reached().collect::<Vec<_>>(), vec![start]);
        assert!(path(start, Axial::new(5, 0), &mut ctx).is_none());
    }

    #[test]
    fn enclosed_goal_overflows() {
        let goal = Axial::new(0, 0);
        let wall = walk_ring(goal, 5usize, 1, Rotation::CW).collect::<HashSet<Axial>>();
        let mut ctx = Uniform::new().avoiding(&wall).with_max_frontier(100);
        let t = tree(Axial::new(3, 0), Some(goal), &mut ctx);
        assert_eq!(t.outcome(), Outcome::Overflow);
        assert!(t.path(goal).is_none());
    }

    #[test]
    fn tree_without_goal_is_bounded_by_cost() {
        let start = Axial::new(0, 0);
        let mut ctx = Costs::new(|_| Some(1)).with_max_cost(3);
        let t = tree(start, None, &mut ctx);
        assert_eq!(t.outcome(), Outcome::Exhausted);
        assert_eq!(t.reached().count(), coords::num_in_range(3));
        assert_eq!(t.cost(Axial::new(-3, 3)), Some(3));
        assert_eq!(t.cost(Axial::new(4, 0)), None);
    }

    #[test]
    fn weighted_costs_detour_around_swamps() {
        // A swamp on the straight line from (0,0) to (2,0) costs 5 to enter.
        let mut ctx = Costs::new(|a: Axial| if a == Axial::new(1, 0) { Some(5) } else { Some(1) });
        let p = path(Axial::new(0, 0), Axial::new(2, 0), &mut ctx)
            .map(|p| p.into_iter().collect::<Vec<_>>());
        let p = p.unwrap_or_default();
        assert_eq!(p.len(), 4);
        assert!(p.iter().all(|n| n.coords != Axial::new(1, 0)));
        assert_eq!(p.last().map(|n| n.cost), Some(3));
    }
}
