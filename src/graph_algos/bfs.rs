use crate::errors::PathPlannerError;
use super::{shortest_path, GraphNodeMap, NO_PARENT};

use std::{collections::VecDeque, hash::Hash, fmt::Debug};
use indexmap::map::Entry::Vacant;

/// Identify the path with the fewest edges using Breadth-First Search
/// https://en.wikipedia.org/wiki/Breadth-first_search
/// Every edge counts as one hop regardless of its weight
/// Returns the path from start to goal and its hop count
pub fn bfs<N, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<(Vec<N>, usize), PathPlannerError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    let (node_map, goal_index) = build_bfs_graph(start, neighbors, goal);

    match goal_index {
        Some(goal_index) => shortest_path(&node_map, goal_index),
        None => Err(PathPlannerError::NoPathFound),
    }
}

/// Traverses the graph level by level
/// Returns a map of discovered nodes with (parent_index, hops) along with the index of the goal node
fn build_bfs_graph<N, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> (GraphNodeMap<N, usize>, Option<usize>)
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool,
    {

    // A node is in the map once it has been discovered, which doubles as the visited set
    let mut nodes_map: GraphNodeMap<N, usize> = GraphNodeMap::default();
    let mut queue: VecDeque<usize> = VecDeque::new();

    let start_index = nodes_map.insert_full(start, (NO_PARENT, 0)).0;
    queue.push_back(start_index);

    while let Some(index) = queue.pop_front() {

        let Some((node, &(_, hops))) = nodes_map.get_index(index) else {
            continue;
        };

        if goal_fn(node) {
            return (nodes_map, Some(index));
        }

        let node = node.clone();

        // Enqueue in the order neighbors are given
        for neighbor in neighbors(&node) {
            if let Vacant(e) = nodes_map.entry(neighbor) {
                queue.push_back(e.index());
                e.insert((index, hops + 1));
            }
        }
    }

    (nodes_map, None)
}
