use crate::errors::PathPlannerError;
use super::{shortest_path, GraphNodeMap, NO_PARENT};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};

/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until node meets goal criteria
/// Returns the path from start to goal and its total cost
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<(Vec<N>, C), PathPlannerError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Build the graph - terminates when the goal is met
    let (node_map, goal_index) = build_dijkstra_graph(start, neighbors, goal);

    match goal_index {
        Some(goal_index) => shortest_path(&node_map, goal_index),
        None => Err(PathPlannerError::NoPathFound),
    }
}

/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
fn build_dijkstra_graph<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> (GraphNodeMap<N, C>, Option<usize>)
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool // Returns true if goal is met
    {

    // Nodes to visit - binary heap pops the biggest NodeId first, NodeId ordering
    // is reversed so the cheapest node (earliest discovered on ties) comes out first
    let mut nodes_to_visit: BinaryHeap<NodeId<C>> = BinaryHeap::new();

    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the map
    // for the start node, parent_index is NO_PARENT
    // Index in the map doubles as discovery order
    let mut nodes_map: GraphNodeMap<N, C> = GraphNodeMap::default();

    let start_index = nodes_map.insert_full(start, (NO_PARENT, Zero::zero())).0;
    nodes_to_visit.push(NodeId {
        index: start_index,
        cost: Zero::zero(),
    });

    // Loop over each node to visit, removing the smallest node
    while let Some(NodeId {cost, index}) = nodes_to_visit.pop() {

        // fetch current best cost for node
        let Some((node, &(_, c))) = nodes_map.get_index(index) else {
            continue;
        };

        // Stale heap entry, a cheaper path to this node was found after it was pushed
        if cost > c {
            continue;
        }

        if goal_fn(node) {
            return (nodes_map, Some(index));
        }

        let node = node.clone();

        for (neighbor, edge_cost) in neighbors(&node) {

            // new cost to reach this node = edge cost + node cost
            let new_cost = edge_cost + c;

            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    // first time we're seeing this neighbor
                    let neighbor_index = e.index();
                    e.insert((index, new_cost));
                    neighbor_index
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        e.insert((index, new_cost));
                        e.index()
                    } else {
                        // The existing path is as good or better
                        continue;
                    }
                }
            };

            nodes_to_visit.push(NodeId {
                index: neighbor_index,
                cost: new_cost,
            });
        }
    }

    (nodes_map, None)
}

/// Node identifier
/// - for ordering we only need cost and a way to identify the node
/// - lower index means discovered earlier, used to break ties
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T
}

impl<T: Ord> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl<T: Ord> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: Ord> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: Ord> Eq for NodeId<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    // Helper function to create a test graph
    fn create_test_graph() -> HashMap<String, Vec<(String, u32)>> {
        let mut graph = HashMap::new();

        // Diamond-shaped graph: A -> B -> D and A -> C -> D
        graph.insert("A".to_string(), vec![
            ("B".to_string(), 1),
            ("C".to_string(), 3),
        ]);
        graph.insert("B".to_string(), vec![("D".to_string(), 5)]);
        graph.insert("C".to_string(), vec![("D".to_string(), 1)]);
        graph.insert("D".to_string(), vec![]);

        graph
    }

    // Helper function to create a neighbor function from a graph
    fn create_neighbor_fn(graph: &HashMap<String, Vec<(String, u32)>>) -> impl Fn(&String) -> Vec<(String, u32)> + '_ {
        move |node: &String| {
            graph.get(node).cloned().unwrap_or_default()
        }
    }

    fn names(path: &[&str]) -> Vec<String> {
        path.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_dijkstra_graph_simple() {
        let graph = create_test_graph();
        let neighbors = create_neighbor_fn(&graph);

        let (result, goal_index) = build_dijkstra_graph(
            "A".to_string(),
            neighbors,
            |node| node == "D"
        );
        assert!(goal_index.is_some());

        let costs: HashMap<_, _> = result.iter().map(|(node, (_, cost))| (node.clone(), *cost)).collect();

        assert_eq!(costs.get("A").unwrap(), &0);
        assert_eq!(costs.get("B").unwrap(), &1);
        assert_eq!(costs.get("C").unwrap(), &3);
        assert_eq!(costs.get("D").unwrap(), &4); // Should be 4 via the A->C->D path
    }

    #[test]
    fn test_build_dijkstra_graph_skips_stale_entries() {
        // B is first reached directly for 10, then through C for 2
        // The first heap entry for B goes stale and must not be expanded again
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 10), ("C".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("D".to_string(), 1)]);
        graph.insert("C".to_string(), vec![("B".to_string(), 1)]);
        graph.insert("D".to_string(), vec![]);

        let expanded = Cell::new(0);
        let neighbors = |node: &String| {
            expanded.set(expanded.get() + 1);
            graph.get(node).cloned().unwrap_or_default()
        };

        let (result, goal_index) = build_dijkstra_graph("A".to_string(), neighbors, |_| false);

        assert!(goal_index.is_none());
        assert_eq!(expanded.get(), 4);

        // Discovery order: A, B, C, D
        assert_eq!(result.get("B"), Some(&(2, 2))); // parent C
        assert_eq!(result.get("D"), Some(&(1, 3))); // parent B
    }

    #[test]
    fn test_dijkstra_finds_optimal_path() {
        let graph = create_test_graph();
        let neighbors = create_neighbor_fn(&graph);

        let (path, cost) = dijkstra(
            "A".to_string(),
            neighbors,
            |node| node == "D"
        ).unwrap();

        // The expected path is A -> C -> D (the cheapest path)
        assert_eq!(path, names(&["A", "C", "D"]));
        assert_eq!(cost, 4);
    }

    #[test]
    fn test_dijkstra_start_is_goal() {
        let graph = create_test_graph();
        let neighbors = create_neighbor_fn(&graph);

        let (path, cost) = dijkstra("B".to_string(), neighbors, |node| node == "B").unwrap();

        assert_eq!(path, names(&["B"]));
        assert_eq!(cost, 0);
    }

    #[test]
    fn test_dijkstra_unreachable_goal_behind_cycle() {
        // A -> B -> C -> A loops forever without ever reaching D
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 2)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 2)]);
        graph.insert("C".to_string(), vec![("A".to_string(), 2)]);
        graph.insert("D".to_string(), vec![("A".to_string(), 2)]);

        let result = dijkstra("A".to_string(), create_neighbor_fn(&graph), |node| node == "D");
        assert_eq!(result, Err(PathPlannerError::NoPathFound));

        // The other direction is fine
        let (path, cost) = dijkstra("D".to_string(), create_neighbor_fn(&graph), |node| node == "C").unwrap();
        assert_eq!(path, names(&["D", "A", "B", "C"]));
        assert_eq!(cost, 6);
    }

    #[test]
    fn test_dijkstra_cost_in_wider_type() {
        // Two legs of u32::MAX only fit once costs are widened to u64
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), u32::MAX)]);
        graph.insert("B".to_string(), vec![("C".to_string(), u32::MAX)]);
        graph.insert("C".to_string(), vec![]);

        let neighbors = |node: &String| {
            graph.get(node)
                .cloned()
                .unwrap_or_default()
                .into_iter()
                .map(|(next, cost)| (next, u64::from(cost)))
        };

        let (path, cost) = dijkstra("A".to_string(), neighbors, |node| node == "C").unwrap();

        assert_eq!(path, names(&["A", "B", "C"]));
        assert_eq!(cost, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_dijkstra_ties_prefer_first_discovered() {
        // Two equal cost routes to D: A -> B -> D and A -> C -> D
        // B is discovered first so its route wins
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 2), ("C".to_string(), 2)]);
        graph.insert("B".to_string(), vec![("D".to_string(), 3)]);
        graph.insert("C".to_string(), vec![("D".to_string(), 3)]);
        graph.insert("D".to_string(), vec![]);

        for _ in 0..5 {
            let neighbors = create_neighbor_fn(&graph);
            let (path, cost) = dijkstra("A".to_string(), neighbors, |node| node == "D").unwrap();
            assert_eq!(path, names(&["A", "B", "D"]));
            assert_eq!(cost, 5);
        }
    }

    #[test]
    fn test_dijkstra_cost_matches_path_for_every_goal() {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 7), ("C".to_string(), 9), ("F".to_string(), 14)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 10), ("D".to_string(), 15)]);
        graph.insert("C".to_string(), vec![("D".to_string(), 11), ("F".to_string(), 2)]);
        graph.insert("D".to_string(), vec![("E".to_string(), 6)]);
        graph.insert("E".to_string(), vec![]);
        graph.insert("F".to_string(), vec![("E".to_string(), 9)]);

        let expected = [("B", 7), ("C", 9), ("D", 20), ("E", 20), ("F", 11)];

        for (goal, expected_cost) in expected {
            let (path, cost) = dijkstra("A".to_string(), create_neighbor_fn(&graph), |node| node == goal).unwrap();

            let edge_sum: u32 = path.windows(2)
                .map(|pair| {
                    graph[&pair[0]].iter()
                        .find(|(node, _)| node == &pair[1])
                        .map(|(_, cost)| *cost)
                        .unwrap()
                })
                .sum();

            assert_eq!(cost, expected_cost, "cost to {goal}");
            assert_eq!(edge_sum, cost, "path to {goal}");
        }
    }
}
