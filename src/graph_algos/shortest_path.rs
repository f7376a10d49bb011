use crate::errors::PathPlannerError;
use super::GraphNodeMap;

/// Parent index stored for the start node, it has no parent
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered path from start to goal along with the goal's cost
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<(Vec<N>, C), PathPlannerError>
where
    N: Clone,
    C: Copy,
{
    let (_, &(_, goal_cost)) = node_map.get_index(goal_index).ok_or(PathPlannerError::NoPathFound)?;

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != NO_PARENT {
        let (node, &(parent_index, _)) = node_map.get_index(current_index).ok_or(PathPlannerError::NoPathFound)?;
        path.push(node.clone());
        current_index = parent_index;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok((path, goal_cost))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_path_reconstruction() {
        let mut node_map: GraphNodeMap<&str, u32> = GraphNodeMap::default();

        let a_index = node_map.insert_full("A", (NO_PARENT, 0)).0;
        let b_index = node_map.insert_full("B", (a_index, 1)).0;
        let c_index = node_map.insert_full("C", (a_index, 3)).0;
        let d_index = node_map.insert_full("D", (c_index, 4)).0;

        assert_eq!(shortest_path(&node_map, d_index).unwrap(), (vec!["A", "C", "D"], 4));
        assert_eq!(shortest_path(&node_map, b_index).unwrap(), (vec!["A", "B"], 1));
        assert_eq!(shortest_path(&node_map, a_index).unwrap(), (vec!["A"], 0));
    }

    #[test]
    fn test_shortest_path_bad_goal_index() {
        let node_map: GraphNodeMap<&str, u32> = GraphNodeMap::default();
        assert_eq!(shortest_path(&node_map, 3), Err(PathPlannerError::NoPathFound));
    }
}
