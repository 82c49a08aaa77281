use crate::graph::GraphProvider;

/// Enumerate every simple path from `start` to `end`, in edge declaration
/// order.
///
/// The walk never steps straight back to the node it just came from. Any
/// other revisit would need a cycle, and queries only run once the cycle
/// gate has passed, so the recursion always terminates. An unknown `start`
/// yields no paths.
pub fn all_simple_paths(provider: &dyn GraphProvider, start: &str, end: &str) -> Vec<Vec<String>> {
    let mut found = Vec::new();
    if !provider.contains(start) {
        return found;
    }

    let mut path = vec![start.to_string()];
    expand(provider, start, None, end, &mut path, &mut found);
    found
}

fn expand(
    provider: &dyn GraphProvider,
    current: &str,
    came_from: Option<&str>,
    end: &str,
    path: &mut Vec<String>,
    found: &mut Vec<Vec<String>>,
) {
    if current == end {
        found.push(path.clone());
        return;
    }

    for hop in provider.outgoing(current) {
        if came_from == Some(hop.to.as_str()) {
            continue;
        }
        path.push(hop.to.clone());
        expand(provider, &hop.to, Some(current), end, path, found);
        path.pop();
    }
}
