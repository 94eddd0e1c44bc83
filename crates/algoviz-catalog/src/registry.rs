//! The algorithm registry and the standard catalog.

use rand::RngCore;

use algoviz_algorithms as algorithms;
use algoviz_input::{ArrayShape, Input};
use algoviz_trace::Trace;

use crate::category::Category;
use crate::descriptor::{AlgorithmDescriptor, AlgorithmSummary};
use crate::error::{Error, Result};

/// An explicitly constructed, read-only catalog of algorithm descriptors.
///
/// Built once (normally via [`Registry::standard`]) and injected into the
/// selection/execution layer; tests construct reduced registries.
#[derive(Debug, Clone)]
pub struct Registry {
    algorithms: Vec<AlgorithmDescriptor>,
}

impl Registry {
    /// Build a registry from an explicit descriptor list.
    pub fn new(algorithms: Vec<AlgorithmDescriptor>) -> Self {
        Self { algorithms }
    }

    /// The standard catalog: 5 sorting, 2 searching, 2 pathfinding, and
    /// 2 graph traversal algorithms.
    pub fn standard() -> Self {
        Self::new(standard_descriptors())
    }

    /// Look up a descriptor by id.
    pub fn get(&self, id: u32) -> Result<&AlgorithmDescriptor> {
        self.algorithms
            .iter()
            .find(|a| a.id == id)
            .ok_or(Error::AlgorithmNotFound(id))
    }

    /// Descriptors of one family, in catalog order.
    pub fn by_category(&self, category: Category) -> Vec<&AlgorithmDescriptor> {
        self.algorithms
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    /// All descriptors in catalog order.
    pub fn all(&self) -> &[AlgorithmDescriptor] {
        &self.algorithms
    }

    /// Serializable metadata for every descriptor.
    pub fn summaries(&self) -> Vec<AlgorithmSummary> {
        self.algorithms.iter().map(|a| a.summary()).collect()
    }

    /// Number of registered algorithms.
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// Check if the registry has no algorithms.
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

// Execution adapters: unwrap the input variant the category check has
// already vetted and call the instrumented routine.

fn run_bubble_sort(input: &Input) -> Result<Trace> {
    expect_array(input).map(|values| algorithms::bubble_sort(values))
}

fn run_quick_sort(input: &Input) -> Result<Trace> {
    expect_array(input).map(|values| algorithms::quick_sort(values))
}

fn run_merge_sort(input: &Input) -> Result<Trace> {
    expect_array(input).map(|values| algorithms::merge_sort(values))
}

fn run_insertion_sort(input: &Input) -> Result<Trace> {
    expect_array(input).map(|values| algorithms::insertion_sort(values))
}

fn run_selection_sort(input: &Input) -> Result<Trace> {
    expect_array(input).map(|values| algorithms::selection_sort(values))
}

fn run_binary_search(input: &Input) -> Result<Trace> {
    expect_search(input).map(|(array, target)| algorithms::binary_search(array, target))
}

fn run_linear_search(input: &Input) -> Result<Trace> {
    expect_search(input).map(|(array, target)| algorithms::linear_search(array, target))
}

fn run_dijkstra(input: &Input) -> Result<Trace> {
    expect_graph(input).map(algorithms::dijkstra)
}

fn run_a_star(input: &Input) -> Result<Trace> {
    expect_graph(input).map(algorithms::a_star)
}

fn run_bfs(input: &Input) -> Result<Trace> {
    expect_graph(input).map(algorithms::bfs)
}

fn run_dfs(input: &Input) -> Result<Trace> {
    expect_graph(input).map(algorithms::dfs)
}

fn expect_array(input: &Input) -> Result<&Vec<i64>> {
    match input {
        Input::Array(values) => Ok(values),
        _ => Err(Error::InvalidInput("expected an array input".into())),
    }
}

fn expect_search(input: &Input) -> Result<(&Vec<i64>, i64)> {
    match input {
        Input::Search { array, target } => Ok((array, *target)),
        _ => Err(Error::InvalidInput("expected a search input".into())),
    }
}

fn expect_graph(input: &Input) -> Result<&algoviz_graph::Graph> {
    match input {
        Input::Graph(graph) => Ok(graph),
        _ => Err(Error::InvalidInput("expected a graph input".into())),
    }
}

// Input generators per family.

fn generate_sorting_input(rng: &mut dyn RngCore, size: usize, shape: ArrayShape) -> Result<Input> {
    Ok(Input::Array(algoviz_input::array(rng, size, shape)?))
}

fn generate_searching_input(
    rng: &mut dyn RngCore,
    size: usize,
    _shape: ArrayShape,
) -> Result<Input> {
    let (array, target) = algoviz_input::search_input(rng, size)?;
    Ok(Input::Search { array, target })
}

fn generate_graph_input(rng: &mut dyn RngCore, size: usize, _shape: ArrayShape) -> Result<Input> {
    Ok(Input::Graph(algoviz_input::graph(rng, size)?))
}

fn standard_descriptors() -> Vec<AlgorithmDescriptor> {
    vec![
        AlgorithmDescriptor {
            id: 1,
            name: "Bubble Sort",
            category: Category::Sorting,
            description: "A simple comparison-based sorting algorithm that repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
            time_complexity: "O(n²)",
            space_complexity: "O(1)",
            best_case: "O(n)",
            average_case: "O(n²)",
            worst_case: "O(n²)",
            pseudocode: "\
procedure bubbleSort(A: list of sortable items)
    n = length(A)
    repeat
        swapped = false
        for i = 1 to n-1
            if A[i-1] > A[i] then
                swap(A[i-1], A[i])
                swapped = true
            end if
        end for
        n = n - 1
    until not swapped
end procedure",
            explanation: &[
                "Repeatedly step through the list to be sorted",
                "Compare each pair of adjacent items",
                "Swap the items if they are in the wrong order",
                "Continue until no more swaps are needed",
            ],
            execute: run_bubble_sort,
            generate: generate_sorting_input,
        },
        AlgorithmDescriptor {
            id: 2,
            name: "Quick Sort",
            category: Category::Sorting,
            description: "A divide-and-conquer sorting algorithm that picks an element as a pivot and partitions the array around the pivot.",
            time_complexity: "O(n log n)",
            space_complexity: "O(log n)",
            best_case: "O(n log n)",
            average_case: "O(n log n)",
            worst_case: "O(n²)",
            pseudocode: "\
function quickSort(arr, low, high)
    if low < high then
        pivot = partition(arr, low, high)
        quickSort(arr, low, pivot - 1)
        quickSort(arr, pivot + 1, high)
    end if
end function

function partition(arr, low, high)
    pivot = arr[high]
    i = low - 1
    for j = low to high - 1 do
        if arr[j] <= pivot then
            i = i + 1
            swap arr[i] with arr[j]
        end if
    end for
    swap arr[i + 1] with arr[high]
    return i + 1
end function",
            explanation: &[
                "Choose a pivot element from the array",
                "Partition the array around the pivot (elements less than pivot to the left, greater to the right)",
                "Recursively apply the above steps to the sub-arrays",
                "The base case is arrays of size zero or one, which are already sorted",
            ],
            execute: run_quick_sort,
            generate: generate_sorting_input,
        },
        AlgorithmDescriptor {
            id: 3,
            name: "Merge Sort",
            category: Category::Sorting,
            description: "A divide-and-conquer algorithm that divides the input array into two halves, recursively sorts them, and then merges the sorted halves.",
            time_complexity: "O(n log n)",
            space_complexity: "O(n)",
            best_case: "O(n log n)",
            average_case: "O(n log n)",
            worst_case: "O(n log n)",
            pseudocode: "\
function mergeSort(arr)
    if length(arr) <= 1 then
        return arr
    end if

    mid = length(arr) / 2
    left = mergeSort(arr[0...mid-1])
    right = mergeSort(arr[mid...length(arr)-1])

    return merge(left, right)
end function

function merge(left, right)
    result = []
    i = 0, j = 0

    while i < length(left) and j < length(right) do
        if left[i] <= right[j] then
            append left[i] to result
            i = i + 1
        else
            append right[j] to result
            j = j + 1
        end if
    end while

    append remaining elements of left to result
    append remaining elements of right to result

    return result
end function",
            explanation: &[
                "Divide the unsorted array into n sub-arrays, each containing one element",
                "Repeatedly merge sub-arrays to produce new sorted sub-arrays",
                "Continue until there is only one sub-array remaining",
                "Merging is done by comparing the first elements of both sub-arrays and taking the smaller one",
            ],
            execute: run_merge_sort,
            generate: generate_sorting_input,
        },
        AlgorithmDescriptor {
            id: 4,
            name: "Insertion Sort",
            category: Category::Sorting,
            description: "A simple sorting algorithm that builds the final sorted array one item at a time. It is efficient for small data sets.",
            time_complexity: "O(n²)",
            space_complexity: "O(1)",
            best_case: "O(n)",
            average_case: "O(n²)",
            worst_case: "O(n²)",
            pseudocode: "\
function insertionSort(arr)
    for i = 1 to length(arr) - 1 do
        key = arr[i]
        j = i - 1

        while j >= 0 and arr[j] > key do
            arr[j + 1] = arr[j]
            j = j - 1
        end while

        arr[j + 1] = key
    end for
end function",
            explanation: &[
                "Iterate through the array starting from the second element",
                "For each element, compare it with the previous elements",
                "Move greater elements one position ahead to make space for the current element",
                "Insert the current element in its correct position in the sorted part",
            ],
            execute: run_insertion_sort,
            generate: generate_sorting_input,
        },
        AlgorithmDescriptor {
            id: 5,
            name: "Selection Sort",
            category: Category::Sorting,
            description: "A simple comparison-based sorting algorithm that divides the input into a sorted and an unsorted region, and repeatedly selects the smallest element from the unsorted region and moves it to the sorted region.",
            time_complexity: "O(n²)",
            space_complexity: "O(1)",
            best_case: "O(n²)",
            average_case: "O(n²)",
            worst_case: "O(n²)",
            pseudocode: "\
function selectionSort(arr)
    n = length(arr)
    for i = 0 to n - 2 do
        minIndex = i
        for j = i + 1 to n - 1 do
            if arr[j] < arr[minIndex] then
                minIndex = j
            end if
        end for
        swap arr[i] with arr[minIndex]
    end for
end function",
            explanation: &[
                "Divide the array into a sorted (initially empty) and an unsorted region",
                "Find the minimum element in the unsorted region",
                "Swap it with the first element of the unsorted region",
                "Move the boundary between the regions one element to the right",
            ],
            execute: run_selection_sort,
            generate: generate_sorting_input,
        },
        AlgorithmDescriptor {
            id: 6,
            name: "Binary Search",
            category: Category::Searching,
            description: "An efficient search algorithm that finds the position of a target value within a sorted array.",
            time_complexity: "O(log n)",
            space_complexity: "O(1)",
            best_case: "O(1)",
            average_case: "O(log n)",
            worst_case: "O(log n)",
            pseudocode: "\
function binarySearch(arr, target)
    left = 0
    right = length(arr) - 1

    while left <= right do
        mid = (left + right) / 2

        if arr[mid] == target then
            return mid
        else if arr[mid] < target then
            left = mid + 1
        else
            right = mid - 1
        end if
    end while

    return -1 // Not found
end function",
            explanation: &[
                "Compare the target value to the middle element of the array",
                "If they are equal, return the middle position",
                "If the target is less than the middle element, search the left half",
                "If the target is greater than the middle element, search the right half",
                "Repeat until the target is found or the search space is empty",
            ],
            execute: run_binary_search,
            generate: generate_searching_input,
        },
        AlgorithmDescriptor {
            id: 7,
            name: "Linear Search",
            category: Category::Searching,
            description: "A simple search algorithm that checks each element of the list until the target element is found or the list ends.",
            time_complexity: "O(n)",
            space_complexity: "O(1)",
            best_case: "O(1)",
            average_case: "O(n/2)",
            worst_case: "O(n)",
            pseudocode: "\
function linearSearch(arr, target)
    for i = 0 to length(arr) - 1 do
        if arr[i] == target then
            return i
        end if
    end for

    return -1 // Not found
end function",
            explanation: &[
                "Start from the first element of the array",
                "Compare each element with the target value",
                "If the element is found, return its position",
                "If the array is completely traversed without finding the target, return -1",
            ],
            execute: run_linear_search,
            generate: generate_searching_input,
        },
        AlgorithmDescriptor {
            id: 8,
            name: "Dijkstra's Algorithm",
            category: Category::Pathfinding,
            description: "An algorithm that finds the shortest paths between nodes in a weighted graph.",
            time_complexity: "O((V+E)log V)",
            space_complexity: "O(V)",
            best_case: "O((V+E)log V)",
            average_case: "O((V+E)log V)",
            worst_case: "O((V+E)log V)",
            pseudocode: "\
function dijkstra(graph, source)
    dist = array of size |V| initialized to infinity
    dist[source] = 0
    priority_queue Q
    Q.insert(source, 0)

    while Q is not empty do
        u = Q.extract_min()

        for each neighbor v of u do
            alt = dist[u] + length(u, v)
            if alt < dist[v] then
                dist[v] = alt
                Q.decrease_key(v, alt)
            end if
        end for
    end while

    return dist
end function",
            explanation: &[
                "Initialize distances of all vertices as infinite and the source as zero",
                "Create a priority queue and insert the source",
                "While the queue is not empty, extract the minimum distance vertex",
                "For each adjacent vertex, update its distance if a shorter path is found",
                "Insert updated vertices back into the queue",
            ],
            execute: run_dijkstra,
            generate: generate_graph_input,
        },
        AlgorithmDescriptor {
            id: 9,
            name: "A* Search",
            category: Category::Pathfinding,
            description: "A best-first search algorithm that finds the shortest path from a start node to a goal node using a heuristic function.",
            time_complexity: "O(E)",
            space_complexity: "O(V)",
            best_case: "O(E)",
            average_case: "O(E)",
            worst_case: "O(E)",
            pseudocode: "\
function a_star(graph, start, goal)
    open_set = {start}
    came_from = empty map
    g_score = map with default value of infinity
    g_score[start] = 0
    f_score = map with default value of infinity
    f_score[start] = heuristic(start, goal)

    while open_set is not empty do
        current = node in open_set with lowest f_score
        if current = goal then
            return reconstruct_path(came_from, current)
        end if

        open_set.remove(current)
        for each neighbor of current do
            tentative_g_score = g_score[current] + d(current, neighbor)
            if tentative_g_score < g_score[neighbor] then
                came_from[neighbor] = current
                g_score[neighbor] = tentative_g_score
                f_score[neighbor] = g_score[neighbor] + heuristic(neighbor, goal)
                if neighbor not in open_set then
                    open_set.add(neighbor)
                end if
            end if
        end for
    end while

    return failure
end function",
            explanation: &[
                "Maintain two sets: open (nodes to be evaluated) and closed (already evaluated nodes)",
                "Start with the initial node in the open set",
                "For each iteration, select the node with the lowest f(n) = g(n) + h(n)",
                "g(n) is the cost from the start to the current node",
                "h(n) is the heuristic estimated cost from the current node to the goal",
                "Continue until the goal is reached or the open set is empty",
            ],
            execute: run_a_star,
            generate: generate_graph_input,
        },
        AlgorithmDescriptor {
            id: 10,
            name: "BFS",
            category: Category::Graph,
            description: "Breadth-First Search is an algorithm for traversing or searching tree or graph data structures, starting at a given vertex and exploring all neighbors before moving to the next level.",
            time_complexity: "O(V+E)",
            space_complexity: "O(V)",
            best_case: "O(V+E)",
            average_case: "O(V+E)",
            worst_case: "O(V+E)",
            pseudocode: "\
function bfs(graph, start)
    queue = [start]
    visited = {start}

    while queue is not empty do
        vertex = queue.dequeue()

        for each neighbor of vertex do
            if neighbor not in visited then
                visited.add(neighbor)
                queue.enqueue(neighbor)
            end if
        end for
    end while
end function",
            explanation: &[
                "Start at a given vertex and mark it as visited",
                "Visit all adjacent unvisited vertices and mark them as visited",
                "Use a queue to keep track of vertices to visit next",
                "Continue until the queue is empty (all reachable vertices have been visited)",
            ],
            execute: run_bfs,
            generate: generate_graph_input,
        },
        AlgorithmDescriptor {
            id: 11,
            name: "DFS",
            category: Category::Graph,
            description: "Depth-First Search is an algorithm for traversing or searching tree or graph data structures, starting at a given vertex and exploring as far as possible along each branch before backtracking.",
            time_complexity: "O(V+E)",
            space_complexity: "O(V)",
            best_case: "O(V+E)",
            average_case: "O(V+E)",
            worst_case: "O(V+E)",
            pseudocode: "\
function dfs(graph, start)
    visited = {}

    function dfs_visit(vertex)
        visited.add(vertex)

        for each neighbor of vertex do
            if neighbor not in visited then
                dfs_visit(neighbor)
            end if
        end for
    end function

    dfs_visit(start)
end function",
            explanation: &[
                "Start at a given vertex and mark it as visited",
                "Recursively visit all adjacent unvisited vertices",
                "Use a stack (typically through recursion) to keep track of vertices to visit",
                "Backtrack when a vertex has no unvisited adjacent vertices",
            ],
            execute: run_dfs,
            generate: generate_graph_input,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn standard_catalog_has_eleven_algorithms() {
        let registry = Registry::standard();
        assert_eq!(registry.len(), 11);
        assert_eq!(registry.by_category(Category::Sorting).len(), 5);
        assert_eq!(registry.by_category(Category::Searching).len(), 2);
        assert_eq!(registry.by_category(Category::Pathfinding).len(), 2);
        assert_eq!(registry.by_category(Category::Graph).len(), 2);
    }

    #[test]
    fn ids_are_unique_and_stable() {
        let registry = Registry::standard();
        let mut ids: Vec<u32> = registry.all().iter().map(|a| a.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=11).collect::<Vec<_>>());

        assert_eq!(registry.get(1).unwrap().name, "Bubble Sort");
        assert_eq!(registry.get(8).unwrap().name, "Dijkstra's Algorithm");
    }

    #[test]
    fn unknown_id_is_recoverable() {
        let registry = Registry::standard();
        assert!(matches!(
            registry.get(99),
            Err(Error::AlgorithmNotFound(99))
        ));
    }

    #[test]
    fn reduced_registry_for_tests() {
        let registry = Registry::standard();
        let reduced = Registry::new(vec![registry.get(1).unwrap().clone()]);
        assert_eq!(reduced.len(), 1);
        assert!(reduced.get(2).is_err());
    }

    #[test]
    fn every_algorithm_runs_on_generated_input() {
        let registry = Registry::standard();
        let mut rng = StdRng::seed_from_u64(42);

        for descriptor in registry.all() {
            let input = descriptor
                .generate_input(&mut rng, 8, ArrayShape::Random)
                .unwrap();
            let trace = descriptor.execute(&input).unwrap();
            assert!(trace.len() >= 1, "{} produced an empty trace", descriptor.name);
            assert!(trace.check_invariants().is_ok());
        }
    }

    #[test]
    fn execute_rejects_mismatched_input() {
        let registry = Registry::standard();
        let bubble = registry.get(1).unwrap();

        let err = bubble
            .execute(&Input::Search {
                array: vec![1, 2],
                target: 2,
            })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = bubble.execute(&Input::Array(vec![])).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn summaries_serialize() {
        let registry = Registry::standard();
        let json = serde_json::to_string(&registry.summaries()).unwrap();
        assert!(json.contains("\"Bubble Sort\""));
        assert!(json.contains("\"pathfinding\""));
    }

    #[test]
    fn generated_input_matches_family() {
        let registry = Registry::standard();
        let mut rng = StdRng::seed_from_u64(7);

        for descriptor in registry.all() {
            let input = descriptor
                .generate_input(&mut rng, 6, ArrayShape::Reversed)
                .unwrap();
            match descriptor.category {
                Category::Sorting => assert!(matches!(input, Input::Array(_))),
                Category::Searching => assert!(matches!(input, Input::Search { .. })),
                Category::Pathfinding | Category::Graph => {
                    assert!(matches!(input, Input::Graph(_)))
                }
            }
        }
    }
}
