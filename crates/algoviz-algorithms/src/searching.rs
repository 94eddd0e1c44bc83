//! Instrumented searching algorithms.

use algoviz_trace::{Trace, TraceRecorder, TraceStep};

/// Binary search over a sorted array.
///
/// Each iteration probes the midpoint (one access, one comparison) and
/// either finishes or excludes half the window; the branch step marks the
/// excluded half as visited.
pub fn binary_search(array: &[i64], target: i64) -> Trace {
    let mut rec = TraceRecorder::new();
    let arr = array.to_vec();
    let mut left: i64 = 0;
    let mut right: i64 = arr.len() as i64 - 1;
    let mut found = false;

    rec.push(TraceStep {
        array: Some(arr.clone()),
        description: format!("Starting binary search for target {}", target),
        ..TraceStep::default()
    });

    while left <= right {
        let mid = (left + right) / 2;
        rec.count_accesses(1);

        rec.push(TraceStep {
            array: Some(arr.clone()),
            current: vec![mid as usize],
            visited: (left..=right).map(|x| x as usize).collect(),
            description: format!(
                "Checking element at middle index {}: {}",
                mid, arr[mid as usize]
            ),
            ..TraceStep::default()
        });

        rec.count_comparisons(1);

        if arr[mid as usize] == target {
            rec.push(TraceStep {
                array: Some(arr.clone()),
                current: vec![mid as usize],
                description: format!("Target {} found at index {}", target, mid),
                ..TraceStep::default()
            });
            found = true;
            break;
        } else if arr[mid as usize] < target {
            let excluded: Vec<usize> = (left..=mid).map(|x| x as usize).collect();
            left = mid + 1;
            rec.push(TraceStep {
                array: Some(arr.clone()),
                visited: excluded,
                description: format!(
                    "Target {} is greater than {}, searching right half: indices {} to {}",
                    target,
                    arr[mid as usize],
                    mid + 1,
                    right
                ),
                ..TraceStep::default()
            });
        } else {
            let excluded: Vec<usize> = (mid..=right).map(|x| x as usize).collect();
            right = mid - 1;
            rec.push(TraceStep {
                array: Some(arr.clone()),
                visited: excluded,
                description: format!(
                    "Target {} is less than {}, searching left half: indices {} to {}",
                    target,
                    arr[mid as usize],
                    left,
                    mid - 1
                ),
                ..TraceStep::default()
            });
        }
    }

    if !found {
        rec.push(TraceStep {
            array: Some(arr.clone()),
            description: format!("Target {} not found in the array", target),
            ..TraceStep::default()
        });
    }

    let trace = rec.finish();
    tracing::debug!(steps = trace.len(), found, "binary search trace recorded");
    trace
}

/// Linear search scanning from index 0.
///
/// One step per index checked, charging one access and one comparison;
/// stops at the first match.
pub fn linear_search(array: &[i64], target: i64) -> Trace {
    let mut rec = TraceRecorder::new();
    let arr = array.to_vec();
    let mut found = false;

    rec.push(TraceStep {
        array: Some(arr.clone()),
        description: format!("Starting linear search for target {}", target),
        ..TraceStep::default()
    });

    for i in 0..arr.len() {
        rec.count_accesses(1);
        rec.count_comparisons(1);

        rec.push(TraceStep {
            array: Some(arr.clone()),
            current: vec![i],
            visited: (0..i).collect(),
            description: format!("Checking element at index {}: {}", i, arr[i]),
            ..TraceStep::default()
        });

        if arr[i] == target {
            rec.push(TraceStep {
                array: Some(arr.clone()),
                current: vec![i],
                visited: (0..=i).collect(),
                description: format!("Target {} found at index {}", target, i),
                ..TraceStep::default()
            });
            found = true;
            break;
        }
    }

    if !found {
        rec.push(TraceStep {
            array: Some(arr.clone()),
            visited: (0..arr.len()).collect(),
            description: format!("Target {} not found in the array", target),
            ..TraceStep::default()
        });
    }

    let trace = rec.finish();
    tracing::debug!(steps = trace.len(), found, "linear search trace recorded");
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_search_hits_midpoint_first() {
        let trace = binary_search(&[1, 2, 3, 4, 5, 6, 7], 4);

        // One probe: mid index 3 holds the target.
        let probe = trace.step(1).unwrap();
        assert_eq!(probe.current, vec![3]);
        assert_eq!(probe.description, "Checking element at middle index 3: 4");

        let last = trace.last().unwrap();
        assert_eq!(last.description, "Target 4 found at index 3");
        assert_eq!(trace.len(), 3);
        assert_eq!(last.stats.comparisons, 1);
        assert_eq!(last.stats.array_accesses, 1);
    }

    #[test]
    fn binary_search_narrows_right_then_finds() {
        let trace = binary_search(&[1, 2, 3, 4, 5, 6, 7], 6);

        let branch = trace.step(2).unwrap();
        assert_eq!(
            branch.description,
            "Target 6 is greater than 4, searching right half: indices 4 to 6"
        );
        // Excluded left half (incl. the probed midpoint) is marked visited.
        assert_eq!(branch.visited, vec![0, 1, 2, 3]);
        assert_eq!(trace.last().unwrap().description, "Target 6 found at index 5");
    }

    #[test]
    fn binary_search_not_found() {
        let trace = binary_search(&[1, 2, 3, 4, 5, 6, 7], 9);
        assert_eq!(
            trace.last().unwrap().description,
            "Target 9 not found in the array"
        );
        // Probes 3, 5, 6 then the window collapses.
        assert_eq!(trace.last().unwrap().stats.comparisons, 3);
    }

    #[test]
    fn binary_search_empty_array() {
        let trace = binary_search(&[], 1);
        assert_eq!(trace.len(), 2);
        assert_eq!(
            trace.last().unwrap().description,
            "Target 1 not found in the array"
        );
    }

    #[test]
    fn linear_search_stops_at_first_match() {
        let trace = linear_search(&[4, 2, 4, 1], 4);
        let last = trace.last().unwrap();
        assert_eq!(last.description, "Target 4 found at index 0");
        assert_eq!(last.visited, vec![0]);
        assert_eq!(last.stats.comparisons, 1);
    }

    #[test]
    fn linear_search_visits_everything_when_absent() {
        let trace = linear_search(&[4, 2, 7, 1], 5);
        let last = trace.last().unwrap();
        assert_eq!(last.description, "Target 5 not found in the array");
        assert_eq!(last.visited, vec![0, 1, 2, 3]);
        assert_eq!(last.stats.comparisons, 4);
        assert_eq!(last.stats.array_accesses, 4);
    }

    #[test]
    fn search_traces_hold_invariants() {
        for target in [1, 4, 7, 10] {
            assert!(binary_search(&[1, 2, 3, 4, 5, 6, 7], target)
                .check_invariants()
                .is_ok());
            assert!(linear_search(&[1, 2, 3, 4, 5, 6, 7], target)
                .check_invariants()
                .is_ok());
        }
    }
}
