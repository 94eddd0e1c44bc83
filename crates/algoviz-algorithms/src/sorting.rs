//! Instrumented sorting algorithms.
//!
//! Per-operation charging: each adjacent/pivot comparison charges two
//! array reads and one comparison (except where a routine notes
//! otherwise), each exchange charges one swap and two touches.

use algoviz_trace::{Trace, TraceRecorder, TraceStep};

/// Bubble sort with early exit on a swap-free pass.
///
/// Emits a step per comparison and per swap; after each pass the last
/// unswapped position is marked sorted, and a swap-free pass marks all
/// remaining positions sorted in one final step.
pub fn bubble_sort(values: &[i64]) -> Trace {
    let mut rec = TraceRecorder::new();
    let mut arr = values.to_vec();
    let len = arr.len();
    let mut sorted: Vec<usize> = Vec::new();

    rec.push(TraceStep {
        array: Some(arr.clone()),
        description: "Starting bubble sort algorithm".into(),
        ..TraceStep::default()
    });

    for i in 0..len {
        let mut swapped = false;

        for j in 0..len - i - 1 {
            rec.count_accesses(2);
            rec.count_comparisons(1);
            rec.push(TraceStep {
                array: Some(arr.clone()),
                current: vec![j],
                comparing: vec![j, j + 1],
                sorted: sorted.clone(),
                description: format!("Comparing elements at indices {} and {}", j, j + 1),
                ..TraceStep::default()
            });

            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
                rec.count_swaps(1);
                rec.count_accesses(2);
                rec.push(TraceStep {
                    array: Some(arr.clone()),
                    swapping: vec![j, j + 1],
                    sorted: sorted.clone(),
                    description: format!("Swapping elements {} and {}", arr[j + 1], arr[j]),
                    ..TraceStep::default()
                });
            }
        }

        sorted.push(len - i - 1);
        rec.push(TraceStep {
            array: Some(arr.clone()),
            sorted: sorted.clone(),
            description: format!(
                "Element at index {} is now in its correct position",
                len - i - 1
            ),
            ..TraceStep::default()
        });

        if !swapped {
            for k in 0..len - i - 1 {
                if !sorted.contains(&k) {
                    sorted.push(k);
                }
            }
            sorted.sort_unstable();
            rec.push(TraceStep {
                array: Some(arr.clone()),
                sorted: sorted.clone(),
                description: "Array is already sorted, no more swaps needed".into(),
                ..TraceStep::default()
            });
            break;
        }
    }

    let trace = rec.finish();
    tracing::debug!(steps = trace.len(), "bubble sort trace recorded");
    trace
}

/// Quick sort with Lomuto partitioning, pivot = last element.
///
/// The `<=` partition test moves elements equal to the pivot left. A swap
/// step is emitted only when the exchanged indices differ, though the
/// exchange itself is always charged.
pub fn quick_sort(values: &[i64]) -> Trace {
    let mut rec = TraceRecorder::new();
    let mut arr = values.to_vec();
    let mut sorted: Vec<usize> = Vec::new();

    rec.push(TraceStep {
        array: Some(arr.clone()),
        description: "Starting quick sort algorithm".into(),
        ..TraceStep::default()
    });

    if !arr.is_empty() {
        let high = arr.len() as i64 - 1;
        quick_sort_range(&mut arr, 0, high, &mut rec, &mut sorted);
    }

    rec.push(TraceStep {
        array: Some(arr.clone()),
        sorted: (0..arr.len()).collect(),
        description: "Quick sort completed".into(),
        ..TraceStep::default()
    });

    let trace = rec.finish();
    tracing::debug!(steps = trace.len(), "quick sort trace recorded");
    trace
}

fn quick_sort_range(
    arr: &mut [i64],
    low: i64,
    high: i64,
    rec: &mut TraceRecorder,
    sorted: &mut Vec<usize>,
) {
    if low < high {
        let pivot_index = partition(arr, low, high, rec, sorted);

        sorted.push(pivot_index as usize);
        rec.push(TraceStep {
            array: Some(arr.to_vec()),
            current: vec![pivot_index as usize],
            sorted: sorted.clone(),
            description: format!(
                "Pivot element at index {} is now in its correct position",
                pivot_index
            ),
            ..TraceStep::default()
        });

        quick_sort_range(arr, low, pivot_index - 1, rec, sorted);
        quick_sort_range(arr, pivot_index + 1, high, rec, sorted);
    } else if low >= 0 && high >= 0 && low == high {
        // Singleton sub-range is already in place.
        sorted.push(low as usize);
        rec.push(TraceStep {
            array: Some(arr.to_vec()),
            sorted: sorted.clone(),
            description: format!("Element at index {} is now in its correct position", low),
            ..TraceStep::default()
        });
    }
}

fn partition(
    arr: &mut [i64],
    low: i64,
    high: i64,
    rec: &mut TraceRecorder,
    sorted: &[usize],
) -> i64 {
    let pivot = arr[high as usize];
    rec.count_accesses(1);
    rec.push(TraceStep {
        array: Some(arr.to_vec()),
        current: vec![high as usize],
        sorted: sorted.to_vec(),
        description: format!("Selected pivot: {} at index {}", pivot, high),
        ..TraceStep::default()
    });

    let mut i = low - 1;

    for j in low..high {
        rec.count_accesses(1);
        rec.count_comparisons(1);
        rec.push(TraceStep {
            array: Some(arr.to_vec()),
            current: vec![j as usize],
            comparing: vec![j as usize, high as usize],
            sorted: sorted.to_vec(),
            description: format!("Comparing element at index {} with pivot {}", j, pivot),
            ..TraceStep::default()
        });

        if arr[j as usize] <= pivot {
            i += 1;
            arr.swap(i as usize, j as usize);
            rec.count_swaps(1);
            rec.count_accesses(2);

            if i != j {
                rec.push(TraceStep {
                    array: Some(arr.to_vec()),
                    swapping: vec![i as usize, j as usize],
                    sorted: sorted.to_vec(),
                    description: format!(
                        "Swapping elements {} and {}",
                        arr[j as usize], arr[i as usize]
                    ),
                    ..TraceStep::default()
                });
            }
        }
    }

    arr.swap((i + 1) as usize, high as usize);
    rec.count_swaps(1);
    rec.count_accesses(2);
    rec.push(TraceStep {
        array: Some(arr.to_vec()),
        swapping: vec![(i + 1) as usize, high as usize],
        sorted: sorted.to_vec(),
        description: format!("Moving pivot to its correct position at index {}", i + 1),
        ..TraceStep::default()
    });

    i + 1
}

/// Top-down merge sort with scratch copies per merge.
///
/// Copying each half into scratch storage charges one touch per element;
/// each placement charges one comparison and three touches, leftover
/// copies two touches.
pub fn merge_sort(values: &[i64]) -> Trace {
    let mut rec = TraceRecorder::new();
    let mut arr = values.to_vec();
    let mut sorted: Vec<usize> = Vec::new();

    rec.push(TraceStep {
        array: Some(arr.clone()),
        description: "Starting merge sort algorithm".into(),
        ..TraceStep::default()
    });

    if !arr.is_empty() {
        let right = arr.len() - 1;
        merge_sort_range(&mut arr, 0, right, &mut rec, &mut sorted);
    }

    rec.push(TraceStep {
        array: Some(arr.clone()),
        sorted: (0..arr.len()).collect(),
        description: "Merge sort completed".into(),
        ..TraceStep::default()
    });

    let trace = rec.finish();
    tracing::debug!(steps = trace.len(), "merge sort trace recorded");
    trace
}

fn merge_sort_range(
    arr: &mut [i64],
    left: usize,
    right: usize,
    rec: &mut TraceRecorder,
    sorted: &mut Vec<usize>,
) {
    if left >= right {
        return;
    }

    let mid = (left + right) / 2;
    rec.push(TraceStep {
        array: Some(arr.to_vec()),
        current: vec![mid],
        sorted: sorted.clone(),
        description: format!("Splitting array between indices {} and {}", left, right),
        ..TraceStep::default()
    });

    merge_sort_range(arr, left, mid, rec, sorted);
    merge_sort_range(arr, mid + 1, right, rec, sorted);
    merge(arr, left, mid, right, rec, sorted);
}

fn merge(
    arr: &mut [i64],
    left: usize,
    mid: usize,
    right: usize,
    rec: &mut TraceRecorder,
    sorted: &mut Vec<usize>,
) {
    let left_half = arr[left..=mid].to_vec();
    rec.count_accesses(left_half.len() as u64);
    let right_half = arr[mid + 1..=right].to_vec();
    rec.count_accesses(right_half.len() as u64);

    rec.push(TraceStep {
        array: Some(arr.to_vec()),
        current: vec![left, right],
        sorted: sorted.clone(),
        description: format!("Merging subarrays between indices {} and {}", left, right),
        ..TraceStep::default()
    });

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < left_half.len() && j < right_half.len() {
        rec.count_comparisons(1);
        rec.count_accesses(2);

        if left_half[i] <= right_half[j] {
            arr[k] = left_half[i];
            i += 1;
        } else {
            arr[k] = right_half[j];
            j += 1;
        }

        rec.count_accesses(1);
        rec.push(TraceStep {
            array: Some(arr.to_vec()),
            current: vec![k],
            sorted: sorted.clone(),
            description: format!("Placing element {} at index {}", arr[k], k),
            ..TraceStep::default()
        });

        k += 1;
    }

    while i < left_half.len() {
        arr[k] = left_half[i];
        rec.count_accesses(2);
        rec.push(TraceStep {
            array: Some(arr.to_vec()),
            current: vec![k],
            sorted: sorted.clone(),
            description: format!(
                "Copying remaining element {} from left subarray to index {}",
                arr[k], k
            ),
            ..TraceStep::default()
        });
        i += 1;
        k += 1;
    }

    while j < right_half.len() {
        arr[k] = right_half[j];
        rec.count_accesses(2);
        rec.push(TraceStep {
            array: Some(arr.to_vec()),
            current: vec![k],
            sorted: sorted.clone(),
            description: format!(
                "Copying remaining element {} from right subarray to index {}",
                arr[k], k
            ),
            ..TraceStep::default()
        });
        j += 1;
        k += 1;
    }

    for idx in left..=right {
        if !sorted.contains(&idx) {
            sorted.push(idx);
        }
    }
}

/// Insertion sort shifting larger predecessors rightward one at a time.
///
/// The predecessor comparison is charged only when it triggers a shift.
pub fn insertion_sort(values: &[i64]) -> Trace {
    let mut rec = TraceRecorder::new();
    let mut arr = values.to_vec();
    let mut sorted: Vec<usize> = if arr.is_empty() { Vec::new() } else { vec![0] };

    rec.push(TraceStep {
        array: Some(arr.clone()),
        sorted: sorted.clone(),
        description: "Starting insertion sort algorithm".into(),
        ..TraceStep::default()
    });

    for i in 1..arr.len() {
        let mut j = i;
        let current_element = arr[i];
        rec.count_accesses(1);

        rec.push(TraceStep {
            array: Some(arr.clone()),
            current: vec![i],
            sorted: sorted.clone(),
            description: format!("Inserting element {} into the sorted portion", current_element),
            ..TraceStep::default()
        });

        while j > 0 && arr[j - 1] > current_element {
            rec.count_comparisons(1);
            rec.count_accesses(1);

            arr[j] = arr[j - 1];
            rec.count_accesses(2);
            rec.count_swaps(1);

            rec.push(TraceStep {
                array: Some(arr.clone()),
                current: vec![j - 1],
                swapping: vec![j, j - 1],
                sorted: sorted.clone(),
                description: format!(
                    "Moving element {} from index {} to {}",
                    arr[j - 1],
                    j - 1,
                    j
                ),
                ..TraceStep::default()
            });

            j -= 1;
        }

        arr[j] = current_element;
        rec.count_accesses(1);
        rec.push(TraceStep {
            array: Some(arr.clone()),
            current: vec![j],
            sorted: sorted.clone(),
            description: format!("Placing element {} at index {}", current_element, j),
            ..TraceStep::default()
        });

        sorted.push(i);
        rec.push(TraceStep {
            array: Some(arr.clone()),
            sorted: sorted.clone(),
            description: format!("Elements from index 0 to {} are now sorted", i),
            ..TraceStep::default()
        });
    }

    let trace = rec.finish();
    tracing::debug!(steps = trace.len(), "insertion sort trace recorded");
    trace
}

/// Selection sort: linear minimum scan per position.
///
/// Emits a comparison step per candidate and a "new minimum" step when
/// the minimum changes; the swap step is emitted only if the minimum
/// actually moved.
pub fn selection_sort(values: &[i64]) -> Trace {
    let mut rec = TraceRecorder::new();
    let mut arr = values.to_vec();
    let len = arr.len();
    let mut sorted: Vec<usize> = Vec::new();

    rec.push(TraceStep {
        array: Some(arr.clone()),
        description: "Starting selection sort algorithm".into(),
        ..TraceStep::default()
    });

    for i in 0..len.saturating_sub(1) {
        let mut min_index = i;

        rec.push(TraceStep {
            array: Some(arr.clone()),
            current: vec![i],
            sorted: sorted.clone(),
            description: format!("Finding the minimum element to place at index {}", i),
            ..TraceStep::default()
        });

        for j in i + 1..len {
            rec.count_comparisons(1);
            rec.count_accesses(2);
            rec.push(TraceStep {
                array: Some(arr.clone()),
                current: vec![min_index],
                comparing: vec![j],
                sorted: sorted.clone(),
                description: format!(
                    "Comparing current minimum {} with element {} at index {}",
                    arr[min_index], arr[j], j
                ),
                ..TraceStep::default()
            });

            if arr[j] < arr[min_index] {
                min_index = j;
                rec.push(TraceStep {
                    array: Some(arr.clone()),
                    current: vec![min_index],
                    sorted: sorted.clone(),
                    description: format!(
                        "Found new minimum {} at index {}",
                        arr[min_index], min_index
                    ),
                    ..TraceStep::default()
                });
            }
        }

        if min_index != i {
            arr.swap(i, min_index);
            rec.count_swaps(1);
            rec.count_accesses(2);
            rec.push(TraceStep {
                array: Some(arr.clone()),
                swapping: vec![i, min_index],
                sorted: sorted.clone(),
                description: format!("Swapping elements {} and {}", arr[i], arr[min_index]),
                ..TraceStep::default()
            });
        }

        sorted.push(i);
        rec.push(TraceStep {
            array: Some(arr.clone()),
            sorted: sorted.clone(),
            description: format!(
                "Element {} is now in its correct position at index {}",
                arr[i], i
            ),
            ..TraceStep::default()
        });
    }

    if len > 0 {
        sorted.push(len - 1);
    }
    rec.push(TraceStep {
        array: Some(arr.clone()),
        sorted: sorted.clone(),
        description: "Selection sort completed".into(),
        ..TraceStep::default()
    });

    let trace = rec.finish();
    tracing::debug!(steps = trace.len(), "selection sort trace recorded");
    trace
}
