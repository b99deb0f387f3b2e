use ytax::kernel::serial::ytax_serial;
use ytax::kernel::threaded::ytax_threaded;
use ytax::{ytax, ytax_parallel};

fn ones_problem(n: usize, m: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    (vec![1.0; n], vec![1.0; n * m], vec![1.0; m])
}

// ============================================================
// All-ones exactness (the benchmark's solution check)
// ============================================================

#[test]
fn test_ones_result_is_exactly_n_times_m() {
    let test_sizes = [(1, 1), (1, 100), (100, 1), (3, 7), (64, 32), (4096, 1024)];

    for (n, m) in test_sizes {
        let (y, a, x) = ones_problem(n, m);

        let result = ytax_serial(&y, &a, &x, n, m);
        assert_eq!(
            result,
            (n * m) as f64,
            "serial mismatch for {}x{}",
            n,
            m
        );
    }
}

#[test]
fn test_ones_threaded_matches_serial_bitwise() {
    // Per-row sums are integral with all-ones input, so the combined
    // result is exact regardless of how rows are split across threads.
    let test_sizes = [(64, 32), (1000, 1000), (4096, 1024)];

    for (n, m) in test_sizes {
        let (y, a, x) = ones_problem(n, m);

        let serial = ytax_serial(&y, &a, &x, n, m);
        for num_threads in [1, 2, 3, 4, 8] {
            let threaded = ytax_threaded(&y, &a, &x, n, m, num_threads);
            assert_eq!(
                serial.to_bits(),
                threaded.to_bits(),
                "{}x{} with {} threads",
                n,
                m,
                num_threads
            );
        }
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let (y, a, x) = ones_problem(256, 128);

    let first = ytax_parallel(&y, &a, &x, 256, 128, 4);
    for _ in 0..10 {
        assert_eq!(first, ytax_parallel(&y, &a, &x, 256, 128, 4));
    }
    assert_eq!(first, (256 * 128) as f64);
}

// ============================================================
// General data: threaded matches serial within tolerance
// ============================================================

#[test]
fn test_threaded_matches_serial_on_varied_data() {
    let test_sizes = [(13, 17), (100, 50), (1000, 333), (2048, 512)];

    for (n, m) in test_sizes {
        let y: Vec<f64> = (0..n).map(|i| (i % 17) as f64 * 0.25).collect();
        let a: Vec<f64> = (0..n * m).map(|i| (i % 13) as f64 * 0.5).collect();
        let x: Vec<f64> = (0..m).map(|i| (i % 7) as f64 - 3.0).collect();

        let serial = ytax_serial(&y, &a, &x, n, m);
        let threaded = ytax_threaded(&y, &a, &x, n, m, 4);

        // Outer summation order differs between the two, so allow for
        // floating-point reassociation.
        let scale = serial.abs().max(1.0);
        assert!(
            (serial - threaded).abs() / scale < 1e-12,
            "{}x{}: serial {} vs threaded {}",
            n,
            m,
            serial,
            threaded
        );
    }
}

#[test]
fn test_hand_computed_small_case() {
    // y = [1, 2], A = [[1, 2, 3], [4, 5, 6]], x = [1, 1, 1]
    // row sums: 6 and 15; result = 1*6 + 2*15 = 36
    let y = vec![1.0, 2.0];
    let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let x = vec![1.0, 1.0, 1.0];

    assert_eq!(ytax_serial(&y, &a, &x, 2, 3), 36.0);
    assert_eq!(ytax(&y, &a, &x, 2, 3), 36.0);
    assert_eq!(ytax_parallel(&y, &a, &x, 2, 3, 4), 36.0);
}

// ============================================================
// Edge cases and dispatch contracts
// ============================================================

#[test]
fn test_empty_problem_is_zero() {
    assert_eq!(ytax(&[], &[], &[], 0, 0), 0.0);
    assert_eq!(ytax_parallel(&[], &[], &[], 0, 0, 4), 0.0);
}

#[test]
fn test_single_row_is_dot_product() {
    let y = vec![2.0];
    let a = vec![1.0, 2.0, 3.0, 4.0];
    let x = vec![1.0, 0.0, 1.0, 0.0];

    assert_eq!(ytax(&y, &a, &x, 1, 4), 8.0);
}

#[test]
fn test_more_threads_than_rows() {
    let (y, a, x) = ones_problem(3, 5);
    assert_eq!(ytax_threaded(&y, &a, &x, 3, 5, 64), 15.0);
}

#[test]
fn test_zero_threads_falls_back_to_serial() {
    let (y, a, x) = ones_problem(16, 16);
    assert_eq!(ytax_threaded(&y, &a, &x, 16, 16, 0), 256.0);
}

#[test]
#[should_panic(expected = "A: expected")]
fn test_wrong_matrix_length_panics() {
    let y = vec![1.0; 4];
    let a = vec![1.0; 7]; // should be 4*2 = 8
    let x = vec![1.0; 2];
    ytax(&y, &a, &x, 4, 2);
}

#[test]
#[should_panic(expected = "y: expected")]
fn test_wrong_vector_length_panics() {
    let y = vec![1.0; 3];
    let a = vec![1.0; 8];
    let x = vec![1.0; 2];
    ytax_parallel(&y, &a, &x, 4, 2, 2);
}
