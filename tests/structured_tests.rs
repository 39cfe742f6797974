use dualsort::core::{MAX_RUN_COUNT, MAX_RUN_LENGTH, QUICKSORT_THRESHOLD};
use dualsort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Run-structured input with interleaved `999` markers that once tripped up the run
/// detection of another dual-pivot implementation.
const DPQS9_REGRESSION: [i32; 432] = [
    999, 267, 269, 356, 443, 999, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111,
    999, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127, 128, 130, 131,
    132, 129, 133, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143, 144, 145, 146, 147, 148,
    149, 150, 151, 152, 153, 154, 155, 156, 157, 158, 159, 160, 161, 162, 163, 164, 165, 166,
    167, 168, 169, 170, 171, 172, 173, 174, 175, 176, 178, 180, 181, 182, 183, 184, 999, 218,
    221, 222, 224, 225, 999, 112, 113, 185, 186, 187, 188, 189, 190, 191, 192, 193, 194, 195,
    196, 197, 198, 199, 200, 201, 202, 203, 204, 205, 206, 207, 208, 209, 210, 211, 212, 213,
    214, 999, 227, 229, 231, 233, 235, 237, 244, 245, 246, 249, 263, 265, 999, 223, 999, 228,
    234, 266, 999, 357, 359, 360, 361, 362, 358, 363, 364, 365, 366, 367, 368, 369, 370, 371,
    372, 373, 374, 375, 376, 377, 378, 379, 380, 381, 382, 383, 384, 385, 386, 387, 388, 389,
    390, 391, 392, 393, 394, 396, 395, 397, 398, 399, 400, 401, 402, 403, 404, 405, 406, 407,
    408, 409, 410, 411, 412, 413, 414, 415, 416, 417, 418, 419, 420, 421, 422, 423, 424, 425,
    426, 427, 428, 429, 430, 431, 432, 433, 434, 436, 435, 437, 438, 439, 440, 441, 442, 999,
    217, 230, 232, 264, 999, 268, 999, 219, 220, 250, 251, 252, 253, 254, 255, 256, 257, 258,
    259, 260, 261, 262, 999, 179, 999, 236, 999, 216, 999, 226, 238, 239, 240, 241, 242, 999,
    270, 271, 272, 273, 274, 275, 276, 277, 278, 279, 280, 281, 282, 283, 284, 285, 286, 287,
    288, 289, 291, 290, 292, 293, 294, 295, 296, 297, 298, 299, 300, 301, 303, 302, 304, 305,
    306, 307, 308, 309, 310, 311, 312, 313, 314, 316, 315, 318, 317, 319, 320, 321, 322, 323,
    324, 325, 326, 327, 328, 329, 330, 331, 332, 333, 334, 336, 335, 337, 338, 339, 340, 341,
    342, 343, 344, 345, 346, 347, 348, 349, 350, 351, 352, 353, 354, 355, 177, 999, 243, 999,
    444, 445, 446, 447, 448, 449, 450, 452, 453, 454, 451, 455, 456, 457, 458, 459, 460, 461,
    462, 463, 464, 465, 466, 467, 468, 469, 470, 471, 472, 473, 474, 475, 476, 477, 478, 479,
    480, 481, 482, 483, 484, 485, 486, 487, 488, 489, 490, 491, 492, 493, 495, 494, 496, 497,
    498, 499, 500, 501, 502, 999, 215, 999, 248, 247, 999, 999, 999, 999, 999, 999, 999, 999,
];

fn check(input: &[i32]) {
    let mut actual = input.to_vec();
    sort_by(&mut actual, |a, b| a.cmp(b));

    let mut expected = input.to_vec();
    expected.sort_unstable();
    assert_eq!(actual, expected);
}

/// Ascending runs of `run_len` elements each, every run starting below the previous end.
fn sawtooth(runs: usize, run_len: usize) -> Vec<i32> {
    (0..runs)
        .flat_map(|r| (0..run_len as i32).map(move |i| i * 3 + r as i32 % 3))
        .collect()
}

#[test]
fn test_dpqs9_regression() {
    check(&DPQS9_REGRESSION);
}

#[test]
fn test_mixed_runs_with_flat_fallback() {
    let mut rng = StdRng::seed_from_u64(286);

    for _ in 0..20 {
        let mut input = Vec::new();
        while input.len() < 2000 {
            let len = rng.random_range(2..12);
            let base = rng.random_range(-500..500);
            match rng.random_range(0..4) {
                0 => input.extend((0..len).map(|i| base + i)),
                1 => input.extend((0..len).rev().map(|i| base + i)),
                2 => input.extend(std::iter::repeat_n(base, len as usize)),
                // A flat stretch too long to be a run.
                _ => input.extend(std::iter::repeat_n(999, MAX_RUN_LENGTH + 8)),
            }
        }
        check(&input);
    }
}

#[test]
fn test_flat_run_at_length_limit() {
    for flat in [MAX_RUN_LENGTH - 1, MAX_RUN_LENGTH, MAX_RUN_LENGTH + 1, MAX_RUN_LENGTH + 2] {
        let mut input: Vec<i32> = (0..200).rev().collect();
        input.extend(std::iter::repeat_n(-7, flat));
        input.extend(300..500);
        check(&input);
    }
}

#[test]
fn test_run_count_limit() {
    let run_len = 150;
    for runs in [2, 3, MAX_RUN_COUNT - 2, MAX_RUN_COUNT - 1, MAX_RUN_COUNT, MAX_RUN_COUNT + 1] {
        check(&sawtooth(runs, run_len));
    }
}

#[test]
fn test_descending_runs_are_reversed() {
    // Blocks that are each strictly descending, with ascending block order.
    let input: Vec<i32> = (0..12)
        .flat_map(|block| (0..50).rev().map(move |i| block * 100 + i))
        .collect();
    check(&input);

    // Descending with equal neighbors inside the run.
    let input: Vec<i32> = (0..600).rev().map(|i| i / 2).collect();
    check(&input);
}

#[test]
fn test_single_trailing_element() {
    let mut input: Vec<i32> = (0..400).collect();
    input.push(-1);
    check(&input);

    let mut input: Vec<i32> = (0..400).rev().collect();
    input.push(1000);
    check(&input);
}

#[test]
fn test_already_sorted_above_threshold() {
    let input: Vec<i32> = (0..(QUICKSORT_THRESHOLD as i32 * 4)).collect();
    check(&input);

    let input: Vec<i32> = (0..1000).map(|i| i / 3).collect();
    check(&input);
}

#[test]
fn test_organ_pipe() {
    let mut input: Vec<i32> = (0..1500).collect();
    input.extend((0..1500).rev());
    check(&input);
}

#[test]
fn test_range_leaves_outside_untouched() {
    let mut rng = StdRng::seed_from_u64(5);

    for &(len, left, right) in &[(10usize, 3usize, 7usize), (500, 1, 498), (3000, 100, 2900)] {
        let input: Vec<i32> = (0..len).map(|_| rng.random_range(-100..100)).collect();

        let mut actual = input.clone();
        sort_range_by(&mut actual, left, right, |a, b| a.cmp(b));

        assert_eq!(actual[..left], input[..left]);
        assert_eq!(actual[right + 1..], input[right + 1..]);

        let mut expected = input[left..=right].to_vec();
        expected.sort_unstable();
        assert_eq!(actual[left..=right], expected[..]);
    }
}

#[test]
fn test_empty_and_single_ranges() {
    let input = vec![5, 3, 1];

    let mut actual = input.clone();
    sort_range_by(&mut actual, 2, 1, |a: &i32, b: &i32| a.cmp(b));
    assert_eq!(actual, input);

    sort_range_by(&mut actual, 1, 1, |a: &i32, b: &i32| a.cmp(b));
    assert_eq!(actual, input);

    let mut empty: Vec<i32> = Vec::new();
    sort(&mut empty);
    assert!(empty.is_empty());
}

#[test]
fn test_workspace_sizes() {
    // Few long runs, so the merge path needs its buffer.
    let input = sawtooth(9, 100);
    let len = input.len();

    for work_len in [0, len - 1, len, len + 17] {
        let mut actual = input.clone();
        let mut work = vec![0i32; work_len];
        sort_range_with_workspace(&mut actual, 0, len - 1, &mut work, |a, b| a.cmp(b));

        let mut expected = input.clone();
        expected.sort_unstable();
        assert_eq!(actual, expected, "workspace of {}", work_len);
    }
}

#[test]
fn test_workspace_with_offset_and_subrange() {
    let mut input = vec![-1; 5];
    input.extend(sawtooth(4, 120));
    input.extend(vec![-2; 5]);
    let right = input.len() - 6;

    let mut actual = input.clone();
    let mut work = vec![0i32; 1000];
    sort_range_with_workspace(&mut actual, 5, right, &mut work[300..], |a, b| a.cmp(b));

    assert_eq!(actual[..5], [-1; 5]);
    assert_eq!(actual[right + 1..], [-2; 5]);

    let mut expected = input[5..=right].to_vec();
    expected.sort_unstable();
    assert_eq!(actual[5..=right], expected[..]);
}

#[test]
fn test_try_sort_range_rejects_out_of_bounds() {
    let input = vec![3, 2, 1];

    let mut actual = input.clone();
    let err = try_sort_range_by(&mut actual, 0, 3, |a: &i32, b: &i32| a.cmp(b));
    assert_eq!(
        err,
        Err(SortError::RangeOutOfBounds {
            left: 0,
            right: 3,
            len: 3
        })
    );
    assert_eq!(actual, input);
    assert_eq!(
        err.unwrap_err().to_string(),
        "Range out of bounds: [0, 3] does not fit in a slice of length 3"
    );

    // Empty ranges are always accepted.
    assert!(try_sort_range_by(&mut actual, 10, 2, |a: &i32, b: &i32| a.cmp(b)).is_ok());
    assert!(try_sort_range_by(&mut actual, 1, 2, |a: &i32, b: &i32| a.cmp(b)).is_ok());
    assert_eq!(actual, vec![3, 1, 2]);
}

#[test]
fn test_merge_parity_with_dirty_workspace() {
    // Run counts of both parities start the merge on either side of the buffer.
    for runs in 2..=12 {
        let input = sawtooth(runs, 100);
        let len = input.len();
        let mut expected = input.clone();
        expected.sort_unstable();

        let mut actual = input.clone();
        sort(&mut actual);
        assert_eq!(actual, expected, "{} runs, allocated buffer", runs);

        let mut actual = input.clone();
        let mut work = vec![i32::MIN; len + 3];
        sort_range_with_workspace(&mut actual, 0, len - 1, &mut work, |a, b| a.cmp(b));
        assert_eq!(actual, expected, "{} runs, caller workspace", runs);
    }
}
