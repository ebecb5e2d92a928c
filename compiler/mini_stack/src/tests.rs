use super::*;

#[test]
fn shallow_recursion() {
    fn sum_to(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { n + sum_to(n - 1) })
    }

    assert_eq!(sum_to(10), 55);
}

#[test]
fn deep_recursion() {
    // Three frames per level, as in `expr -> term -> factor`.
    fn expr(depth: u32) -> u32 {
        ensure_sufficient_stack(|| term(depth))
    }
    fn term(depth: u32) -> u32 {
        ensure_sufficient_stack(|| factor(depth))
    }
    fn factor(depth: u32) -> u32 {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { expr(depth - 1) + 1 })
    }

    assert_eq!(expr(50_000), 50_000);
}

#[test]
fn large_frames_fit_in_the_red_zone() {
    // Each level keeps 4KB live, well past a grammar method's frame.
    fn nest(depth: u32) -> u32 {
        ensure_sufficient_stack(|| {
            let buf = std::hint::black_box([1u8; 4096]);
            if depth == 0 {
                0
            } else {
                nest(depth - 1) + u32::from(buf[4095])
            }
        })
    }

    assert_eq!(nest(5_000), 5_000);
}

#[test]
fn propagates_result_errors() {
    fn fail_at(depth: u32, limit: u32) -> Result<u32, u32> {
        ensure_sufficient_stack(|| {
            if depth == limit {
                Err(depth)
            } else {
                fail_at(depth + 1, limit).map(|d| d + 1)
            }
        })
    }

    assert_eq!(fail_at(0, 500), Err(500));
}
