use inflekt_protocol::Prime;

/// Returns the number the registry hands out after `start`.
///
/// 1, 2 and 3 are returned as-is for the first three calls from 0, 1 and 2.
/// Past that the result is the smallest prime greater than `start`.
pub fn next_prime(start: Prime) -> Prime {
    let mut current = start.get() + 1;

    if current <= 3 {
        return Prime(current);
    }

    loop {
        current += 1;
        if is_prime(current) {
            return Prime(current);
        }
    }
}

fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
