/// Returns `true` if `x` is exactly a power of two (1, 2, 4, 8, ...).
///
/// Zero and all negative values return `false`. That includes `i32::MIN`,
/// whose bit pattern has a single set bit but which is not of the form `2^n`.
///
/// # Examples
/// ```
/// use bit_tricks::is_power_of_two;
///
/// assert!(is_power_of_two(1));
/// assert!(is_power_of_two(1 << 30));
/// assert!(!is_power_of_two(0));
/// assert!(!is_power_of_two(6));
/// assert!(!is_power_of_two(i32::MIN));
/// ```
#[inline]
pub const fn is_power_of_two(x: i32) -> bool {
    // sign check first, `x - 1` must not overflow for `i32::MIN`
    x > 0 && x & (x - 1) == 0
}

/// Exchanges the values behind `a` and `b` using three XORs and no temporary.
///
/// The pointer form of this trick zeroes the value when both arguments refer
/// to the same location. Here that call cannot be written: the borrow checker
/// rejects two live `&mut` borrows of one place.
///
/// # Examples
/// ```
/// use bit_tricks::swap_numbers;
///
/// let mut a = -17;
/// let mut b = i32::MAX;
/// swap_numbers(&mut a, &mut b);
/// assert_eq!(a, i32::MAX);
/// assert_eq!(b, -17);
/// ```
///
/// ```compile_fail
/// use bit_tricks::swap_numbers;
///
/// let mut a = 5;
/// swap_numbers(&mut a, &mut a);
/// ```
#[inline]
pub const fn swap_numbers(a: &mut i32, b: &mut i32) {
    *a ^= *b;
    *b ^= *a;
    *a ^= *b;
}

/// Returns `true` if the bits of `n` strictly alternate, e.g. `...1010` or
/// `...0101`, reading from the highest set bit down.
///
/// `n ^ (n >> 1)` is all ones up to the highest set bit exactly when adjacent
/// bits differ, and a run of ones plus one shares no bit with itself. `0`
/// counts as alternating.
///
/// # Examples
/// ```
/// use bit_tricks::bits_are_in_alt_order;
///
/// assert!(bits_are_in_alt_order(0b1010));
/// assert!(bits_are_in_alt_order(0b101));
/// assert!(bits_are_in_alt_order(0));
/// assert!(!bits_are_in_alt_order(0b1011));
/// ```
#[inline]
pub const fn bits_are_in_alt_order(n: u32) -> bool {
    let run = n ^ (n >> 1);
    // `run == u32::MAX` for 0xAAAA_AAAA, the increment wraps to zero
    run.wrapping_add(1) & run == 0
}

/// Returns `true` if `a` equals `b`, computed as `a ^ b == 0`.
///
/// Gives the same answer as `a == b` for every pair of inputs.
///
/// # Examples
/// ```
/// use bit_tricks::compare_integers;
///
/// assert!(compare_integers(42, 42));
/// assert!(!compare_integers(42, -42));
/// ```
#[inline]
pub const fn compare_integers(a: i32, b: i32) -> bool {
    (a ^ b) == 0
}

/// Returns `true` if the least significant bit of `x` is unset.
///
/// In two's complement the lowest bit decides parity for negative values too.
///
/// # Examples
/// ```
/// use bit_tricks::is_number_even;
///
/// assert!(is_number_even(4));
/// assert!(is_number_even(-2));
/// assert!(!is_number_even(7));
/// ```
#[inline]
pub const fn is_number_even(x: i32) -> bool {
    x & 1 == 0
}

/// Returns `true` if any bit of `x` is set, i.e. `x != 0`.
///
/// # Examples
/// ```
/// use bit_tricks::is_at_least_one_bit_set;
///
/// assert!(is_at_least_one_bit_set(5));
/// assert!(is_at_least_one_bit_set(i32::MIN));
/// assert!(!is_at_least_one_bit_set(0));
/// ```
#[inline]
#[allow(clippy::identity_op)]
pub const fn is_at_least_one_bit_set(x: i32) -> bool {
    x | 0 != 0
}

/// Counts the set bits of `x` with Brian Kernighan's algorithm.
///
/// Each iteration clears the lowest set bit, so the loop runs once per set bit
/// rather than once per bit position. Always agrees with [`u32::count_ones`].
///
/// # Examples
/// ```
/// use bit_tricks::get_bit_count;
///
/// assert_eq!(get_bit_count(0), 0);
/// assert_eq!(get_bit_count(7), 3);
/// assert_eq!(get_bit_count(255), 8);
/// assert_eq!(get_bit_count(1 << 31), 1);
/// ```
pub const fn get_bit_count(x: u32) -> u32 {
    let mut rest = x;
    let mut count = 0;
    while rest != 0 {
        count += 1;
        rest &= rest - 1;
    }
    count
}
