use bit_tricks::{
    XorShift32, bits_are_in_alt_order, compare_integers, get_bit_count, is_at_least_one_bit_set,
    is_number_even, is_power_of_two, swap_numbers,
};

fn main() {
    for x in [0, 1, 6, 64, -8] {
        println!(
            "{x:>4}: power of two = {:<5} even = {:<5} any bit = {}",
            is_power_of_two(x),
            is_number_even(x),
            is_at_least_one_bit_set(x)
        );
    }

    for n in [0b1010u32, 0b1011, 0xAAAA_AAAA] {
        println!(
            "{n:#034b}: alternating = {:<5} set bits = {}",
            bits_are_in_alt_order(n),
            get_bit_count(n)
        );
    }

    let (mut a, mut b) = (3, -9);
    swap_numbers(&mut a, &mut b);
    println!("swapped: a = {a}, b = {b}, equal = {}", compare_integers(a, b));

    let rolls: Vec<u32> = XorShift32::new(2024)
        .take(6)
        .map(|x| x.unsigned_abs() % 6 + 1)
        .collect();
    println!("dice: {rolls:?}");
}
