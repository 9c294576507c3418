use bit_tricks::swap_numbers;

fn main() {
    let mut x = 7;
    swap_numbers(&mut x, &mut x);
}
