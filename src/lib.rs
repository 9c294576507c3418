//! Small bit-manipulation helpers for 32-bit integers, written in pure Rust.
//! `no_std`, no heap / `alloc`, no `unsafe`, just `core`.
//!
//! Every function is stateless, total over its input type and usable in
//! `const` contexts.
//!
//! # Examples
//! ```
//! use bit_tricks::{get_bit_count, is_power_of_two, swap_numbers};
//!
//! assert!(is_power_of_two(64));
//! assert!(!is_power_of_two(0));
//! assert_eq!(get_bit_count(0b1011), 3);
//!
//! let (mut a, mut b) = (3, 9);
//! swap_numbers(&mut a, &mut b);
//! assert_eq!((a, b), (9, 3));
//! ```
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - Predicates: [`is_power_of_two`], [`bits_are_in_alt_order`],
//!   [`is_number_even`], [`is_at_least_one_bit_set`], [`compare_integers`]
//! - In-place XOR swap: [`swap_numbers`]
//! - Population count in O(popcount): [`get_bit_count`]
//! - Xorshift pseudo-randomness:
//!   - [`generate_pseudo_random_number`] (single step, pure)
//!   - [`XorShift32`] (running generator, also an [`Iterator`])
//!
//! None of the randomness here is suitable for cryptography.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod bits;
mod xorshift;

pub use bits::{
    bits_are_in_alt_order, compare_integers, get_bit_count, is_at_least_one_bit_set,
    is_number_even, is_power_of_two, swap_numbers,
};
pub use xorshift::{XorShift32, generate_pseudo_random_number};
