use crate::score::Category;

/// The fixed Jacks-or-Better paytable: credits paid for each category at
/// wagers one through five. Rows follow the [`Category`] discriminant
/// order; every row scales linearly with the wager except the royal flush
/// jackpot at maximum wager.
const PAYOUTS: [[u32; 5]; 10] = [
    [0, 0, 0, 0, 0],
    [1, 2, 3, 4, 5],
    [2, 4, 6, 8, 10],
    [3, 6, 9, 12, 15],
    [4, 8, 12, 16, 20],
    [6, 12, 18, 24, 30],
    [9, 18, 27, 36, 45],
    [25, 50, 75, 100, 125],
    [50, 100, 150, 200, 250],
    [250, 500, 750, 1000, 4000],
];

/// Looks up the payout in credits for a category at the given wager (1-5).
pub fn payout(category: Category, wager: u32) -> u32 {
    let wager = wager.clamp(1, 5) as usize;
    PAYOUTS[category as usize][wager - 1]
}
