//! Coin purse and denomination arithmetic.
//!
//! All money in the engine is integer cents. The bankroll is held as counts
//! of three physical denominations, so a wager must be decomposed into coins
//! actually on hand before it can be deducted.

use crate::error::CoinError;

/// Face value of a quarter, in cents.
pub const QUARTER: u32 = 25;
/// Face value of a dime, in cents.
pub const DIME: u32 = 10;
/// Face value of a nickel, in cents.
pub const NICKEL: u32 = 5;

/// Number of each denomination in a fresh purse.
pub const STARTING_COINS: u32 = 10;

/// A specific combination of coins, as produced by [`CoinPurse::decompose`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinCount {
    /// Number of quarters.
    pub quarters: u32,
    /// Number of dimes.
    pub dimes: u32,
    /// Number of nickels.
    pub nickels: u32,
}

impl CoinCount {
    /// Returns the total value of the combination, in cents.
    #[must_use]
    pub const fn total_cents(&self) -> u32 {
        self.quarters * QUARTER + self.dimes * DIME + self.nickels * NICKEL
    }
}

/// The player's bankroll, held as coin counts.
///
/// Mutated only by wager deduction ([`Self::apply_wager`]) and payout
/// crediting ([`Self::credit_payout`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinPurse {
    /// Number of quarters held.
    pub quarters: u32,
    /// Number of dimes held.
    pub dimes: u32,
    /// Number of nickels held.
    pub nickels: u32,
}

impl CoinPurse {
    /// Creates a fresh purse with the starting bankroll of $4.00
    /// (10 quarters, 10 dimes, 10 nickels).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            quarters: STARTING_COINS,
            dimes: STARTING_COINS,
            nickels: STARTING_COINS,
        }
    }

    /// Creates a purse with the given counts.
    #[must_use]
    pub const fn with_counts(quarters: u32, dimes: u32, nickels: u32) -> Self {
        Self {
            quarters,
            dimes,
            nickels,
        }
    }

    /// Returns the total value of the purse, in cents.
    ///
    /// # Example
    ///
    /// ```
    /// use coinjack::CoinPurse;
    ///
    /// assert_eq!(CoinPurse::new().total_cents(), 400);
    /// ```
    #[must_use]
    pub const fn total_cents(&self) -> u32 {
        self.quarters * QUARTER + self.dimes * DIME + self.nickels * NICKEL
    }

    /// Finds a combination of held coins whose value is exactly `cents`.
    ///
    /// The search prefers quarters, then dimes, but backtracks: candidate
    /// quarter counts run from the affordable maximum down to zero, and for
    /// each, dime counts likewise, taking nickels as the exact remainder only
    /// when it is a whole nickel count within supply. Greedy largest-first
    /// selection alone can miss combinations this search finds (e.g. 30 cents
    /// from one quarter and ten nickels needs a quarter plus a nickel, not a
    /// dime). The loop is bounded by the held counts, at most 11 x 11 in a
    /// capped purse.
    ///
    /// # Errors
    ///
    /// Returns [`CoinError::NoExactChange`] if no combination of held coins
    /// reproduces `cents` exactly. With only three denominations, some
    /// amounts are unrepresentable even when the total bankroll suffices.
    pub fn decompose(&self, cents: u32) -> Result<CoinCount, CoinError> {
        let max_quarters = (cents / QUARTER).min(self.quarters);

        for quarters in (0..=max_quarters).rev() {
            let after_quarters = cents - quarters * QUARTER;
            let max_dimes = (after_quarters / DIME).min(self.dimes);

            for dimes in (0..=max_dimes).rev() {
                let after_dimes = after_quarters - dimes * DIME;
                if after_dimes % NICKEL != 0 {
                    continue;
                }

                let nickels = after_dimes / NICKEL;
                if nickels <= self.nickels {
                    return Ok(CoinCount {
                        quarters,
                        dimes,
                        nickels,
                    });
                }
            }
        }

        Err(CoinError::NoExactChange)
    }

    /// Deducts the given coin combination from the purse.
    ///
    /// # Errors
    ///
    /// Returns [`CoinError::InsufficientFunds`] if any count would go
    /// negative. This cannot happen when `coins` came from
    /// [`Self::decompose`] on the same purse state.
    pub fn apply_wager(&mut self, coins: &CoinCount) -> Result<(), CoinError> {
        let quarters = self
            .quarters
            .checked_sub(coins.quarters)
            .ok_or(CoinError::InsufficientFunds)?;
        let dimes = self
            .dimes
            .checked_sub(coins.dimes)
            .ok_or(CoinError::InsufficientFunds)?;
        let nickels = self
            .nickels
            .checked_sub(coins.nickels)
            .ok_or(CoinError::InsufficientFunds)?;

        self.quarters = quarters;
        self.dimes = dimes;
        self.nickels = nickels;
        Ok(())
    }

    /// Credits a payout to the purse, largest denomination first.
    ///
    /// Crediting is uncapped: as many quarters as fit in the amount, then
    /// dimes, then nickels. A remainder below a nickel is dropped; payouts
    /// are whole multiples of five cents under the wager granularity, so the
    /// remainder is zero in practice.
    pub const fn credit_payout(&mut self, cents: u32) {
        let mut remaining = cents;

        self.quarters += remaining / QUARTER;
        remaining %= QUARTER;

        self.dimes += remaining / DIME;
        remaining %= DIME;

        self.nickels += remaining / NICKEL;
    }

    /// Refills the purse to the starting bankroll.
    pub const fn refill(&mut self) {
        self.quarters = STARTING_COINS;
        self.dimes = STARTING_COINS;
        self.nickels = STARTING_COINS;
    }
}

impl Default for CoinPurse {
    fn default() -> Self {
        Self::new()
    }
}
